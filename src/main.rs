use clap::{Parser, Subcommand};
use std::path::Path;

use image_upload_guard::cli;

#[derive(Parser)]
#[command(name = "image-upload-guard")]
#[command(about = "Upload filter plugin that only accepts image files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a file would be accepted (exit 0 accepted, 1 rejected, 2 bad config)
    Check {
        /// Original file name
        #[arg(short, long)]
        name: String,

        /// Declared MIME type
        #[arg(short, long, default_value = "")]
        mime: String,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config_path = Path::new(&cli.config);

    match cli.command {
        Commands::Check { name, mime } => {
            let result = cli::check_file(cli::load_config(config_path), name, mime);
            match &result {
                Ok(decision) => println!("{}", cli::describe(decision)),
                Err(e) => tracing::error!("Invalid configuration: {}", e),
            }
            std::process::exit(cli::check_exit_code(&result));
        }
        Commands::Version => {
            println!("image-upload-guard v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => match cli::init_config(config_path) {
            Ok(()) => println!("Wrote {}", config_path.display()),
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(cli::EXIT_CONFIG_ERROR);
            }
        },
    }
}
