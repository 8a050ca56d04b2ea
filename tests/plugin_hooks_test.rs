//! Plugin hook integration tests
//! Run with: cargo test --test plugin_hooks_test

use std::sync::{Arc, Once};

use image_upload_guard::application::http::HELLO_PATH;
use image_upload_guard::domain::entities::{CommandArgs, HttpRequest, ResponseType, USER_ID_HEADER};
use image_upload_guard::infrastructure::storage::MemoryKvStore;
use image_upload_guard::{Configuration, FileInfo, PluginHooks, UploadGuardPlugin, UNSUPPORTED_FILE_TYPE_MESSAGE};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn activated_plugin() -> UploadGuardPlugin {
    ensure_init();
    let plugin = UploadGuardPlugin::new(Configuration::default(), Arc::new(MemoryKvStore::new()))
        .expect("default configuration is valid");
    plugin.on_activate().expect("activation succeeds");
    plugin
}

/// Allowed PNG passes with its metadata intact
#[test]
fn test_png_upload_is_accepted() {
    let plugin = activated_plugin();
    let file = FileInfo::new("test.png", "image/png");

    let decision = plugin.file_will_be_uploaded(file.clone());

    assert_eq!(decision.file, Some(file));
    assert!(decision.rejection_message.is_empty());
}

/// Unknown MIME type still passes on the extension alone
#[test]
fn test_jpg_extension_overrides_unknown_mime() {
    let plugin = activated_plugin();
    let decision = plugin.file_will_be_uploaded(FileInfo::new("test.jpg", "image/unknown"));
    assert!(decision.is_accepted());
}

#[test]
fn test_pdf_and_exe_are_rejected() {
    let plugin = activated_plugin();

    for (name, mime) in [("test.pdf", "application/pdf"), ("test.exe", "application/x-msdownload")] {
        let decision = plugin.file_will_be_uploaded(FileInfo::new(name, mime));
        assert!(decision.file.is_none(), "{} should be rejected", name);
        assert_eq!(decision.rejection_message, UNSUPPORTED_FILE_TYPE_MESSAGE);
    }
}

#[test]
fn test_serve_http_hello() {
    let plugin = activated_plugin();
    let req = HttpRequest::get(HELLO_PATH).with_header(USER_ID_HEADER, "test-user-id");

    let resp = plugin.serve_http(&req);

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "Hello, world!");
}

#[test]
fn test_serve_http_requires_user() {
    let plugin = activated_plugin();
    let resp = plugin.serve_http(&HttpRequest::get(HELLO_PATH));
    assert_eq!(resp.status, 401);
    assert_eq!(resp.body, "Not authorized");
}

#[test]
fn test_hello_command() {
    let plugin = activated_plugin();
    let args = CommandArgs::new("/hello alice").with_user("u1").with_channel("c1");

    let resp = plugin.execute_command(&args).expect("command runs");

    assert_eq!(resp.response_type, ResponseType::InChannel);
    assert_eq!(resp.text, "Hello, alice");
}

#[tokio::test]
async fn test_template_data_round_trip() {
    let plugin = activated_plugin();
    let templates = plugin.templates().expect("available after activation");

    assert_eq!(templates.get_template_data("u1").await.unwrap(), "");
    templates.set_template_data("u1", "welcome").await.unwrap();
    assert_eq!(templates.get_template_data("u1").await.unwrap(), "welcome");
}

#[test]
fn test_reload_from_yaml() {
    let plugin = activated_plugin();
    let yaml = "upload:\n  allowed-mime-types: [image/webp]\n  allowed-extensions: [.webp]\n";

    plugin
        .on_configuration_change(Configuration::from_yaml(yaml).unwrap())
        .expect("valid configuration");

    assert!(plugin.file_will_be_uploaded(FileInfo::new("cat.WEBP", "")).is_accepted());
    assert!(!plugin.file_will_be_uploaded(FileInfo::new("cat.png", "image/png")).is_accepted());
}
