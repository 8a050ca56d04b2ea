//! Domain entities - Core business objects with no external dependencies

pub mod file_info;
pub mod command;
pub mod http;

pub use file_info::{FileInfo, UploadDecision};
pub use command::{Command, CommandArgs, CommandHandler, CommandRegistry, CommandResponse, ResponseType};
pub use http::{HttpRequest, HttpResponse, USER_ID_HEADER};
