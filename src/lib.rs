// lingo-relay - Client for LibreTranslate-compatible translation services
// Author: kelexine (https://github.com/kelexine)

pub mod config;
pub mod error;
pub mod metrics;
pub mod translate;
pub mod utils;

pub use config::TranslatorConfig;
pub use error::{Result, TranslateError};
pub use tokio_util::sync::CancellationToken;
pub use translate::{Format, Translator};
