pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{HexagramConfig, TranslatorConfig};

pub use self::core::gematria::LifeForce;
pub use self::core::hexagram::HexagramReport;
pub use self::core::translator::{run, TranslationReport, DEFAULT_WORD};
pub use utils::error::{Result, TranslatorError};
