pub mod binary;
pub mod gematria;
pub mod hexagram;
pub mod translator;

pub use crate::domain::model::{CharCode, Line};
pub use crate::domain::ports::{Report, WordProvider};
pub use crate::utils::error::Result;
