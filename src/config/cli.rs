use crate::core::translator::DEFAULT_WORD;
use crate::core::WordProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

// Every argument is data: no help flag, and leading dashes are part of the word.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chai-translator")]
#[command(about = "Prints the Chai value and translates a word into binary")]
#[command(disable_help_flag = true)]
pub struct TranslatorConfig {
    /// Word to translate
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,

    /// Anything after the word is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl TranslatorConfig {
    /// Parses a full argument list, program name first.
    ///
    /// Arguments are decoded lossily, so invalid UTF-8 becomes U+FFFD instead of
    /// a parse error.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .collect();

        // clap always consumes a leading `--` as end-of-options
        if args.get(1).map(String::as_str) == Some("--") {
            return Self {
                word: Some("--".to_string()),
                ignored: args[2..].to_vec(),
            };
        }

        Self::parse_from(args)
    }
}

impl WordProvider for TranslatorConfig {
    fn word(&self) -> &str {
        self.word.as_deref().unwrap_or(DEFAULT_WORD)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hexagram")]
#[command(about = "Draws each character of a word as I Ching Yin/Yang lines")]
pub struct HexagramConfig {
    /// Word to draw
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,
}

impl WordProvider for HexagramConfig {
    fn word(&self) -> &str {
        self.word.as_deref().unwrap_or(DEFAULT_WORD)
    }
}

impl Validate for HexagramConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("word", self.word())
    }
}
