use crate::core::binary::{to_padded_binary, CODE_WIDTH};
use crate::core::gematria::LifeForce;
use crate::domain::model::CharCode;
use crate::domain::ports::Report;
use crate::utils::error::Result;
use crate::utils::logger;
use serde::Serialize;
use std::io::Write;

pub const DEFAULT_WORD: &str = "Chai";

pub fn encode_char(character: char) -> CharCode {
    let code = u32::from(character);
    CharCode {
        character,
        code,
        binary: to_padded_binary(code, CODE_WIDTH),
    }
}

/// The sacred math check followed by the per-character translation of a word.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationReport {
    pub life_force: LifeForce,
    pub word: String,
}

impl TranslationReport {
    pub fn new(word: &str) -> Self {
        Self {
            life_force: LifeForce::chai(),
            word: word.to_string(),
        }
    }

    /// Character codes are derived while iterating, never cached.
    pub fn char_codes(&self) -> impl Iterator<Item = CharCode> + '_ {
        self.word.chars().map(encode_char)
    }
}

impl Report for TranslationReport {
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        // Sacred math check
        writeln!(out, "--- SACRED MATH CHECK ---")?;
        writeln!(out, "Hebrew 'Chai' Value: {}", self.life_force.value())?;
        writeln!(out, "Ancient Binary Code: {}", self.life_force.binary())?;
        writeln!(out, "-------------------------")?;
        writeln!(out)?;

        // Word translation
        writeln!(out, "Translating: {}", self.word)?;
        for char_code in self.char_codes() {
            writeln!(out, "{}", char_code)?;
        }
        Ok(())
    }
}

pub fn run<W: Write>(word: &str, out: &mut W) -> Result<()> {
    let report = TranslationReport::new(word);
    logger::log_report("🔢 Translation report", &report);

    // Render
    report.render(out)?;
    out.flush()?;

    tracing::info!("✅ Translated {} characters", report.word.chars().count());
    Ok(())
}
