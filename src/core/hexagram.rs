use crate::core::translator::encode_char;
use crate::domain::model::{CharCode, Line};
use crate::domain::ports::Report;
use crate::utils::error::Result;
use crate::utils::logger;
use crate::utils::validation::validate_non_empty_string;
use serde::Serialize;
use std::io::Write;

/// Draws a binary string as I Ching lines, most significant bit first.
pub fn lines(binary: &str) -> Vec<Line> {
    binary.chars().filter_map(Line::from_bit).collect()
}

/// A word drawn as stacked Yin/Yang lines, one column of lines per character.
#[derive(Debug, Clone, Serialize)]
pub struct HexagramReport {
    pub word: String,
    pub characters: Vec<CharCode>,
}

impl HexagramReport {
    /// Blank input is rejected; surrounding whitespace is trimmed.
    pub fn new(word: &str) -> Result<Self> {
        validate_non_empty_string("word", word)?;
        let word = word.trim();

        Ok(Self {
            word: word.to_string(),
            characters: word.chars().map(encode_char).collect(),
        })
    }

    pub fn full_binary(&self) -> String {
        self.characters
            .iter()
            .map(|c| c.binary.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Report for HexagramReport {
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Translation: \"{}\"", self.word)?;
        writeln!(out, "Full Binary: {}", self.full_binary())?;
        writeln!(out)?;

        for char_code in &self.characters {
            writeln!(
                out,
                "\"{}\" code: {} binary: {}",
                char_code.character, char_code.code, char_code.binary
            )?;
            for line in lines(&char_code.binary) {
                writeln!(out, "{}", line.glyph())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

pub fn run<W: Write>(word: &str, out: &mut W) -> Result<()> {
    let report = HexagramReport::new(word)?;
    logger::log_report("☯️ Hexagram report", &report);

    report.render(out)?;
    out.flush()?;
    Ok(())
}
