use crate::utils::error::Result;
use std::io::Write;

pub trait WordProvider {
    fn word(&self) -> &str;
}

/// Something that can be printed as the program's standard output.
pub trait Report {
    fn render<W: Write>(&self, out: &mut W) -> Result<()>;
}
