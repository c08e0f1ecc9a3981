/// Minimum width of a character code's binary rendering.
pub const CODE_WIDTH: usize = 8;

/// Renders `value` in base 2, zero-padded on the left to at least `width` digits.
/// Values needing more digits than `width` are never truncated.
pub fn to_padded_binary(value: u32, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}
