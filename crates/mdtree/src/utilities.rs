//! Byte-scanning helpers shared by the built-in transformation units.

/// Length of the run of `byte` starting at `pos`
pub fn run_length(bytes: &[u8], pos: usize, byte: u8) -> usize {
    bytes[pos..].iter().take_while(|&&b| b == byte).count()
}

/// Length of the run of `byte` ending just before `end`
pub fn trailing_run(bytes: &[u8], end: usize, byte: u8) -> usize {
    bytes[..end].iter().rev().take_while(|&&b| b == byte).count()
}

/// Check if the byte at `pos` is preceded by an odd number of backslashes
pub fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    trailing_run(bytes, pos, b'\\') % 2 == 1
}
