// BMP character-code utilities.
//
// The binary dictionary stores one 16-bit code per trie edge, so the engine
// works on UTF-16 code units restricted to the Basic Multilingual Plane.
// Characters outside the BMP (or in the surrogate range) have no code and
// can never match a dictionary edge.

/// Code unit for the apostrophe, which the search may skip over when the
/// dictionary spells a contraction the user did not type.
pub const QUOTE: u16 = b'\'' as u16;

/// Returns the 16-bit character code for `c`, or `None` when `c` lies
/// outside the BMP.
#[inline]
pub fn code_of(c: char) -> Option<u16> {
    u16::try_from(u32::from(c)).ok()
}

/// Returns the character for a 16-bit code, or `None` for surrogate values
/// that do not name a scalar value.
#[inline]
pub fn char_of(code: u16) -> Option<char> {
    char::from_u32(u32::from(code))
}

/// Lowercase folding over character codes.
///
/// Covers ASCII and the Latin-1 supplement, which is what compact keyboard
/// dictionaries use in practice. Codes without a simple one-unit lowercase
/// form are returned unchanged.
#[inline]
pub fn lower_code(code: u16) -> u16 {
    match code {
        // A-Z
        0x0041..=0x005A => code + 0x20,
        // À-Þ, except the multiplication sign at 0xD7
        0x00C0..=0x00DE if code != 0x00D7 => code + 0x20,
        _ => match char_of(code) {
            Some(c) => {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => code_of(l).unwrap_or(code),
                    _ => code,
                }
            }
            None => code,
        },
    }
}
