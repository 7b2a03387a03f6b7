// Blob header: magic cookies, declared length, validation.

use bytemuck::{Pod, Zeroable};

use crate::LoadError;

/// Header magic constants (little-endian).
const COOKIE1: u32 = 0x0002_8C6B;
const COOKIE2: u32 = 0x0005_D1C4;

/// Size of the blob header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Blob header (16 bytes, little-endian):
/// - bytes 0..4: cookie1 (magic number)
/// - bytes 4..8: cookie2 (magic number)
/// - bytes 8..12: declared total blob length in bytes, header included
/// - bytes 12..16: reserved (must be zero)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DictHeader {
    pub cookie1: u32,
    pub cookie2: u32,
    pub declared_len: u32,
    pub reserved: u32,
}

const _: () = assert!(size_of::<DictHeader>() == HEADER_SIZE);

/// Parses and validates the blob header against the actual byte count.
///
/// The declared length must match the bytes available exactly; an external
/// loader that delivered fewer (or more) bytes than it advertised yields
/// [`LoadError::Truncated`].
pub fn parse_header(data: &[u8]) -> Result<DictHeader, LoadError> {
    if data.len() < HEADER_SIZE {
        return Err(LoadError::Truncated {
            declared: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let header: DictHeader = bytemuck::pod_read_unaligned(&data[..HEADER_SIZE]);

    if header.cookie1 != COOKIE1 || header.cookie2 != COOKIE2 {
        return Err(LoadError::Corrupt("invalid magic number in header"));
    }
    if header.reserved != 0 {
        return Err(LoadError::Corrupt("reserved header bytes not zero"));
    }
    if header.declared_len as usize != data.len() {
        return Err(LoadError::Truncated {
            declared: header.declared_len as usize,
            actual: data.len(),
        });
    }

    Ok(header)
}

/// Writes a header for a blob whose total length is `total_len` bytes.
pub fn write_header(total_len: usize) -> [u8; HEADER_SIZE] {
    let header = DictHeader {
        cookie1: COOKIE1,
        cookie2: COOKIE2,
        declared_len: total_len as u32,
        reserved: 0,
    };
    let mut buf = [0u8; HEADER_SIZE];
    buf.copy_from_slice(bytemuck::bytes_of(&header));
    buf
}
