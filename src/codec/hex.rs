//! Hexadecimal text encoding and decoding.
//!
//! Encoding is always lowercase and zero-padded, two characters per byte,
//! in input order. Decoding accepts both cases and is strict: text that is
//! not well-formed hexadecimal is rejected rather than parsed best-effort.

use crate::codec::CodecError;

/// Returns the hexadecimal representation of a single byte.
///
/// The result is always exactly two lowercase characters.
pub fn hex_byte(b: u8) -> String {
    format!("{b:02x}")
}

/// Returns the hexadecimal representation of a byte sequence.
///
/// Bytes are rendered in input order, producing `2 * bytes.len()`
/// characters. The inverse of [`unhexlify`].
pub fn hexlify(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for &b in bytes {
        out.push_str(&hex_byte(b));
    }

    out
}

/// Parses a hexadecimal string into the byte sequence it represents.
///
/// Two characters are consumed per byte, in input order. Both uppercase
/// and lowercase digits are accepted.
///
/// # Errors
///
/// Returns [`CodecError::InvalidFormat`] if the string has odd length or
/// contains a character that is not a hexadecimal digit.
pub fn unhexlify(hexstr: &str) -> Result<Vec<u8>, CodecError> {
    if hexstr.len() % 2 == 1 {
        return Err(CodecError::InvalidFormat);
    }

    hexstr
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

fn nibble(c: u8) -> Result<u8, CodecError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(CodecError::InvalidFormat),
    }
}

/// Renders a byte sequence as a human-readable hex dump.
///
/// Sixteen bytes are printed per line, space separated, with a wider gap
/// after the eighth byte of each line. Intended for debugging output only;
/// nothing in the crate parses this format back.
pub fn hexdump(data: &[u8]) -> String {
    let mut lines = Vec::new();

    for chunk in data.chunks(16) {
        let mut parts: Vec<String> = chunk.iter().map(|&b| hex_byte(b)).collect();

        if parts.len() > 8 {
            parts.insert(8, " ".to_string());
        }

        lines.push(parts.join(" "));
    }

    lines.join("\n")
}
