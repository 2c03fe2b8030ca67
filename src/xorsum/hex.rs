//! Hex text form of digests: canonical uppercase out, either case in.

use super::{DIGEST_SIZE, Digest, MalformedInput};

/// Pre-computed hex encoding table: byte → 2 hex chars.
const fn build_hex_table(alphabet: &[u8; 16]) -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = [alphabet[(i >> 4) as usize], alphabet[(i & 0x0F) as usize]];
        i += 1;
    }
    table
}

const INVALID: u8 = 0xFF;

/// ASCII byte → nibble value, `INVALID` for anything that is not a hex digit.
const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i;
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'A' + i) as usize] = 10 + i;
        table[(b'a' + i) as usize] = 10 + i;
        i += 1;
    }
    table
}

static HEX_UPPER: [[u8; 2]; 256] = build_hex_table(b"0123456789ABCDEF");
static HEX_LOWER: [[u8; 2]; 256] = build_hex_table(b"0123456789abcdef");
static HEX_DECODE: [u8; 256] = build_decode_table();

fn encode_with(bytes: &[u8], table: &[[u8; 2]; 256]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        let [hi, lo] = table[b as usize];
        s.push(hi as char);
        s.push(lo as char);
    }
    s
}

/// Uppercase hex, two characters per byte.
pub fn encode(bytes: &[u8]) -> String {
    encode_with(bytes, &HEX_UPPER)
}

/// Lowercase hex, two characters per byte.
pub fn encode_lower(bytes: &[u8]) -> String {
    encode_with(bytes, &HEX_LOWER)
}

#[inline]
fn nibble(position: usize, c: char) -> Result<u8, MalformedInput> {
    let v = if c.is_ascii() {
        HEX_DECODE[c as usize]
    } else {
        INVALID
    };
    if v == INVALID {
        Err(MalformedInput::Character { position, found: c })
    } else {
        Ok(v)
    }
}

/// Decode `text` into `out`, which fixes the expected length
/// (`2 * out.len()` characters). Lengths are counted in characters.
pub fn decode_into(text: &str, out: &mut [u8]) -> Result<(), MalformedInput> {
    let expected = out.len() * 2;
    let actual = text.chars().count();
    if actual != expected {
        return Err(MalformedInput::Length { expected, actual });
    }

    for (position, c) in text.chars().enumerate() {
        let v = nibble(position, c)?;
        if position % 2 == 0 {
            out[position / 2] = v << 4;
        } else {
            out[position / 2] |= v;
        }
    }
    Ok(())
}

/// Decode checking data into a digest.
pub fn decode_digest(text: &str) -> Result<Digest, MalformedInput> {
    let mut bytes = [0u8; DIGEST_SIZE];
    decode_into(text, &mut bytes)?;
    Ok(Digest::from_bytes(bytes))
}
