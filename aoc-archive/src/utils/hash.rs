//! MD5 helpers for the hash-mining puzzles

/// Lowercase hex MD5 of `data`
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(data))
}

/// Number of leading zero hex digits in a digest
pub fn leading_zero_nibbles(digest: &[u8; 16]) -> u32 {
    let mut count = 0;
    for byte in digest {
        if *byte == 0 {
            count += 2;
        } else {
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
    }
    count
}

/// Hex digit `index` (0-based) of a digest
pub fn nibble(digest: &[u8; 16], index: usize) -> u8 {
    let byte = digest[index / 2];
    if index % 2 == 0 { byte >> 4 } else { byte & 0x0f }
}

/// Writes the lowercase hex form of `digest` into `out` without allocating
pub fn hex_into(digest: &[u8; 16], out: &mut [u8; 32]) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    for (i, byte) in digest.iter().enumerate() {
        out[2 * i] = HEX[(byte >> 4) as usize];
        out[2 * i + 1] = HEX[(byte & 0x0f) as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        let digest = md5::compute("abcdef609043");
        assert_eq!(leading_zero_nibbles(&digest.0), 5);
        assert_eq!(nibble(&digest.0, 5), 1);
    }

    #[test]
    fn test_hex_into_matches_format() {
        let digest = md5::compute("abc");
        let mut out = [0u8; 32];
        hex_into(&digest.0, &mut out);
        assert_eq!(std::str::from_utf8(&out).unwrap(), md5_hex("abc"));
    }
}
