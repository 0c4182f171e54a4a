/*!
Default hash and comparison functions for names.

The string hash is the rotate/xor/square scheme used by classic linear hash
tables. Values are stable across platforms and builds, which keeps bucket
placement reproducible in tests and benchmarks.
*/

use std::cmp::Ordering;

/// Generic string hash used when a type has no custom hash function.
pub fn string_hash(name: &str) -> u64 {
    let mut ret: u64 = 0;
    let mut n: u64 = 0x100;

    for &byte in name.as_bytes() {
        // Bytes are sign-extended, matching `char` on the reference platforms
        let v = n | (byte as i8 as i64 as u64);
        n += 0x100;
        let r = (((v >> 2) ^ v) & 0x0f) as u32;
        ret = (ret << r) | (ret >> (32 - r));
        ret &= 0xFFFF_FFFF;
        ret ^= v.wrapping_mul(v);
    }

    (ret >> 16) ^ ret
}

/// Generic comparison used when a type has no custom compare function.
pub fn string_compare(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_hashes_to_zero() {
        assert_eq!(string_hash(""), 0);
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(string_hash("aes-256-cbc"), string_hash("aes-256-cbc"));
        assert_ne!(string_hash("aes-256-cbc"), string_hash("aes-256-cfb"));
    }

    #[test]
    fn test_single_byte_hash() {
        // v = 0x100 | 'a' = 0x161; the rotation of a zero accumulator is a no-op
        let v: u64 = 0x161;
        let expected = ((v * v) >> 16) ^ (v * v);
        assert_eq!(string_hash("a"), expected);
    }

    #[test]
    fn test_non_ascii_names() {
        // Must not overflow on high bytes
        let _ = string_hash("kyber-\u{00e9}\u{4e2d}");
    }

    #[test]
    fn test_compare_is_bytewise() {
        assert_eq!(string_compare("MD5", "md5"), Ordering::Less);
        assert_eq!(string_compare("sha1", "sha1"), Ordering::Equal);
        assert_eq!(string_compare("sha512", "sha256"), Ordering::Greater);
    }
}
