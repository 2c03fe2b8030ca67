use super::*;
use crate::xorsum::{ChecksumError, hex};

fn mac_hex(key: &[u8], data: &[u8]) -> String {
    hex::encode_lower(&hmac_md5(key, data))
}

// ── RFC 2202 test vectors ───────────────────────────────────────────

#[test]
fn test_rfc2202_case_1() {
    assert_eq!(
        mac_hex(&[0x0b; 16], b"Hi There"),
        "9294727a3638bb1c13f48ef8158bfc9d"
    );
}

#[test]
fn test_rfc2202_case_2() {
    assert_eq!(
        mac_hex(b"Jefe", b"what do ya want for nothing?"),
        "750c783e6ab0b503eaa86e310a5db738"
    );
}

#[test]
fn test_rfc2202_case_3() {
    assert_eq!(
        mac_hex(&[0xaa; 16], &[0xdd; 50]),
        "56be34521d144c88dbb8c733f0e8b3f6"
    );
}

#[test]
fn test_rfc2202_key_longer_than_block() {
    // 80-byte key is hashed down to 16 bytes first
    assert_eq!(
        mac_hex(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First"
        ),
        "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd"
    );
}

// ── Streaming ───────────────────────────────────────────────────────

#[test]
fn test_incremental_matches_one_shot() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    let mut h = HmacMd5::new(b"secret");
    for chunk in data.chunks(37) {
        h.update(chunk);
    }
    assert_eq!(h.bytes_hashed(), 1000);
    assert_eq!(h.finalize(), hmac_md5(b"secret", &data));
}

#[test]
fn test_file_mac_matches_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.bin");
    let data: Vec<u8> = (0..500).map(|i| (i * 3 % 256) as u8).collect();
    std::fs::write(&path, &data).unwrap();

    let file_mac = hmac_md5_file(b"key", &path).unwrap();
    assert_eq!(file_mac.bytes, 500);
    assert_eq!(file_mac.mac, hmac_md5(b"key", &data));
}

#[test]
fn test_file_mac_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    std::fs::write(&path, b"").unwrap();

    let file_mac = hmac_md5_file(b"key", &path).unwrap();
    assert_eq!(file_mac.bytes, 0);
    assert_eq!(file_mac.mac, hmac_md5(b"key", b""));
}

#[test]
fn test_file_mac_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = hmac_md5_file(b"key", &dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, ChecksumError::FileAccess { .. }));
}

#[test]
fn test_different_keys_differ() {
    assert_ne!(hmac_md5(b"a", b"data"), hmac_md5(b"b", b"data"));
}
