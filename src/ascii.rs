//! Byte checks for payloads that must survive string handling on the target:
//! no NUL bytes and nothing with the high bit set.

/// True when every byte is in `0x01..=0x7F`. An empty buffer passes.
pub fn check_ascii_string(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&byte| byte & 0x80 == 0 && byte & 0x7F != 0)
}

/// Same check for a 32-bit word treated as four packed bytes.
pub fn check_ascii_pointer(pointer: u32) -> bool {
    if pointer & 0x8080_8080 != 0 {
        return false;
    }

    const LANES: [u32; 4] = [0x7F00_0000, 0x007F_0000, 0x0000_7F00, 0x0000_007F];
    LANES.iter().all(|&lane| pointer & lane != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_payload_passes() {
        assert!(check_ascii_string(b"AAAA\x01\x7fhello"));
        assert!(check_ascii_string(b""));
        let all: Vec<u8> = (0x01..=0x7F).collect();
        assert!(check_ascii_string(&all));
    }

    #[test]
    fn nul_or_high_bytes_fail() {
        assert!(!check_ascii_string(b"AB\0CD"));
        assert!(!check_ascii_string(&[0x41, 0x80]));
        assert!(!check_ascii_string(&[0xFF]));
    }

    #[test]
    fn only_the_given_length_is_scanned() {
        let buffer = b"ABCD\0";
        assert!(check_ascii_string(&buffer[..4]));
        assert!(!check_ascii_string(buffer));
    }

    #[test]
    fn pointer_with_ascii_lanes_passes() {
        assert!(check_ascii_pointer(0x4141_4141));
        assert!(check_ascii_pointer(0x0101_0101));
        assert!(check_ascii_pointer(0x7F7F_7F7F));
    }

    #[test]
    fn pointer_with_high_bit_in_any_lane_fails() {
        assert!(!check_ascii_pointer(0x8141_4141));
        assert!(!check_ascii_pointer(0x4180_4141));
        assert!(!check_ascii_pointer(0x4141_C041));
        assert!(!check_ascii_pointer(0x4141_41FF));
    }

    #[test]
    fn pointer_with_zero_lane_fails() {
        assert!(!check_ascii_pointer(0x0041_4141));
        assert!(!check_ascii_pointer(0x4100_4141));
        assert!(!check_ascii_pointer(0x4141_0041));
        assert!(!check_ascii_pointer(0x4141_4100));
        assert!(!check_ascii_pointer(0));
    }
}
