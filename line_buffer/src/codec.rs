//! Persisted document layout
//!
//! Documents are stored as UTF-16LE code units with every line followed by a
//! CR LF pair, no header and no byte-order mark. Decoding splits on either CR
//! or LF and drops empty segments, so a decoded document never contains blank
//! lines; the terminator pair itself produces exactly one split.

use alloc::string::String;
use alloc::vec::Vec;

const CR: u16 = 0x000D;
const LF: u16 = 0x000A;

/// Encode lines into the persisted byte layout
pub fn encode_lines<S: AsRef<str>>(lines: &[S]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for line in lines {
        for unit in line.as_ref().encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&CR.to_le_bytes());
        bytes.extend_from_slice(&LF.to_le_bytes());
    }
    bytes
}

/// Decode the persisted byte layout into lines
///
/// A trailing odd byte is ignored, as are unpaired surrogate units. Length
/// capping is the buffer's concern, not the codec's.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for chunk in bytes.chunks_exact(2) {
        let unit = u16::from_le_bytes([chunk[0], chunk[1]]);
        match unit {
            CR | LF => {
                if !current.is_empty() {
                    lines.push(core::mem::take(&mut current));
                }
            }
            _ => {
                if let Some(ch) = char::from_u32(unit as u32) {
                    current.push(ch);
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_encode_single_line() {
        let bytes = encode_lines(&["Hi"]);
        assert_eq!(bytes, vec![0x48, 0x00, 0x69, 0x00, 0x0D, 0x00, 0x0A, 0x00]);
    }

    #[test]
    fn test_round_trip() {
        let lines = vec!["This is a sample file.".to_string(), "Second line".to_string()];
        let decoded = decode_lines(&encode_lines(&lines));
        assert_eq!(decoded, lines);
    }

    #[test]
    fn test_decode_drops_empty_segments() {
        let lines = vec!["a".to_string(), String::new(), "b".to_string()];
        let decoded = decode_lines(&encode_lines(&lines));
        assert_eq!(decoded, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_decode_bare_terminators() {
        // A document written with single LFs (or CRs) still splits.
        let mut bytes = Vec::new();
        for unit in "one".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&0x000A_u16.to_le_bytes());
        for unit in "two".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&0x000D_u16.to_le_bytes());

        assert_eq!(
            decode_lines(&bytes),
            vec!["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn test_decode_ignores_trailing_odd_byte() {
        let mut bytes = encode_lines(&["x"]);
        bytes.push(0x41);
        assert_eq!(decode_lines(&bytes), vec!["x".to_string()]);
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode_lines(&[]).is_empty());
    }

    #[test]
    fn test_non_ascii_round_trip() {
        let lines = vec!["café ©".to_string()];
        assert_eq!(decode_lines(&encode_lines(&lines)), lines);
    }

    #[test]
    fn test_unterminated_final_line_survives() {
        let mut bytes = Vec::new();
        for unit in "tail".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_lines(&bytes), vec!["tail".to_string()]);
    }
}
