use std::fs;
use std::io;
use std::path::Path;

/// Decode input bytes as UTF-8, falling back to Latin-1 when the bytes are
/// not valid UTF-8. Latin-1 maps every byte to the code point of the same
/// value, so the fallback is total.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes);
    Ok(text.split('\n').map(|l| l.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode("José\n".as_bytes()), "José\n");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "José" in ISO-8859-1: é is the single byte 0xE9
        let bytes = [b'J', b'o', b's', 0xE9];
        assert_eq!(decode(&bytes), "José");
    }

    #[test]
    fn test_decode_latin1_high_bytes_total() {
        let bytes: Vec<u8> = (0x80..=0xFF).collect();
        let decoded = decode(&bytes);
        assert_eq!(decoded.chars().count(), 128);
        assert_eq!(decoded.chars().next(), Some('\u{80}'));
        assert_eq!(decoded.chars().last(), Some('\u{FF}'));
    }

    #[test]
    fn test_read_lines_missing_file() {
        let err = read_lines(Path::new("no/such/file.vcf")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
