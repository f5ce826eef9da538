//! Text I/O for the edited file

use std::fs::{self, File, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// UTF-16 little-endian byte order mark.
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];

/// UTF-8 byte order mark.
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a text file, decoding it by its byte order mark.
///
/// Files starting with `FF FE` are decoded as UTF-16 LE; everything else is
/// treated as UTF-8, with invalid sequences replaced.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let bytes = fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    Ok(decode(&bytes))
}

/// Write text to a file in place, holding an exclusive advisory lock.
///
/// The file is created if missing and truncated only once the lock is held.
/// There is no temp-file-and-rename step: a crash mid-write can leave a
/// partially written file.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    let native_path = path.to_native();

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;

    file.lock_exclusive().map_err(|source| Error::LockFailed {
        path: native_path.clone(),
        source,
    })?;

    let written = overwrite(&mut file, content.as_bytes()).map_err(|e| Error::io(&native_path, e));

    // Release even when the write failed; the write error takes precedence.
    let unlocked = file.unlock().map_err(|source| Error::LockFailed {
        path: native_path.clone(),
        source,
    });

    written?;
    unlocked?;

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file");
    Ok(())
}

fn overwrite(file: &mut File, content: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.write_all(content)?;
    file.sync_all()
}

fn decode(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(BOM_UTF16_LE) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        return char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    }

    let body = bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes);
    String::from_utf8_lossy(body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_with_and_without_bom() {
        assert_eq!(decode(b"[A]\nx=1"), "[A]\nx=1");
        assert_eq!(decode(b"\xEF\xBB\xBF[A]"), "[A]");
    }

    #[test]
    fn test_decode_utf16_le() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "[Sec]\r\nk=\u{44F}".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode(&bytes), "[Sec]\r\nk=\u{44F}");
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        assert_eq!(decode(b"a\xFFb"), "a\u{FFFD}b");
    }
}
