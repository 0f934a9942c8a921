use std::fs;
use std::io::Write;
use std::path::Path;
use log::{debug, info};
use tempfile::NamedTempFile;
use crate::drivers::quantize::{SAMPLE_MAX, SAMPLE_MIN};
use crate::drivers::SignalError;
const WORD_BITS: u32 = 12;
const WORD_MASK: i64 = (1 << WORD_BITS) - 1;
/// Encode one sample as its 12-bit two's-complement pattern, e.g. `-1 -> "fff"`.
pub fn encode(value: i32) -> Result<String, SignalError> {
    if !(SAMPLE_MIN..=SAMPLE_MAX).contains(&value) {
        return Err(SignalError::OutOfRange {
            value: i64::from(value),
        });
    }
    let mut word = i64::from(value);
    if word < 0 {
        word += 1 << WORD_BITS;
    }
    Ok(format!("{:03x}", word & WORD_MASK))
}
/// Parse a three-digit hex token back into a signed sample.
pub fn decode(token: &str) -> Result<i32, SignalError> {
    let token = token.trim();
    if token.len() != 3 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SignalError::invalid(format!(
            "expected a 3-digit hex word, got '{token}'"
        )));
    }
    let raw = i32::from_str_radix(token, 16)
        .map_err(|e| SignalError::invalid(format!("bad hex word '{token}': {e}")))?;
    // Sign-extend from bit 11.
    Ok(if raw > SAMPLE_MAX { raw - (1 << WORD_BITS) } else { raw })
}
/// Render every sample, one token per line, each line newline-terminated.
///
/// Fails before producing any output if a sample is out of range.
pub fn render(samples: &[i32]) -> Result<String, SignalError> {
    let mut text = String::with_capacity(samples.len() * 4);
    for &sample in samples {
        text.push_str(&encode(sample)?);
        text.push('\n');
    }
    Ok(text)
}
pub fn write_samples<W: Write>(samples: &[i32], mut writer: W) -> std::io::Result<()> {
    let text = render(samples).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
/// Write a hex dump to `path`.
///
/// The dump is staged in a sibling temporary file and renamed into place, so a
/// failure leaves any existing file at `path` untouched.
pub fn write_hex_file(path: impl AsRef<Path>, samples: &[i32]) -> Result<(), SignalError> {
    let path = path.as_ref();
    let text = render(samples)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| SignalError::io(path, e))?;
    staged
        .write_all(text.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(|e| SignalError::io(path, e))?;
    debug!("staged {} samples at {}", samples.len(), staged.path().display());
    staged
        .persist(path)
        .map_err(|e| SignalError::io(path, e.error))?;
    info!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
pub fn read_hex_file(path: impl AsRef<Path>) -> Result<Vec<i32>, SignalError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SignalError::io(path, e))?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            decode(line).map_err(|e| {
                SignalError::invalid(format!("{}:{}: {e}", path.display(), idx + 1))
            })
        })
        .collect()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn encodes_reference_points() {
        assert_eq!(encode(-1).unwrap(), "fff");
        assert_eq!(encode(2047).unwrap(), "7ff");
        assert_eq!(encode(-2048).unwrap(), "800");
        assert_eq!(encode(0).unwrap(), "000");
        assert_eq!(encode(2000).unwrap(), "7d0");
        assert_eq!(encode(10).unwrap(), "00a");
    }
    #[test]
    fn every_register_value_survives_decode() {
        for v in SAMPLE_MIN..=SAMPLE_MAX {
            let token = encode(v).unwrap();
            assert_eq!(token.len(), 3);
            assert_eq!(decode(&token).unwrap(), v);
        }
    }
    #[test]
    fn out_of_range_values_fail_instead_of_wrapping() {
        assert!(matches!(encode(2048), Err(SignalError::OutOfRange { value: 2048 })));
        assert!(matches!(encode(-2049), Err(SignalError::OutOfRange { value: -2049 })));
        assert!(matches!(encode(4095), Err(SignalError::OutOfRange { .. })));
    }
    #[test]
    fn decode_rejects_malformed_tokens() {
        for bad in ["", "7f", "7fff", "xyz", "-01"] {
            assert!(decode(bad).is_err(), "accepted '{bad}'");
        }
        assert_eq!(decode("FFF").unwrap(), -1);
    }
    #[test]
    fn writer_emits_one_line_per_sample() {
        let mut out = Vec::new();
        write_samples(&[0, -1, 2047, -2048], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "000\nfff\n7ff\n800\n");
    }
    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.txt");
        let samples = vec![0, 1, -1, 1999, -1999, 2047, -2048];
        write_hex_file(&path, &samples).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), samples.len());
        assert!(text.ends_with('\n'));
        assert!(text.lines().all(|l| l.len() == 3));
        assert_eq!(read_hex_file(&path).unwrap(), samples);
    }
    #[test]
    fn failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.txt");
        write_hex_file(&path, &[1, 2, 3]).unwrap();
        let err = write_hex_file(&path, &[1, 5000, 3]).unwrap_err();
        assert!(matches!(err, SignalError::OutOfRange { value: 5000 }));
        assert_eq!(read_hex_file(&path).unwrap(), vec![1, 2, 3]);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
    #[test]
    fn invalid_samples_create_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.txt");
        assert!(write_hex_file(&path, &[-3000]).is_err());
        assert!(!path.exists());
    }
    #[test]
    fn missing_directory_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        assert!(matches!(
            write_hex_file(&path, &[0]),
            Err(SignalError::Io { .. })
        ));
    }
}
