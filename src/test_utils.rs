//! Test utilities and fixtures for tunegrab tests.
//!
//! Tag and pipeline tests need a real taggable audio file on disk without
//! shipping binary fixtures: a minimal PCM WAV is 44 bytes of header plus
//! silence, and lofty tags WAV files via ID3v2 just like the transcoded
//! downloads.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary output directory for a test.
///
/// Keep the returned handle alive for the duration of the test; the
/// directory is deleted when it drops.
pub fn temp_output_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a minimal valid mono 16-bit PCM WAV file and return its path.
pub fn write_test_wav(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);

    let data_len: u32 = 2000;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&44_100u32.to_le_bytes()); // sample rate
    bytes.extend_from_slice(&88_200u32.to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0); // silence

    std::fs::write(&path, &bytes).expect("Failed to write WAV fixture");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use lofty::file::TaggedFileExt;
    use lofty::probe::Probe;

    #[test]
    fn test_wav_fixture_is_readable_by_lofty() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "fixture.wav");

        let tagged = Probe::open(&path)
            .expect("open")
            .guess_file_type()
            .expect("guess")
            .read()
            .expect("read");

        // Fresh fixture carries no tags
        assert!(tagged.primary_tag().is_none());
    }

    #[test]
    fn test_wav_fixture_survives_foreign_extension() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "fixture.mp3");

        // Content probing ignores the misleading extension
        let result = Probe::open(&path)
            .expect("open")
            .guess_file_type()
            .expect("guess")
            .read();
        assert!(result.is_ok());
    }
}
