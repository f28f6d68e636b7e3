//! Test utilities and fixtures for tag-tidy tests.
//!
//! Provides a stub tag decoder for exercising the renamer without real
//! audio bytes, and a builder for a minimal tagged WAV file for tests that
//! go through the real decoder.

use crate::error::{Error, Result};
use crate::metadata::{TagSource, TrackTags};

/// Stub decoder with a trivial text protocol: bytes of the form
/// `title:<rest>` decode to a tag set whose title is `<rest>`; anything
/// else fails like a non-audio file.
///
/// # Example
///
/// ```ignore
/// let tags = StubTagSource.read_tags(b"title:My Song").unwrap();
/// assert_eq!(tags.title.as_deref(), Some("My Song"));
/// ```
pub struct StubTagSource;

impl TagSource for StubTagSource {
    fn read_tags(&self, bytes: &[u8]) -> Result<TrackTags> {
        let text = std::str::from_utf8(bytes).map_err(|_| not_audio())?;
        let title = text.strip_prefix("title:").ok_or_else(not_audio)?;
        Ok(TrackTags {
            title: Some(title.to_string()),
        })
    }
}

fn not_audio() -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "unrecognized format",
    ))
}

/// Builds a minimal RIFF/WAVE byte stream whose INFO list carries the given
/// title in an INAM chunk. Just enough of a file for lofty to parse: a PCM
/// `fmt ` chunk, a small `data` chunk, and the LIST/INFO tag.
pub fn wav_with_title(title: &str) -> Vec<u8> {
    // INAM payload is NUL-terminated and padded to an even length
    let mut inam = title.as_bytes().to_vec();
    inam.push(0);
    if inam.len() % 2 != 0 {
        inam.push(0);
    }

    let mut info = Vec::new();
    info.extend_from_slice(b"INFO");
    info.extend_from_slice(b"INAM");
    info.extend_from_slice(&(inam.len() as u32).to_le_bytes());
    info.extend_from_slice(&inam);

    let mut body = Vec::new();
    body.extend_from_slice(b"WAVE");

    // PCM format chunk: mono, 8 kHz, 16-bit
    body.extend_from_slice(b"fmt ");
    body.extend_from_slice(&16u32.to_le_bytes());
    body.extend_from_slice(&1u16.to_le_bytes()); // format: PCM
    body.extend_from_slice(&1u16.to_le_bytes()); // channels
    body.extend_from_slice(&8000u32.to_le_bytes()); // sample rate
    body.extend_from_slice(&16000u32.to_le_bytes()); // byte rate
    body.extend_from_slice(&2u16.to_le_bytes()); // block align
    body.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    body.extend_from_slice(b"data");
    body.extend_from_slice(&16u32.to_le_bytes());
    body.extend_from_slice(&[0u8; 16]);

    body.extend_from_slice(b"LIST");
    body.extend_from_slice(&(info.len() as u32).to_le_bytes());
    body.extend_from_slice(&info);

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
    wav.extend_from_slice(&body);
    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_decodes_titled_bytes() {
        let tags = StubTagSource.read_tags(b"title:Some Song").unwrap();
        assert_eq!(tags.title.as_deref(), Some("Some Song"));
    }

    #[test]
    fn test_stub_rejects_unprefixed_bytes() {
        assert!(StubTagSource.read_tags(b"plain text").is_err());
        assert!(StubTagSource.read_tags(&[0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn test_wav_fixture_shape() {
        let wav = wav_with_title("X");
        assert_eq!(&wav[..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // RIFF size covers everything after the 8-byte header
        let size = u32::from_le_bytes(wav[4..8].try_into().unwrap()) as usize;
        assert_eq!(size, wav.len() - 8);
    }
}
