//! Audio tag decoding.
//!
//! Uses the lofty crate for format-independent tag access. The decoder sits
//! behind the [`TagSource`] trait so the renamer can be exercised in tests
//! with a stub implementation instead of real audio bytes.

use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::Accessor;
use std::io::Cursor;

use crate::error::Result;

/// The structured tag set decoded from one file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackTags {
    /// Embedded title, if the tag carries one. `None` and an empty string
    /// both mean "no usable title".
    pub title: Option<String>,
}

/// Decodes a raw byte buffer into a tag set, failing when the bytes are not
/// a recognized tagged-audio format.
pub trait TagSource {
    fn read_tags(&self, bytes: &[u8]) -> Result<TrackTags>;
}

/// Production decoder backed by lofty.
pub struct LoftyTagSource;

impl TagSource for LoftyTagSource {
    fn read_tags(&self, bytes: &[u8]) -> Result<TrackTags> {
        let tagged_file = Probe::new(Cursor::new(bytes)).guess_file_type()?.read()?;

        // Get the primary tag, or fall back to the first available tag
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag());

        let title = tag.and_then(|t| t.title().map(|s| s.to_string()));

        Ok(TrackTags { title })
    }
}
