//! Canonical format names.
//!
//! Every [`SampleFormat`] has one short token: the default byte order is the
//! bare code name (`s16`, `u18_3`, `f32`), explicit orders append `be`/`le`,
//! separated by `_` unless the code name already contains one (`s16_le`,
//! `u18_3be`). Names cross configuration boundaries, so parsing is exact:
//! anything that is not a catalog name is rejected.

use std::str::FromStr;
use std::sync::OnceLock;

use crate::catalog::{Endianness, SampleFormat};
use crate::error::PcmError;

/// Catalog names in byte-wise sorted order, built on first lookup.
static NAME_INDEX: OnceLock<Vec<(&'static str, SampleFormat)>> = OnceLock::new();

fn name_index() -> &'static [(&'static str, SampleFormat)] {
    NAME_INDEX.get_or_init(|| {
        let mut index: Vec<_> = SampleFormat::all()
            .map(|format| (format.name(), format))
            .collect();
        index.sort_unstable_by_key(|(name, _)| *name);
        index
    })
}

/// Canonical name of a format.
#[inline]
pub fn to_name(format: SampleFormat) -> &'static str {
    format.name()
}

/// Look a format up by its canonical name.
///
/// Each character narrows the sorted name table to the entries sharing the
/// prefix read so far; the lookup fails as soon as no entry remains, or if the
/// input ends on a prefix rather than a full name.
///
/// ```rust
/// use pcm_format::{from_name, Endianness, SampleCode, SampleFormat};
///
/// assert_eq!(
///     from_name("s18_3le"),
///     Some(SampleFormat::new(SampleCode::SInt18_3, Endianness::Little))
/// );
/// assert_eq!(from_name("s18_"), None);
/// assert_eq!(from_name("S16"), None);
/// ```
pub fn from_name(name: &str) -> Option<SampleFormat> {
    let mut candidates = name_index();

    for (position, byte) in name.bytes().enumerate() {
        let key = Some(&byte);
        let start = candidates.partition_point(|(entry, _)| entry.as_bytes().get(position) < key);
        let end = candidates.partition_point(|(entry, _)| entry.as_bytes().get(position) <= key);
        candidates = &candidates[start..end];
        if candidates.is_empty() {
            return None;
        }
    }

    candidates
        .iter()
        .find(|(entry, _)| entry.len() == name.len())
        .map(|(_, format)| *format)
}

impl FromStr for SampleFormat {
    type Err = PcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_name(s).ok_or_else(|| PcmError::invalid_name(s))
    }
}

impl FromStr for Endianness {
    type Err = PcmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endianness::ALL
            .into_iter()
            .find(|endian| endian.tag() == s)
            .ok_or_else(|| PcmError::invalid_name(s))
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(feature = "serialization")]
mod serialization {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::catalog::{Endianness, SampleFormat};

    impl Serialize for SampleFormat {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for SampleFormat {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let name = String::deserialize(deserializer)?;
            name.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Endianness {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.tag())
        }
    }

    impl<'de> Deserialize<'de> for Endianness {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let tag = String::deserialize(deserializer)?;
            tag.parse().map_err(D::Error::custom)
        }
    }
}
