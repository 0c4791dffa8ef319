// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![cfg_attr(not(test), warn(clippy::unwrap_used))] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![deny(missing_docs)] // Documentation is a must for release

//! # pcm_format
//!
//! Bit-exact PCM sample format conversion for real-time audio pipelines.
//!
//! Audio arrives from sound cards and network peers in many binary layouts:
//! signed and unsigned integers from 8 to 64 bits (including 18- and 20-bit
//! depths, densely packed or padded to 3 or 4 bytes), IEEE floats, and any
//! byte order. This crate converts between all of them and the pipeline's
//! internal *raw* format, native-endian `f32`.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! pcm_format = "0.1.0"
//! ```
//!
//! ## Features
//!
//! - `serialization` (default): `serde` support for [`SampleFormat`] and
//!   [`Endianness`] using their canonical names.
//!
//! ## Quick Start
//!
//! ```rust
//! use pcm_format::{raw_bytes_mut, SampleFormat, SampleMapper};
//!
//! // A big-endian 24-bit stream from the wire
//! let wire: SampleFormat = "s24_be".parse()?;
//! let input = [0x80, 0x00, 0x00, 0x40, 0x00, 0x00];
//!
//! let mapper = SampleMapper::new(wire, SampleFormat::RAW)?;
//! let mut samples = [0.0f32; 2];
//! let (mut in_off, mut out_off) = (0, 0);
//! mapper.map_exact(&input, &mut in_off, raw_bytes_mut(&mut samples), &mut out_off, 2)?;
//!
//! assert_eq!(samples, [-1.0, 0.5]);
//! # Ok::<(), pcm_format::PcmError>(())
//! ```
//!
//! ## Converting between two non-raw formats
//!
//! Only pairs with a raw side have a direct converter. Anything else goes
//! through a raw buffer:
//!
//! ```rust
//! use pcm_format::{resolve, SampleFormat};
//!
//! assert!(resolve(SampleFormat::S16, SampleFormat::U8).is_none());
//!
//! let to_raw = resolve(SampleFormat::S16, SampleFormat::RAW).unwrap();
//! let from_raw = resolve(SampleFormat::RAW, SampleFormat::U8).unwrap();
//!
//! let input = 258_i16.to_ne_bytes();
//! let mut pivot = [0u8; 4];
//! let mut output = [0u8; 1];
//!
//! let (mut a, mut b) = (0, 0);
//! to_raw(&input, &mut a, &mut pivot, &mut b, 1);
//! let (mut a, mut b) = (0, 0);
//! from_raw(&pivot, &mut a, &mut output, &mut b, 1);
//!
//! assert_eq!(output, [129]);
//! ```
//!
//! ## Layout
//!
//! - [`catalog`]: sample codes, byte orders, formats and their traits
//! - [`packing`]: bit-level packing of samples into byte buffers
//! - [`conversions`]: numeric conversion between unpacked samples
//! - [`resolver`]: converter lookup for a format pair
//! - [`naming`]: canonical format names
//! - [`mapper`]: bounded conversion over caller-owned buffers
//!
//! ## License
//!
//! MIT License

mod error;

pub mod catalog;
pub mod conversions;
pub mod mapper;
pub mod naming;
pub mod packing;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use crate::catalog::{
    Endianness, FORMAT_COUNT, FormatTraits, SampleCode, SampleFormat, traits, traits_by_id,
};
pub use crate::conversions::{SampleValue, convert};
pub use crate::error::{PcmError, PcmResult};
pub use crate::mapper::{SampleMapper, raw_bytes, raw_bytes_mut};
pub use crate::naming::{from_name, to_name};
pub use crate::packing::{pack_bits, pack_sample, unpack_bits, unpack_sample};
pub use crate::resolver::{MapFn, resolve, try_resolve};
