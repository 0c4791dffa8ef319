//! # Conversion Resolver
//!
//! Maps a `(source, destination)` format pair to a ready-to-run [`MapFn`].
//!
//! The raw format (native `f32`, in any byte order) is the pivot of the
//! pipeline. Every non-raw format converts to and from raw directly, and raw
//! converts to raw in every byte-order combination. A pair where neither side
//! is raw has no direct converter: [`resolve`] reports `None` and the caller
//! runs two converters through a raw intermediate buffer.
//!
//! Each converter is a monomorphized instance of one generic loop. Source and
//! destination codes and byte orders are const generic parameters, so the
//! per-sample path carries no runtime format inspection.
//!
//! ```rust
//! use pcm_format::{resolve, SampleFormat};
//!
//! let s16_to_raw = resolve(SampleFormat::S16, SampleFormat::RAW).unwrap();
//!
//! let input = 16384_i16.to_ne_bytes();
//! let mut output = [0u8; 4];
//! let (mut in_off, mut out_off) = (0, 0);
//! s16_to_raw(&input, &mut in_off, &mut output, &mut out_off, 1);
//!
//! assert_eq!(f32::from_ne_bytes(output), 0.5);
//! assert_eq!((in_off, out_off), (16, 32));
//!
//! assert!(resolve(SampleFormat::S16, SampleFormat::U8).is_none());
//! ```

use tracing::{debug, trace};

use crate::catalog::{Endianness, SampleCode, SampleFormat};
use crate::conversions::convert;
use crate::error::{PcmError, PcmResult};
use crate::packing::{pack_sample, pack_word, unpack_sample, unpack_word};

/// A resolved converter.
///
/// Arguments: input buffer, input bit offset, output buffer, output bit
/// offset, sample count. Both offsets are advanced by the packed width of
/// their format for every sample converted. The buffers must hold at least
/// `ceil((offset + count * packed_bits) / 8)` bytes; indexing past the end
/// panics.
///
/// Converters are plain function pointers and carry no state, so they can be
/// copied freely and called from any thread on disjoint buffers.
pub type MapFn = fn(&[u8], &mut usize, &mut [u8], &mut usize, usize);

const RAW: u8 = SampleCode::Float32 as u8;

#[inline(always)]
const fn order(big: bool) -> Endianness {
    if big { Endianness::Big } else { Endianness::Little }
}

fn map_samples<const FROM: u8, const FROM_BIG: bool, const TO: u8, const TO_BIG: bool>(
    input: &[u8],
    input_bit_offset: &mut usize,
    output: &mut [u8],
    output_bit_offset: &mut usize,
    count: usize,
) {
    let from = SampleCode::ALL[FROM as usize];
    let to = SampleCode::ALL[TO as usize];

    debug_assert!(
        (*input_bit_offset + count * from.packed_bits() as usize).div_ceil(8) <= input.len(),
        "input buffer too small for {count} {from} samples"
    );
    debug_assert!(
        (*output_bit_offset + count * to.packed_bits() as usize).div_ceil(8) <= output.len(),
        "output buffer too small for {count} {to} samples"
    );

    for _ in 0..count {
        let value = unpack_sample(from, order(FROM_BIG), input, input_bit_offset);
        pack_sample(to, order(TO_BIG), output, output_bit_offset, convert(from, to, value));
    }
}

/// Raw to raw moves the `f32` bit pattern untouched, so NaN payloads survive.
fn map_raw_bits<const FROM_BIG: bool, const TO_BIG: bool>(
    input: &[u8],
    input_bit_offset: &mut usize,
    output: &mut [u8],
    output_bit_offset: &mut usize,
    count: usize,
) {
    let raw = SampleCode::Float32;
    for _ in 0..count {
        let bits = unpack_word(raw, order(FROM_BIG), input, input_bit_offset);
        pack_word(raw, order(TO_BIG), output, output_bit_offset, bits);
    }
}

fn select_raw_orders(from_big: bool, to_big: bool) -> MapFn {
    match (from_big, to_big) {
        (false, false) => map_raw_bits::<false, false>,
        (false, true) => map_raw_bits::<false, true>,
        (true, false) => map_raw_bits::<true, false>,
        (true, true) => map_raw_bits::<true, true>,
    }
}

fn select_orders<const FROM: u8, const TO: u8>(from_big: bool, to_big: bool) -> MapFn {
    match (from_big, to_big) {
        (false, false) => map_samples::<FROM, false, TO, false>,
        (false, true) => map_samples::<FROM, false, TO, true>,
        (true, false) => map_samples::<FROM, true, TO, false>,
        (true, true) => map_samples::<FROM, true, TO, true>,
    }
}

fn select_from_raw<const TO: u8>(from_big: bool, to_big: bool) -> MapFn {
    select_orders::<RAW, TO>(from_big, to_big)
}

fn select_to_raw<const FROM: u8>(from_big: bool, to_big: bool) -> MapFn {
    select_orders::<FROM, RAW>(from_big, to_big)
}

/// Expand `$select::<CODE>$args` for the runtime code `$code`.
macro_rules! select_code {
    ($code:expr, $select:ident $args:tt; $($variant:ident),+ $(,)?) => {
        match $code {
            $(
                SampleCode::$variant => {
                    const CODE: u8 = SampleCode::$variant as u8;
                    $select::<CODE> $args
                }
            )+
        }
    };
    ($code:expr, $select:ident $args:tt) => {
        select_code!(
            $code, $select $args;
            SInt8, UInt8, SInt16, UInt16,
            SInt18, UInt18, SInt18_3, UInt18_3, SInt18_4, UInt18_4,
            SInt20, UInt20, SInt20_3, UInt20_3, SInt20_4, UInt20_4,
            SInt24, UInt24, SInt24_4, UInt24_4,
            SInt32, UInt32, SInt64, UInt64,
            Float32, Float64,
        )
    };
}

/// Find the converter for a format pair.
///
/// Returns `None` when neither format is raw; convert in two hops through
/// [`SampleFormat::RAW`] instead. `Default` byte order dispatches to the same
/// converter as the explicit host order.
pub fn resolve(from: SampleFormat, to: SampleFormat) -> Option<MapFn> {
    let from_big = from.endian().is_big();
    let to_big = to.endian().is_big();

    let map = match (from.is_raw(), to.is_raw()) {
        (true, true) => select_raw_orders(from_big, to_big),
        (true, false) => select_code!(to.code(), select_from_raw(from_big, to_big)),
        (false, true) => select_code!(from.code(), select_to_raw(from_big, to_big)),
        (false, false) => {
            debug!("No direct converter from {} to {}", from, to);
            return None;
        }
    };

    trace!("Resolved converter {} -> {}", from, to);
    Some(map)
}

/// [`resolve`], reporting a missing converter as
/// [`PcmError::UnsupportedConversion`].
pub fn try_resolve(from: SampleFormat, to: SampleFormat) -> PcmResult<MapFn> {
    resolve(from, to).ok_or(PcmError::unsupported(from, to))
}
