//! Bit-level packing of samples into byte buffers.
//!
//! Buffers are addressed by a running *bit* offset so that densely packed
//! formats (18 and 20 bits per sample) can straddle byte boundaries. A sample
//! is written as a sequence of octets: every octet is 8 bits wide except the
//! most significant one of an unaligned width, which carries only
//! `packed_bits % 8` bits. Big-endian formats emit the most significant octet
//! first, little-endian the least significant. Inside a byte, bits are filled
//! from the most significant end.
//!
//! Writes are read-modify-write: bits outside the field being written keep
//! their previous value.

use crate::catalog::{Endianness, SampleCode};
use crate::conversions::SampleValue;

/// Write the low `length` bits of `value` at `bit_offset` (1 ≤ `length` ≤ 8).
///
/// The field may straddle two bytes. Neighbouring bits are preserved.
#[inline(always)]
pub fn pack_bits(buffer: &mut [u8], bit_offset: usize, value: u8, length: u32) {
    debug_assert!((1..=8).contains(&length));

    let byte = bit_offset / 8;
    let bit = (bit_offset % 8) as u32;
    let shift = 16 - length - bit;

    let mask = (0xFF_u16 >> (8 - length)) << shift;
    let field = ((value as u16) << shift) & mask;

    let [mask_hi, mask_lo] = mask.to_be_bytes();
    let [field_hi, field_lo] = field.to_be_bytes();

    buffer[byte] = (buffer[byte] & !mask_hi) | field_hi;
    if bit + length > 8 {
        buffer[byte + 1] = (buffer[byte + 1] & !mask_lo) | field_lo;
    }
}

/// Read `length` bits at `bit_offset` (1 ≤ `length` ≤ 8), right-aligned.
#[inline(always)]
pub fn unpack_bits(buffer: &[u8], bit_offset: usize, length: u32) -> u8 {
    debug_assert!((1..=8).contains(&length));

    let byte = bit_offset / 8;
    let bit = (bit_offset % 8) as u32;

    let mut window = (buffer[byte] as u16) << 8;
    if bit + length > 8 {
        window |= buffer[byte + 1] as u16;
    }

    ((window >> (16 - length - bit)) & (0xFF >> (8 - length))) as u8
}

/// Width in bits of octet `index` of a sample of `code`.
#[inline(always)]
const fn octet_bits(code: SampleCode, index: u32) -> u32 {
    let tail = code.packed_bits() % 8;
    if tail != 0 && index + 1 == code.packed_octets() {
        tail
    } else {
        8
    }
}

/// Raw bit pattern of a sample as it is laid out within its packed width.
#[inline(always)]
fn encode(code: SampleCode, value: SampleValue) -> u64 {
    match code {
        SampleCode::Float32 => (value.as_f64() as f32).to_bits() as u64,
        SampleCode::Float64 => value.as_f64().to_bits(),
        _ => value.as_u64() & code.value_mask(),
    }
}

#[inline(always)]
fn decode(code: SampleCode, bits: u64) -> SampleValue {
    match code {
        SampleCode::Float32 => SampleValue::Float(f32::from_bits(bits as u32) as f64),
        SampleCode::Float64 => SampleValue::Float(f64::from_bits(bits)),
        _ if code.is_signed() => {
            let unused = 64 - code.significant_bits();
            SampleValue::Signed(((bits << unused) as i64) >> unused)
        }
        _ => SampleValue::Unsigned(bits & code.value_mask()),
    }
}

/// Write one sample at `*bit_offset` and advance the offset by the packed width.
///
/// Padding bits of `_3`/`_4` containers are written as zero. `Default`
/// endianness is treated as the host order.
#[inline(always)]
pub fn pack_sample(
    code: SampleCode,
    endian: Endianness,
    buffer: &mut [u8],
    bit_offset: &mut usize,
    value: SampleValue,
) {
    pack_word(code, endian, buffer, bit_offset, encode(code, value));
}

/// Write the bit pattern of one sample without interpreting it.
#[inline(always)]
pub(crate) fn pack_word(
    code: SampleCode,
    endian: Endianness,
    buffer: &mut [u8],
    bit_offset: &mut usize,
    bits: u64,
) {
    let octets = code.packed_octets();

    let mut emit = |index: u32| {
        let length = octet_bits(code, index);
        pack_bits(buffer, *bit_offset, (bits >> (8 * index)) as u8, length);
        *bit_offset += length as usize;
    };

    if endian.is_big() {
        (0..octets).rev().for_each(&mut emit);
    } else {
        (0..octets).for_each(&mut emit);
    }
}

/// Read one sample at `*bit_offset` and advance the offset by the packed width.
///
/// Padding bits are ignored; signed integers are sign-extended from their
/// significant width.
#[inline(always)]
pub fn unpack_sample(
    code: SampleCode,
    endian: Endianness,
    buffer: &[u8],
    bit_offset: &mut usize,
) -> SampleValue {
    decode(code, unpack_word(code, endian, buffer, bit_offset))
}

/// Read the bit pattern of one sample without interpreting it.
#[inline(always)]
pub(crate) fn unpack_word(
    code: SampleCode,
    endian: Endianness,
    buffer: &[u8],
    bit_offset: &mut usize,
) -> u64 {
    let octets = code.packed_octets();
    let mut bits = 0u64;

    let mut absorb = |index: u32| {
        let length = octet_bits(code, index);
        bits |= (unpack_bits(buffer, *bit_offset, length) as u64) << (8 * index);
        *bit_offset += length as usize;
    };

    if endian.is_big() {
        (0..octets).rev().for_each(&mut absorb);
    } else {
        (0..octets).for_each(&mut absorb);
    }

    bits
}
