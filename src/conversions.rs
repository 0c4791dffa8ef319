//! # Sample Value Conversions
//!
//! Pure numeric transforms between the *unpacked* representations of two
//! [`SampleCode`]s. Nothing here touches a buffer: the [`packing`](crate::packing)
//! module moves bits in and out of memory, this module changes what those bits
//! mean.
//!
//! An unpacked sample is a [`SampleValue`]:
//! - signed integer codes unpack to a sign-extended `i64`
//! - unsigned integer codes unpack to a zero-extended `u64`
//! - float codes unpack to `f64` (every `f32` is exactly representable)
//!
//! ## Conversion rules
//! Evaluated in order by [`convert`]:
//!
//! 1. Same code: identity.
//! 2. Unsigned source (unless both sides are unsigned): offset-binary shift
//!    onto the signed range, `u - 2^(N-1)` with wraparound.
//! 3. Float → float: numeric cast.
//! 4. Integer → float: `value / 2^(N-1)`, in `[-1.0, 1.0)`.
//! 5. Float → integer: `value * 2^(N-1)`, clipped to the signed range, then
//!    truncated toward zero.
//! 6. Integer → integer of equal depth: passthrough.
//! 7. Narrowing unsigned → unsigned: right shift, no rounding.
//! 8. Narrowing signed: add `2^(diff-1)` and shift right, clipping to the
//!    destination maximum when the bias would overflow the source range.
//! 9. Widening: left shift, low bits zero-filled.
//!
//! Finally an unsigned destination gets the offset-binary shift back.
//!
//! Out-of-range input never fails: it clips. A real-time stream must not drop
//! samples because of a transient overshoot.
//!
//! ```rust
//! use pcm_format::{convert, SampleCode, SampleValue};
//!
//! let v = convert(SampleCode::Float32, SampleCode::SInt16, SampleValue::Float(1.5));
//! assert_eq!(v, SampleValue::Signed(32767));
//!
//! let v = convert(SampleCode::UInt8, SampleCode::SInt8, SampleValue::Unsigned(128));
//! assert_eq!(v, SampleValue::Signed(0));
//! ```

use crate::catalog::SampleCode;

/// An unpacked sample held in a register.
///
/// Which variant a code uses is fixed by the code: see the module docs.
/// Accessors coerce between variants so that [`convert`] stays total even for
/// a value tagged with the "wrong" variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    /// Sign-extended signed integer.
    Signed(i64),
    /// Zero-extended unsigned integer.
    Unsigned(u64),
    /// Floating-point sample, nominally in `[-1.0, 1.0]`.
    Float(f64),
}

impl SampleValue {
    /// Value as a signed integer.
    #[inline(always)]
    pub fn as_i64(self) -> i64 {
        match self {
            SampleValue::Signed(v) => v,
            SampleValue::Unsigned(v) => v as i64,
            SampleValue::Float(v) => v as i64,
        }
    }

    /// Value as an unsigned integer bit pattern.
    #[inline(always)]
    pub fn as_u64(self) -> u64 {
        match self {
            SampleValue::Signed(v) => v as u64,
            SampleValue::Unsigned(v) => v,
            SampleValue::Float(v) => v as u64,
        }
    }

    /// Value as a float.
    #[inline(always)]
    pub fn as_f64(self) -> f64 {
        match self {
            SampleValue::Signed(v) => v as f64,
            SampleValue::Unsigned(v) => v as f64,
            SampleValue::Float(v) => v,
        }
    }
}

/// Map an unsigned sample onto the signed range of the same depth.
///
/// `0` maps to the signed minimum, `2^(N-1)` maps to `0`.
#[inline(always)]
pub fn to_signed(code: SampleCode, value: u64) -> i64 {
    let half = code.signed_max() as u64 + 1;
    (value & code.value_mask()).wrapping_sub(half) as i64
}

/// Inverse of [`to_signed`].
#[inline(always)]
pub fn from_signed(code: SampleCode, value: i64) -> u64 {
    let half = code.signed_max() as u64 + 1;
    (value as u64).wrapping_add(half) & code.value_mask()
}

/// Round a float to the precision of the destination float code.
#[inline(always)]
fn narrow_float(to: SampleCode, value: f64) -> f64 {
    if to.significant_bits() == 32 {
        value as f32 as f64
    } else {
        value
    }
}

#[inline(always)]
fn int_to_float(from: SampleCode, to: SampleCode, value: i64) -> f64 {
    narrow_float(to, value as f64 * (1.0 / (from.signed_max() as f64 + 1.0)))
}

#[inline(always)]
fn float_to_int(to: SampleCode, value: f64) -> i64 {
    let scale = to.signed_max() as f64 + 1.0;
    let scaled = value * scale;
    if scaled < to.signed_min() as f64 {
        // clip
        to.signed_min()
    } else if scaled >= scale {
        // clip
        to.signed_max()
    } else {
        scaled as i64
    }
}

#[inline(always)]
fn rescale_signed(from: SampleCode, to: SampleCode, value: i64) -> i64 {
    let (from_bits, to_bits) = (from.significant_bits(), to.significant_bits());
    if to_bits < from_bits {
        let shift = from_bits - to_bits;
        let bias = 1i64 << (shift - 1);
        if value > from.signed_max() - bias {
            // clip
            to.signed_max()
        } else {
            (value + bias) >> shift
        }
    } else if to_bits > from_bits {
        value << (to_bits - from_bits)
    } else {
        value
    }
}

#[inline(always)]
fn rescale_unsigned(from: SampleCode, to: SampleCode, value: u64) -> u64 {
    let (from_bits, to_bits) = (from.significant_bits(), to.significant_bits());
    let value = value & from.value_mask();
    if to_bits < from_bits {
        value >> (from_bits - to_bits)
    } else if to_bits > from_bits {
        value << (to_bits - from_bits)
    } else {
        value
    }
}

/// Convert an unpacked sample from one code to another.
///
/// Pure, total and deterministic. When both codes are compile-time constants
/// (as inside a resolved converter) every branch here folds away.
#[inline(always)]
pub fn convert(from: SampleCode, to: SampleCode, value: SampleValue) -> SampleValue {
    if from == to {
        return value;
    }

    if from.is_unsigned() && to.is_unsigned() {
        return SampleValue::Unsigned(rescale_unsigned(from, to, value.as_u64()));
    }

    let value = if from.is_unsigned() {
        SampleValue::Signed(to_signed(from, value.as_u64()))
    } else {
        value
    };

    let converted = match (from.is_integer(), to.is_integer()) {
        (false, false) => SampleValue::Float(narrow_float(to, value.as_f64())),
        (true, false) => SampleValue::Float(int_to_float(from, to, value.as_i64())),
        (false, true) => SampleValue::Signed(float_to_int(to, value.as_f64())),
        (true, true) => SampleValue::Signed(rescale_signed(from, to, value.as_i64())),
    };

    if to.is_unsigned() {
        SampleValue::Unsigned(from_signed(to, converted.as_i64()))
    } else {
        converted
    }
}
