//! # Sample Format Catalog
//!
//! The closed set of PCM sample representations the engine understands.
//!
//! A [`SampleCode`] names a numeric family (signed/unsigned integer of a given
//! depth and packing width, or an IEEE float). Crossing every code with an
//! [`Endianness`] gives the externally visible [`SampleFormat`] identifiers.
//! Each format has a [`FormatTraits`] record, computed at compile time into a
//! static table, so lookups are plain indexing and can be shared across
//! threads freely.
//!
//! ```rust
//! use pcm_format::{Endianness, SampleCode, SampleFormat};
//!
//! let fmt = SampleFormat::new(SampleCode::SInt18_3, Endianness::Little);
//! let traits = fmt.traits();
//!
//! assert_eq!(traits.bit_depth, 18);
//! assert_eq!(traits.bit_width, 24);
//! assert_eq!(traits.in_memory_bits, 32);
//! assert!(traits.is_little && !traits.is_packed);
//! ```

use crate::error::{PcmError, PcmResult};

/// Number of sample codes in the catalog.
pub const CODE_COUNT: usize = 26;

/// Number of byte-order variants per sample code.
pub const ENDIAN_COUNT: usize = 3;

/// Number of distinct sample formats (codes crossed with byte orders).
pub const FORMAT_COUNT: usize = CODE_COUNT * ENDIAN_COUNT;

/// Numeric representation family of a sample.
///
/// Suffixes `_3`/`_4` mark depths stored in the low bits of a 3- or 4-byte
/// container; codes without a suffix are densely packed (an `SInt18` sample
/// occupies exactly 18 bits of the buffer).
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SampleCode {
    /// 8-bit signed integer.
    SInt8,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit signed integer.
    SInt16,
    /// 16-bit unsigned integer.
    UInt16,
    /// 18-bit signed integer, densely packed (2.25 bytes).
    SInt18,
    /// 18-bit unsigned integer, densely packed (2.25 bytes).
    UInt18,
    /// 18-bit signed integer in the low bits of a 3-byte container.
    SInt18_3,
    /// 18-bit unsigned integer in the low bits of a 3-byte container.
    UInt18_3,
    /// 18-bit signed integer in the low bits of a 4-byte container.
    SInt18_4,
    /// 18-bit unsigned integer in the low bits of a 4-byte container.
    UInt18_4,
    /// 20-bit signed integer, densely packed (2.5 bytes).
    SInt20,
    /// 20-bit unsigned integer, densely packed (2.5 bytes).
    UInt20,
    /// 20-bit signed integer in the low bits of a 3-byte container.
    SInt20_3,
    /// 20-bit unsigned integer in the low bits of a 3-byte container.
    UInt20_3,
    /// 20-bit signed integer in the low bits of a 4-byte container.
    SInt20_4,
    /// 20-bit unsigned integer in the low bits of a 4-byte container.
    UInt20_4,
    /// 24-bit signed integer (3 bytes).
    SInt24,
    /// 24-bit unsigned integer (3 bytes).
    UInt24,
    /// 24-bit signed integer in the low bits of a 4-byte container.
    SInt24_4,
    /// 24-bit unsigned integer in the low bits of a 4-byte container.
    UInt24_4,
    /// 32-bit signed integer.
    SInt32,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit signed integer.
    SInt64,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit IEEE-754 float in `[-1.0, 1.0]`. The pipeline's raw format.
    Float32,
    /// 64-bit IEEE-754 float in `[-1.0, 1.0]`.
    Float64,
}

/// Static description of a sample code.
///
/// `names` holds the canonical short names of the Default, Big and Little
/// variants, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpec {
    /// The code this row describes.
    pub code: SampleCode,
    /// Integer (as opposed to floating point) family.
    pub is_integer: bool,
    /// Signed family. Floats are signed.
    pub is_signed: bool,
    /// Pipeline's canonical internal representation.
    pub is_raw: bool,
    /// Number of significant bits.
    pub significant_bits: u32,
    /// Number of bits a sample occupies in a serialized buffer.
    pub packed_bits: u32,
    /// Canonical names for Default, Big and Little variants.
    pub names: [&'static str; ENDIAN_COUNT],
}

impl CodeSpec {
    const fn sint(code: SampleCode, depth: u32, packed: u32, names: [&'static str; 3]) -> Self {
        Self {
            code,
            is_integer: true,
            is_signed: true,
            is_raw: false,
            significant_bits: depth,
            packed_bits: packed,
            names,
        }
    }

    const fn uint(code: SampleCode, depth: u32, packed: u32, names: [&'static str; 3]) -> Self {
        Self {
            code,
            is_integer: true,
            is_signed: false,
            is_raw: false,
            significant_bits: depth,
            packed_bits: packed,
            names,
        }
    }

    const fn float(code: SampleCode, bits: u32, is_raw: bool, names: [&'static str; 3]) -> Self {
        Self {
            code,
            is_integer: false,
            is_signed: true,
            is_raw,
            significant_bits: bits,
            packed_bits: bits,
            names,
        }
    }
}

// Row order must match the declaration order of `SampleCode`.
const CODE_SPECS: [CodeSpec; CODE_COUNT] = [
    CodeSpec::sint(SampleCode::SInt8, 8, 8, ["s8", "s8_be", "s8_le"]),
    CodeSpec::uint(SampleCode::UInt8, 8, 8, ["u8", "u8_be", "u8_le"]),
    CodeSpec::sint(SampleCode::SInt16, 16, 16, ["s16", "s16_be", "s16_le"]),
    CodeSpec::uint(SampleCode::UInt16, 16, 16, ["u16", "u16_be", "u16_le"]),
    CodeSpec::sint(SampleCode::SInt18, 18, 18, ["s18", "s18_be", "s18_le"]),
    CodeSpec::uint(SampleCode::UInt18, 18, 18, ["u18", "u18_be", "u18_le"]),
    CodeSpec::sint(SampleCode::SInt18_3, 18, 24, ["s18_3", "s18_3be", "s18_3le"]),
    CodeSpec::uint(SampleCode::UInt18_3, 18, 24, ["u18_3", "u18_3be", "u18_3le"]),
    CodeSpec::sint(SampleCode::SInt18_4, 18, 32, ["s18_4", "s18_4be", "s18_4le"]),
    CodeSpec::uint(SampleCode::UInt18_4, 18, 32, ["u18_4", "u18_4be", "u18_4le"]),
    CodeSpec::sint(SampleCode::SInt20, 20, 20, ["s20", "s20_be", "s20_le"]),
    CodeSpec::uint(SampleCode::UInt20, 20, 20, ["u20", "u20_be", "u20_le"]),
    CodeSpec::sint(SampleCode::SInt20_3, 20, 24, ["s20_3", "s20_3be", "s20_3le"]),
    CodeSpec::uint(SampleCode::UInt20_3, 20, 24, ["u20_3", "u20_3be", "u20_3le"]),
    CodeSpec::sint(SampleCode::SInt20_4, 20, 32, ["s20_4", "s20_4be", "s20_4le"]),
    CodeSpec::uint(SampleCode::UInt20_4, 20, 32, ["u20_4", "u20_4be", "u20_4le"]),
    CodeSpec::sint(SampleCode::SInt24, 24, 24, ["s24", "s24_be", "s24_le"]),
    CodeSpec::uint(SampleCode::UInt24, 24, 24, ["u24", "u24_be", "u24_le"]),
    CodeSpec::sint(SampleCode::SInt24_4, 24, 32, ["s24_4", "s24_4be", "s24_4le"]),
    CodeSpec::uint(SampleCode::UInt24_4, 24, 32, ["u24_4", "u24_4be", "u24_4le"]),
    CodeSpec::sint(SampleCode::SInt32, 32, 32, ["s32", "s32_be", "s32_le"]),
    CodeSpec::uint(SampleCode::UInt32, 32, 32, ["u32", "u32_be", "u32_le"]),
    CodeSpec::sint(SampleCode::SInt64, 64, 64, ["s64", "s64_be", "s64_le"]),
    CodeSpec::uint(SampleCode::UInt64, 64, 64, ["u64", "u64_be", "u64_le"]),
    CodeSpec::float(SampleCode::Float32, 32, true, ["f32", "f32_be", "f32_le"]),
    CodeSpec::float(SampleCode::Float64, 64, false, ["f64", "f64_be", "f64_le"]),
];

impl SampleCode {
    /// Every code, in catalog order.
    pub const ALL: [SampleCode; CODE_COUNT] = [
        SampleCode::SInt8,
        SampleCode::UInt8,
        SampleCode::SInt16,
        SampleCode::UInt16,
        SampleCode::SInt18,
        SampleCode::UInt18,
        SampleCode::SInt18_3,
        SampleCode::UInt18_3,
        SampleCode::SInt18_4,
        SampleCode::UInt18_4,
        SampleCode::SInt20,
        SampleCode::UInt20,
        SampleCode::SInt20_3,
        SampleCode::UInt20_3,
        SampleCode::SInt20_4,
        SampleCode::UInt20_4,
        SampleCode::SInt24,
        SampleCode::UInt24,
        SampleCode::SInt24_4,
        SampleCode::UInt24_4,
        SampleCode::SInt32,
        SampleCode::UInt32,
        SampleCode::SInt64,
        SampleCode::UInt64,
        SampleCode::Float32,
        SampleCode::Float64,
    ];

    /// Catalog row for this code.
    #[inline(always)]
    pub const fn spec(self) -> CodeSpec {
        CODE_SPECS[self as usize]
    }

    /// Position of this code in [`SampleCode::ALL`].
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical short name of the default-endian variant, e.g. `s18_3`.
    pub const fn short_name(self) -> &'static str {
        self.spec().names[0]
    }

    /// Integer family.
    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        self.spec().is_integer
    }

    /// Floating-point family.
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        !self.spec().is_integer
    }

    /// Signed family (floats included).
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        self.spec().is_signed
    }

    /// Unsigned integer family.
    #[inline(always)]
    pub const fn is_unsigned(self) -> bool {
        self.spec().is_integer && !self.spec().is_signed
    }

    /// The pipeline's canonical internal representation.
    #[inline(always)]
    pub const fn is_raw(self) -> bool {
        self.spec().is_raw
    }

    /// Number of significant bits (the sample depth).
    #[inline(always)]
    pub const fn significant_bits(self) -> u32 {
        self.spec().significant_bits
    }

    /// Number of bits a sample occupies in a serialized buffer.
    #[inline(always)]
    pub const fn packed_bits(self) -> u32 {
        self.spec().packed_bits
    }

    /// Width of the register holding an unpacked sample: 8, 16, 32 or 64.
    #[inline(always)]
    pub const fn in_memory_bits(self) -> u32 {
        let packed = self.packed_bits();
        if packed <= 8 {
            8
        } else if packed <= 16 {
            16
        } else if packed <= 32 {
            32
        } else {
            64
        }
    }

    /// Number of buffer octets touched by one sample, the last one possibly partial.
    #[inline(always)]
    pub const fn packed_octets(self) -> u32 {
        self.packed_bits().div_ceil(8)
    }

    /// True when no padding bits are stored.
    pub const fn is_packed(self) -> bool {
        self.significant_bits() == self.packed_bits()
    }

    /// True when the depth is a multiple of 8 bits.
    pub const fn is_aligned(self) -> bool {
        self.significant_bits() % 8 == 0
    }

    /// Mask covering the significant bits.
    #[inline(always)]
    pub const fn value_mask(self) -> u64 {
        u64::MAX >> (64 - self.significant_bits())
    }

    /// Largest value of the signed counterpart, `2^(N-1) - 1`.
    #[inline(always)]
    pub const fn signed_max(self) -> i64 {
        (u64::MAX >> (65 - self.significant_bits())) as i64
    }

    /// Smallest value of the signed counterpart, `-2^(N-1)`.
    #[inline(always)]
    pub const fn signed_min(self) -> i64 {
        -self.signed_max() - 1
    }

    /// Smallest representable integer value.
    ///
    /// Zero for unsigned codes. Floats report their signed-counterpart range.
    pub const fn min_value(self) -> i128 {
        if self.is_unsigned() {
            0
        } else {
            self.signed_min() as i128
        }
    }

    /// Largest representable integer value.
    pub const fn max_value(self) -> i128 {
        if self.is_unsigned() {
            self.value_mask() as i128
        } else {
            self.signed_max() as i128
        }
    }
}

impl std::fmt::Display for SampleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Byte order of a serialized sample.
///
/// `Default` is the host order; it always behaves exactly like whichever of
/// `Big`/`Little` the host uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Endianness {
    /// Platform-native byte order.
    #[default]
    Default,
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Every byte-order variant, in catalog order.
    pub const ALL: [Endianness; ENDIAN_COUNT] =
        [Endianness::Default, Endianness::Big, Endianness::Little];

    /// The explicit byte order of the host CPU.
    pub const NATIVE: Endianness = if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    };

    /// Position of this variant in [`Endianness::ALL`].
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Replace `Default` with the explicit host order.
    #[inline(always)]
    pub const fn resolve(self) -> Endianness {
        match self {
            Endianness::Default => Self::NATIVE,
            other => other,
        }
    }

    /// True if samples are stored most significant byte first.
    #[inline(always)]
    pub const fn is_big(self) -> bool {
        matches!(self.resolve(), Endianness::Big)
    }

    /// True if samples are stored least significant byte first.
    #[inline(always)]
    pub const fn is_little(self) -> bool {
        matches!(self.resolve(), Endianness::Little)
    }

    /// True if this order matches the host CPU.
    pub const fn is_native(self) -> bool {
        self.is_big() == Self::NATIVE.is_big()
    }

    /// Short tag used in configuration: `default`, `be` or `le`.
    pub const fn tag(self) -> &'static str {
        match self {
            Endianness::Default => "default",
            Endianness::Big => "be",
            Endianness::Little => "le",
        }
    }
}

/// A sample code paired with a byte order.
///
/// This is the identifier callers request and tag buffers with. Distinct
/// values may describe the same bit layout (`s16` and `s16_le` on a
/// little-endian host); use [`SampleFormat::same_layout`] to compare layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleFormat {
    code: SampleCode,
    endian: Endianness,
}

impl SampleFormat {
    /// Native 32-bit float, the pipeline's pivot format.
    pub const RAW: SampleFormat = SampleFormat::new(SampleCode::Float32, Endianness::Default);
    /// 8-bit signed integer, default endian.
    pub const S8: SampleFormat = SampleFormat::new(SampleCode::SInt8, Endianness::Default);
    /// 8-bit unsigned integer, default endian.
    pub const U8: SampleFormat = SampleFormat::new(SampleCode::UInt8, Endianness::Default);
    /// 16-bit signed integer, default endian.
    pub const S16: SampleFormat = SampleFormat::new(SampleCode::SInt16, Endianness::Default);
    /// 24-bit signed integer, default endian.
    pub const S24: SampleFormat = SampleFormat::new(SampleCode::SInt24, Endianness::Default);
    /// 32-bit signed integer, default endian.
    pub const S32: SampleFormat = SampleFormat::new(SampleCode::SInt32, Endianness::Default);
    /// 64-bit float, default endian.
    pub const F64: SampleFormat = SampleFormat::new(SampleCode::Float64, Endianness::Default);

    /// Pair a code with a byte order.
    pub const fn new(code: SampleCode, endian: Endianness) -> Self {
        Self { code, endian }
    }

    /// Numeric representation family.
    #[inline(always)]
    pub const fn code(self) -> SampleCode {
        self.code
    }

    /// Declared byte order (possibly `Default`).
    #[inline(always)]
    pub const fn endian(self) -> Endianness {
        self.endian
    }

    /// True for the raw (pivot) family in any byte order.
    #[inline(always)]
    pub const fn is_raw(self) -> bool {
        self.code.is_raw()
    }

    /// Dense index into the catalog, `0..FORMAT_COUNT`.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.code.index() * ENDIAN_COUNT + self.endian.index()
    }

    /// Inverse of [`SampleFormat::index`].
    ///
    /// # Panics
    /// Panics if `index >= FORMAT_COUNT`.
    pub const fn from_index(index: usize) -> Self {
        Self::new(
            SampleCode::ALL[index / ENDIAN_COUNT],
            Endianness::ALL[index % ENDIAN_COUNT],
        )
    }

    /// Stable numeric id. Zero is reserved as the invalid id.
    pub const fn id(self) -> u16 {
        self.index() as u16 + 1
    }

    /// Look up a format by numeric id; `None` for ids outside the catalog.
    pub const fn from_id(id: u16) -> Option<Self> {
        if id == 0 || id as usize > FORMAT_COUNT {
            None
        } else {
            Some(Self::from_index(id as usize - 1))
        }
    }

    /// Like [`SampleFormat::from_id`], reporting an error for unknown ids.
    pub fn try_from_id(id: u16) -> PcmResult<Self> {
        Self::from_id(id).ok_or(PcmError::InvalidFormatId(id))
    }

    /// Iterate over every format in the catalog.
    pub fn all() -> impl Iterator<Item = SampleFormat> {
        (0..FORMAT_COUNT).map(Self::from_index)
    }

    /// Same code with `Default` replaced by the explicit host order.
    pub const fn portable(self) -> Self {
        Self::new(self.code, self.endian.resolve())
    }

    /// Same code with the explicit host order folded back to `Default`.
    pub const fn native(self) -> Self {
        if self.endian.is_native() {
            Self::new(self.code, Endianness::Default)
        } else {
            self
        }
    }

    /// True if both formats serialize samples identically.
    pub const fn same_layout(self, other: SampleFormat) -> bool {
        self.code as u8 == other.code as u8 && self.endian.is_big() == other.endian.is_big()
    }

    /// Same code under another byte order.
    pub const fn with_endian(self, endian: Endianness) -> Self {
        Self::new(self.code, endian)
    }

    /// Canonical short name, e.g. `s18_3le`.
    pub const fn name(self) -> &'static str {
        self.code.spec().names[self.endian.index()]
    }

    /// Traits record of this format.
    #[inline]
    pub fn traits(self) -> FormatTraits {
        traits(self)
    }
}

impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for SampleFormat {
    type Error = PcmError;

    fn try_from(id: u16) -> PcmResult<Self> {
        Self::try_from_id(id)
    }
}

impl From<SampleFormat> for u16 {
    fn from(format: SampleFormat) -> u16 {
        format.id()
    }
}

/// Read-only description of a [`SampleFormat`].
///
/// Formats sharing a code have identical numeric fields; only the byte-order
/// flags and the identity fields differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTraits {
    /// Format this record describes.
    pub format: SampleFormat,
    /// Canonical short name.
    pub name: &'static str,
    /// Bits per sample in a serialized buffer, padding included.
    pub bit_width: u32,
    /// Significant bits per sample.
    pub bit_depth: u32,
    /// Width of the unpacked register: 8, 16, 32 or 64.
    pub in_memory_bits: u32,
    /// Integer family.
    pub is_integer: bool,
    /// Floating-point family.
    pub is_float: bool,
    /// Signed integers and floats.
    pub is_signed: bool,
    /// No padding bits (`s18` is packed, `s18_4` is not).
    pub is_packed: bool,
    /// Depth is a multiple of 8 (`s16` and `s24_4` are aligned, `s18` is not).
    pub is_aligned: bool,
    /// Pipeline's pivot family.
    pub is_raw: bool,
    /// Byte order matches the host CPU. Always set for `Default`.
    pub is_native: bool,
    /// Stored most significant byte first.
    pub is_big: bool,
    /// Stored least significant byte first.
    pub is_little: bool,
    /// Same format with an explicit `_be`/`_le` order.
    pub portable_alias: SampleFormat,
    /// Same format with the host order folded to `Default` when possible.
    pub native_alias: SampleFormat,
    /// Same code, default endian.
    pub default_variant: SampleFormat,
    /// Same code, big endian.
    pub be_variant: SampleFormat,
    /// Same code, little endian.
    pub le_variant: SampleFormat,
}

impl FormatTraits {
    const fn compute(format: SampleFormat) -> Self {
        let code = format.code();
        let endian = format.endian();
        Self {
            format,
            name: format.name(),
            bit_width: code.packed_bits(),
            bit_depth: code.significant_bits(),
            in_memory_bits: code.in_memory_bits(),
            is_integer: code.is_integer(),
            is_float: code.is_float(),
            is_signed: code.is_signed(),
            is_packed: code.is_packed(),
            is_aligned: code.is_aligned(),
            is_raw: code.is_raw(),
            is_native: endian.is_native(),
            is_big: endian.is_big(),
            is_little: endian.is_little(),
            portable_alias: format.portable(),
            native_alias: format.native(),
            default_variant: format.with_endian(Endianness::Default),
            be_variant: format.with_endian(Endianness::Big),
            le_variant: format.with_endian(Endianness::Little),
        }
    }

    /// Bytes needed to hold `samples` packed samples, rounded up.
    ///
    /// Saturates at `usize::MAX` when the bit count does not fit a `usize`.
    pub const fn byte_count(&self, samples: usize) -> usize {
        match samples.checked_mul(self.bit_width as usize) {
            Some(bits) => bits.div_ceil(8),
            None => usize::MAX,
        }
    }

    /// Whole samples that fit into `bytes` bytes.
    pub const fn sample_count(&self, bytes: usize) -> usize {
        let width = self.bit_width as usize;
        bytes / width * 8 + bytes % width * 8 / width
    }
}

const fn build_traits_table() -> [FormatTraits; FORMAT_COUNT] {
    let mut table = [FormatTraits::compute(SampleFormat::from_index(0)); FORMAT_COUNT];
    let mut index = 1;
    while index < FORMAT_COUNT {
        table[index] = FormatTraits::compute(SampleFormat::from_index(index));
        index += 1;
    }
    table
}

static FORMAT_TRAITS: [FormatTraits; FORMAT_COUNT] = build_traits_table();

/// Traits of a catalog format. Never fails.
#[inline]
pub fn traits(format: SampleFormat) -> FormatTraits {
    FORMAT_TRAITS[format.index()]
}

/// Traits by numeric id; `None` is the invalid sentinel.
pub fn traits_by_id(id: u16) -> Option<FormatTraits> {
    SampleFormat::from_id(id).map(traits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table_matches_enum_order() {
        for (index, code) in SampleCode::ALL.iter().enumerate() {
            assert_eq!(code.index(), index);
            assert_eq!(code.spec().code, *code, "row {index} is out of order");
        }
    }

    #[test]
    fn test_bit_width_invariants() {
        for code in SampleCode::ALL {
            let in_memory = code.in_memory_bits();
            assert!(matches!(in_memory, 8 | 16 | 32 | 64), "{code}");
            assert!(code.significant_bits() <= code.packed_bits(), "{code}");
            assert!(code.packed_bits() <= in_memory, "{code}");
        }
    }

    #[test]
    fn test_packing_widths() {
        assert_eq!(SampleCode::SInt18.packed_bits(), 18);
        assert_eq!(SampleCode::SInt18_3.packed_bits(), 24);
        assert_eq!(SampleCode::UInt18_4.packed_bits(), 32);
        assert_eq!(SampleCode::SInt20.packed_octets(), 3);
        assert_eq!(SampleCode::SInt20_4.in_memory_bits(), 32);
        assert_eq!(SampleCode::UInt8.in_memory_bits(), 8);
        assert_eq!(SampleCode::Float64.in_memory_bits(), 64);
    }

    #[test]
    fn test_value_ranges() {
        assert_eq!(SampleCode::SInt8.min_value(), -128);
        assert_eq!(SampleCode::SInt8.max_value(), 127);
        assert_eq!(SampleCode::UInt8.min_value(), 0);
        assert_eq!(SampleCode::UInt8.max_value(), 255);
        assert_eq!(SampleCode::SInt18_3.min_value(), -131072);
        assert_eq!(SampleCode::SInt18_3.max_value(), 131071);
        assert_eq!(SampleCode::UInt20.max_value(), 0xFFFFF);
        assert_eq!(SampleCode::SInt64.min_value(), i64::MIN as i128);
        assert_eq!(SampleCode::UInt64.max_value(), u64::MAX as i128);

        assert_eq!(SampleCode::UInt16.signed_max(), 32767);
        assert_eq!(SampleCode::UInt64.signed_min(), i64::MIN);
        assert_eq!(SampleCode::SInt24.value_mask(), 0xFF_FFFF);
        assert_eq!(SampleCode::SInt64.value_mask(), u64::MAX);
    }

    #[test]
    fn test_exactly_one_raw_family() {
        let raw: Vec<_> = SampleCode::ALL.iter().filter(|c| c.is_raw()).collect();
        assert_eq!(raw, vec![&SampleCode::Float32]);
    }

    #[test]
    fn test_ids_round_trip() {
        assert_eq!(SampleFormat::from_id(0), None);
        assert_eq!(SampleFormat::from_id(FORMAT_COUNT as u16 + 1), None);
        assert!(SampleFormat::try_from_id(0).is_err());

        for format in SampleFormat::all() {
            assert_eq!(SampleFormat::from_id(format.id()), Some(format));
            assert_eq!(SampleFormat::try_from(u16::from(format)), Ok(format));
        }
        assert_eq!(SampleFormat::all().count(), FORMAT_COUNT);
    }

    #[test]
    fn test_traits_by_id_invalid_sentinel() {
        assert!(traits_by_id(0).is_none());
        assert!(traits_by_id(u16::MAX).is_none());
        let s16 = traits_by_id(SampleFormat::S16.id()).unwrap();
        assert_eq!(s16.name, "s16");
        assert_eq!(s16.bit_width, 16);
    }

    #[test]
    fn test_variants_share_numeric_traits() {
        for code in SampleCode::ALL {
            let base = traits(SampleFormat::new(code, Endianness::Default));
            for endian in Endianness::ALL {
                let t = traits(SampleFormat::new(code, endian));
                assert_eq!(t.bit_width, base.bit_width);
                assert_eq!(t.bit_depth, base.bit_depth);
                assert_eq!(t.is_signed, base.is_signed);
                assert_eq!(t.is_integer, base.is_integer);
                assert_eq!(t.default_variant, base.default_variant);
                assert_eq!(t.be_variant, base.be_variant);
                assert_eq!(t.le_variant, base.le_variant);
                assert!(t.is_big != t.is_little);
            }
        }
    }

    #[test]
    fn test_native_and_portable_aliases() {
        let default = traits(SampleFormat::S16);
        assert!(default.is_native);
        assert_eq!(default.portable_alias, SampleFormat::S16.with_endian(Endianness::NATIVE));
        assert_eq!(default.native_alias, SampleFormat::S16);

        let native = traits(SampleFormat::S16.with_endian(Endianness::NATIVE));
        assert!(native.is_native);
        assert_eq!(native.native_alias, SampleFormat::S16);

        let foreign_endian = if Endianness::NATIVE == Endianness::Big {
            Endianness::Little
        } else {
            Endianness::Big
        };
        let foreign = traits(SampleFormat::S16.with_endian(foreign_endian));
        assert!(!foreign.is_native);
        assert_eq!(foreign.native_alias, foreign.format);
        assert_eq!(foreign.portable_alias, foreign.format);
    }

    #[test]
    fn test_same_layout() {
        let native = SampleFormat::S16.with_endian(Endianness::NATIVE);
        assert!(SampleFormat::S16.same_layout(native));
        assert_ne!(SampleFormat::S16, native);
        assert!(
            !SampleFormat::S16
                .with_endian(Endianness::Big)
                .same_layout(SampleFormat::S16.with_endian(Endianness::Little))
        );
        assert!(!SampleFormat::S16.same_layout(SampleFormat::U8));
    }

    #[test]
    fn test_flags() {
        let s18 = traits(SampleFormat::new(SampleCode::SInt18, Endianness::Big));
        assert!(s18.is_packed && !s18.is_aligned && s18.is_big);

        let s24_4 = traits(SampleFormat::new(SampleCode::SInt24_4, Endianness::Little));
        assert!(!s24_4.is_packed && s24_4.is_aligned && s24_4.is_little);

        let raw = traits(SampleFormat::RAW);
        assert!(raw.is_raw && raw.is_float && raw.is_signed && !raw.is_integer);
        assert!(!traits(SampleFormat::F64).is_raw);
    }

    #[test]
    fn test_byte_and_sample_counts() {
        let s18 = traits(SampleFormat::new(SampleCode::SInt18, Endianness::Little));
        assert_eq!(s18.byte_count(2), 5);
        assert_eq!(s18.byte_count(4), 9);
        assert_eq!(s18.sample_count(9), 4);
        assert_eq!(s18.sample_count(4), 1);

        let s16 = traits(SampleFormat::S16);
        assert_eq!(s16.byte_count(77), 154);
        assert_eq!(s16.sample_count(154), 77);
        assert_eq!(s16.sample_count(usize::MAX), usize::MAX / 2);
        assert_eq!(s16.byte_count(usize::MAX / 8), usize::MAX);
    }
}
