//! Bounded buffer mapper.
//!
//! [`SampleMapper`] resolves a converter once and then applies it to caller
//! owned buffers, clamping the sample count to what both buffers can hold.
//! It is the entry point audio pipeline stages use; [`resolve`](crate::resolve)
//! is the lower-level, unchecked building block.

use tracing::debug;

use crate::catalog::{FormatTraits, SampleFormat};
use crate::error::{PcmError, PcmResult};
use crate::resolver::{MapFn, try_resolve};

/// Converts samples between two formats, one of which must be raw.
///
/// # Examples
/// ```rust
/// use pcm_format::{raw_bytes, SampleFormat, SampleMapper};
///
/// let mapper = SampleMapper::new(SampleFormat::RAW, SampleFormat::U8)?;
///
/// let samples = [-1.0f32, 0.0, 0.5];
/// let mut output = [0u8; 2];
/// let (mut in_off, mut out_off) = (0, 0);
///
/// // Only two samples fit into the output.
/// let mapped = mapper.map(raw_bytes(&samples), &mut in_off, &mut output, &mut out_off, 3);
/// assert_eq!(mapped, 2);
/// assert_eq!(output, [0, 128]);
/// # Ok::<(), pcm_format::PcmError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SampleMapper {
    input: FormatTraits,
    output: FormatTraits,
    map_fn: MapFn,
}

impl SampleMapper {
    /// Create a mapper between two formats.
    ///
    /// # Errors
    /// [`PcmError::UnsupportedConversion`] if neither format is raw.
    pub fn new(input: SampleFormat, output: SampleFormat) -> PcmResult<Self> {
        let map_fn = try_resolve(input, output)?;
        debug!("Created sample mapper {} -> {}", input, output);
        Ok(Self {
            input: input.traits(),
            output: output.traits(),
            map_fn,
        })
    }

    /// Source format.
    pub fn input_format(&self) -> SampleFormat {
        self.input.format
    }

    /// Destination format.
    pub fn output_format(&self) -> SampleFormat {
        self.output.format
    }

    /// Traits of the source format.
    pub fn input_traits(&self) -> &FormatTraits {
        &self.input
    }

    /// Traits of the destination format.
    pub fn output_traits(&self) -> &FormatTraits {
        &self.output
    }

    /// Whole input samples contained in `bytes` bytes.
    pub fn input_sample_count(&self, bytes: usize) -> usize {
        self.input.sample_count(bytes)
    }

    /// Bytes needed for `samples` input samples, rounded up.
    pub fn input_byte_count(&self, samples: usize) -> usize {
        self.input.byte_count(samples)
    }

    /// Whole output samples that fit into `bytes` bytes.
    pub fn output_sample_count(&self, bytes: usize) -> usize {
        self.output.sample_count(bytes)
    }

    /// Bytes needed for `samples` output samples, rounded up.
    pub fn output_byte_count(&self, samples: usize) -> usize {
        self.output.byte_count(samples)
    }

    /// Convert up to `count` samples, returning how many were converted.
    ///
    /// The count is clamped to the samples left in `input` after
    /// `*input_bit_offset` and the room left in `output` after
    /// `*output_bit_offset`. Both offsets advance past the converted samples.
    pub fn map(
        &self,
        input: &[u8],
        input_bit_offset: &mut usize,
        output: &mut [u8],
        output_bit_offset: &mut usize,
        count: usize,
    ) -> usize {
        let available = samples_after(input.len(), *input_bit_offset, &self.input);
        let room = samples_after(output.len(), *output_bit_offset, &self.output);
        let count = count.min(available).min(room);

        (self.map_fn)(input, input_bit_offset, output, output_bit_offset, count);
        count
    }

    /// Convert exactly `count` samples.
    ///
    /// # Errors
    /// [`PcmError::BufferTooSmall`] if either buffer cannot hold `count`
    /// samples past its offset. Nothing is written in that case.
    pub fn map_exact(
        &self,
        input: &[u8],
        input_bit_offset: &mut usize,
        output: &mut [u8],
        output_bit_offset: &mut usize,
        count: usize,
    ) -> PcmResult<()> {
        let required = bytes_through(*input_bit_offset, count, &self.input).unwrap_or(usize::MAX);
        if input.len() < required {
            return Err(PcmError::input_too_small(required, input.len()));
        }

        let required = bytes_through(*output_bit_offset, count, &self.output).unwrap_or(usize::MAX);
        if output.len() < required {
            return Err(PcmError::output_too_small(required, output.len()));
        }

        (self.map_fn)(input, input_bit_offset, output, output_bit_offset, count);
        Ok(())
    }
}

fn samples_after(len: usize, bit_offset: usize, traits: &FormatTraits) -> usize {
    let bits = (len as u128 * 8).saturating_sub(bit_offset as u128);
    (bits / traits.bit_width as u128) as usize
}

/// Bytes spanned from the buffer start through `count` samples at `bit_offset`,
/// or `None` if that does not fit a `usize`.
fn bytes_through(bit_offset: usize, count: usize, traits: &FormatTraits) -> Option<usize> {
    count
        .checked_mul(traits.bit_width as usize)
        .and_then(|bits| bits.checked_add(bit_offset))
        .map(|bits| bits.div_ceil(8))
}

/// View native `f32` samples as a buffer of the default raw format.
pub fn raw_bytes(samples: &[f32]) -> &[u8] {
    bytemuck::cast_slice(samples)
}

/// Mutable variant of [`raw_bytes`], for writing converted samples in place.
pub fn raw_bytes_mut(samples: &mut [f32]) -> &mut [u8] {
    bytemuck::cast_slice_mut(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Endianness, SampleCode};

    #[test]
    fn test_new_requires_raw_side() {
        assert!(SampleMapper::new(SampleFormat::S16, SampleFormat::RAW).is_ok());
        assert!(SampleMapper::new(SampleFormat::RAW, SampleFormat::S16).is_ok());

        let err = SampleMapper::new(SampleFormat::S16, SampleFormat::U8).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_size_helpers() {
        let tight = SampleFormat::new(SampleCode::SInt18, Endianness::Big);
        let mapper = SampleMapper::new(SampleFormat::RAW, tight).unwrap();

        assert_eq!(mapper.input_byte_count(3), 12);
        assert_eq!(mapper.input_sample_count(13), 3);
        assert_eq!(mapper.output_byte_count(2), 5);
        assert_eq!(mapper.output_byte_count(4), 9);
        assert_eq!(mapper.output_sample_count(5), 2);
        assert_eq!(mapper.output_sample_count(4), 1);
        assert_eq!(mapper.output_traits().bit_width, 18);
        assert_eq!(mapper.input_format(), SampleFormat::RAW);
        assert_eq!(mapper.output_format(), tight);
    }

    #[test]
    fn test_map_clamps_to_input() {
        let mapper = SampleMapper::new(SampleFormat::RAW, SampleFormat::S16).unwrap();
        let samples = [0.5f32, -0.5];
        let mut output = [0u8; 16];
        let (mut in_off, mut out_off) = (0, 0);

        assert_eq!(mapper.map(raw_bytes(&samples), &mut in_off, &mut output, &mut out_off, 10), 2);
        assert_eq!((in_off, out_off), (64, 32));
        assert_eq!(&output[..2], 16384_i16.to_ne_bytes());
        assert_eq!(&output[2..4], (-16384_i16).to_ne_bytes());
        assert!(output[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_map_respects_offsets() {
        let mapper = SampleMapper::new(SampleFormat::RAW, SampleFormat::S8).unwrap();
        let samples = [0.5f32, 0.25, -0.5];
        let mut output = [0u8; 2];
        let (mut in_off, mut out_off) = (32, 8);

        assert_eq!(mapper.map(raw_bytes(&samples), &mut in_off, &mut output, &mut out_off, 3), 1);
        assert_eq!(output, [0, 32]);
        assert_eq!((in_off, out_off), (64, 16));

        assert_eq!(mapper.map(raw_bytes(&samples), &mut in_off, &mut output, &mut out_off, 3), 0);
    }

    #[test]
    fn test_map_exact_rejects_short_buffers() {
        let mapper = SampleMapper::new(SampleFormat::S24, SampleFormat::RAW).unwrap();
        let input = [0u8; 6];
        let mut output = [0f32; 2];
        let (mut in_off, mut out_off) = (0, 0);

        let err = mapper
            .map_exact(&input, &mut in_off, raw_bytes_mut(&mut output), &mut out_off, 3)
            .unwrap_err();
        assert_eq!(err, PcmError::input_too_small(9, 6));

        let err = mapper
            .map_exact(&[0u8; 9], &mut in_off, raw_bytes_mut(&mut output), &mut out_off, 3)
            .unwrap_err();
        assert_eq!(err, PcmError::output_too_small(12, 8));
        assert_eq!((in_off, out_off), (0, 0));

        mapper
            .map_exact(&input, &mut in_off, raw_bytes_mut(&mut output), &mut out_off, 2)
            .unwrap();
        assert_eq!((in_off, out_off), (48, 64));
    }

    #[test]
    fn test_map_exact_rejects_overflowing_count() {
        let mapper = SampleMapper::new(SampleFormat::RAW, SampleFormat::S16).unwrap();
        let mut output = [0u8; 4];
        let (mut in_off, mut out_off) = (0, 0);

        let err = mapper
            .map_exact(&[0u8; 8], &mut in_off, &mut output, &mut out_off, usize::MAX / 4)
            .unwrap_err();
        assert_eq!(err, PcmError::input_too_small(usize::MAX, 8));
        assert_eq!((in_off, out_off), (0, 0));
        assert_eq!(output, [0u8; 4]);

        assert_eq!(mapper.input_byte_count(usize::MAX / 4), usize::MAX);
        assert_eq!(mapper.map(&[0u8; 8], &mut in_off, &mut output, &mut out_off, usize::MAX), 2);
    }

    #[test]
    fn test_raw_views_share_memory() {
        let mut samples = [0.0f32; 2];
        raw_bytes_mut(&mut samples)[..4].copy_from_slice(&1.0f32.to_ne_bytes());
        assert_eq!(samples, [1.0, 0.0]);
        assert_eq!(raw_bytes(&samples).len(), 8);
    }
}
