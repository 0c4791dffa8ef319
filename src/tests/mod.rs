//! Cross-component tests: catalog, packing, conversion and resolution
//! exercised together through whole buffers.

use crate::{SampleFormat, SampleMapper};


const EPSILON: f64 = 0.000001;

/// Parse a canonical format name.
pub(crate) fn format(name: &str) -> SampleFormat {
    name.parse()
        .unwrap_or_else(|err| panic!("bad format name in test: {err}"))
}

/// Native-endian bytes of raw samples.
pub(crate) fn raw_input(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_ne_bytes()).collect()
}

/// Raw samples decoded from native-endian bytes.
pub(crate) fn raw_output(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Map a whole buffer, checking the size helpers and the cursor movement
/// against the buffer lengths on the way.
pub(crate) fn map_buffer(from: SampleFormat, to: SampleFormat, input: &[u8], count: usize) -> Vec<u8> {
    let mapper = SampleMapper::new(from, to).expect("mapper should resolve");

    assert_eq!(mapper.input_sample_count(input.len()), count, "input sample count");
    assert_eq!(mapper.input_byte_count(count), input.len(), "input byte count");

    let mut output = vec![0u8; mapper.output_byte_count(count)];
    assert_eq!(mapper.output_sample_count(output.len()), count, "output sample count");

    let (mut in_off, mut out_off) = (0, 0);
    let mapped = mapper.map(input, &mut in_off, &mut output, &mut out_off, count);

    assert_eq!(mapped, count, "{from} -> {to}: mapped sample count");
    assert_eq!(in_off, input.len() * 8, "{from} -> {to}: input cursor");
    assert_eq!(out_off, output.len() * 8, "{from} -> {to}: output cursor");
    output
}

/// Compare float samples with the tolerance used throughout the suite.
pub(crate) fn assert_samples_approx(expected: &[f64], actual: &[f64]) {
    assert_eq!(expected.len(), actual.len(), "sample count mismatch");
    for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
        assert!(
            (e - a).abs() <= EPSILON,
            "sample {index}: expected {e}, got {a}\nexpected: {expected:?}\nactual:   {actual:?}"
        );
    }
}
