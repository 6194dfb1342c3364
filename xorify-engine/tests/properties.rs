//! Property tests for the XOR stream

use proptest::prelude::*;
use std::io::{self, Read};
use xorify_engine::*;

/// Reader returning at most `step` bytes per call
struct Chunky<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Chunky<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn stream_xor(a: &[u8], b: &[u8], config: &EngineConfig) -> Vec<u8> {
    let mut out = Vec::new();
    xor_streams_with(a, b, &mut out, config).unwrap();
    out
}

proptest! {
    #[test]
    fn prop_bytewise_definition(a in prop::collection::vec(any::<u8>(), 0..512),
                                b in prop::collection::vec(any::<u8>(), 0..512)) {
        let out = stream_xor(&a, &b, &EngineConfig::default());
        prop_assert_eq!(out.len(), a.len().min(b.len()));
        for (i, byte) in out.iter().enumerate() {
            prop_assert_eq!(*byte, a[i] ^ b[i]);
        }
    }

    #[test]
    fn prop_self_xor_is_zero(a in prop::collection::vec(any::<u8>(), 0..512)) {
        let out = stream_xor(&a, &a, &EngineConfig::default());
        prop_assert_eq!(out, vec![0u8; a.len()]);
    }

    #[test]
    fn prop_involution(pair in prop::collection::vec(any::<(u8, u8)>(), 0..512)) {
        let (a, b): (Vec<u8>, Vec<u8>) = pair.into_iter().unzip();
        let once = stream_xor(&a, &b, &EngineConfig::default());
        let twice = stream_xor(&once, &b, &EngineConfig::default());
        prop_assert_eq!(twice, a);
    }

    #[test]
    fn prop_symmetry(a in prop::collection::vec(any::<u8>(), 0..512),
                     b in prop::collection::vec(any::<u8>(), 0..512)) {
        let config = EngineConfig::default();
        prop_assert_eq!(stream_xor(&a, &b, &config), stream_xor(&b, &a, &config));
    }

    #[test]
    fn prop_empty_input_gives_empty_output(a in prop::collection::vec(any::<u8>(), 0..64)) {
        let config = EngineConfig::default();
        prop_assert!(stream_xor(&a, &[], &config).is_empty());
        prop_assert!(stream_xor(&[], &a, &config).is_empty());
    }

    #[test]
    fn prop_chunking_is_invisible(a in prop::collection::vec(any::<u8>(), 0..512),
                                  b in prop::collection::vec(any::<u8>(), 0..512),
                                  chunk in 0usize..40,
                                  step_a in 1usize..17,
                                  step_b in 1usize..17) {
        let config = EngineConfig::default().with_chunk_size(chunk);
        let mut out = Vec::new();
        let reader_a = Chunky { data: &a, step: step_a };
        let reader_b = Chunky { data: &b, step: step_b };
        let summary = xor_streams_with(reader_a, reader_b, &mut out, &config).unwrap();
        prop_assert_eq!(summary.bytes_written as usize, out.len());
        prop_assert_eq!(out, xor_bytes(&a, &b));
    }

    #[test]
    fn prop_zero_pad_length_and_tail(a in prop::collection::vec(any::<u8>(), 0..256),
                                     b in prop::collection::vec(any::<u8>(), 0..256),
                                     chunk in 1usize..32) {
        let config = EngineConfig::default()
            .with_chunk_size(chunk)
            .with_length_policy(LengthPolicy::ZeroPad);
        let out = stream_xor(&a, &b, &config);
        let common = a.len().min(b.len());
        prop_assert_eq!(out.len(), a.len().max(b.len()));
        let expected = xor_bytes(&a, &b);
        prop_assert_eq!(&out[..common], expected.as_slice());
        let longer = if a.len() >= b.len() { &a } else { &b };
        prop_assert_eq!(&out[common..], &longer[common..]);
    }
}
