//! Property-based tests for the SECDED codeword.
//!
//! 1. **Clean words**: every encoded payload decodes as `NoError`
//! 2. **Single errors**: any one flip is located and undone
//! 3. **Double errors**: any two distinct flips are detected and left alone
//! 4. **Encoding**: idempotent, payload-preserving, even total weight

use hamming_code::ecc::hamming::{Codeword, ErrorLocation, PAYLOAD_BITS, WORD_BITS};
use hamming_code::Error;
use proptest::prelude::*;

fn payload() -> impl Strategy<Value = u16> {
    0u16..(1 << PAYLOAD_BITS)
}

#[test]
fn test_every_payload_decodes_clean() {
    for data in 0..(1u16 << PAYLOAD_BITS) {
        let word = Codeword::from_payload(data).unwrap();
        assert_eq!(word.locate_error(), ErrorLocation::NoError, "payload {data:#x}");
        assert_eq!(word.syndrome(), 0);
        assert_eq!(word.payload(), data);
    }
}

proptest! {
    #[test]
    fn prop_single_error_located_and_corrected(data in payload(), pos in 0..WORD_BITS) {
        let sent = Codeword::from_payload(data).unwrap();
        let mut received = sent;
        received.flip_bit(pos).unwrap();

        prop_assert_eq!(received.locate_error(), ErrorLocation::BitPosition(pos));
        prop_assert_eq!(received.correct(), ErrorLocation::BitPosition(pos));
        prop_assert_eq!(received, sent);
    }

    #[test]
    fn prop_double_error_detected(data in payload(), p in 0..WORD_BITS, q in 0..WORD_BITS) {
        prop_assume!(p != q);
        let sent = Codeword::from_payload(data).unwrap();
        let mut received = sent;
        received.flip_bit(p).unwrap();
        received.flip_bit(q).unwrap();

        let before = received;
        prop_assert_eq!(received.correct(), ErrorLocation::MultipleErrors);
        prop_assert_eq!(received, before);
    }

    #[test]
    fn prop_encode_idempotent(bits in any::<u16>()) {
        let once = Codeword::new(bits).encoded();
        prop_assert_eq!(once.encoded(), once);
    }

    #[test]
    fn prop_encode_keeps_payload(bits in any::<u16>()) {
        let raw = Codeword::new(bits);
        let word = raw.encoded();
        prop_assert_eq!(word.payload(), raw.payload());
        prop_assert_eq!(word.bits().count_ones() % 2, 0);
        prop_assert_eq!(word.locate_error(), ErrorLocation::NoError);
    }

    #[test]
    fn prop_singleton(pos in 0usize..64) {
        match Codeword::singleton(pos) {
            Ok(word) => {
                prop_assert!(pos < WORD_BITS);
                prop_assert_eq!(word.bits(), 1u16 << pos);
            }
            Err(Error::InvalidPosition(p)) => {
                prop_assert!(pos >= WORD_BITS);
                prop_assert_eq!(p, pos);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
