use crate::encoding::encodingerror::EncodingError;
use crate::fixture::testcase::{
    FixedSegment,
    TestCase
};
use crate::math::fixedpoint::fixedpoint::FixedPoint;

pub const WORD_SIZE: usize = 32;

/// Length of the three fixed test arrays in the test-vector tuple.
pub const TEST_CASE_COUNT: usize = 128;

type Word = [u8; WORD_SIZE];

/// Big-endian two's-complement `int256` word.
pub fn int256_word(value: &FixedPoint) -> Word {
    let bytes = value.raw().to_signed_bytes_be();
    let fill = if value.is_negative() { 0xff } else { 0x00 };
    let mut word = [fill; WORD_SIZE];
    // FixedPoint is range checked, so at most 32 bytes come out
    let offset = WORD_SIZE.saturating_sub(bytes.len());
    word[offset..].copy_from_slice(&bytes[(bytes.len() - (WORD_SIZE - offset))..]);
    word
}

/// Big-endian `uint256` word.
pub fn uint256_word(value: u64) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[(WORD_SIZE - 8)..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encodes `(int256[6][], int256[128], int256[128], uint256[128])`.
///
/// Head: one offset word for the dynamic segment array, then the three
/// static arrays inline. Tail: the segment count followed by every segment's
/// six words; `int256[6]` is static, so its elements sit inline too.
pub fn encode_test_vector(segments: &[FixedSegment], test_cases: &[TestCase]) -> Result<Vec<u8>, EncodingError> {
    if test_cases.len() != TEST_CASE_COUNT {
        return Err(EncodingError::FixedArrayLength {
            name: "x_test",
            expected: TEST_CASE_COUNT,
            actual: test_cases.len(),
        });
    }

    let head_words = 1 + 3 * TEST_CASE_COUNT;
    let tail_words = 1 + 6 * segments.len();
    let mut buffer = Vec::with_capacity((head_words + tail_words) * WORD_SIZE);

    buffer.extend_from_slice(&uint256_word((head_words * WORD_SIZE) as u64));
    for case in test_cases {
        buffer.extend_from_slice(&int256_word(case.x()));
    }
    for case in test_cases {
        buffer.extend_from_slice(&int256_word(case.y()));
    }
    for case in test_cases {
        buffer.extend_from_slice(&uint256_word(case.index() as u64));
    }

    buffer.extend_from_slice(&uint256_word(segments.len() as u64));
    for segment in segments {
        for field in segment.fields() {
            buffer.extend_from_slice(&int256_word(field));
        }
    }
    Ok(buffer)
}

/// `0x`-prefixed lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_traits::One;

    use super::*;

    fn fixed(value: i64) -> FixedPoint {
        FixedPoint::from_raw(value.into()).unwrap()
    }

    fn word_hex(word: Word) -> String {
        to_hex(&word)[2..].to_string()
    }

    #[test]
    fn int256_words() {
        assert_eq!(word_hex(int256_word(&fixed(0))), "0".repeat(64));
        assert_eq!(word_hex(int256_word(&fixed(1))), format!("{}01", "0".repeat(62)));
        assert_eq!(word_hex(int256_word(&fixed(-1))), "f".repeat(64));
        assert_eq!(word_hex(int256_word(&fixed(-256))), format!("{}00", "f".repeat(62)));
        assert_eq!(
            word_hex(int256_word(&fixed(1_500_000_000_000_000_000))),
            format!("{}14d1120d7b160000", "0".repeat(48))
        );
    }

    #[test]
    fn int256_extremes() {
        let limit = BigInt::one() << 255usize;
        let min = FixedPoint::from_raw(-limit.clone()).unwrap();
        let max = FixedPoint::from_raw(limit - 1).unwrap();

        assert_eq!(word_hex(int256_word(&min)), format!("80{}", "0".repeat(62)));
        assert_eq!(word_hex(int256_word(&max)), format!("7f{}", "f".repeat(62)));
    }

    #[test]
    fn uint256_words() {
        assert_eq!(word_hex(uint256_word(127)), format!("{}7f", "0".repeat(62)));
    }

    #[test]
    fn layout() {
        let segments = vec![
            FixedSegment::new([fixed(1), fixed(2), fixed(3), fixed(4)], fixed(5), fixed(6)),
            FixedSegment::new([fixed(-1), fixed(-2), fixed(-3), fixed(-4)], fixed(6), fixed(7)),
        ];
        let test_cases: Vec<TestCase> = (0..TEST_CASE_COUNT as i64)
            .map(|i| TestCase::new(fixed(i), fixed(-i), (i % 2) as usize))
            .collect();

        let encoded = encode_test_vector(&segments, &test_cases).unwrap();
        let words: Vec<&[u8]> = encoded.chunks(WORD_SIZE).collect();

        assert_eq!(words.len(), 1 + 3 * 128 + 1 + 12);
        assert_eq!(words[0], &uint256_word(385 * 32)[..]);
        assert_eq!(words[1], &int256_word(&fixed(0))[..]);
        assert_eq!(words[128], &int256_word(&fixed(127))[..]);
        assert_eq!(words[129 + 5], &int256_word(&fixed(-5))[..]);
        assert_eq!(words[257 + 3], &uint256_word(1)[..]);
        assert_eq!(words[385], &uint256_word(2)[..]);
        assert_eq!(words[386], &int256_word(&fixed(1))[..]);
        assert_eq!(words[391], &int256_word(&fixed(6))[..]);
        assert_eq!(words[392], &int256_word(&fixed(-1))[..]);
        assert_eq!(words[397], &int256_word(&fixed(7))[..]);
    }

    #[test]
    fn rejects_wrong_test_case_count() {
        let test_cases = vec![TestCase::new(fixed(0), fixed(0), 0)];
        let result = encode_test_vector(&[], &test_cases);
        assert!(matches!(
            result,
            Err(EncodingError::FixedArrayLength { expected: 128, actual: 1, .. })
        ));
    }

    #[test]
    fn hex() {
        assert_eq!(to_hex(&[0x00, 0xab, 0x10]), "0x00ab10");
        assert_eq!(to_hex(&[]), "0x");
        assert_eq!(to_hex(&[0xff; 3]), "0xffffff");
        assert_eq!(to_hex(&uint256_word(0xdead_beef)), format!("0x{}deadbeef", "0".repeat(56)));
    }
}
