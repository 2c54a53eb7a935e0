use super::*;

fn values(digits: &[DigitValue]) -> Vec<u16> {
    digits.iter().map(|d| d.value()).collect()
}

fn decode_uniform(digits: &[DigitValue]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, d| acc * DIGIT_BASE + u64::from(d.value()))
}

#[test]
fn width_is_at_least_four_for_both_schemes() {
    for total in [0u64, 1, 3, 29, 9_999, 10_000, 123_456] {
        assert!(
            NumeralScheme::Uniform.width(total) >= 4,
            "uniform width({total})"
        );
        assert!(
            NumeralScheme::Saturated.width(total) >= 4,
            "saturated width({total})"
        );
    }
}

#[test]
fn uniform_width_is_exact_at_base_powers() {
    assert_eq!(NumeralScheme::Uniform.width(9_999), 4);
    assert_eq!(NumeralScheme::Uniform.width(10_000), 4);
    // 10000^4 needs a fifth digit; repeated division must not round down
    // the way a floating-point log can.
    assert_eq!(NumeralScheme::Uniform.width(9_999_999_999_999_999), 4);
    assert_eq!(NumeralScheme::Uniform.width(10_000_000_000_000_000), 5);
}

#[test]
fn uniform_digit_count_handles_zero() {
    assert_eq!(uniform_digit_count(0), 1);
    assert_eq!(uniform_digit_count(9_999), 1);
    assert_eq!(uniform_digit_count(10_000), 2);
}

#[test]
fn uniform_boundary_encodings() {
    let s = NumeralScheme::Uniform;
    assert_eq!(values(&s.encode(9_999, 4).unwrap()), [0, 0, 0, 9_999]);
    assert_eq!(values(&s.encode(10_000, 4).unwrap()), [0, 0, 1, 0]);
}

#[test]
fn uniform_round_trips_through_decode() {
    let s = NumeralScheme::Uniform;
    for n in [
        0u64,
        1,
        42,
        9_999,
        10_000,
        10_001,
        99_999_999,
        100_000_000,
        123_456_789_012,
    ] {
        let digits = s.encode(n, 6).unwrap();
        assert_eq!(digits.len(), 6);
        assert_eq!(decode_uniform(&digits), n, "round trip {n}");
    }
}

#[test]
fn saturated_expansion_identities() {
    assert_eq!(values(&saturated_expand(0)), [0]);
    assert_eq!(values(&saturated_expand(1)), [1]);
    assert_eq!(values(&saturated_expand(9_999)), [9_999]);
    assert_eq!(values(&saturated_expand(10_000)), [1, 9_999]);
    assert_eq!(values(&saturated_expand(10_001)), [2, 9_999]);
}

#[test]
fn saturated_expansion_reconstructs_value() {
    for x in [1u64, 5, 9_999, 10_000, 19_998, 19_999, 50_000, 123_456] {
        let digits = saturated_expand(x);
        let (first, rest) = digits.split_first().unwrap();
        assert!((1..=9_999).contains(&first.value()), "leading digit of {x}");
        assert!(rest.iter().all(|d| *d == DigitValue::MAX));
        let reconstructed = u64::from(first.value()) + 9_999 * rest.len() as u64;
        assert_eq!(reconstructed, x);
    }
}

#[test]
fn saturated_width_tracks_expansion_length() {
    assert_eq!(NumeralScheme::Saturated.width(0), 4);
    assert_eq!(NumeralScheme::Saturated.width(9_999), 4);
    assert_eq!(NumeralScheme::Saturated.width(10_001), 4);
    // 40000 == 4 + 4 * 9999 expands to five digits.
    assert_eq!(NumeralScheme::Saturated.width(40_000), 5);
}

#[test]
fn encode_pads_with_leading_zeros() {
    let digits = NumeralScheme::Saturated.encode(10_001, 4).unwrap();
    assert_eq!(values(&digits), [0, 0, 2, 9_999]);

    let digits = NumeralScheme::Uniform.encode(1, 4).unwrap();
    assert_eq!(values(&digits), [0, 0, 0, 1]);
}

#[test]
fn encode_rejects_undersized_width() {
    assert!(NumeralScheme::Uniform.encode(10_000, 1).is_err());
    assert!(NumeralScheme::Saturated.encode(20_000, 2).is_err());
}

#[test]
fn thirty_frame_run_uses_width_four() {
    // fps=30 at 1.0s yields 30 frames.
    let s = NumeralScheme::Uniform;
    let width = s.width(30);
    assert_eq!(width, 4);
    assert_eq!(values(&s.encode(1, width).unwrap()), [0, 0, 0, 1]);
    assert_eq!(values(&s.encode(30, width).unwrap()), [0, 0, 0, 30]);
}
