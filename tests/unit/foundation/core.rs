use super::*;

#[test]
fn digit_value_accepts_full_range() {
    assert_eq!(DigitValue::new(0).unwrap(), DigitValue::ZERO);
    assert_eq!(DigitValue::new(9_999).unwrap(), DigitValue::MAX);
}

#[test]
fn digit_value_rejects_out_of_range() {
    assert!(DigitValue::new(10_000).is_err());
    assert!(DigitValue::new(u16::MAX).is_err());
}

#[test]
fn frame_index_orders_numerically() {
    assert!(FrameIndex(2) < FrameIndex(10));
    assert_eq!(FrameIndex(7), FrameIndex(7));
}
