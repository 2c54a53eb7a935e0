use crate::foundation::error::{TallyError, TallyResult};

/// Number of distinct digit symbols. Digit values span `0..DIGIT_BASE`.
pub const DIGIT_BASE: u64 = 10_000;

/// 1-based index of one output frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// One positional symbol in `0..=9999`, keyed to exactly one digit asset.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DigitValue(pub u16);

impl DigitValue {
    /// Largest representable digit value.
    pub const MAX_VALUE: u16 = (DIGIT_BASE - 1) as u16;

    /// The zero digit, used for left-padding.
    pub const ZERO: Self = Self(0);

    /// The saturated digit.
    pub const MAX: Self = Self(Self::MAX_VALUE);

    /// Construct a digit value, rejecting anything above [`DigitValue::MAX_VALUE`].
    pub fn new(value: u16) -> TallyResult<Self> {
        if value > Self::MAX_VALUE {
            return Err(TallyError::validation(format!(
                "digit value {value} out of range 0..={}",
                Self::MAX_VALUE
            )));
        }
        Ok(Self(value))
    }

    /// Raw digit value.
    pub fn value(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
