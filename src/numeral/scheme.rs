use crate::foundation::core::{DIGIT_BASE, DigitValue};
use crate::foundation::error::{TallyError, TallyResult};

/// Largest value a single saturated digit can hold.
const SATURATED_MAX: u64 = DIGIT_BASE - 1;

/// Every run uses at least this many digit positions.
const MIN_WIDTH: usize = 4;

/// Digit-encoding policy for one run.
///
/// Both variants satisfy the same contract: [`NumeralScheme::width`] fixes
/// the digit-position count for a whole run, [`NumeralScheme::encode`] maps
/// one frame index to exactly that many digit values, most-significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralScheme {
    /// Standard positional base-10000 notation.
    Uniform,
    /// Clamped notation: only the leading digit is below 9999, every
    /// overflow position holds exactly 9999.
    Saturated,
}

impl NumeralScheme {
    /// Fixed digit-position count needed to represent every index up to
    /// `total_frames`, floored at 4 positions.
    pub fn width(self, total_frames: u64) -> usize {
        let natural = match self {
            Self::Uniform => uniform_digit_count(total_frames),
            Self::Saturated => saturated_expand(total_frames).len(),
        };
        natural.max(MIN_WIDTH)
    }

    /// Encode `n` as exactly `width` digit values, most-significant first.
    ///
    /// Positions left of the natural expansion are zero. `width` must not be
    /// smaller than the natural expansion; widths derived from
    /// [`NumeralScheme::width`] over the run's total frame count always
    /// satisfy this.
    pub fn encode(self, n: u64, width: usize) -> TallyResult<Vec<DigitValue>> {
        let natural = match self {
            Self::Uniform => uniform_expand(n),
            Self::Saturated => saturated_expand(n),
        };
        if natural.len() > width {
            return Err(TallyError::validation(format!(
                "width {width} too small: {n} expands to {} digit(s)",
                natural.len()
            )));
        }

        let mut digits = vec![DigitValue::ZERO; width - natural.len()];
        digits.extend(natural);
        Ok(digits)
    }
}

/// Number of base-10000 digits in `n` (1 for `n == 0`).
pub fn uniform_digit_count(n: u64) -> usize {
    // Exact repeated division: floating-point log_10000 can round down at
    // exact powers of the base.
    let mut count = 1;
    let mut rest = n / DIGIT_BASE;
    while rest > 0 {
        count += 1;
        rest /= DIGIT_BASE;
    }
    count
}

/// Base-10000 expansion of `n`, most-significant first.
fn uniform_expand(n: u64) -> Vec<DigitValue> {
    if n == 0 {
        return vec![DigitValue::ZERO];
    }

    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push(DigitValue((rest % DIGIT_BASE) as u16));
        rest /= DIGIT_BASE;
    }
    digits.reverse();
    digits
}

/// Saturated expansion of `x`, most-significant first.
///
/// The first digit holds the remainder `r` with `x == r + 9999 * k` and
/// `1 <= r <= 9999` for `x > 0`; the `k` positions after it hold exactly
/// 9999 each. `saturated_expand(0) == [0]`.
pub fn saturated_expand(x: u64) -> Vec<DigitValue> {
    if x == 0 {
        return vec![DigitValue::ZERO];
    }

    // Quotient/remainder form of repeated subtraction of 9999. The remainder
    // lands in 1..=9999, matching the recursive unwind which stops as soon as
    // the running value fits in one digit.
    let k = (x - 1) / SATURATED_MAX;
    let r = x - k * SATURATED_MAX;

    let mut digits = Vec::with_capacity(1 + k as usize);
    digits.push(DigitValue(r as u16));
    digits.extend(std::iter::repeat_n(DigitValue::MAX, k as usize));
    digits
}

#[cfg(test)]
#[path = "../../tests/unit/numeral/scheme.rs"]
mod tests;
