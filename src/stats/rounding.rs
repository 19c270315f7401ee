//! Numeric helpers shared by the aggregators.

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Round `value` to `decimals` places using its exact decimal expansion.
///
/// Ties go to the larger magnitude. Because the decision is made on the
/// exact binary value, `100.35` (stored just below the half) rounds to
/// `100.3` while `0.125` (an exact half) rounds to `0.13`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let places = (decimals as usize).min(EXACT_DIGITS);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();
    if frac_part.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - places;
    let mut rounded = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        rounded.push('-');
    }
    rounded.extend(digits[..split].iter().map(|&d| d as char));
    if places > 0 {
        rounded.push('.');
        rounded.extend(digits[split..].iter().map(|&d| d as char));
    }

    rounded.parse().unwrap_or(value)
}

/// Add one to a big-endian run of ASCII digits.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// `numerator / denominator`, or `0.0` when the denominator is not positive.
///
/// A zero rate for a team-season with no exposure is a real value, not a
/// missing one.
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.76666, 3), 0.767);
        assert_eq!(round_to(112.349, 1), 112.3);
        assert_eq!(round_to(4.0, 2), 4.0);
        assert_eq!(round_to(-1.235, 1), -1.2);
        assert_eq!(round_to(7.5, 0), 8.0);
    }

    #[test]
    fn test_round_to_uses_exact_binary_value() {
        // Stored just below the decimal half.
        assert_eq!(round_to(100.35, 1), 100.3);
        assert_eq!(round_to(4.35, 1), 4.3);
        assert_eq!(round_to(1.005, 2), 1.0);
        // Exact halves go to the larger magnitude.
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_to_carries_into_integer_part() {
        assert_eq!(round_to(9.996, 2), 10.0);
        assert_eq!(round_to(99.96, 1), 100.0);
        assert_eq!(round_to(-0.004, 2), 0.0);
    }

    #[test]
    fn test_round_to_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_ratio_or_zero() {
        assert_eq!(ratio_or_zero(9.0, 3.0), 3.0);
        assert_eq!(ratio_or_zero(9.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(0.0, 0.0), 0.0);
        assert!(!ratio_or_zero(1.0, 0.0).is_nan());
    }
}
