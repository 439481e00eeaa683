//! Risk policy — position sizing and exposure ceiling.
//!
//! Both functions are pure and total. Sizing degrades to zero on a
//! non-positive price instead of dividing by zero.

/// Fractional units per whole asset unit (satoshi-style 8-decimal precision).
const UNITS: f64 = 1e8;

/// Asset quantity to acquire for a risk-based entry.
///
/// `(cash_balance * risk_pct) / price`, rounded to 8 decimal fractional
/// units. Returns 0 when `price <= 0`.
pub fn position_size(cash_balance: f64, price: f64, risk_pct: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    let amount = (cash_balance * risk_pct) / price;
    (amount * UNITS).round() / UNITS
}

/// Whether a proposed exposure fraction is admissible. Boundary inclusive.
pub fn within_exposure(current_exposure: f64, max_exposure_pct: f64) -> bool {
    current_exposure <= max_exposure_pct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sizes_two_percent_of_balance() {
        // 2% of $10,000 = $200 → 0.004 at $50,000
        assert_approx(position_size(10_000.0, 50_000.0, 0.02), 0.004);
    }

    #[test]
    fn different_risk_fraction() {
        assert_approx(position_size(10_000.0, 50_000.0, 0.05), 0.01);
    }

    #[test]
    fn zero_price_sizes_to_zero() {
        assert_eq!(position_size(10_000.0, 0.0, 0.02), 0.0);
    }

    #[test]
    fn negative_price_sizes_to_zero() {
        assert_eq!(position_size(10_000.0, -1.0, 0.02), 0.0);
    }

    #[test]
    fn zero_balance_sizes_to_zero() {
        assert_eq!(position_size(0.0, 50_000.0, 0.02), 0.0);
    }

    #[test]
    fn rounds_to_eight_decimals() {
        assert_approx(position_size(1.0, 3.0, 1.0), 0.33333333);
        // Smallest representable unit survives rounding
        assert_approx(position_size(123_456_789.0, 1e16, 1.0), 0.00000001);
    }

    #[test]
    fn exposure_within_limit() {
        assert!(within_exposure(0.5, 1.0));
    }

    #[test]
    fn exposure_boundary_is_inclusive() {
        assert!(within_exposure(1.0, 1.0));
    }

    #[test]
    fn exposure_over_limit() {
        assert!(!within_exposure(1.1, 1.0));
        assert!(!within_exposure(0.8, 0.7));
    }
}
