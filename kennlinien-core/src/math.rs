//! Float-Vergleiche mit Epsilon
//!
//! `f64` hat in `no_std` kein `abs()`, daher eigene Helfer.

use core::cmp::Ordering;

/// Toleranz für Float-Vergleiche
pub const EPSILON: f64 = 1e-6;

/// Betrag ohne `std`
pub fn abs(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}

/// Gleichheit mit Standard-Toleranz [`EPSILON`]
pub fn equals(a: f64, b: f64) -> bool {
    equals_within(a, b, EPSILON)
}

/// Gleichheit mit expliziter Toleranz
pub fn equals_within(a: f64, b: f64, epsilon: f64) -> bool {
    abs(a - b) <= epsilon
}

/// Prüft auf (annähernd) Null
pub fn is_zero(value: f64) -> bool {
    abs(value) < EPSILON
}

/// Drei-Wege-Vergleich mit Toleranz
pub fn compare(a: f64, b: f64) -> Ordering {
    if equals(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(-1.5), 1.5);
        assert_eq!(abs(1.5), 1.5);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn test_equals_within_epsilon() {
        assert!(equals(1.0, 1.0));
        assert!(equals(1.0, 1.0 + 1e-7));
        assert!(!equals(1.0, 1.0 + 1e-5));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(1e-7));
        assert!(!is_zero(1e-5));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(1.0, 2.0), Ordering::Less);
        assert_eq!(compare(2.0, 1.0), Ordering::Greater);
        assert_eq!(compare(1.0, 1.0 + 1e-8), Ordering::Equal);
    }
}
