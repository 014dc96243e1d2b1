/// Tip owed on `bill` at `tip_percent`.
///
/// Bills of 1 or less are not considered meaningful yet and carry no tip.
pub fn calculate_tip(bill: f64, tip_percent: u32) -> f64 {
    if bill <= 1.0 {
        0.0
    } else {
        bill * f64::from(tip_percent) / 100.0
    }
}

/// Bill plus tip divided among `split_by` people. `split_by` must be at least 1.
pub fn calculate_per_person(bill: f64, split_by: u32, tip_percent: u32) -> f64 {
    (bill + calculate_tip(bill, tip_percent)) / f64::from(split_by)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_on_regular_bill() {
        assert_eq!(calculate_tip(100.0, 18), 18.0);
        assert_eq!(calculate_tip(100.0, 0), 0.0);
        assert_eq!(calculate_tip(100.0, 100), 100.0);
    }

    // The cutoff is at 1, not 0: a bill of exactly 1 tips nothing.
    #[test]
    fn test_no_tip_at_or_below_one() {
        assert_eq!(calculate_tip(1.0, 50), 0.0);
        assert_eq!(calculate_tip(0.99, 100), 0.0);
        assert_eq!(calculate_tip(0.0, 18), 0.0);
        assert!(calculate_tip(1.01, 100) > 0.0);
    }

    #[test]
    fn test_per_person() {
        assert_eq!(calculate_per_person(100.0, 1, 18), 118.0);
        assert_eq!(calculate_per_person(100.0, 4, 18), 29.5);
        assert_eq!(calculate_per_person(1.0, 1, 18), 1.0);
        assert_eq!(calculate_per_person(0.0, 3, 18), 0.0);
    }
}
