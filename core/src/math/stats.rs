pub struct StatsHelper;

impl StatsHelper {
    /// Share of `count` in `total`, as a percentage.
    pub fn percent(count: usize, total: usize) -> f32 {
        if total == 0 {
            return 0.0;
        }
        count as f32 / total as f32 * 100.0
    }

    pub fn round_tenth(value: f32) -> f32 {
        (value * 10.0).round() / 10.0
    }

    /// `count >= tenths/10 * total`, compared in integers so 0.6 of 5 is exactly 3.
    pub fn at_least_tenths(count: usize, tenths: usize, total: usize) -> bool {
        count * 10 >= tenths * total
    }

    /// `count < tenths/10 * total`.
    pub fn below_tenths(count: usize, tenths: usize, total: usize) -> bool {
        count * 10 < tenths * total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_empty_total_is_zero() {
        assert_eq!(StatsHelper::percent(3, 0), 0.0);
        assert_eq!(StatsHelper::percent(1, 4), 25.0);
    }

    #[test]
    fn round_tenth_keeps_one_decimal() {
        assert_eq!(StatsHelper::round_tenth(12.345), 12.3);
        assert_eq!(StatsHelper::round_tenth(7.0), 7.0);
    }

    #[test]
    fn ratio_comparisons_are_inclusive_and_strict() {
        assert!(StatsHelper::at_least_tenths(3, 6, 5));
        assert!(!StatsHelper::at_least_tenths(2, 6, 5));
        assert!(!StatsHelper::below_tenths(4, 8, 5));
        assert!(StatsHelper::below_tenths(3, 7, 5));
    }
}
