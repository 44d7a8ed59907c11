use tracing::debug;

/// Numbers the summer adds up when given none on the command line
pub const DEFAULT_NUMBERS: [i64; 9] = [1, 2, 3, 4, 5, 6, 8, 9, 10];

/// Sum of any number of integers; 0 for none
pub fn sum(nums: &[i64]) -> i64 {
    debug!(count = nums.len(), "summing");
    nums.iter().sum()
}

/// Like [`sum`], but `None` when the total does not fit in an `i64`
pub fn try_sum(nums: &[i64]) -> Option<i64> {
    debug!(count = nums.len(), "summing with overflow check");
    nums.iter().try_fold(0i64, |acc, &n| acc.checked_add(n))
}

/// Variadic form of [`sum`]: `sum!()`, `sum!(5)`, `sum!(1, 2, 3)`
#[macro_export]
macro_rules! sum {
    ($($n:expr),* $(,)?) => {
        $crate::sum::sum(&[$($n as i64),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(sum(&[]), 0);
        assert_eq!(crate::sum!(), 0);
    }

    #[test]
    fn single_value() {
        assert_eq!(crate::sum!(5), 5);
    }

    #[test]
    fn several_values() {
        assert_eq!(crate::sum!(1, 2, 3), 6);
    }

    #[test]
    fn default_numbers_total_48() {
        assert_eq!(sum(&DEFAULT_NUMBERS), 48);
    }

    #[test]
    fn order_does_not_matter() {
        let mut nums = DEFAULT_NUMBERS.to_vec();
        nums.reverse();
        assert_eq!(sum(&nums), sum(&DEFAULT_NUMBERS));

        let (left, right) = DEFAULT_NUMBERS.split_at(4);
        assert_eq!(sum(&[sum(left), sum(right)]), 48);
    }

    #[test]
    fn try_sum_matches_sum_when_in_range() {
        assert_eq!(try_sum(&[]), Some(0));
        assert_eq!(try_sum(&DEFAULT_NUMBERS), Some(48));
    }

    #[test]
    fn try_sum_reports_overflow() {
        assert_eq!(try_sum(&[i64::MAX, 1]), None);
        assert_eq!(try_sum(&[i64::MIN, -1]), None);
        assert_eq!(try_sum(&[i64::MAX, 1, -1]), None);
        assert_eq!(try_sum(&[i64::MAX, -1, 1]), Some(i64::MAX));
    }

    #[test]
    fn negatives_cancel() {
        assert_eq!(crate::sum!(-4, 4, -1), -1);
    }
}
