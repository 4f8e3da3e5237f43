/// Asserts that a numerical value is in the provided interval `[a,b]` and panics
/// with a helpful message if not
///
/// ### Example
/// ```should_panic
/// # use maze_rl::assert_interval;
/// let gamma = 2.0;
/// assert_interval!(gamma, 0.0, 1.0);
/// ```
/// This will panic with the message "Invalid value for \`gamma\`. Must be in the interval \[0, 1\]."
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

/// Index of the largest value, preferring the lowest index on ties
///
/// NaN entries never win. An empty slice yields `0`.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] || values[best].is_nan() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_lowest_index() {
        assert_eq!(argmax(&[0.0, 0.0, 0.0, 0.0]), 0, "All tied");
        assert_eq!(argmax(&[-1.0, 3.0, 3.0, 2.0]), 1, "Tie among maxima");
        assert_eq!(argmax(&[-1.0, -2.0, -0.5, -3.0]), 2, "Negative values");
        assert_eq!(argmax(&[f64::NAN, 1.0]), 1, "NaN loses");
    }

    #[test]
    #[should_panic(expected = "Invalid value for `alpha`")]
    fn assert_interval_panics() {
        let alpha = 1.5;
        assert_interval!(alpha, 0.0, 1.0);
    }
}
