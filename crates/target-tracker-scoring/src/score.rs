/// Closeness of `observed` to `ideal`, in `[0, 1]`.
///
/// A "pyramid" over the ratio `observed / ideal`: 1 when the ratio is 1,
/// falling linearly to 0 when it reaches 0 or 2. A zero `ideal` scores 0.
#[inline]
pub fn score_from_distance(observed: f64, ideal: f64) -> f64 {
    if ideal == 0.0 {
        return 0.0;
    }
    (1.0 - (1.0 - observed / ideal).abs()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peaks_at_ideal() {
        for ideal in [0.1, 88.0 / 280.0, 1.0, 20.0 / 14.0, 250.0] {
            assert_relative_eq!(score_from_distance(ideal, ideal), 1.0);
        }
    }

    #[test]
    fn reaches_zero_at_zero_and_twice_ideal() {
        for ideal in [0.5, 1.0, 3.0] {
            assert_eq!(score_from_distance(0.0, ideal), 0.0);
            assert_eq!(score_from_distance(2.0 * ideal, ideal), 0.0);
            assert_eq!(score_from_distance(5.0 * ideal, ideal), 0.0);
        }
    }

    #[test]
    fn zero_ideal_scores_zero() {
        for x in [0.0, 1.0, -4.0, 1e9] {
            assert_eq!(score_from_distance(x, 0.0), 0.0);
        }
    }

    #[test]
    fn linear_between_peak_and_edges() {
        assert_relative_eq!(score_from_distance(0.5, 1.0), 0.5);
        assert_relative_eq!(score_from_distance(1.5, 1.0), 0.5);
        assert_relative_eq!(score_from_distance(3.0, 4.0), 0.75);
    }

    #[test]
    fn negative_observed_clamps_to_zero() {
        assert_eq!(score_from_distance(-1.0, 1.0), 0.0);
    }
}
