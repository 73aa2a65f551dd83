//! Relative Strength Index (RSI), Wilder's method.
//!
//! Seed average gain/loss from the first `window` deltas, then smooth with
//! `alpha = 1 / window`. First defined value at index `window`.
//! Edge case: `avg_loss == 0` → RSI = 100.

/// Compute the RSI of `input` over `window` samples.
pub fn rsi(input: &[f64], window: usize) -> Vec<f64> {
    let n = input.len();
    let mut result = vec![f64::NAN; n];

    if window == 0 || n <= window {
        return result;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=window {
        let diff = input[i] - input[i - 1];
        if diff >= 0.0 {
            avg_gain += diff;
        } else {
            avg_loss -= diff;
        }
    }
    avg_gain /= window as f64;
    avg_loss /= window as f64;

    result[window] = rsi_value(avg_gain, avg_loss);

    let alpha = 1.0 / window as f64;
    for i in (window + 1)..n {
        let diff = input[i] - input[i - 1];
        let gain = diff.max(0.0);
        let loss = (-diff).max(0.0);
        avg_gain = gain * alpha + avg_gain * (1.0 - alpha);
        avg_loss = loss * alpha + avg_loss * (1.0 - alpha);
        result[i] = rsi_value(avg_gain, avg_loss);
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_undefined_before_window() {
        let input = [44.0, 44.34, 44.09, 43.61, 44.33, 44.83];
        let result = rsi(&input, 3);
        for (i, v) in result.iter().enumerate().take(3) {
            assert!(v.is_nan(), "expected NaN at index {i}");
        }
        assert!(!result[3].is_nan());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let input = [100.0, 101.0, 102.0, 103.0, 104.0, 105.0];
        let result = rsi(&input, 3);
        assert_eq!(result[3], 100.0);
        assert_eq!(result[5], 100.0);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let input = [105.0, 104.0, 103.0, 102.0, 101.0, 100.0];
        let result = rsi(&input, 3);
        assert!(result[3].abs() < 1e-12);
    }

    #[test]
    fn rsi_bounded_0_100() {
        let input = [100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0, 85.0];
        let result = rsi(&input, 3);
        for (i, &v) in result.iter().enumerate() {
            if !v.is_nan() {
                assert!((0.0..=100.0).contains(&v), "RSI out of bounds at {i}: {v}");
            }
        }
    }

    #[test]
    fn rsi_input_equal_to_window_all_nan() {
        // Needs window + 1 samples for the first value.
        let result = rsi(&[1.0, 2.0, 3.0], 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_zero_window_all_nan() {
        let result = rsi(&[1.0, 2.0, 3.0], 0);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
