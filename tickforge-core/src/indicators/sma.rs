//! Simple Moving Average (SMA).
//!
//! Rolling mean over a sliding window, O(n) via a running sum.
//! First defined value at index `window - 1`.

/// Compute the SMA of `input` over `window` samples.
pub fn sma(input: &[f64], window: usize) -> Vec<f64> {
    let n = input.len();
    let mut result = vec![f64::NAN; n];

    if window == 0 || n < window {
        return result;
    }

    let mut sum: f64 = input[..window].iter().sum();
    result[window - 1] = sum / window as f64;

    for i in window..n {
        sum += input[i] - input[i - window];
        result[i] = sum / window as f64;
    }

    result
}
