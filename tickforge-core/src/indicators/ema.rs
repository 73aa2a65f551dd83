//! Exponential Moving Average (EMA).
//!
//! Recursive weighted average with smoothing `alpha = 2 / (window + 1)`.
//! Seeded from the first sample: `ema[0] = input[0]`, so the series is
//! defined everywhere (no leading NaN stretch).

/// Compute the EMA of `input` over `window` samples.
pub fn ema(input: &[f64], window: usize) -> Vec<f64> {
    let n = input.len();
    if window == 0 {
        return vec![f64::NAN; n];
    }

    let mut result = Vec::with_capacity(n);
    if n == 0 {
        return result;
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let beta = 1.0 - alpha;

    result.push(input[0]);
    for i in 1..n {
        let prev = result[i - 1];
        result.push(input[i] * alpha + prev * beta);
    }

    result
}
