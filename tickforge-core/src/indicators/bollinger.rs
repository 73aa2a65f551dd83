//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! Single pass: a sliding sum and sum-of-squares give mean and population
//! variance in O(1) amortized per step. `sqrt(max(0, variance))` absorbs
//! floating-point noise for near-constant windows.
//! First defined value at index `window - 1`.

/// The three bands, each the same length as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Compute Bollinger Bands over `window` samples with multiplier `k`.
pub fn bollinger_bands(input: &[f64], window: usize, k: f64) -> BollingerBands {
    let n = input.len();
    let mut bands = BollingerBands {
        upper: vec![f64::NAN; n],
        middle: vec![f64::NAN; n],
        lower: vec![f64::NAN; n],
    };

    if window == 0 || n < window {
        return bands;
    }

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for &x in &input[..window] {
        sum += x;
        sum_sq += x * x;
    }

    let w = window as f64;
    let mut write = |bands: &mut BollingerBands, idx: usize, sum: f64, sum_sq: f64| {
        let mean = sum / w;
        let variance = (sum_sq - sum * sum / w) / w;
        let std_dev = variance.max(0.0).sqrt();
        bands.middle[idx] = mean;
        bands.upper[idx] = mean + k * std_dev;
        bands.lower[idx] = mean - k * std_dev;
    };

    write(&mut bands, window - 1, sum, sum_sq);

    for i in window..n {
        let entering = input[i];
        let leaving = input[i - window];
        sum += entering - leaving;
        sum_sq += entering * entering - leaving * leaving;
        write(&mut bands, i, sum, sum_sq);
    }

    bands
}
