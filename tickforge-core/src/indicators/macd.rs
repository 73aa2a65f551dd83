//! Moving Average Convergence Divergence (MACD).
//!
//! `macd_line = EMA(fast) - EMA(slow)`, both seeded from `input[0]`, so the
//! line is defined from index 0. The signal line is the EMA of the MACD line
//! (smoothing `2 / (signal + 1)`), seeded from `macd_line[0]`.

/// MACD line and its signal line, each the same length as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Macd {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
}

/// Compute MACD over `fast`/`slow` EMA windows with a `signal`-window EMA.
pub fn macd(input: &[f64], fast: usize, slow: usize, signal: usize) -> Macd {
    let n = input.len();
    if fast == 0 || slow == 0 || signal == 0 {
        return Macd {
            macd_line: vec![f64::NAN; n],
            signal_line: vec![f64::NAN; n],
        };
    }

    let mut macd_line = Vec::with_capacity(n);
    let mut signal_line = Vec::with_capacity(n);
    if n == 0 {
        return Macd {
            macd_line,
            signal_line,
        };
    }

    let alpha_fast = 2.0 / (fast as f64 + 1.0);
    let alpha_slow = 2.0 / (slow as f64 + 1.0);
    let alpha_signal = 2.0 / (signal as f64 + 1.0);

    let mut ema_fast = input[0];
    let mut ema_slow = input[0];
    macd_line.push(ema_fast - ema_slow);

    for &x in &input[1..] {
        ema_fast = x * alpha_fast + ema_fast * (1.0 - alpha_fast);
        ema_slow = x * alpha_slow + ema_slow * (1.0 - alpha_slow);
        macd_line.push(ema_fast - ema_slow);
    }

    signal_line.push(macd_line[0]);
    for i in 1..n {
        let prev = signal_line[i - 1];
        signal_line.push(macd_line[i] * alpha_signal + prev * (1.0 - alpha_signal));
    }

    Macd {
        macd_line,
        signal_line,
    }
}
