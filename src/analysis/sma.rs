use {crate::domain::KlineError, serde::Serialize};

/// Simple moving average aligned position-for-position with its input.
/// `None` marks positions with fewer than `window` prior closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmaSeries {
    pub window: usize,
    pub values: Vec<Option<f64>>,
}

impl SmaSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of positions holding a value.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Trailing `n` positions (same semantics as slicing the candles).
    pub fn trailing(&self, n: usize) -> SmaSeries {
        SmaSeries {
            window: self.window,
            values: crate::utils::trailing(&self.values, n).to_vec(),
        }
    }
}

/// Arithmetic mean of `closes[i + 1 - window ..= i]` at every `i >= window - 1`.
pub fn sma(closes: &[f64], window: usize) -> Result<SmaSeries, KlineError> {
    if window == 0 {
        return Err(KlineError::InvalidRequest(
            "SMA window must be at least 1".to_string(),
        ));
    }

    // Each window summed independently: no drift from a running sum over 1000 candles
    let values = (0..closes.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let slice = &closes[i + 1 - window..=i];
                Some(slice.iter().sum::<f64>() / window as f64)
            }
        })
        .collect();

    Ok(SmaSeries { window, values })
}
