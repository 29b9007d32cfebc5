use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Shape of the filter, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Expected number of distinct dictionary items (n).
    pub dictionary_size: usize,

    /// Number of bits allocated to the filter (m).
    pub array_size: usize,
}

/// Quantities derived once from the configuration, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParams {
    /// Index-derivation rounds per item (k).
    pub hash_count: u32,

    /// Expected false-positive probability for the configured (n, m).
    /// Stored raw; reporting rounds to 3 decimals.
    pub false_positive_rate: f64,
}

impl DerivedParams {
    /// k = floor((m / n) * ln 2), fp = (1 - e^(-k*n/m))^k.
    ///
    /// Rejects degenerate shapes before the filter exists: an empty
    /// dictionary (division by zero in k), a zero hash count (check would be
    /// vacuously true for every item), and a rate that rounds to 1.0 (no
    /// discriminative power). The last is already implied by k >= 1 with
    /// these formulas but is verified rather than assumed.
    pub fn derive(config: &FilterConfig) -> Result<Self, FilterError> {
        if config.dictionary_size == 0 {
            return Err(FilterError::EmptyDictionary);
        }

        let n = config.dictionary_size as f64;
        let m = config.array_size as f64;

        let hash_count = ((m / n) * LN_2).floor() as u32;
        if hash_count == 0 {
            return Err(FilterError::ZeroHashCount {
                array_size: config.array_size,
                dictionary_size: config.dictionary_size,
            });
        }

        let k = hash_count as f64;
        let false_positive_rate = (1.0 - (-k * n / m).exp()).powi(hash_count as i32);
        if round_rate(false_positive_rate) >= 1.0 {
            return Err(FilterError::SaturatedFilter);
        }

        Ok(Self {
            hash_count,
            false_positive_rate,
        })
    }
}

/// Round a probability to 3 decimal digits for reporting.
pub(crate) fn round_rate(rate: f64) -> f64 {
    (rate * 1000.0).round() / 1000.0
}
