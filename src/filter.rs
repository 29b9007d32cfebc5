use tracing::debug;

use crate::bits::BitArray;
use crate::error::FilterError;
use crate::hash;
use crate::model::{round_rate, DerivedParams, FilterConfig};

/// Probabilistic set-membership filter.
///
/// A fixed-size bit array plus k hash rounds per item: `add` sets k bits,
/// `check` tests the same k bits. An item that was added always checks true;
/// an item that was never added checks true with probability approaching the
/// derived false-positive rate. There is no removal and no resizing.
pub struct BloomFilter {
    config: FilterConfig,
    params: DerivedParams,
    bits: BitArray,
}

impl BloomFilter {
    /// Build a filter sized for `dictionary_size` items over `array_size`
    /// bits.
    ///
    /// Parameter derivation runs here, before any bit is allocated: a shape
    /// whose hash count lands on 0 or whose false-positive rate rounds to
    /// 1.0 never produces a usable filter.
    pub fn new(dictionary_size: usize, array_size: usize) -> Result<Self, FilterError> {
        let config = FilterConfig {
            dictionary_size,
            array_size,
        };
        let params = DerivedParams::derive(&config)?;

        debug!(
            dictionary_size,
            array_size,
            hash_count = params.hash_count,
            false_positive_rate = params.false_positive_rate,
            "derived filter parameters"
        );

        Ok(Self {
            config,
            params,
            bits: BitArray::new(array_size),
        })
    }

    /// Record `item` in the filter.
    ///
    /// Sets the k probe bits for the item. The index check on each set is
    /// defensive; with correct modulo arithmetic in the generator this never
    /// fails on a constructed filter.
    pub fn add(&mut self, item: &str) -> Result<(), FilterError> {
        for index in hash::indices(item, self.params.hash_count, self.config.array_size) {
            self.bits.set(index)?;
        }
        Ok(())
    }

    /// Whether `item` was possibly added.
    ///
    /// False means definitely never added. True means added, or a false
    /// positive at roughly the derived rate.
    pub fn check(&self, item: &str) -> Result<bool, FilterError> {
        for index in hash::indices(item, self.params.hash_count, self.config.array_size) {
            if !self.bits.get(index)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Index-derivation rounds per item (k).
    pub fn hash_count(&self) -> u32 {
        self.params.hash_count
    }

    /// Expected false-positive rate for the configured shape, rounded to 3
    /// decimals. Reflects the construction-time (n, m) only, never the
    /// number of items actually added.
    pub fn false_positive_rate(&self) -> f64 {
        round_rate(self.params.false_positive_rate)
    }

    /// Raw bit store. Diagnostic accessor.
    pub fn bit_array(&self) -> &BitArray {
        &self.bits
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}
