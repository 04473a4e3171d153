//! Configuration options for the TableFilter index.

use crate::block::FILTER_BASE_LG;
use crate::error::{Error, Result};

/// Configuration options for building filter regions.
///
/// Readers do not consult these options: the granularity used to build a
/// region is persisted in its trailer, so a reader always honors the value
/// recorded on disk.
#[derive(Debug, Clone)]
pub struct Options {
    /// log2 of the byte span covered by one filter.
    /// Default: 11 (one filter per 2KB of data-block offsets)
    pub granularity_shift: u8,

    /// Number of bits the Bloom policy allocates per key.
    /// Default: 10
    pub bits_per_key: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            granularity_shift: FILTER_BASE_LG,
            bits_per_key: 10,
        }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the granularity shift (log2 of the bucket byte span).
    pub fn granularity_shift(mut self, shift: u8) -> Self {
        self.granularity_shift = shift;
        self
    }

    /// Sets the number of Bloom filter bits per key.
    pub fn bits_per_key(mut self, bits: usize) -> Self {
        self.bits_per_key = bits;
        self
    }

    /// Validates the options and returns an error if any are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.granularity_shift == 0 || self.granularity_shift > 30 {
            return Err(Error::invalid_argument(
                "granularity_shift must be between 1 and 30",
            ));
        }
        if self.bits_per_key == 0 {
            return Err(Error::invalid_argument("bits_per_key must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.granularity_shift, FILTER_BASE_LG);
        assert_eq!(opts.bits_per_key, 10);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_options_builder() {
        let opts = Options::new().granularity_shift(8).bits_per_key(16);

        assert_eq!(opts.granularity_shift, 8);
        assert_eq!(opts.bits_per_key, 16);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_options_validation() {
        let opts = Options::new().granularity_shift(0);
        assert!(opts.validate().is_err());

        let opts = Options::new().granularity_shift(31);
        assert!(opts.validate().is_err());

        let opts = Options::new().bits_per_key(0);
        assert!(opts.validate().is_err());
    }
}
