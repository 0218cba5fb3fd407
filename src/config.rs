use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Largest input size accepted. Time and memory grow as `n * 2^n`.
    pub max_elements: u32,
}

impl Config {
    /// Width of the mask driving the enumeration.
    pub const MASK_BITS: u32 = u64::BITS;

    pub fn validate(&self) -> Result<()> {
        if self.max_elements >= Self::MASK_BITS {
            return Err(Error::InvalidConfig {
                max_elements: self.max_elements,
            });
        }
        Ok(())
    }

    /// `2^len` if an input of `len` elements is accepted.
    pub(crate) fn total_combinations(&self, len: usize) -> Result<u64> {
        self.validate()?;
        let too_many = || Error::TooManyElements {
            len,
            max: self.max_elements,
        };
        let n = u32::try_from(len).map_err(|_| too_many())?;
        if n > self.max_elements {
            return Err(too_many());
        }
        1u64.checked_shl(n).ok_or_else(too_many)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { max_elements: 20 }
    }
}
