use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `2^len` subsets cannot be enumerated under the configured maximum.
    #[error("cannot enumerate subsets of {len} elements: at most {max} are supported")]
    TooManyElements { len: usize, max: u32 },

    #[error("max_elements={max_elements} does not fit a {bits}-bit mask", bits = crate::Config::MASK_BITS)]
    InvalidConfig { max_elements: u32 },
}
