mod error;
pub use self::error::{Error, Result};
mod config;
pub use self::config::Config;
mod subset;
pub use self::subset::Subset;
mod masks;
pub use self::masks::Subsets;
mod power_set;
pub use self::power_set::{compute_all_subsets, compute_all_subsets_with, PowerSet};
