use crate::*;
pub use random::*;

mod random;

pub trait CoinGenerator {
    fn generate(self) -> CoinSet;
}

/// A fixed board deals itself, useful for practice setups.
impl CoinGenerator for CoinSet {
    fn generate(self) -> CoinSet {
        self
    }
}
