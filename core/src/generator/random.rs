use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Deals each coin with a fair toss and redeals until the faces are mixed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCoinGenerator {
    seed: u64,
}

impl RandomCoinGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CoinGenerator for RandomCoinGenerator {
    fn generate(self) -> CoinSet {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let coins = CoinSet::new(core::array::from_fn(|_| {
                if rng.random_bool(0.5) {
                    Coin::Heads
                } else {
                    Coin::Tails
                }
            }));

            if !coins.is_uniform() {
                log::debug!(
                    "Dealt coins {} from seed {} after {} attempt(s)",
                    coins,
                    self.seed,
                    attempts
                );
                return coins;
            }

            log::trace!("Rejected uniform deal {}, redealing", coins);
        }
    }
}
