use soroban_sdk::contracttype;

/// A single reading published by a price feed.
///
/// Encoded positionally as
/// `(round_id, answer, started_at, updated_at, answered_in_round)`,
/// so off-chain callers may destructure it without field names.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData(pub u128, pub i128, pub u64, pub u64, pub u128);

impl RoundData {
    pub fn round_id(&self) -> u128 {
        self.0
    }

    /// Price in the feed's native precision, see `decimals`
    pub fn answer(&self) -> i128 {
        self.1
    }

    pub fn started_at(&self) -> u64 {
        self.2
    }

    pub fn updated_at(&self) -> u64 {
        self.3
    }

    pub fn answered_in_round(&self) -> u128 {
        self.4
    }
}
