/// Turn bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Sequential counter incremented once per successfully performed action.
    ///
    /// Rejected (`Impossible`) actions never advance it, which lets schedulers
    /// tell a consumed turn from a free one.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
