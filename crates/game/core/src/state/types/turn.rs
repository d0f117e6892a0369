use super::common::EntityId;

/// Turn bookkeeping.
///
/// `current_actor` is the only entity allowed to act; the engine rejects
/// anything else. `nonce` counts successfully executed actions and feeds
/// the per-event RNG seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub nonce: u64,
    pub current_actor: EntityId,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            nonce: 0,
            current_actor: EntityId::PLAYER,
        }
    }
}
