//! Execution context handed to every action.
//!
//! Actions never reach through ambient globals for world services; the
//! driver wires the read-only environment, the narration sink, and the
//! floor controller into one context per turn-step.

use crate::env::GameEnv;
use crate::message::MessageSink;

/// World controller reached when an actor takes the stairs.
///
/// `advance_floor` regenerates the dungeon; what that means (new map, entity
/// placement, depth counters) is entirely the implementor's business.
pub trait FloorController {
    fn advance_floor(&mut self);
}

/// Minimal floor controller that only counts descents.
///
/// Useful for tests and tools that do not regenerate maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloorTracker {
    pub floor: u32,
}

impl FloorController for FloorTracker {
    fn advance_floor(&mut self) {
        self.floor += 1;
    }
}

/// Per-turn-step bundle of collaborators.
pub struct ActionContext<'a> {
    pub env: GameEnv<'a>,
    pub log: &'a mut dyn MessageSink,
    pub floors: &'a mut dyn FloorController,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        env: GameEnv<'a>,
        log: &'a mut dyn MessageSink,
        floors: &'a mut dyn FloorController,
    ) -> Self {
        Self { env, log, floors }
    }
}
