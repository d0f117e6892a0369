//! Combat resolution system.
//!
//! Pure attack-resolution functions: dice in, outcome out, no state touched.
//! `MeleeAction` narrates the result and routes damage through the
//! death-aware path in `crate::death`.
mod attack;

pub use attack::{AttackResult, resolve_melee};
