//! Domain layer: the goal lifecycle state machine and view filtering.
//!
//! Services here are synchronous and side-effect free apart from the goal
//! repository they own; the REST layer maps public DTOs onto the command
//! structs in [`commands`] and back.

pub mod commands;
pub mod errors;
pub mod goal_service;
pub mod id_provider;
pub mod models;

pub use errors::GoalError;
pub use goal_service::GoalService;
pub use id_provider::{EpochMillisIdProvider, GoalIdProvider, SequentialIdProvider};
