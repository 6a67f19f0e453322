//! Storage layer: the `GoalStorage` abstraction and its in-memory
//! implementation.

pub mod memory;
pub mod traits;

pub use memory::MemoryGoalRepository;
pub use traits::GoalStorage;
