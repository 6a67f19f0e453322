//! # Storage Traits
//!
//! Defines the storage abstraction used by the domain layer, so the goal
//! store can be backed by different implementations without the services
//! changing. The only implementation today is the in-memory repository;
//! everything is synchronous.

use anyhow::Result;

use crate::domain::models::goal::DomainGoal;

/// Trait defining the interface for goal storage operations
pub trait GoalStorage: Send + Sync {
    /// Store a new goal, appending it to the collection
    ///
    /// Fails if a goal with the same id is already stored.
    fn store_goal(&self, goal: &DomainGoal) -> Result<()>;

    /// Retrieve a specific goal by ID
    fn get_goal(&self, goal_id: &str) -> Result<Option<DomainGoal>>;

    /// List all goals in insertion order
    fn list_goals(&self) -> Result<Vec<DomainGoal>>;

    /// Replace a stored goal with an updated version, keeping its position
    fn update_goal(&self, goal: &DomainGoal) -> Result<()>;

    /// Delete a goal by ID
    /// Returns true if the goal was found and deleted, false otherwise
    fn delete_goal(&self, goal_id: &str) -> Result<bool>;
}
