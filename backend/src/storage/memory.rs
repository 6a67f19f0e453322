//! # In-Memory Goal Repository
//!
//! Session-lifetime goal storage. Goals live in a `Vec` guarded by an
//! `RwLock`, which preserves insertion order and is the single
//! mutation-serialization point between the synchronous domain layer and
//! the async REST handlers. Nothing is persisted; the collection dies with
//! the process.

use anyhow::{anyhow, bail, Result};
use std::sync::RwLock;

use crate::domain::models::goal::DomainGoal;
use crate::storage::traits::GoalStorage;

/// In-memory, insertion-ordered goal store
#[derive(Debug, Default)]
pub struct MemoryGoalRepository {
    goals: RwLock<Vec<DomainGoal>>,
}

impl MemoryGoalRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl GoalStorage for MemoryGoalRepository {
    fn store_goal(&self, goal: &DomainGoal) -> Result<()> {
        let mut goals = self
            .goals
            .write()
            .map_err(|_| anyhow!("goal store lock poisoned"))?;

        if goals.iter().any(|g| g.id == goal.id) {
            bail!("a goal with id {} is already stored", goal.id);
        }

        goals.push(goal.clone());
        Ok(())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<DomainGoal>> {
        let goals = self
            .goals
            .read()
            .map_err(|_| anyhow!("goal store lock poisoned"))?;

        Ok(goals.iter().find(|g| g.id == goal_id).cloned())
    }

    fn list_goals(&self) -> Result<Vec<DomainGoal>> {
        let goals = self
            .goals
            .read()
            .map_err(|_| anyhow!("goal store lock poisoned"))?;

        Ok(goals.clone())
    }

    fn update_goal(&self, goal: &DomainGoal) -> Result<()> {
        let mut goals = self
            .goals
            .write()
            .map_err(|_| anyhow!("goal store lock poisoned"))?;

        match goals.iter_mut().find(|g| g.id == goal.id) {
            Some(stored) => {
                *stored = goal.clone();
                Ok(())
            }
            None => bail!("cannot update goal {}: not stored", goal.id),
        }
    }

    fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let mut goals = self
            .goals
            .write()
            .map_err(|_| anyhow!("goal store lock poisoned"))?;

        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(goals.len() < before)
    }
}
