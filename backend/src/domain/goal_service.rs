//! Goal service domain logic for the goal tracker.
//!
//! This module contains the core business logic for goal management: the
//! lifecycle state machine and the tab view filter.
//!
//! ## Key Responsibilities
//!
//! - **Goal Creation**: Validating form input and appending pending goals
//! - **Lifecycle Transitions**: `pending → active → completed`, one-way,
//!   no stage skipped
//! - **Completion Details**: Recording end date, budget spent, photo, and
//!   experience exactly when a goal completes
//! - **View Filtering**: Deriving the ordered subset of goals for a tab
//!
//! ## Business Rules
//!
//! - Title and description are required, 1-256 characters
//! - Category must be one of the five closed values
//! - Budget spent must be non-negative; end date and experience required
//! - Deletion is only permitted while a goal is still pending
//! - A failed operation never mutates the store

use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::goal::{
    CompleteGoalCommand, CompleteGoalResult, CreateGoalCommand, CreateGoalResult,
    DeleteGoalCommand, DeleteGoalResult, GoalListQuery, GoalListResult, StartGoalCommand,
    StartGoalResult,
};
use crate::domain::errors::GoalError;
use crate::domain::id_provider::GoalIdProvider;
use crate::domain::models::goal::{
    DomainGoal, DomainGoalCategory, DomainGoalStatus, GoalOutcome, GoalValidationError,
};
use crate::storage::GoalStorage;

/// Service owning the goal collection and its lifecycle rules
#[derive(Clone)]
pub struct GoalService {
    goal_repository: Arc<dyn GoalStorage>,
    id_provider: Arc<dyn GoalIdProvider>,
}

impl GoalService {
    /// Create a new GoalService
    pub fn new(goal_repository: Arc<dyn GoalStorage>, id_provider: Arc<dyn GoalIdProvider>) -> Self {
        Self {
            goal_repository,
            id_provider,
        }
    }

    /// Create a new goal in the pending stage
    pub fn create_goal(&self, command: CreateGoalCommand) -> Result<CreateGoalResult, GoalError> {
        info!("Creating goal: {:?}", command);

        let title = command.title.trim();
        if title.is_empty() {
            return Err(GoalValidationError::EmptyTitle.into());
        }
        if title.len() > 256 {
            return Err(GoalValidationError::TitleTooLong.into());
        }

        let description = command.description.trim();
        if description.is_empty() {
            return Err(GoalValidationError::EmptyDescription.into());
        }
        if description.len() > 256 {
            return Err(GoalValidationError::DescriptionTooLong.into());
        }

        let category = DomainGoalCategory::from_string(&command.category)?;

        let now = Utc::now().to_rfc3339();
        let goal = DomainGoal {
            id: self.id_provider.next_id(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            status: DomainGoalStatus::Pending,
            created_at: now.clone(),
            updated_at: now,
        };

        self.goal_repository.store_goal(&goal)?;

        info!("Successfully created goal: {}", goal.id);

        Ok(CreateGoalResult {
            goal,
            success_message: "Goal created successfully".to_string(),
        })
    }

    /// Start a pending goal, stamping its start date
    pub fn start_goal(&self, command: StartGoalCommand) -> Result<StartGoalResult, GoalError> {
        info!("Starting goal: {:?}", command);

        let mut goal = self.get_goal_or_not_found(&command.goal_id)?;

        if goal.status != DomainGoalStatus::Pending {
            warn!(
                "Rejected start of goal {} in stage {}",
                goal.id,
                goal.status.stage()
            );
            return Err(GoalError::InvalidTransition {
                id: goal.id,
                action: "start",
                expected: "pending",
                actual: goal.status.stage(),
            });
        }

        let now = Utc::now().to_rfc3339();
        goal.status = DomainGoalStatus::Active {
            started_at: now.clone(),
        };
        goal.updated_at = now;

        self.goal_repository.update_goal(&goal)?;

        info!("Successfully started goal: {}", goal.id);

        Ok(StartGoalResult {
            goal,
            success_message: "Goal started successfully".to_string(),
        })
    }

    /// Complete an active goal, recording its outcome
    pub fn complete_goal(
        &self,
        command: CompleteGoalCommand,
    ) -> Result<CompleteGoalResult, GoalError> {
        info!("Completing goal: {:?}", command);

        if command.end_date.trim().is_empty() {
            return Err(GoalValidationError::EmptyEndDate.into());
        }
        if command.experience.trim().is_empty() {
            return Err(GoalValidationError::EmptyExperience.into());
        }
        if command.budget_spent < 0.0 {
            return Err(GoalValidationError::NegativeBudgetSpent.into());
        }

        let mut goal = self.get_goal_or_not_found(&command.goal_id)?;

        let started_at = match &goal.status {
            DomainGoalStatus::Active { started_at } => started_at.clone(),
            other => {
                warn!(
                    "Rejected completion of goal {} in stage {}",
                    goal.id,
                    other.stage()
                );
                return Err(GoalError::InvalidTransition {
                    id: goal.id,
                    action: "complete",
                    expected: "active",
                    actual: other.stage(),
                });
            }
        };

        goal.status = DomainGoalStatus::Completed {
            started_at,
            outcome: GoalOutcome {
                end_date: command.end_date,
                budget_spent: command.budget_spent,
                photo_url: command.photo_url,
                experience: command.experience,
            },
        };
        goal.updated_at = Utc::now().to_rfc3339();

        self.goal_repository.update_goal(&goal)?;

        info!("Successfully completed goal: {}", goal.id);

        Ok(CompleteGoalResult {
            goal,
            success_message: "Goal completed successfully".to_string(),
        })
    }

    /// Delete a goal that has not been started yet
    ///
    /// Deletion of active or completed goals is rejected so the history of
    /// started work stays intact; this mirrors the delete affordance only
    /// being offered on pending goals.
    pub fn delete_goal(&self, command: DeleteGoalCommand) -> Result<DeleteGoalResult, GoalError> {
        info!("Deleting goal: {:?}", command);

        let goal = self.get_goal_or_not_found(&command.goal_id)?;

        if goal.status != DomainGoalStatus::Pending {
            warn!(
                "Rejected deletion of goal {} in stage {}",
                goal.id,
                goal.status.stage()
            );
            return Err(GoalError::InvalidTransition {
                id: goal.id,
                action: "delete",
                expected: "pending",
                actual: goal.status.stage(),
            });
        }

        self.goal_repository.delete_goal(&goal.id)?;

        info!("Successfully deleted goal: {}", goal.id);

        Ok(DeleteGoalResult {
            success_message: "Goal deleted successfully".to_string(),
        })
    }

    /// List the goals visible under a tab, preserving insertion order
    pub fn list_goals(&self, query: GoalListQuery) -> Result<GoalListResult, GoalError> {
        let goals = self
            .goal_repository
            .list_goals()?
            .into_iter()
            .filter(|goal| goal.status.visible_under(query.tab))
            .collect();

        Ok(GoalListResult { goals })
    }

    fn get_goal_or_not_found(&self, goal_id: &str) -> Result<DomainGoal, GoalError> {
        self.goal_repository
            .get_goal(goal_id)?
            .ok_or_else(|| GoalError::NotFound {
                id: goal_id.to_string(),
            })
    }
}
