use shared::Tab;

/// Category a goal belongs to, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainGoalCategory {
    Travel,
    Study,
    Finance,
    Health,
    Career,
}

impl DomainGoalCategory {
    /// Convert to the lowercase form used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainGoalCategory::Travel => "travel",
            DomainGoalCategory::Study => "study",
            DomainGoalCategory::Finance => "finance",
            DomainGoalCategory::Health => "health",
            DomainGoalCategory::Career => "career",
        }
    }

    /// Parse raw form input; anything outside the closed set is rejected here,
    /// never at rendering time
    pub fn from_string(s: &str) -> Result<Self, GoalValidationError> {
        match s.to_lowercase().as_str() {
            "travel" => Ok(DomainGoalCategory::Travel),
            "study" => Ok(DomainGoalCategory::Study),
            "finance" => Ok(DomainGoalCategory::Finance),
            "health" => Ok(DomainGoalCategory::Health),
            "career" => Ok(DomainGoalCategory::Career),
            other => Err(GoalValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// Details recorded when a goal is completed
#[derive(Debug, Clone, PartialEq)]
pub struct GoalOutcome {
    /// When the goal was finished
    pub end_date: String,
    /// Money spent achieving the goal, never negative
    pub budget_spent: f64,
    /// Optional photo taken while completing the goal
    pub photo_url: Option<String>,
    /// Write-up of how the goal went
    pub experience: String,
}

/// Lifecycle stage of a goal.
///
/// Each stage carries the data that exists only in that stage, so a pending
/// goal cannot have a start date and only a completed goal can have an
/// outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainGoalStatus {
    Pending,
    Active {
        /// RFC 3339 timestamp set when the goal was started
        started_at: String,
    },
    Completed {
        /// RFC 3339 timestamp carried over from the active stage
        started_at: String,
        outcome: GoalOutcome,
    },
}

impl DomainGoalStatus {
    /// Name of the lifecycle stage, for logs and error messages
    pub fn stage(&self) -> &'static str {
        match self {
            DomainGoalStatus::Pending => "pending",
            DomainGoalStatus::Active { .. } => "active",
            DomainGoalStatus::Completed { .. } => "completed",
        }
    }

    /// View-filter predicate: whether a goal in this stage shows under `tab`.
    ///
    /// The three stages partition the collection, so every goal is visible
    /// under exactly one tab.
    pub fn visible_under(&self, tab: Tab) -> bool {
        matches!(
            (tab, self),
            (Tab::Home, DomainGoalStatus::Pending)
                | (Tab::Active, DomainGoalStatus::Active { .. })
                | (Tab::Completed, DomainGoalStatus::Completed { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainGoal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DomainGoalCategory,
    pub status: DomainGoalStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal title cannot be empty")]
    EmptyTitle,
    #[error("Goal title cannot exceed 256 characters")]
    TitleTooLong,
    #[error("Goal description cannot be empty")]
    EmptyDescription,
    #[error("Goal description cannot exceed 256 characters")]
    DescriptionTooLong,
    #[error("Unknown goal category: {0}")]
    UnknownCategory(String),
    #[error("End date cannot be empty")]
    EmptyEndDate,
    #[error("Experience cannot be empty")]
    EmptyExperience,
    #[error("Budget spent cannot be negative")]
    NegativeBudgetSpent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_string() {
        assert_eq!(
            DomainGoalCategory::from_string("travel").unwrap(),
            DomainGoalCategory::Travel
        );
        assert_eq!(
            DomainGoalCategory::from_string("Career").unwrap(),
            DomainGoalCategory::Career
        );

        let err = DomainGoalCategory::from_string("gardening").unwrap_err();
        assert_eq!(err, GoalValidationError::UnknownCategory("gardening".to_string()));
    }

    #[test]
    fn test_category_round_trip() {
        for s in ["travel", "study", "finance", "health", "career"] {
            let category = DomainGoalCategory::from_string(s).unwrap();
            assert_eq!(category.as_str(), s);
        }
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(DomainGoalStatus::Pending.stage(), "pending");
        assert_eq!(
            DomainGoalStatus::Active { started_at: "2024-01-01T00:00:00Z".to_string() }.stage(),
            "active"
        );
    }

    #[test]
    fn test_each_stage_visible_under_exactly_one_tab() {
        let statuses = [
            DomainGoalStatus::Pending,
            DomainGoalStatus::Active { started_at: "2024-01-01T00:00:00Z".to_string() },
            DomainGoalStatus::Completed {
                started_at: "2024-01-01T00:00:00Z".to_string(),
                outcome: GoalOutcome {
                    end_date: "2024-06-01".to_string(),
                    budget_spent: 0.0,
                    photo_url: None,
                    experience: "Done".to_string(),
                },
            },
        ];

        for status in &statuses {
            let visible: Vec<Tab> = [Tab::Home, Tab::Active, Tab::Completed]
                .into_iter()
                .filter(|tab| status.visible_under(*tab))
                .collect();
            assert_eq!(visible.len(), 1, "stage {} should map to one tab", status.stage());
        }
    }
}
