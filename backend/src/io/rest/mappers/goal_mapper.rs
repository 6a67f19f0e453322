use crate::domain::models::goal::{DomainGoal, DomainGoalCategory, DomainGoalStatus};
use shared::{Goal, GoalCategory, GoalStatus};

/// Converts between the domain goal model and the flat `shared` DTOs.
///
/// The domain status carries its stage data; the DTO flattens it into
/// optional fields, which is the shape presentation clients consume.
pub struct GoalMapper;

impl GoalMapper {
    /// Convert domain DomainGoalCategory to shared GoalCategory
    pub fn category_to_dto(category: DomainGoalCategory) -> GoalCategory {
        match category {
            DomainGoalCategory::Travel => GoalCategory::Travel,
            DomainGoalCategory::Study => GoalCategory::Study,
            DomainGoalCategory::Finance => GoalCategory::Finance,
            DomainGoalCategory::Health => GoalCategory::Health,
            DomainGoalCategory::Career => GoalCategory::Career,
        }
    }

    /// Convert domain DomainGoal to shared Goal DTO
    pub fn to_dto(domain: DomainGoal) -> Goal {
        let (status, start_date, end_date, budget_spent, photo_url, experience) =
            match domain.status {
                DomainGoalStatus::Pending => (GoalStatus::Pending, None, None, None, None, None),
                DomainGoalStatus::Active { started_at } => {
                    (GoalStatus::Active, Some(started_at), None, None, None, None)
                }
                DomainGoalStatus::Completed { started_at, outcome } => (
                    GoalStatus::Completed,
                    Some(started_at),
                    Some(outcome.end_date),
                    Some(outcome.budget_spent),
                    outcome.photo_url,
                    Some(outcome.experience),
                ),
            };

        Goal {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            category: Self::category_to_dto(domain.category),
            status,
            start_date,
            end_date,
            budget_spent,
            photo_url,
            experience,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }

    /// Convert Vec<DomainGoal> to Vec<Goal>
    pub fn to_dto_list(domain_goals: Vec<DomainGoal>) -> Vec<Goal> {
        domain_goals.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::goal::GoalOutcome;

    fn domain_goal(status: DomainGoalStatus) -> DomainGoal {
        DomainGoal {
            id: "goal::1".to_string(),
            title: "Trip to Japan".to_string(),
            description: "Two weeks in Japan".to_string(),
            category: DomainGoalCategory::Travel,
            status,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_pending_goal_has_no_optional_fields() {
        let dto = GoalMapper::to_dto(domain_goal(DomainGoalStatus::Pending));

        assert_eq!(dto.status, GoalStatus::Pending);
        assert!(dto.start_date.is_none());
        assert!(dto.end_date.is_none());
        assert!(dto.budget_spent.is_none());
        assert!(dto.photo_url.is_none());
        assert!(dto.experience.is_none());
    }

    #[test]
    fn test_active_goal_exposes_start_date() {
        let dto = GoalMapper::to_dto(domain_goal(DomainGoalStatus::Active {
            started_at: "2024-02-01T00:00:00Z".to_string(),
        }));

        assert_eq!(dto.status, GoalStatus::Active);
        assert_eq!(dto.start_date.as_deref(), Some("2024-02-01T00:00:00Z"));
        assert!(dto.end_date.is_none());
    }

    #[test]
    fn test_completed_goal_exposes_outcome() {
        let dto = GoalMapper::to_dto(domain_goal(DomainGoalStatus::Completed {
            started_at: "2024-02-01T00:00:00Z".to_string(),
            outcome: GoalOutcome {
                end_date: "2024-06-01".to_string(),
                budget_spent: 2000.0,
                photo_url: Some("https://x/y.jpg".to_string()),
                experience: "Amazing".to_string(),
            },
        }));

        assert_eq!(dto.status, GoalStatus::Completed);
        assert_eq!(dto.start_date.as_deref(), Some("2024-02-01T00:00:00Z"));
        assert_eq!(dto.end_date.as_deref(), Some("2024-06-01"));
        assert_eq!(dto.budget_spent, Some(2000.0));
        assert_eq!(dto.photo_url.as_deref(), Some("https://x/y.jpg"));
        assert_eq!(dto.experience.as_deref(), Some("Amazing"));
    }
}
