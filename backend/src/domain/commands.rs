//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod goal {
    use crate::domain::models::goal::DomainGoal;
    use shared::Tab;

    /// Input for creating a new goal.
    ///
    /// The category is raw form input; the service validates it against the
    /// closed category set.
    #[derive(Debug, Clone)]
    pub struct CreateGoalCommand {
        pub title: String,
        pub description: String,
        pub category: String,
    }

    /// Input for starting a pending goal.
    #[derive(Debug, Clone)]
    pub struct StartGoalCommand {
        pub goal_id: String,
    }

    /// Input for completing an active goal.
    #[derive(Debug, Clone)]
    pub struct CompleteGoalCommand {
        pub goal_id: String,
        pub end_date: String,
        pub budget_spent: f64,
        pub photo_url: Option<String>,
        pub experience: String,
    }

    /// Input for deleting a pending goal.
    #[derive(Debug, Clone)]
    pub struct DeleteGoalCommand {
        pub goal_id: String,
    }

    /// Query parameters for listing the goals visible under a tab.
    #[derive(Debug, Clone)]
    pub struct GoalListQuery {
        pub tab: Tab,
    }

    /// Result of creating a goal.
    #[derive(Debug, Clone)]
    pub struct CreateGoalResult {
        pub goal: DomainGoal,
        pub success_message: String,
    }

    /// Result of starting a goal.
    #[derive(Debug, Clone)]
    pub struct StartGoalResult {
        pub goal: DomainGoal,
        pub success_message: String,
    }

    /// Result of completing a goal.
    #[derive(Debug, Clone)]
    pub struct CompleteGoalResult {
        pub goal: DomainGoal,
        pub success_message: String,
    }

    /// Result of deleting a goal.
    #[derive(Debug, Clone)]
    pub struct DeleteGoalResult {
        pub success_message: String,
    }

    /// Result of listing goals.
    #[derive(Debug, Clone)]
    pub struct GoalListResult {
        pub goals: Vec<DomainGoal>,
    }
}
