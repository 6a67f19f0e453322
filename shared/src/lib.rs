use serde::{Deserialize, Serialize};
use std::fmt;

/// Goal ID in format: "goal::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    /// Short name of the goal (max 256 characters)
    pub title: String,
    /// Longer description of what the goal is about (max 256 characters)
    pub description: String,
    /// Category the goal belongs to
    pub category: GoalCategory,
    /// Current lifecycle stage
    pub status: GoalStatus,
    /// When the goal was started (RFC 3339), present once active
    pub start_date: Option<String>,
    /// When the goal was finished, present once completed
    pub end_date: Option<String>,
    /// Money spent achieving the goal, present once completed
    pub budget_spent: Option<f64>,
    /// Optional photo taken while completing the goal
    pub photo_url: Option<String>,
    /// Write-up of how the goal went, present once completed
    pub experience: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

/// Category a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Travel,
    Study,
    Finance,
    Health,
    Career,
}

impl GoalCategory {
    /// All categories in display order
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::Travel,
        GoalCategory::Study,
        GoalCategory::Finance,
        GoalCategory::Health,
        GoalCategory::Career,
    ];

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Travel => "Travel",
            GoalCategory::Study => "Study",
            GoalCategory::Finance => "Finance",
            GoalCategory::Health => "Health",
            GoalCategory::Career => "Career",
        }
    }
}

/// Lifecycle stage of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Pending,
    Active,
    Completed,
}

/// A named view filter over goal status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Shows pending goals
    Home,
    /// Shows active goals
    Active,
    /// Shows completed goals
    Completed,
}

impl Tab {
    /// Parse a tab name as it appears in a query string
    pub fn parse(s: &str) -> Option<Tab> {
        match s.to_lowercase().as_str() {
            "home" => Some(Tab::Home),
            "active" => Some(Tab::Active),
            "completed" => Some(Tab::Completed),
            _ => None,
        }
    }
}

/// Request for creating a new goal
///
/// The category arrives as raw form input and is validated by the backend,
/// so an unknown value is reported as a field error rather than a parse
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateGoalRequest {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Response after creating a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateGoalResponse {
    pub goal: Goal,
    pub success_message: String,
}

/// Response after starting a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartGoalResponse {
    pub goal: Goal,
    pub success_message: String,
}

/// Request for completing an active goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteGoalRequest {
    pub end_date: String,
    pub budget_spent: f64,
    pub photo_url: Option<String>,
    pub experience: String,
}

/// Response after completing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteGoalResponse {
    pub goal: Goal,
    pub success_message: String,
}

/// Response after deleting a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteGoalResponse {
    pub success_message: String,
}

/// Response containing the goals visible under one tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
}

impl Goal {
    /// Generate a goal ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("goal::{}", epoch_millis)
    }

    /// Parse a goal ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, GoalIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "goal" {
            return Err(GoalIdError::InvalidFormat);
        }

        parts[1].parse::<u64>().map_err(|_| GoalIdError::InvalidTimestamp)
    }

    /// Extract timestamp from goal ID
    pub fn extract_timestamp(&self) -> Result<u64, GoalIdError> {
        Self::parse_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GoalIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for GoalIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalIdError::InvalidFormat => write!(f, "Invalid goal ID format"),
            GoalIdError::InvalidTimestamp => write!(f, "Invalid timestamp in goal ID"),
        }
    }
}

impl std::error::Error for GoalIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_goal_id() {
        let id = Goal::generate_id(1702516122000);
        assert_eq!(id, "goal::1702516122000");
    }

    #[test]
    fn test_parse_goal_id() {
        // Test valid goal ID
        let timestamp = Goal::parse_id("goal::1702516122000").unwrap();
        assert_eq!(timestamp, 1702516122000);

        // Test invalid format
        assert!(Goal::parse_id("invalid::format").is_err());
        assert!(Goal::parse_id("goal").is_err());
        assert!(Goal::parse_id("not_goal::123").is_err());

        // Test invalid timestamp
        assert!(Goal::parse_id("goal::not_a_number").is_err());
    }

    #[test]
    fn test_extract_timestamp() {
        let goal = Goal {
            id: "goal::1702516122000".to_string(),
            title: "Trip to Japan".to_string(),
            description: "Two weeks in Japan".to_string(),
            category: GoalCategory::Travel,
            status: GoalStatus::Pending,
            start_date: None,
            end_date: None,
            budget_spent: None,
            photo_url: None,
            experience: None,
            created_at: "2023-12-14T01:02:02.000Z".to_string(),
            updated_at: "2023-12-14T01:02:02.000Z".to_string(),
        };

        assert_eq!(goal.extract_timestamp().unwrap(), 1702516122000);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&GoalCategory::Travel).unwrap();
        assert_eq!(json, "\"travel\"");

        let parsed: GoalCategory = serde_json::from_str("\"career\"").unwrap();
        assert_eq!(parsed, GoalCategory::Career);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = GoalCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Travel", "Study", "Finance", "Health", "Career"]);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&GoalStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(Tab::parse("home"), Some(Tab::Home));
        assert_eq!(Tab::parse("Active"), Some(Tab::Active));
        assert_eq!(Tab::parse("COMPLETED"), Some(Tab::Completed));
        assert_eq!(Tab::parse("archive"), None);
        assert_eq!(Tab::parse(""), None);
    }
}
