//! Project entity representing a tracked project.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A project aggregating one or more source repositories.
///
/// Projects are identified by a unique `name`; `full_name` and `description`
/// carry the upstream metadata reported by the collector.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating or updating a project.
///
/// `created_at` / `updated_at` are the upstream timestamps reported by the
/// collector; when absent the database clock is used.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_project_fields() {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: "billing".to_string(),
            full_name: Some("acme/billing".to_string()),
            description: None,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(project.name, "billing");
        assert_eq!(project.full_name.as_deref(), Some("acme/billing"));
        assert!(project.description.is_none());
    }

    #[test]
    fn test_new_project_without_upstream_timestamps() {
        let new_project = NewProject {
            name: "platform".to_string(),
            full_name: None,
            description: Some("shared platform services".to_string()),
            created_at: None,
            updated_at: None,
        };

        assert_eq!(new_project.name, "platform");
        assert!(new_project.created_at.is_none());
        assert!(new_project.updated_at.is_none());
    }
}
