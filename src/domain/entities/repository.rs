//! Repository entity representing a source repository within a project.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A source repository belonging to a project.
///
/// Repository names are unique per project, not globally. `active_branches`
/// is the branch count observed by the collector on its last pass.
#[derive(Debug, Clone)]
pub struct Repository {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub active_branches: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating or updating a repository.
#[derive(Debug, Clone)]
pub struct NewRepository {
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub active_branches: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_repository() {
        let project_id = Uuid::new_v4();
        let new_repo = NewRepository {
            project_id,
            name: "billing-api".to_string(),
            description: None,
            active_branches: 3,
        };

        assert_eq!(new_repo.project_id, project_id);
        assert_eq!(new_repo.name, "billing-api");
        assert_eq!(new_repo.active_branches, 3);
    }
}
