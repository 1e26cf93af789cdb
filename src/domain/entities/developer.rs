//! Developer entity representing a commit author.

use uuid::Uuid;

/// A commit author, identified by a unique email address.
///
/// Developers are global: the same author may commit to repositories across
/// multiple projects. Activity is always scoped per repository at query time.
#[derive(Debug, Clone)]
pub struct Developer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Input data for upserting a developer by email.
#[derive(Debug, Clone)]
pub struct NewDeveloper {
    pub name: String,
    pub email: String,
}
