//! Reader model and self-service lookup types

use serde::Serialize;
use sqlx::FromRow;

/// Public profile of a reader; the password column is never selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ReaderProfile {
    pub uni: String,
    pub name: String,
    pub dept: String,
}

/// Credentials a reader submits to look at their own account
#[derive(Debug, Clone)]
pub struct ReaderLogin {
    pub uni: String,
    pub password: String,
}

/// Everything shown on the "my info" page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderInfo {
    pub profile: ReaderProfile,
    /// Ids of the readings this reader currently has out
    pub borrowed: Vec<String>,
}
