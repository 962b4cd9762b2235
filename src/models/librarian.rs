//! Librarian account changes

use validator::Validate;

/// An administrator setting a new password for a librarian
#[derive(Debug, Clone, Validate)]
pub struct PasswordChange {
    pub admin_login: String,
    pub admin_password: String,
    pub librarian_uni: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}
