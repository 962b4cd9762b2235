//! Librarian account endpoints

use axum::{response::Redirect, Form};
use serde::Deserialize;

use super::Session;
use crate::{error::AppResult, models::PasswordChange, services::AccountsService};

/// `name4` admin login, `name5` admin password, `name6` librarian uni, `name7` new password
#[derive(Debug, Deserialize)]
pub struct EditLibrarianForm {
    #[serde(rename = "name4")]
    pub admin_login: String,
    #[serde(rename = "name5")]
    pub admin_password: String,
    #[serde(rename = "name6")]
    pub librarian_uni: String,
    #[serde(rename = "name7")]
    pub new_password: String,
}

impl From<EditLibrarianForm> for PasswordChange {
    fn from(form: EditLibrarianForm) -> Self {
        Self {
            admin_login: form.admin_login,
            admin_password: form.admin_password,
            librarian_uni: form.librarian_uni,
            new_password: form.new_password,
        }
    }
}

/// Set a librarian's password; only an administrator may do so
pub async fn edit_librarian(
    mut session: Session,
    Form(form): Form<EditLibrarianForm>,
) -> AppResult<Redirect> {
    let change = PasswordChange::from(form);

    AccountsService::new(&mut *session)
        .change_librarian_password(&change)
        .await?;

    Ok(Redirect::to("/"))
}
