//! Reader self-service endpoint

use axum::{response::Html, Form};
use serde::Deserialize;

use super::Session;
use crate::{error::AppResult, models::ReaderLogin, services::AccountsService, views::pages};

/// `name16` uni, `name17` password
#[derive(Debug, Deserialize)]
pub struct CheckMyInfoForm {
    #[serde(rename = "name16")]
    pub uni: String,
    #[serde(rename = "name17")]
    pub password: String,
}

/// Show a reader their profile and what they have borrowed
pub async fn check_my_info(
    mut session: Session,
    Form(form): Form<CheckMyInfoForm>,
) -> AppResult<Html<String>> {
    let login = ReaderLogin { uni: form.uni, password: form.password };

    let info = AccountsService::new(&mut *session).reader_info(&login).await?;

    Ok(Html(pages::my_info(&info)))
}
