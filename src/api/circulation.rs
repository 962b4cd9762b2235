//! Borrow and return endpoints

use axum::{response::Redirect, Form};
use chrono::Local;
use serde::Deserialize;

use super::Session;
use crate::{error::AppResult, models::CirculationRequest, services::CirculationService};

/// Borrow form: `name8` librarian uni, `name9` password, `name10` reader, `name11` reading
#[derive(Debug, Deserialize)]
pub struct BorrowForm {
    #[serde(rename = "name8")]
    pub librarian_uni: String,
    #[serde(rename = "name9")]
    pub librarian_password: String,
    #[serde(rename = "name10")]
    pub reader_uni: String,
    #[serde(rename = "name11")]
    pub reading_id: String,
}

/// Return form: `name12` librarian uni, `name13` password, `name14` reader, `name15` reading
#[derive(Debug, Deserialize)]
pub struct ReturnForm {
    #[serde(rename = "name12")]
    pub librarian_uni: String,
    #[serde(rename = "name13")]
    pub librarian_password: String,
    #[serde(rename = "name14")]
    pub reader_uni: String,
    #[serde(rename = "name15")]
    pub reading_id: String,
}

impl From<BorrowForm> for CirculationRequest {
    fn from(form: BorrowForm) -> Self {
        Self {
            librarian_uni: form.librarian_uni,
            librarian_password: form.librarian_password,
            reader_uni: form.reader_uni,
            reading_id: form.reading_id,
        }
    }
}

impl From<ReturnForm> for CirculationRequest {
    fn from(form: ReturnForm) -> Self {
        Self {
            librarian_uni: form.librarian_uni,
            librarian_password: form.librarian_password,
            reader_uni: form.reader_uni,
            reading_id: form.reading_id,
        }
    }
}

/// Lend a reading, dated today
pub async fn borrow_books(mut session: Session, Form(form): Form<BorrowForm>) -> AppResult<Redirect> {
    let request = CirculationRequest::from(form);
    let today = Local::now().date_naive();

    CirculationService::new(&mut *session).borrow(&request, today).await?;

    Ok(Redirect::to("/"))
}

/// Take back a reading from the reader holding it
pub async fn return_readings(mut session: Session, Form(form): Form<ReturnForm>) -> AppResult<Redirect> {
    let request = CirculationRequest::from(form);

    CirculationService::new(&mut *session).give_back(&request).await?;

    Ok(Redirect::to("/"))
}
