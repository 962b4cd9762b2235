//! Listing and search pages

use axum::{response::Html, Form};
use serde::Deserialize;

use super::Session;
use crate::{error::AppResult, services::CatalogService, views::pages};

/// `name1`: supplier name
#[derive(Debug, Deserialize)]
pub struct SupplierSearchForm {
    #[serde(rename = "name1")]
    pub name: String,
}

/// `name2`: paper title
#[derive(Debug, Deserialize)]
pub struct PaperSearchForm {
    #[serde(rename = "name2")]
    pub title: String,
}

/// `name3`: book name
#[derive(Debug, Deserialize)]
pub struct BookSearchForm {
    #[serde(rename = "name3")]
    pub name: String,
}

/// Home page: names from the `test` table and every form
pub async fn index(mut session: Session) -> AppResult<Html<String>> {
    let names = CatalogService::new(&mut *session).names().await?;
    Ok(Html(pages::index(&names)))
}

pub async fn another() -> Html<String> {
    Html(pages::another())
}

/// All readings, borrowed ones first
pub async fn books(mut session: Session) -> AppResult<Html<String>> {
    let (borrowed, available) = CatalogService::new(&mut *session).books().await?;
    Ok(Html(pages::books(&borrowed, &available)))
}

pub async fn suppliers(mut session: Session) -> AppResult<Html<String>> {
    let suppliers = CatalogService::new(&mut *session).suppliers().await?;
    Ok(Html(pages::suppliers(&suppliers)))
}

pub async fn search_by_supplier(
    mut session: Session,
    Form(form): Form<SupplierSearchForm>,
) -> AppResult<Html<String>> {
    let rows = CatalogService::new(&mut *session)
        .search_by_supplier(&form.name)
        .await?;
    Ok(Html(pages::supplier_search(&rows)))
}

pub async fn search_all_books(
    mut session: Session,
    Form(form): Form<BookSearchForm>,
) -> AppResult<Html<String>> {
    let rows = CatalogService::new(&mut *session).search_books(&form.name).await?;
    Ok(Html(pages::book_search(&rows)))
}

pub async fn search_all_papers(
    mut session: Session,
    Form(form): Form<PaperSearchForm>,
) -> AppResult<Html<String>> {
    let rows = CatalogService::new(&mut *session).search_papers(&form.title).await?;
    Ok(Html(pages::paper_search(&rows)))
}
