//! HTTP handlers for the library web front-end

pub mod auth;
pub mod catalog;
pub mod circulation;
pub mod health;
pub mod librarians;
pub mod readers;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use std::{
    convert::Infallible,
    ops::{Deref, DerefMut},
};
use tower_http::trace::TraceLayer;

use crate::{
    repository::{Disconnected, LibraryStore},
    AppState,
};

/// The request's own database session.
///
/// Opened before the handler runs and dropped with the handler's future, so the
/// connection is released on every exit path. If no connection can be opened
/// the failure is logged and the handler gets a session whose every query fails.
pub struct Session(Box<dyn LibraryStore>);

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match state.database.connect().await {
            Ok(store) => Ok(Session(store)),
            Err(e) => {
                tracing::error!("Problem connecting to database: {}", e);
                Ok(Session(Box::new(Disconnected::new(e.to_string()))))
            }
        }
    }
}

impl Deref for Session {
    type Target = dyn LibraryStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/", get(catalog::index))
        .route("/another", get(catalog::another))
        .route("/books", get(catalog::books))
        .route("/suppliers", get(catalog::suppliers))
        .route("/searchbysupplier", post(catalog::search_by_supplier))
        .route("/searchallbooks", post(catalog::search_all_books))
        .route("/searchallpapers", post(catalog::search_all_papers))
        // Accounts
        .route("/editlibrarians", post(librarians::edit_librarian))
        .route("/checkmyinfo", post(readers::check_my_info))
        // Circulation
        .route("/borrowbooks", post(circulation::borrow_books))
        .route("/returnreadings", post(circulation::return_readings))
        .route("/login", get(auth::login))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
