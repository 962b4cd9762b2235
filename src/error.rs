//! Error types for Library Desk

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views::pages;

/// A guard in a request's validation chain failed.
///
/// Each variant has its own page, served with `200 OK` like any other page.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("new password is too short")]
    PasswordTooShort,
    #[error("wrong id or password")]
    WrongPassword,
    #[error("wrong reader password")]
    WrongReaderPassword,
    #[error("no such librarian")]
    NoSuchLibrarian,
    #[error("no such reader")]
    NoSuchReader,
    #[error("no such reading")]
    NoSuchReading,
    #[error("reading has already been borrowed")]
    AlreadyBorrowed,
    #[error("reading is not borrowed by this reader")]
    NotBorrowed,
}

impl Rejection {
    pub fn title(self) -> &'static str {
        match self {
            Rejection::PasswordTooShort => "Password too short",
            Rejection::WrongPassword | Rejection::WrongReaderPassword => "Wrong password",
            Rejection::NoSuchLibrarian => "No such librarian",
            Rejection::NoSuchReader => "No such reader",
            Rejection::NoSuchReading => "No such reading",
            Rejection::AlreadyBorrowed => "Already borrowed",
            Rejection::NotBorrowed => "Not borrowed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rejection::PasswordTooShort => "The new password must be at least 8 characters long.",
            Rejection::WrongPassword => "The id or password you entered is incorrect.",
            Rejection::WrongReaderPassword => "The password does not match this reader.",
            Rejection::NoSuchLibrarian => "There is no librarian with this uni.",
            Rejection::NoSuchReader => "There is no reader with this uni.",
            Rejection::NoSuchReading => "There is no reading with this id.",
            Rejection::AlreadyBorrowed => "This reading has already been borrowed.",
            Rejection::NotBorrowed => "This reading is not currently borrowed by this reader.",
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Rejected(rejection) => {
                tracing::info!("Request rejected: {}", rejection);
                (StatusCode::OK, Html(pages::rejection(rejection))).into_response()
            }
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Html(pages::unauthorized())).into_response()
            }
            AppError::Unavailable(msg) => {
                tracing::error!("Request failed without a database connection: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::server_error())).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::server_error())).into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
