//! Supplier model

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Supplier {
    pub name: String,
    pub addr: String,
}
