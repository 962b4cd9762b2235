//! Login endpoint

use crate::error::{AppError, AppResult};

/// There is no login; access is always denied
pub async fn login() -> AppResult<()> {
    Err(AppError::Unauthorized)
}
