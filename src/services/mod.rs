//! Business logic services
//!
//! Services borrow the request's session for their lifetime; nothing outlives
//! the request.

pub mod accounts;
pub mod catalog;
pub mod circulation;

pub use accounts::AccountsService;
pub use catalog::CatalogService;
pub use circulation::CirculationService;
