//! Transtar Engine library.
//!
//! Fulfillment webhook for the booking assistant.
//!
//! ## Structure
//!
//! - `use_cases/` - One handler per assistant action, plus the dispatcher
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
