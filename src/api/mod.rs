//! HTTP API layer.
//!
//! Routes are nested under `/api/`. The dashboard and master-data routes
//! sit behind the bearer-token middleware when the deployment enables
//! `require_auth`; login and health are always open.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod types;

pub use router::app_router;
pub use types::ApiContext;
