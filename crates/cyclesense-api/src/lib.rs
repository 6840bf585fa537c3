//! Cyclesense API: HTTP front end for the advisor.
//!
//! Serves health checks, form-encoded or multipart analysis requests, and a
//! bounded history of recent analyses.
//!
//! # Routes
//!
//! | Method | Path                     | Purpose                          |
//! |--------|--------------------------|----------------------------------|
//! | GET    | `/`                      | Service banner and readiness     |
//! | GET    | `/health`                | Liveness check                   |
//! | POST   | `/api/analyze`           | Analyze one observation          |
//! | GET    | `/api/analysis/history`  | Last ten stored analyses         |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod form;
pub mod history;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use form::{ObservationForm, parse_observation};
pub use history::{AnalysisHistory, AnalysisId, AnalysisRecord, HISTORY_CAPACITY, HISTORY_PAGE_SIZE};
pub use routes::create_router;
pub use server::Server;
pub use state::AppState;
