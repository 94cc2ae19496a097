//! HTTP API for the salary engine.
//!
//! Lookup endpoints feeding the wizard's cascading selects, the results and
//! print endpoints driven by navigation parameters, and a JSON calculation
//! endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, FamilyRequest, MainCorpQuery, PractitionerQuery, SubCorpQuery,
};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, MISSING_DATA_MESSAGE, RETRY_MESSAGE,
};
pub use state::AppState;
