//! The step-by-step selection flow.
//!
//! The wizard walks a user from classification to results in a fixed order:
//!
//! ```text
//! Classification -> Seniority -> Extras -> Results
//! ```
//!
//! State travels between pages as [`NavigationParams`] query parameters.

mod params;
mod state;

pub use params::{MAX_CHILDREN, NavigationParams};
pub use state::{WizardState, WizardStep};
