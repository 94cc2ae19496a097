//! Reference data loading and runtime settings for the salary engine.
//!
//! This module loads the four reference tables (practitioner
//! classifications, salary scales, superior positions, compensation codes)
//! from YAML files and exposes the lookups the evaluator and the wizard
//! depend on. It also reads the service's runtime settings.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./data/reference").unwrap();
//! println!("Main corps: {:?}", loader.reference().main_corps());
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{AppSettings, DEFAULT_DATA_DIR, ServerSettings, SettingsError};
pub use types::{
    CompensationCodesFile, LookupBundle, PositionsFile, PractitionersFile, ReferenceData,
    SalaryScalesFile,
};
