//! Reference data loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! reference tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{
    CompensationCodesFile, PositionsFile, PractitionersFile, ReferenceData, SalaryScalesFile,
};

/// Loads and provides access to the salary reference tables.
///
/// The `ConfigLoader` reads YAML files from a directory and exposes the
/// validated [`ReferenceData`] store.
///
/// # Directory Structure
///
/// ```text
/// data/reference/
/// ├── practitioners.yaml       # Classification hierarchy and compensation rates
/// ├── salary_scales.yaml       # Category indices and seniority steps
/// ├── positions.yaml           # Superior positions and their index bonus
/// └── compensation_codes.yaml  # Compensation code definitions
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./data/reference")?;
/// let nurse = loader
///     .reference()
///     .find_classification("شبه الطبيين", "الممرضون", "ممرض حاصل على شهادة الدولة")?;
/// println!("Category: {}", nurse.category);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    reference: ReferenceData,
}

impl ConfigLoader {
    /// Loads the reference tables from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A table contains duplicate keys (`InvalidReferenceData`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading reference data");

        let practitioners = Self::load_yaml::<PractitionersFile>(&path.join("practitioners.yaml"))?;
        let scales = Self::load_yaml::<SalaryScalesFile>(&path.join("salary_scales.yaml"))?;
        let positions = Self::load_yaml::<PositionsFile>(&path.join("positions.yaml"))?;
        let codes =
            Self::load_yaml::<CompensationCodesFile>(&path.join("compensation_codes.yaml"))?;

        let counts = (
            practitioners.practitioners.len(),
            scales.salary_scales.len(),
            positions.positions.len(),
            codes.compensation_codes.len(),
        );

        let reference = ReferenceData::new(
            practitioners.practitioners,
            scales.salary_scales,
            positions.positions,
            codes.compensation_codes,
        )?;

        info!(
            path = %path.display(),
            classifications = counts.0,
            salary_scales = counts.1,
            positions = counts.2,
            compensation_codes = counts.3,
            "Reference data loaded"
        );

        Ok(Self { reference })
    }

    /// Wraps an already-built store.
    pub fn from_reference(reference: ReferenceData) -> Self {
        Self { reference }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded reference tables.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }
}
