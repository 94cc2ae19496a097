//! Reference data types.
//!
//! This module contains the file structures deserialized from the YAML
//! reference data directory and the [`ReferenceData`] store that answers
//! every lookup the salary engine needs.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompensationCode, PositionSelection, PractitionerClassification, SalaryScale,
    SuperiorPosition,
};

/// `practitioners.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PractitionersFile {
    /// Classification rows.
    pub practitioners: Vec<PractitionerClassification>,
}

/// `salary_scales.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryScalesFile {
    /// Salary scale rows.
    pub salary_scales: Vec<SalaryScale>,
}

/// `positions.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionsFile {
    /// Superior position rows.
    #[serde(default)]
    pub positions: Vec<SuperiorPosition>,
}

/// `compensation_codes.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CompensationCodesFile {
    /// Compensation code rows.
    pub compensation_codes: Vec<CompensationCode>,
}

/// Everything looked up for one classification triple.
///
/// This is the bundle a client needs to run the evaluator for a selection.
#[derive(Debug, Clone, Serialize)]
pub struct LookupBundle<'a> {
    /// The matched classification.
    pub practitioner: &'a PractitionerClassification,
    /// Its salary scale row, if present.
    pub salary_scale: Option<&'a SalaryScale>,
    /// The selected superior position, if any.
    pub position: Option<&'a SuperiorPosition>,
    /// All compensation codes.
    pub compensation_codes: &'a [CompensationCode],
}

/// The four reference tables, validated and indexed.
///
/// Immutable once built; shared read-only across requests.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    classifications: Vec<PractitionerClassification>,
    salary_scales: HashMap<String, SalaryScale>,
    positions: BTreeMap<u32, SuperiorPosition>,
    compensation_codes: Vec<CompensationCode>,
}

impl ReferenceData {
    /// Builds the store, rejecting duplicate keys.
    ///
    /// Classifications must be unique per `(main_corp, sub_corp, grade)`,
    /// salary scales per category, positions per id and compensation codes
    /// per code.
    pub fn new(
        classifications: Vec<PractitionerClassification>,
        salary_scales: Vec<SalaryScale>,
        positions: Vec<SuperiorPosition>,
        compensation_codes: Vec<CompensationCode>,
    ) -> EngineResult<Self> {
        let mut seen = BTreeSet::new();
        for c in &classifications {
            if !seen.insert((c.main_corp.as_str(), c.sub_corp.as_str(), c.grade.as_str())) {
                return Err(EngineError::InvalidReferenceData {
                    table: "practitioners".to_string(),
                    message: format!(
                        "duplicate classification {} / {} / {}",
                        c.main_corp, c.sub_corp, c.grade
                    ),
                });
            }
        }

        let mut scales = HashMap::with_capacity(salary_scales.len());
        for scale in salary_scales {
            let category = scale.category.clone();
            if scales.insert(category.clone(), scale).is_some() {
                return Err(EngineError::InvalidReferenceData {
                    table: "salary_scales".to_string(),
                    message: format!("duplicate category {}", category),
                });
            }
        }

        let mut by_id = BTreeMap::new();
        for position in positions {
            let id = position.id;
            if by_id.insert(id, position).is_some() {
                return Err(EngineError::InvalidReferenceData {
                    table: "positions".to_string(),
                    message: format!("duplicate position id {}", id),
                });
            }
        }

        let mut codes = BTreeSet::new();
        for code in &compensation_codes {
            if !codes.insert(code.code.as_str()) {
                return Err(EngineError::InvalidReferenceData {
                    table: "compensation_codes".to_string(),
                    message: format!("duplicate compensation code {}", code.code),
                });
            }
        }

        Ok(Self {
            classifications,
            salary_scales: scales,
            positions: by_id,
            compensation_codes,
        })
    }

    /// Finds the classification matching a triple.
    ///
    /// Returns `ClassificationNotFound` when no row matches.
    pub fn find_classification(
        &self,
        main_corp: &str,
        sub_corp: &str,
        grade: &str,
    ) -> EngineResult<&PractitionerClassification> {
        self.classifications
            .iter()
            .find(|c| c.matches(main_corp, sub_corp, grade))
            .ok_or_else(|| EngineError::ClassificationNotFound {
                main_corp: main_corp.to_string(),
                sub_corp: sub_corp.to_string(),
                grade: grade.to_string(),
            })
    }

    /// Returns the salary scale row for a category.
    pub fn salary_scale(&self, category: &str) -> Option<&SalaryScale> {
        self.salary_scales.get(category)
    }

    /// Returns the selected superior position, if any.
    pub fn position(&self, selection: PositionSelection) -> Option<&SuperiorPosition> {
        match selection {
            PositionSelection::None => None,
            PositionSelection::Id(id) => self.positions.get(&id),
        }
    }

    /// Returns every compensation code.
    pub fn compensation_codes(&self) -> &[CompensationCode] {
        &self.compensation_codes
    }

    /// Returns every classification row.
    pub fn classifications(&self) -> &[PractitionerClassification] {
        &self.classifications
    }

    /// Distinct main corps, sorted.
    pub fn main_corps(&self) -> Vec<&str> {
        self.classifications
            .iter()
            .map(|c| c.main_corp.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct sub-corps of a main corps, sorted.
    pub fn sub_corps(&self, main_corp: &str) -> Vec<&str> {
        self.classifications
            .iter()
            .filter(|c| c.main_corp == main_corp)
            .map(|c| c.sub_corp.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct grades of a sub-corps, sorted.
    pub fn grades(&self, main_corp: &str, sub_corp: &str) -> Vec<&str> {
        self.classifications
            .iter()
            .filter(|c| c.main_corp == main_corp && c.sub_corp == sub_corp)
            .map(|c| c.grade.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Positions open to a sub-corps, highest index bonus first.
    pub fn positions_for(&self, main_corp: &str, sub_corp: &str) -> Vec<&SuperiorPosition> {
        let mut positions: Vec<&SuperiorPosition> = self
            .positions
            .values()
            .filter(|p| p.main_corp == main_corp && p.sub_corp == sub_corp)
            .collect();
        positions.sort_by(|a, b| b.index_bonus.cmp(&a.index_bonus).then(a.id.cmp(&b.id)));
        positions
    }

    /// Resolves everything needed to evaluate one selection.
    pub fn lookup_bundle(
        &self,
        main_corp: &str,
        sub_corp: &str,
        grade: &str,
        position: PositionSelection,
    ) -> EngineResult<LookupBundle<'_>> {
        let practitioner = self.find_classification(main_corp, sub_corp, grade)?;
        Ok(LookupBundle {
            practitioner,
            salary_scale: self.salary_scale(&practitioner.category),
            position: self.position(position),
            compensation_codes: self.compensation_codes(),
        })
    }
}
