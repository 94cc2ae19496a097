//! Practitioner classification model.
//!
//! A classification places a practitioner in the three-level hierarchy
//! (main corps, sub-corps, grade) and ties that position to a salary-scale
//! category and to the compensation codes the practitioner is entitled to.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main corps whose members are paid on the contractual track.
pub const CONTRACTUAL_MAIN_CORP: &str = "الأعوان المتعاقدين";

/// Main corps whose members are eligible for the incentive bonus.
pub const INCENTIVE_MAIN_CORP: &str = "الممارسين الطبيون المتخصصون";

/// The way seniority is rewarded for a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Tenured staff: seniority increment read from the salary scale steps.
    Standard,
    /// Contract staff: seniority increment is 1.4% of base salary per year.
    Contractual,
}

impl Track {
    /// Returns the track a main corps is paid on.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::Track;
    ///
    /// assert_eq!(Track::for_main_corp("الأعوان المتعاقدين"), Track::Contractual);
    /// assert_eq!(Track::for_main_corp("شبه الطبيين"), Track::Standard);
    /// ```
    pub fn for_main_corp(main_corp: &str) -> Self {
        if main_corp == CONTRACTUAL_MAIN_CORP {
            Track::Contractual
        } else {
            Track::Standard
        }
    }

    /// The highest seniority step selectable on this track.
    pub fn max_step(self) -> u32 {
        match self {
            Track::Standard => 12,
            Track::Contractual => 32,
        }
    }

    /// The contract label printed on payslips.
    pub fn contract_label(self) -> &'static str {
        match self {
            Track::Standard => "عقد دائم",
            Track::Contractual => "تعاقدي",
        }
    }
}

/// A row of the practitioner classification table.
///
/// Unique per `(main_corp, sub_corp, grade)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PractitionerClassification {
    /// Top level of the hierarchy.
    pub main_corp: String,
    /// Second level of the hierarchy.
    pub sub_corp: String,
    /// Grade within the sub-corps.
    pub grade: String,
    /// Salary-scale category this grade is paid on.
    pub category: String,
    /// Compensation code to rate (fraction for percentage codes, amount for
    /// fixed codes). A code absent from the map does not apply.
    #[serde(default)]
    pub compensations: BTreeMap<String, Decimal>,
}

impl PractitionerClassification {
    /// Returns the seniority track of this classification.
    pub fn track(&self) -> Track {
        Track::for_main_corp(&self.main_corp)
    }

    /// Returns true if this classification receives the incentive bonus.
    pub fn is_incentive_eligible(&self) -> bool {
        self.main_corp == INCENTIVE_MAIN_CORP
    }

    /// Returns the rate recorded for a compensation code, if eligible.
    pub fn compensation_rate(&self, code: &str) -> Option<Decimal> {
        self.compensations.get(code).copied()
    }

    /// Returns true if this row matches the given triple.
    pub fn matches(&self, main_corp: &str, sub_corp: &str, grade: &str) -> bool {
        self.main_corp == main_corp && self.sub_corp == sub_corp && self.grade == grade
    }
}
