//! Core data models for the salary engine.
//!
//! This module contains the reference-table rows, the per-request
//! computation input, and the salary breakdown produced by the evaluator.

mod calculation_result;
mod classification;
mod compensation;
mod input;
mod position;
mod salary_scale;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CompensationLine, FamilyAllowances, QuarterlyBonus,
    SalaryBreakdown, Withholdings,
};
pub use classification::{
    CONTRACTUAL_MAIN_CORP, INCENTIVE_MAIN_CORP, PractitionerClassification, Track,
};
pub use compensation::{CompensationCode, CompensationKind, QUARTERLY_TAG, Settlement};
pub use input::{ComputationInput, FamilySituation, IncentiveLevel, RiskTier};
pub use position::{NO_POSITION, PositionSelection, SuperiorPosition};
pub use salary_scale::{SCALE_STEPS, SalaryScale};
