//! Calculation logic for the salary engine.
//!
//! Each rule lives in its own module and returns its result together with
//! the [`AuditStep`](crate::models::AuditStep) that records it: base salary,
//! seniority increment, superior position bonus, compensation codes, risk
//! and incentive bonuses, social security, income tax, family allowances and
//! the quarterly settlement. [`evaluate`] chains them into a
//! [`SalaryBreakdown`](crate::models::SalaryBreakdown).

mod base_salary;
mod bonuses;
mod compensation;
mod evaluator;
mod family_allowance;
mod income_tax;
mod position_bonus;
mod quarterly_bonus;
mod seniority;
mod withholding;

pub use base_salary::{BaseSalaryResult, calculate_base_salary, point_value};
pub use bonuses::{BonusResult, calculate_incentive_bonus, calculate_risk_bonus};
pub use compensation::{CompensationResult, calculate_compensations, value_compensation};
pub use evaluator::{LookupRows, UNKNOWN_CATEGORY, evaluate, evaluate_selection};
pub use family_allowance::{
    FamilyAllowanceResult, calculate_family_allowances, child_allowance_rate,
    senior_child_allowance_rate, single_income_allowance_rate,
};
pub use income_tax::{IncomeTaxResult, TaxBracket, calculate_income_tax, income_tax};
pub use position_bonus::{PositionBonusResult, calculate_position_bonus};
pub use quarterly_bonus::{QuarterlyBonusResult, calculate_quarterly_bonus, quarterly_tax_rate};
pub use seniority::{SeniorityResult, calculate_seniority_increment, contractual_step_rate};
pub use withholding::{
    WithholdingResult, calculate_withholding, round_money, social_security, social_security_rate,
    taxable_base,
};
