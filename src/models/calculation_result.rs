//! Calculation result models for the salary engine.
//!
//! This module contains the [`SalaryBreakdown`] type and its associated
//! structures that capture every output of one salary evaluation: the
//! itemized gains, withholdings, family allowances, the quarterly bonus
//! settlement, and an audit trace of each rule that was applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompensationKind, RiskTier, Settlement, Track};

/// One applicable compensation code, valued for this practitioner.
///
/// # Example
///
/// ```
/// use salary_engine::models::{CompensationKind, CompensationLine, Settlement};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = CompensationLine {
///     code: "IQE".to_string(),
///     name: "تعويض التأهيل".to_string(),
///     kind: CompensationKind::Percentage,
///     settlement: Settlement::Monthly,
///     rate: Decimal::from_str("0.25").unwrap(),
///     amount: Decimal::from_str("6975").unwrap(),
/// };
/// assert!(line.is_monthly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationLine {
    /// The compensation code.
    pub code: String,
    /// Display name of the code.
    pub name: String,
    /// Percentage or fixed.
    pub kind: CompensationKind,
    /// Monthly or quarterly.
    pub settlement: Settlement,
    /// The rate recorded on the classification.
    pub rate: Decimal,
    /// The valued amount.
    pub amount: Decimal,
}

impl CompensationLine {
    /// Returns true if the line is part of the monthly gross.
    pub fn is_monthly(&self) -> bool {
        self.settlement == Settlement::Monthly
    }
}

/// Monthly withholdings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withholdings {
    /// Social-security contribution (9% of gross, 2dp).
    pub social_security: Decimal,
    /// Taxable base, rounded down to the nearest 10.
    pub taxable_base: Decimal,
    /// Progressive income tax.
    pub income_tax: Decimal,
    /// Social security plus income tax.
    pub total: Decimal,
}

/// Family allowances, independent of the salary itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyAllowances {
    /// 300 per child.
    pub child_allowance: Decimal,
    /// 11.25 per child older than ten.
    pub senior_child_allowance: Decimal,
    /// 800 when there are children and the spouse has no income.
    pub single_income_allowance: Decimal,
    /// Sum of the three allowances.
    pub total: Decimal,
}

/// Settlement of the quarterly (PRIME) compensation codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyBonus {
    /// Three times the monthly value of the quarterly codes.
    pub gross: Decimal,
    /// 9% social security, 2dp.
    pub social_security: Decimal,
    /// Gross minus social security, not rounded to 10.
    pub taxable_base: Decimal,
    /// Flat 10% tax, 2dp.
    pub income_tax: Decimal,
    /// Taxable base minus tax.
    pub net: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag lookups that degraded to zero instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of one salary evaluation.
///
/// This is the only shape the presentation layer depends on. It echoes the
/// user's selections next to every computed line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Selected main corps.
    pub main_corp: String,
    /// Selected sub-corps.
    pub sub_corp: String,
    /// Selected grade.
    pub grade: String,
    /// Category of the classification, or "غير محدد" when unknown.
    pub category: String,
    /// Category point index.
    pub category_index: Decimal,
    /// Seniority step as selected.
    pub seniority_step: u32,
    /// Index read for the step (standard track) or the 1.4% rate (contractual).
    pub step_index: Decimal,
    /// Seniority track.
    pub track: Track,
    /// Title of the superior position, if any.
    pub position_title: Option<String>,
    /// Selected risk tier.
    pub risk_tier: RiskTier,

    /// Category index times the point value.
    pub base_salary: Decimal,
    /// Seniority increment.
    pub seniority_increment: Decimal,
    /// Base salary plus seniority increment.
    pub principal_salary: Decimal,
    /// Superior position bonus.
    pub position_bonus: Decimal,
    /// Monthly compensation lines.
    pub compensations: Vec<CompensationLine>,
    /// Contagion-risk bonus.
    pub risk_bonus: Decimal,
    /// Incentive bonus.
    pub incentive_bonus: Decimal,
    /// Gross monthly salary.
    pub gross_salary: Decimal,
    /// Monthly withholdings.
    pub withholdings: Withholdings,
    /// Family allowances.
    pub family_allowances: FamilyAllowances,
    /// Net monthly salary, family allowances included.
    pub net_salary: Decimal,
    /// Quarterly compensation lines.
    pub quarterly_compensations: Vec<CompensationLine>,
    /// Quarterly settlement; present only when quarterly lines exist.
    pub quarterly_bonus: Option<QuarterlyBonus>,
    /// Audit trace of every rule applied.
    pub audit_trace: AuditTrace,
}

impl SalaryBreakdown {
    /// Sum of the monthly compensation lines.
    pub fn monthly_compensation_total(&self) -> Decimal {
        self.compensations.iter().map(|c| c.amount).sum()
    }

    /// Sum of the quarterly compensation lines (one month's worth).
    pub fn quarterly_compensation_total(&self) -> Decimal {
        self.quarterly_compensations.iter().map(|c| c.amount).sum()
    }
}
