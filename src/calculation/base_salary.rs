//! Base salary calculation.
//!
//! The base salary converts a category's point index into money using the
//! fixed point value.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SalaryScale};

/// Returns the monetary value of one index point (45 DZD).
pub fn point_value() -> Decimal {
    Decimal::from(45)
}

/// The result of the base salary step.
#[derive(Debug, Clone)]
pub struct BaseSalaryResult {
    /// Category point index used, zero when the scale is missing.
    pub base_index: Decimal,
    /// Base salary.
    pub base_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the base salary from a salary scale row.
///
/// A missing scale row yields a zero base salary.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::calculate_base_salary;
/// use salary_engine::models::SalaryScale;
///
/// let scale = SalaryScale {
///     category: "11".to_string(),
///     base_index: Decimal::from(300),
///     steps: [Decimal::from(64); 12],
/// };
/// let result = calculate_base_salary(Some(&scale), 1);
/// assert_eq!(result.base_salary, Decimal::from(13500));
/// ```
pub fn calculate_base_salary(scale: Option<&SalaryScale>, step_number: u32) -> BaseSalaryResult {
    let base_index = scale.map(|s| s.base_index).unwrap_or(Decimal::ZERO);
    let base_salary = base_index * point_value();

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary".to_string(),
        rule_name: "Base Salary".to_string(),
        input: serde_json::json!({
            "category": scale.map(|s| s.category.clone()),
            "base_index": base_index.normalize().to_string(),
            "point_value": point_value().to_string()
        }),
        output: serde_json::json!({
            "base_salary": base_salary.normalize().to_string()
        }),
        reasoning: match scale {
            Some(s) => format!(
                "Category {} index {} × {} = {}",
                s.category,
                base_index.normalize(),
                point_value(),
                base_salary.normalize()
            ),
            None => "No salary scale row - base salary is 0".to_string(),
        },
    };

    BaseSalaryResult {
        base_index,
        base_salary,
        audit_step,
    }
}
