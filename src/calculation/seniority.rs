//! Seniority increment calculation.
//!
//! Tenured staff are paid the index of their echelon from the salary scale.
//! Contract staff earn 1.4% of the base salary per year of service instead.

use rust_decimal::Decimal;

use super::point_value;
use crate::models::{AuditStep, SalaryScale, Track};

/// Returns the yearly increment rate of the contractual track, in percent.
pub fn contractual_step_rate() -> Decimal {
    Decimal::new(14, 1)
}

/// The result of the seniority step.
#[derive(Debug, Clone)]
pub struct SeniorityResult {
    /// Step index read from the scale (standard) or the 1.4 rate (contractual).
    pub step_index: Decimal,
    /// Seniority increment.
    pub increment: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the seniority increment.
///
/// - Contractual track: `step × 1.4 × base_salary / 100`, step capped at 32.
/// - Standard track: `scale.step(clamp(step, 1, 12)) × 45`, zero without a
///   scale row.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::calculate_seniority_increment;
/// use salary_engine::models::Track;
///
/// let result = calculate_seniority_increment(
///     None,
///     Track::Contractual,
///     10,
///     Decimal::from(13500),
///     2,
/// );
/// assert_eq!(result.increment, Decimal::from(1890));
/// ```
pub fn calculate_seniority_increment(
    scale: Option<&SalaryScale>,
    track: Track,
    step: u32,
    base_salary: Decimal,
    step_number: u32,
) -> SeniorityResult {
    match track {
        Track::Contractual => {
            let years = step.min(track.max_step());
            let rate = contractual_step_rate();
            let increment = Decimal::from(years) * rate * base_salary / Decimal::ONE_HUNDRED;

            let audit_step = AuditStep {
                step_number,
                rule_id: "seniority_increment".to_string(),
                rule_name: "Seniority Increment".to_string(),
                input: serde_json::json!({
                    "track": "contractual",
                    "years": years,
                    "base_salary": base_salary.normalize().to_string()
                }),
                output: serde_json::json!({
                    "increment": increment.normalize().to_string()
                }),
                reasoning: format!(
                    "{} years × {}% × {} = {}",
                    years,
                    rate,
                    base_salary.normalize(),
                    increment.normalize()
                ),
            };

            SeniorityResult {
                step_index: rate,
                increment,
                audit_step,
            }
        }
        Track::Standard => {
            let step_index = scale.map(|s| s.step_index(step)).unwrap_or(Decimal::ZERO);
            let increment = step_index * point_value();
            let clamped = step.clamp(1, track.max_step());

            let audit_step = AuditStep {
                step_number,
                rule_id: "seniority_increment".to_string(),
                rule_name: "Seniority Increment".to_string(),
                input: serde_json::json!({
                    "track": "standard",
                    "echelon": step,
                    "scale_step": clamped
                }),
                output: serde_json::json!({
                    "step_index": step_index.normalize().to_string(),
                    "increment": increment.normalize().to_string()
                }),
                reasoning: format!(
                    "Echelon {} index {} × {} = {}",
                    clamped,
                    step_index.normalize(),
                    point_value(),
                    increment.normalize()
                ),
            };

            SeniorityResult {
                step_index,
                increment,
                audit_step,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scale() -> SalaryScale {
        SalaryScale {
            category: "11".to_string(),
            base_index: Decimal::from(300),
            steps: std::array::from_fn(|i| Decimal::from(64 * (i as i64 + 1))),
        }
    }

    #[test]
    fn test_standard_step_five() {
        let result =
            calculate_seniority_increment(Some(&scale()), Track::Standard, 5, dec("13500"), 2);
        assert_eq!(result.step_index, Decimal::from(320));
        assert_eq!(result.increment, Decimal::from(14400));
    }

    #[test]
    fn test_standard_step_zero_uses_first_step() {
        let result =
            calculate_seniority_increment(Some(&scale()), Track::Standard, 0, dec("13500"), 2);
        assert_eq!(result.step_index, Decimal::from(64));
        assert_eq!(result.increment, Decimal::from(2880));
    }

    #[test]
    fn test_standard_step_above_twelve_uses_last_step() {
        let result =
            calculate_seniority_increment(Some(&scale()), Track::Standard, 20, dec("13500"), 2);
        assert_eq!(result.step_index, Decimal::from(768));
    }

    #[test]
    fn test_standard_without_scale_is_zero() {
        let result = calculate_seniority_increment(None, Track::Standard, 5, dec("0"), 2);
        assert_eq!(result.increment, Decimal::ZERO);
    }

    #[test]
    fn test_contractual_zero_years() {
        let result =
            calculate_seniority_increment(Some(&scale()), Track::Contractual, 0, dec("13500"), 2);
        assert_eq!(result.increment, Decimal::ZERO);
        assert_eq!(result.step_index, dec("1.4"));
    }

    #[test]
    fn test_contractual_uses_base_not_scale_steps() {
        let result =
            calculate_seniority_increment(Some(&scale()), Track::Contractual, 5, dec("8100"), 2);
        // 5 × 1.4 × 8100 / 100
        assert_eq!(result.increment, dec("567"));
    }

    #[test]
    fn test_contractual_caps_at_thirty_two_years() {
        let capped =
            calculate_seniority_increment(None, Track::Contractual, 40, dec("10000"), 2);
        let max = calculate_seniority_increment(None, Track::Contractual, 32, dec("10000"), 2);
        assert_eq!(capped.increment, max.increment);
        assert_eq!(max.increment, dec("4480"));
    }

    #[test]
    fn test_audit_records_track() {
        let result =
            calculate_seniority_increment(Some(&scale()), Track::Standard, 5, dec("13500"), 3);
        assert_eq!(result.audit_step.input["track"], "standard");
        assert_eq!(result.audit_step.step_number, 3);
    }
}
