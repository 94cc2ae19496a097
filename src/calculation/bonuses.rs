//! Contagion-risk and incentive bonuses.
//!
//! Both bonuses are flat monthly amounts picked from a fixed schedule.

use rust_decimal::Decimal;

use crate::models::{AuditStep, IncentiveLevel, RiskTier};

/// The result of a flat bonus step.
#[derive(Debug, Clone)]
pub struct BonusResult {
    /// Bonus amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the contagion-risk bonus for a tier.
pub fn calculate_risk_bonus(tier: RiskTier, step_number: u32) -> BonusResult {
    let amount = tier.monthly_value();

    let audit_step = AuditStep {
        step_number,
        rule_id: "risk_bonus".to_string(),
        rule_name: "Contagion Risk Bonus".to_string(),
        input: serde_json::json!({
            "risk_tier": tier,
            "label": tier.label()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!("{} pays {}", tier.label(), amount),
    };

    BonusResult { amount, audit_step }
}

/// Calculates the incentive bonus.
///
/// Only classifications that are incentive-eligible receive it; for
/// everyone else the bonus is zero whatever level was selected.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::calculate_incentive_bonus;
/// use salary_engine::models::IncentiveLevel;
///
/// let eligible = calculate_incentive_bonus(IncentiveLevel::new(2), true, 7);
/// assert_eq!(eligible.amount, Decimal::from(10000));
///
/// let ineligible = calculate_incentive_bonus(IncentiveLevel::new(2), false, 7);
/// assert_eq!(ineligible.amount, Decimal::ZERO);
/// ```
pub fn calculate_incentive_bonus(
    level: IncentiveLevel,
    eligible: bool,
    step_number: u32,
) -> BonusResult {
    let amount = if eligible {
        level.monthly_value()
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "incentive_bonus".to_string(),
        rule_name: "Incentive Bonus".to_string(),
        input: serde_json::json!({
            "level": level.index(),
            "eligible": eligible
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: if eligible {
            format!("Level {} pays {}", level.index(), amount)
        } else {
            "Main corps is not eligible for the incentive bonus".to_string()
        },
    };

    BonusResult { amount, audit_step }
}
