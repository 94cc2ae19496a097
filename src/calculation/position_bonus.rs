//! Superior position bonus calculation.

use rust_decimal::Decimal;

use super::point_value;
use crate::models::{AuditStep, SuperiorPosition};

/// The result of the position bonus step.
#[derive(Debug, Clone)]
pub struct PositionBonusResult {
    /// Position bonus, zero when no position is held.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the bonus paid for holding a superior position.
///
/// The bonus is `index_bonus × 45`; without a position it is zero.
pub fn calculate_position_bonus(
    position: Option<&SuperiorPosition>,
    step_number: u32,
) -> PositionBonusResult {
    let amount = position
        .map(|p| p.index_bonus * point_value())
        .unwrap_or(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "position_bonus".to_string(),
        rule_name: "Superior Position Bonus".to_string(),
        input: serde_json::json!({
            "position_id": position.map(|p| p.id),
            "index_bonus": position.map(|p| p.index_bonus.normalize().to_string())
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: match position {
            Some(p) => format!(
                "{} index {} × {} = {}",
                p.title,
                p.index_bonus.normalize(),
                point_value(),
                amount.normalize()
            ),
            None => "No superior position held".to_string(),
        },
    };

    PositionBonusResult { amount, audit_step }
}
