//! Quarterly (PRIME) bonus settlement.
//!
//! Quarterly codes are paid every three months and taxed at a flat 10%,
//! never through the progressive schedule.

use rust_decimal::Decimal;

use super::{round_money, social_security};
use crate::models::{AuditStep, CompensationLine, QuarterlyBonus};

/// Flat tax rate applied to the quarterly settlement.
pub fn quarterly_tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// The result of the quarterly settlement step.
#[derive(Debug, Clone)]
pub struct QuarterlyBonusResult {
    /// The settlement, absent when there are no quarterly lines.
    pub bonus: Option<QuarterlyBonus>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Settles the quarterly compensation lines.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_quarterly_bonus;
///
/// let result = calculate_quarterly_bonus(&[], 14);
/// assert!(result.bonus.is_none());
/// ```
pub fn calculate_quarterly_bonus(
    lines: &[CompensationLine],
    step_number: u32,
) -> QuarterlyBonusResult {
    if lines.is_empty() {
        return QuarterlyBonusResult {
            bonus: None,
            audit_step: AuditStep {
                step_number,
                rule_id: "quarterly_bonus".to_string(),
                rule_name: "Quarterly Bonus Settlement".to_string(),
                input: serde_json::json!({ "lines": 0 }),
                output: serde_json::Value::Null,
                reasoning: "No quarterly compensation codes apply".to_string(),
            },
        };
    }

    let monthly: Decimal = lines.iter().map(|l| l.amount).sum();
    let gross = monthly * Decimal::from(3);
    let social_security = social_security(gross);
    let taxable_base = gross - social_security;
    let income_tax = round_money(taxable_base * quarterly_tax_rate());
    let net = taxable_base - income_tax;

    let audit_step = AuditStep {
        step_number,
        rule_id: "quarterly_bonus".to_string(),
        rule_name: "Quarterly Bonus Settlement".to_string(),
        input: serde_json::json!({
            "lines": lines.len(),
            "monthly_value": monthly.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "social_security": social_security.to_string(),
            "income_tax": income_tax.to_string(),
            "net": net.to_string()
        }),
        reasoning: format!(
            "3 × {} = {}; less 9% social security and 10% flat tax = {}",
            monthly.normalize(),
            gross.normalize(),
            net
        ),
    };

    QuarterlyBonusResult {
        bonus: Some(QuarterlyBonus {
            gross,
            social_security,
            taxable_base,
            income_tax,
            net,
        }),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompensationKind, Settlement};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(amount: &str) -> CompensationLine {
        CompensationLine {
            code: "PRD".to_string(),
            name: "منحة المردودية".to_string(),
            kind: CompensationKind::Percentage,
            settlement: Settlement::Quarterly,
            rate: dec("0.30"),
            amount: dec(amount),
        }
    }

    #[test]
    fn test_quarterly_settlement() {
        let result = calculate_quarterly_bonus(&[line("8370")], 14);
        let bonus = result.bonus.unwrap();
        assert_eq!(bonus.gross, dec("25110"));
        assert_eq!(bonus.social_security, dec("2259.90"));
        assert_eq!(bonus.taxable_base, dec("22850.10"));
        assert_eq!(bonus.income_tax, dec("2285.01"));
        assert_eq!(bonus.net, dec("20565.09"));
    }

    #[test]
    fn test_taxable_base_not_rounded_to_ten() {
        let result = calculate_quarterly_bonus(&[line("1001")], 14);
        let bonus = result.bonus.unwrap();
        // 3003 - 270.27
        assert_eq!(bonus.taxable_base, dec("2732.73"));
    }

    #[test]
    fn test_lines_are_summed() {
        let result = calculate_quarterly_bonus(&[line("100"), line("200")], 14);
        assert_eq!(result.bonus.unwrap().gross, dec("900"));
    }

    #[test]
    fn test_no_lines_no_settlement() {
        let result = calculate_quarterly_bonus(&[], 14);
        assert!(result.bonus.is_none());
        assert!(result.audit_step.output.is_null());
    }
}
