//! Social-security withholding and taxable base.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AuditStep;

/// Returns the social-security contribution rate (9%).
pub fn social_security_rate() -> Decimal {
    Decimal::new(9, 2)
}

/// Rounds a monetary amount to 2 decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::round_money;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("10.005").unwrap()).to_string(), "10.01");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Social-security contribution: 9% of gross, rounded to 2dp.
pub fn social_security(gross: Decimal) -> Decimal {
    round_money(gross * social_security_rate())
}

/// Taxable base: gross minus social security, rounded down to a multiple of 10.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::taxable_base;
///
/// assert_eq!(taxable_base(Decimal::from(33700), Decimal::from(3033)), Decimal::from(30660));
/// ```
pub fn taxable_base(gross: Decimal, social_security: Decimal) -> Decimal {
    let ten = Decimal::TEN;
    ((gross - social_security) / ten).floor() * ten
}

/// The result of the withholding step.
#[derive(Debug, Clone)]
pub struct WithholdingResult {
    /// Social-security contribution.
    pub social_security: Decimal,
    /// Taxable base.
    pub taxable_base: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the social-security contribution and the taxable base.
pub fn calculate_withholding(gross: Decimal, step_number: u32) -> WithholdingResult {
    let social_security = social_security(gross);
    let taxable_base = taxable_base(gross, social_security);

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security and Taxable Base".to_string(),
        input: serde_json::json!({
            "gross_salary": gross.normalize().to_string(),
            "rate": social_security_rate().to_string()
        }),
        output: serde_json::json!({
            "social_security": social_security.to_string(),
            "taxable_base": taxable_base.normalize().to_string()
        }),
        reasoning: format!(
            "{} × 9% = {}; taxable base floor(({} - {}) / 10) × 10 = {}",
            gross.normalize(),
            social_security,
            gross.normalize(),
            social_security,
            taxable_base.normalize()
        ),
    };

    WithholdingResult {
        social_security,
        taxable_base,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_social_security_nine_percent() {
        assert_eq!(social_security(dec("33700")), dec("3033"));
        assert_eq!(social_security(dec("0")), Decimal::ZERO);
    }

    #[test]
    fn test_social_security_rounds_half_up() {
        // 12345.50 × 0.09 = 1111.095
        assert_eq!(social_security(dec("12345.50")), dec("1111.10"));
    }

    #[test]
    fn test_taxable_base_floors_to_ten() {
        assert_eq!(taxable_base(dec("33700"), dec("3033")), dec("30660"));
        assert_eq!(taxable_base(dec("100"), dec("0.01")), dec("90"));
        assert_eq!(taxable_base(dec("0"), dec("0")), Decimal::ZERO);
    }

    #[test]
    fn test_calculate_withholding() {
        let result = calculate_withholding(dec("33700"), 8);
        assert_eq!(result.social_security, dec("3033"));
        assert_eq!(result.taxable_base, dec("30660"));
        assert_eq!(result.audit_step.output["taxable_base"], "30660");
    }
}
