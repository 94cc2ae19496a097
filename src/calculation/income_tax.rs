//! Progressive income tax (IRG) on the monthly taxable base.
//!
//! The schedule is applied literally, including the abatement-dependent
//! formulas of the 30 000 to 40 000 band. The result is not rounded here;
//! display code rounds it.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::AuditStep;

/// The band of the schedule a taxable base falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBracket {
    /// Up to 30 000: exempt.
    Exempt,
    /// 30 000 to 35 000: smoothed formula.
    Smoothed,
    /// 35 000 to 40 000: abated 23% band.
    Abated,
    /// 40 000 to 80 000: 27%.
    Rate27,
    /// 80 000 to 160 000: 30%.
    Rate30,
    /// 160 000 to 320 000: 33%.
    Rate33,
    /// Above 320 000: 35%.
    Rate35,
}

impl TaxBracket {
    /// Returns the band for a taxable base.
    pub fn for_base(taxable: Decimal) -> Self {
        if taxable <= Decimal::from(30_000) {
            TaxBracket::Exempt
        } else if taxable <= Decimal::from(35_000) {
            TaxBracket::Smoothed
        } else if taxable <= Decimal::from(40_000) {
            TaxBracket::Abated
        } else if taxable <= Decimal::from(80_000) {
            TaxBracket::Rate27
        } else if taxable <= Decimal::from(160_000) {
            TaxBracket::Rate30
        } else if taxable <= Decimal::from(320_000) {
            TaxBracket::Rate33
        } else {
            TaxBracket::Rate35
        }
    }
}

/// Applies the abatement: 40% of the raw tax, bounded to 1000..=1500.
fn abated(raw: Decimal) -> Decimal {
    let abatement = raw * Decimal::new(4, 1);
    if abatement <= Decimal::from(1000) {
        raw - Decimal::from(1000)
    } else if abatement >= Decimal::from(1500) {
        raw - Decimal::from(1500)
    } else {
        raw * Decimal::new(6, 1)
    }
}

/// Computes the monthly income tax for a taxable base.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::income_tax;
///
/// assert_eq!(income_tax(Decimal::from(30000)), Decimal::ZERO);
/// assert_eq!(income_tax(Decimal::from(50000)), Decimal::from(5800));
/// ```
pub fn income_tax(taxable: Decimal) -> Decimal {
    let bracket = TaxBracket::for_base(taxable);
    let raw_23 = || (taxable - Decimal::from(20_000)) * Decimal::new(23, 2);
    let smoothing = Decimal::from(27_925) / Decimal::from(8);
    let rate = |threshold: i64, pct: i64, fixed: i64| {
        (taxable - Decimal::from(threshold)) * Decimal::new(pct, 2) + Decimal::from(fixed)
            - Decimal::from(1500)
    };

    match bracket {
        TaxBracket::Exempt => Decimal::ZERO,
        TaxBracket::Smoothed => {
            abated(raw_23()) * Decimal::from(137) / Decimal::from(51) - smoothing
        }
        TaxBracket::Abated => abated(raw_23()),
        TaxBracket::Rate27 => rate(40_000, 27, 4_600),
        TaxBracket::Rate30 => rate(80_000, 30, 15_400),
        TaxBracket::Rate33 => rate(160_000, 33, 39_400),
        TaxBracket::Rate35 => rate(320_000, 35, 92_200),
    }
}

/// The result of the income tax step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// Tax amount, unrounded.
    pub amount: Decimal,
    /// Band applied.
    pub bracket: TaxBracket,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the income tax and records the band applied.
pub fn calculate_income_tax(taxable: Decimal, step_number: u32) -> IncomeTaxResult {
    let bracket = TaxBracket::for_base(taxable);
    let amount = income_tax(taxable);

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax (IRG)".to_string(),
        input: serde_json::json!({
            "taxable_base": taxable.normalize().to_string()
        }),
        output: serde_json::json!({
            "bracket": bracket,
            "income_tax": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Taxable base {} falls in the {:?} band: tax {}",
            taxable.normalize(),
            bracket,
            amount.round_dp(2)
        ),
    };

    IncomeTaxResult {
        amount,
        bracket,
        audit_step,
    }
}
