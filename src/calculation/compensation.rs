//! Compensation code valuation.
//!
//! Every code recorded on a classification is valued against the principal
//! salary and sorted into the monthly gross or the quarterly settlement.

use rust_decimal::Decimal;

use crate::models::{
    AuditStep, CompensationCode, CompensationKind, CompensationLine, PractitionerClassification,
};

/// The result of the compensation step.
#[derive(Debug, Clone)]
pub struct CompensationResult {
    /// Lines paid with the monthly salary.
    pub monthly: Vec<CompensationLine>,
    /// Lines paid with the quarterly settlement.
    pub quarterly: Vec<CompensationLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl CompensationResult {
    /// Sum of the monthly lines.
    pub fn monthly_total(&self) -> Decimal {
        self.monthly.iter().map(|l| l.amount).sum()
    }
}

/// Values one code for a principal salary.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::value_compensation;
/// use salary_engine::models::CompensationKind;
/// use std::str::FromStr;
///
/// let principal = Decimal::from(27900);
/// let rate = Decimal::from_str("0.25").unwrap();
/// assert_eq!(value_compensation(CompensationKind::Percentage, rate, principal), Decimal::from(6975));
/// assert_eq!(value_compensation(CompensationKind::Fixed, Decimal::from(2000), principal), Decimal::from(2000));
/// ```
pub fn value_compensation(kind: CompensationKind, rate: Decimal, principal: Decimal) -> Decimal {
    match kind {
        CompensationKind::Percentage => principal * rate,
        CompensationKind::Fixed => rate,
    }
}

/// Values every code the classification is entitled to.
///
/// Codes are visited in table order; codes with no rate on the
/// classification are skipped. Without a classification there are no lines.
pub fn calculate_compensations(
    classification: Option<&PractitionerClassification>,
    codes: &[CompensationCode],
    principal: Decimal,
    step_number: u32,
) -> CompensationResult {
    let mut monthly = Vec::new();
    let mut quarterly = Vec::new();

    if let Some(classification) = classification {
        for code in codes {
            let Some(rate) = classification.compensation_rate(&code.code) else {
                continue;
            };
            let line = CompensationLine {
                code: code.code.clone(),
                name: code.name.clone(),
                kind: code.kind,
                settlement: code.settlement(),
                rate,
                amount: value_compensation(code.kind, rate, principal),
            };
            if line.is_monthly() {
                monthly.push(line);
            } else {
                quarterly.push(line);
            }
        }
    }

    let describe = |lines: &[CompensationLine]| -> Vec<serde_json::Value> {
        lines
            .iter()
            .map(|l| {
                serde_json::json!({
                    "code": l.code,
                    "rate": l.rate.normalize().to_string(),
                    "amount": l.amount.normalize().to_string()
                })
            })
            .collect()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "compensations".to_string(),
        rule_name: "Compensation Codes".to_string(),
        input: serde_json::json!({
            "principal_salary": principal.normalize().to_string(),
            "entitled_codes": classification
                .map(|c| c.compensations.keys().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        }),
        output: serde_json::json!({
            "monthly": describe(&monthly),
            "quarterly": describe(&quarterly)
        }),
        reasoning: format!(
            "{} monthly and {} quarterly compensation lines",
            monthly.len(),
            quarterly.len()
        ),
    };

    CompensationResult {
        monthly,
        quarterly,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Settlement;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn code(code: &str, kind: CompensationKind, description: &str) -> CompensationCode {
        CompensationCode {
            code: code.to_string(),
            name: format!("name {}", code),
            kind,
            description: description.to_string(),
        }
    }

    fn codes() -> Vec<CompensationCode> {
        vec![
            code("IQE", CompensationKind::Percentage, ""),
            code("IDOC", CompensationKind::Fixed, ""),
            code("PRD", CompensationKind::Percentage, "PRIME de rendement"),
            code("ISP", CompensationKind::Percentage, ""),
        ]
    }

    fn classification(rates: &[(&str, &str)]) -> PractitionerClassification {
        let compensations: BTreeMap<String, Decimal> =
            rates.iter().map(|(c, r)| (c.to_string(), dec(r))).collect();
        PractitionerClassification {
            main_corp: "شبه الطبيين".to_string(),
            sub_corp: "الممرضون".to_string(),
            grade: "ممرض حاصل على شهادة الدولة".to_string(),
            category: "11".to_string(),
            compensations,
        }
    }

    #[test]
    fn test_percentage_and_fixed_codes() {
        let c = classification(&[("IQE", "0.25"), ("IDOC", "2000")]);
        let result = calculate_compensations(Some(&c), &codes(), dec("27900"), 5);

        assert_eq!(result.monthly.len(), 2);
        assert_eq!(result.monthly[0].code, "IQE");
        assert_eq!(result.monthly[0].amount, dec("6975"));
        assert_eq!(result.monthly[1].amount, dec("2000"));
        assert_eq!(result.monthly_total(), dec("8975"));
        assert!(result.quarterly.is_empty());
    }

    #[test]
    fn test_quarterly_codes_are_separated() {
        let c = classification(&[("PRD", "0.30"), ("ISP", "0.10")]);
        let result = calculate_compensations(Some(&c), &codes(), dec("10000"), 5);

        assert_eq!(result.monthly.len(), 1);
        assert_eq!(result.monthly[0].code, "ISP");
        assert_eq!(result.quarterly.len(), 1);
        assert_eq!(result.quarterly[0].settlement, Settlement::Quarterly);
        assert_eq!(result.quarterly[0].amount, dec("3000"));
    }

    #[test]
    fn test_codes_follow_table_order() {
        let c = classification(&[("ISP", "0.10"), ("IQE", "0.25")]);
        let result = calculate_compensations(Some(&c), &codes(), dec("1000"), 5);
        let order: Vec<&str> = result.monthly.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(order, vec!["IQE", "ISP"]);
    }

    #[test]
    fn test_unknown_codes_on_classification_are_ignored() {
        let c = classification(&[("XYZ", "0.50")]);
        let result = calculate_compensations(Some(&c), &codes(), dec("1000"), 5);
        assert!(result.monthly.is_empty());
        assert!(result.quarterly.is_empty());
    }

    #[test]
    fn test_missing_classification_has_no_lines() {
        let result = calculate_compensations(None, &codes(), dec("1000"), 5);
        assert!(result.monthly.is_empty());
        assert_eq!(result.audit_step.rule_id, "compensations");
    }
}
