//! Salary evaluation pipeline.
//!
//! [`evaluate`] runs every rule in order over one selection and the rows
//! looked up for it, producing a [`SalaryBreakdown`] with its audit trace.
//! It never fails: missing rows degrade to zero and leave a warning.

use crate::config::{LookupBundle, ReferenceData};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationCode, ComputationInput,
    INCENTIVE_MAIN_CORP, PractitionerClassification, SalaryBreakdown, SalaryScale,
    SuperiorPosition, Track, Withholdings,
};

use super::{
    calculate_base_salary, calculate_compensations, calculate_family_allowances,
    calculate_incentive_bonus, calculate_income_tax, calculate_position_bonus,
    calculate_quarterly_bonus, calculate_risk_bonus, calculate_seniority_increment,
    calculate_withholding,
};

/// Category shown when the classification could not be resolved.
pub const UNKNOWN_CATEGORY: &str = "غير محدد";

/// The reference rows an evaluation reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupRows<'a> {
    /// The matched classification.
    pub classification: Option<&'a PractitionerClassification>,
    /// The salary scale row of its category.
    pub salary_scale: Option<&'a SalaryScale>,
    /// The selected superior position.
    pub position: Option<&'a SuperiorPosition>,
    /// All compensation codes.
    pub compensation_codes: &'a [CompensationCode],
}

impl<'a> From<LookupBundle<'a>> for LookupRows<'a> {
    fn from(bundle: LookupBundle<'a>) -> Self {
        Self {
            classification: Some(bundle.practitioner),
            salary_scale: bundle.salary_scale,
            position: bundle.position,
            compensation_codes: bundle.compensation_codes,
        }
    }
}

impl<'a> LookupRows<'a> {
    /// Resolves the rows for an input without failing on a missing
    /// classification.
    pub fn resolve(input: &ComputationInput, reference: &'a ReferenceData) -> Self {
        let classification = reference
            .find_classification(&input.main_corp, &input.sub_corp, &input.grade)
            .ok();
        Self {
            classification,
            salary_scale: classification.and_then(|c| reference.salary_scale(&c.category)),
            position: reference.position(input.position),
            compensation_codes: reference.compensation_codes(),
        }
    }
}

fn warning(code: &str, message: String, severity: &str) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

/// Evaluates the salary for one selection.
///
/// The evaluation is pure: the same input and rows always produce the same
/// breakdown.
pub fn evaluate(input: &ComputationInput, rows: &LookupRows<'_>) -> SalaryBreakdown {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let track = Track::for_main_corp(&input.main_corp);
    let incentive_eligible = input.main_corp == INCENTIVE_MAIN_CORP;

    match rows.classification {
        None => warnings.push(warning(
            "CLASSIFICATION_MISSING",
            format!(
                "No classification for {} / {} / {}",
                input.main_corp, input.sub_corp, input.grade
            ),
            "high",
        )),
        Some(c) if rows.salary_scale.is_none() => warnings.push(warning(
            "SALARY_SCALE_MISSING",
            format!("No salary scale for category {}", c.category),
            "high",
        )),
        Some(_) => {}
    }
    if input.position.is_selected() && rows.position.is_none() {
        warnings.push(warning(
            "POSITION_NOT_FOUND",
            format!("Superior position {} does not exist", input.position.to_param()),
            "medium",
        ));
    }
    if !incentive_eligible && input.incentive_level.index() > 0 {
        warnings.push(warning(
            "INCENTIVE_NOT_APPLICABLE",
            format!(
                "Incentive level {} ignored for main corps {}",
                input.incentive_level.index(),
                input.main_corp
            ),
            "low",
        ));
    }

    // Principal salary
    let base = calculate_base_salary(rows.salary_scale, step_number);
    audit_steps.push(base.audit_step);
    step_number += 1;

    let seniority = calculate_seniority_increment(
        rows.salary_scale,
        track,
        input.seniority_step,
        base.base_salary,
        step_number,
    );
    audit_steps.push(seniority.audit_step);
    step_number += 1;

    let principal_salary = base.base_salary + seniority.increment;

    // Additions
    let position = calculate_position_bonus(rows.position, step_number);
    audit_steps.push(position.audit_step);
    step_number += 1;

    let compensations = calculate_compensations(
        rows.classification,
        rows.compensation_codes,
        principal_salary,
        step_number,
    );
    let monthly_compensations = compensations.monthly_total();
    audit_steps.push(compensations.audit_step);
    step_number += 1;

    let risk = calculate_risk_bonus(input.risk_tier, step_number);
    audit_steps.push(risk.audit_step);
    step_number += 1;

    let incentive =
        calculate_incentive_bonus(input.incentive_level, incentive_eligible, step_number);
    audit_steps.push(incentive.audit_step);
    step_number += 1;

    let gross_salary =
        principal_salary + position.amount + monthly_compensations + risk.amount + incentive.amount;

    // Withholdings
    let withholding = calculate_withholding(gross_salary, step_number);
    audit_steps.push(withholding.audit_step);
    step_number += 1;

    let income_tax = calculate_income_tax(withholding.taxable_base, step_number);
    audit_steps.push(income_tax.audit_step);
    step_number += 1;

    let family = calculate_family_allowances(&input.family, step_number);
    audit_steps.push(family.audit_step);
    step_number += 1;

    let net_salary = gross_salary - withholding.social_security - income_tax.amount
        + family.allowances.total;

    let quarterly = calculate_quarterly_bonus(&compensations.quarterly, step_number);
    audit_steps.push(quarterly.audit_step);

    SalaryBreakdown {
        main_corp: input.main_corp.clone(),
        sub_corp: input.sub_corp.clone(),
        grade: input.grade.clone(),
        category: rows
            .classification
            .map(|c| c.category.clone())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        category_index: base.base_index,
        seniority_step: input.seniority_step,
        step_index: seniority.step_index,
        track,
        position_title: rows.position.map(|p| p.title.clone()),
        risk_tier: input.risk_tier,
        base_salary: base.base_salary,
        seniority_increment: seniority.increment,
        principal_salary,
        position_bonus: position.amount,
        compensations: compensations.monthly,
        risk_bonus: risk.amount,
        incentive_bonus: incentive.amount,
        gross_salary,
        withholdings: Withholdings {
            social_security: withholding.social_security,
            taxable_base: withholding.taxable_base,
            income_tax: income_tax.amount,
            total: withholding.social_security + income_tax.amount,
        },
        family_allowances: family.allowances,
        net_salary,
        quarterly_compensations: compensations.quarterly,
        quarterly_bonus: quarterly.bonus,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
        },
    }
}

/// Looks up a selection in the reference data and evaluates it.
///
/// Unlike [`evaluate`], an unknown classification is an error here.
pub fn evaluate_selection(
    input: &ComputationInput,
    reference: &ReferenceData,
) -> EngineResult<SalaryBreakdown> {
    let bundle =
        reference.lookup_bundle(&input.main_corp, &input.sub_corp, &input.grade, input.position)?;
    Ok(evaluate(input, &LookupRows::from(bundle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::round_money;
    use rust_decimal::Decimal;
    use crate::error::EngineError;
    use crate::models::{
        CompensationKind, FamilySituation, IncentiveLevel, PositionSelection, RiskTier,
        CONTRACTUAL_MAIN_CORP,
    };
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn nurse() -> PractitionerClassification {
        PractitionerClassification {
            main_corp: "شبه الطبيين".to_string(),
            sub_corp: "الممرضون".to_string(),
            grade: "ممرض حاصل على شهادة الدولة".to_string(),
            category: "11".to_string(),
            compensations: BTreeMap::new(),
        }
    }

    fn scale() -> SalaryScale {
        SalaryScale {
            category: "11".to_string(),
            base_index: Decimal::from(300),
            steps: std::array::from_fn(|i| Decimal::from(64 * (i as i64 + 1))),
        }
    }

    fn input(main_corp: &str, step: u32) -> ComputationInput {
        ComputationInput {
            main_corp: main_corp.to_string(),
            sub_corp: "الممرضون".to_string(),
            grade: "ممرض حاصل على شهادة الدولة".to_string(),
            seniority_step: step,
            position: PositionSelection::None,
            risk_tier: RiskTier::High,
            incentive_level: IncentiveLevel::default(),
            family: FamilySituation::new(2, 1, true),
        }
    }

    #[test]
    fn test_end_to_end_without_compensations() {
        let classification = nurse();
        let scale = scale();
        let rows = LookupRows {
            classification: Some(&classification),
            salary_scale: Some(&scale),
            position: None,
            compensation_codes: &[],
        };

        let b = evaluate(&input("شبه الطبيين", 5), &rows);

        assert_eq!(b.base_salary, dec("13500"));
        assert_eq!(b.seniority_increment, dec("14400"));
        assert_eq!(b.principal_salary, dec("27900"));
        assert_eq!(b.gross_salary, dec("33700"));
        assert_eq!(b.withholdings.social_security, dec("3033"));
        assert_eq!(b.withholdings.taxable_base, dec("30660"));
        assert_eq!(round_money(b.withholdings.income_tax), dec("409.31"));
        assert_eq!(b.family_allowances.total, dec("611.25"));
        assert_eq!(round_money(b.net_salary), dec("30868.94"));
        assert!(b.quarterly_bonus.is_none());
        assert!(b.audit_trace.warnings.is_empty());
        assert_eq!(b.audit_trace.steps.len(), 10);
    }

    #[test]
    fn test_net_identity() {
        let classification = nurse();
        let scale = scale();
        let rows = LookupRows {
            classification: Some(&classification),
            salary_scale: Some(&scale),
            position: None,
            compensation_codes: &[],
        };
        let b = evaluate(&input("شبه الطبيين", 9), &rows);
        assert_eq!(
            b.net_salary,
            b.gross_salary - b.withholdings.total + b.family_allowances.total
        );
    }

    #[test]
    fn test_compensations_and_quarterly_settlement() {
        let mut classification = nurse();
        classification
            .compensations
            .insert("ISAS".to_string(), dec("0.20"));
        classification
            .compensations
            .insert("PRD".to_string(), dec("0.30"));
        let codes = vec![
            CompensationCode {
                code: "ISAS".to_string(),
                name: "تعويض دعم النشاطات الصحية".to_string(),
                kind: CompensationKind::Percentage,
                description: String::new(),
            },
            CompensationCode {
                code: "PRD".to_string(),
                name: "منحة المردودية".to_string(),
                kind: CompensationKind::Percentage,
                description: "PRIME de rendement".to_string(),
            },
        ];
        let scale = scale();
        let rows = LookupRows {
            classification: Some(&classification),
            salary_scale: Some(&scale),
            position: None,
            compensation_codes: &codes,
        };

        let b = evaluate(&input("شبه الطبيين", 5), &rows);

        assert_eq!(b.compensations.len(), 1);
        assert_eq!(b.compensations[0].amount, dec("5580"));
        assert_eq!(b.gross_salary, dec("39280"));
        assert_eq!(b.quarterly_compensations.len(), 1);
        let quarterly = b.quarterly_bonus.unwrap();
        assert_eq!(quarterly.gross, dec("25110"));
        assert_eq!(quarterly.net, dec("20565.09"));
    }

    #[test]
    fn test_contractual_track() {
        let classification = PractitionerClassification {
            main_corp: CONTRACTUAL_MAIN_CORP.to_string(),
            ..nurse()
        };
        let scale = scale();
        let rows = LookupRows {
            classification: Some(&classification),
            salary_scale: Some(&scale),
            position: None,
            compensation_codes: &[],
        };

        let b = evaluate(&input(CONTRACTUAL_MAIN_CORP, 10), &rows);

        assert_eq!(b.track, Track::Contractual);
        assert_eq!(b.step_index, dec("1.4"));
        assert_eq!(b.seniority_increment, dec("1890"));
    }

    #[test]
    fn test_incentive_only_for_specialists() {
        let classification = PractitionerClassification {
            main_corp: INCENTIVE_MAIN_CORP.to_string(),
            ..nurse()
        };
        let scale = scale();
        let rows = LookupRows {
            classification: Some(&classification),
            salary_scale: Some(&scale),
            position: None,
            compensation_codes: &[],
        };

        let mut specialist = input(INCENTIVE_MAIN_CORP, 5);
        specialist.incentive_level = IncentiveLevel::new(3);
        assert_eq!(evaluate(&specialist, &rows).incentive_bonus, dec("12000"));

        let mut other = input("شبه الطبيين", 5);
        other.incentive_level = IncentiveLevel::new(3);
        let b = evaluate(&other, &rows);
        assert_eq!(b.incentive_bonus, Decimal::ZERO);
        assert_eq!(b.audit_trace.warnings[0].code, "INCENTIVE_NOT_APPLICABLE");
    }

    #[test]
    fn test_missing_rows_degrade_to_zero() {
        let b = evaluate(&input("شبه الطبيين", 5), &LookupRows::default());

        assert_eq!(b.category, UNKNOWN_CATEGORY);
        assert_eq!(b.base_salary, Decimal::ZERO);
        assert_eq!(b.principal_salary, Decimal::ZERO);
        // Only the risk bonus remains.
        assert_eq!(b.gross_salary, dec("5800"));
        assert_eq!(b.audit_trace.warnings[0].code, "CLASSIFICATION_MISSING");
    }

    #[test]
    fn test_missing_position_warns() {
        let mut selection = input("شبه الطبيين", 5);
        selection.position = PositionSelection::Id(99);
        let b = evaluate(&selection, &LookupRows::default());
        assert!(b
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "POSITION_NOT_FOUND"));
        assert_eq!(b.position_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let classification = nurse();
        let scale = scale();
        let rows = LookupRows {
            classification: Some(&classification),
            salary_scale: Some(&scale),
            position: None,
            compensation_codes: &[],
        };
        let selection = input("شبه الطبيين", 7);
        assert_eq!(evaluate(&selection, &rows), evaluate(&selection, &rows));
    }

    #[test]
    fn test_evaluate_selection_requires_classification() {
        let reference =
            ReferenceData::new(vec![nurse()], vec![scale()], vec![], vec![]).unwrap();

        let b = evaluate_selection(&input("شبه الطبيين", 5), &reference).unwrap();
        assert_eq!(b.category, "11");

        let result = evaluate_selection(&input("غير موجود", 5), &reference);
        assert!(matches!(result, Err(EngineError::ClassificationNotFound { .. })));
    }

    #[test]
    fn test_resolve_tolerates_unknown_classification() {
        let reference =
            ReferenceData::new(vec![nurse()], vec![scale()], vec![], vec![]).unwrap();
        let rows = LookupRows::resolve(&input("غير موجود", 5), &reference);
        assert!(rows.classification.is_none());
        assert!(rows.salary_scale.is_none());
    }
}
