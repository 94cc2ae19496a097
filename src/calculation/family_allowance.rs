//! Family allowances.
//!
//! Allowances depend only on the family situation, never on the salary.

use rust_decimal::Decimal;

use crate::models::{AuditStep, FamilyAllowances, FamilySituation};

/// Monthly allowance per dependent child.
pub fn child_allowance_rate() -> Decimal {
    Decimal::from(300)
}

/// Monthly allowance per child older than ten.
pub fn senior_child_allowance_rate() -> Decimal {
    Decimal::new(1125, 2)
}

/// Monthly single-income allowance.
pub fn single_income_allowance_rate() -> Decimal {
    Decimal::from(800)
}

/// The result of the family allowance step.
#[derive(Debug, Clone)]
pub struct FamilyAllowanceResult {
    /// The allowances.
    pub allowances: FamilyAllowances,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates family allowances.
///
/// Older children are clamped to the number of children. The single-income
/// allowance is paid when there is at least one child and the spouse has no
/// income.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::calculate_family_allowances;
/// use salary_engine::models::FamilySituation;
///
/// let result = calculate_family_allowances(&FamilySituation::new(2, 1, false), 12);
/// assert_eq!(result.allowances.total, Decimal::new(141125, 2));
/// ```
pub fn calculate_family_allowances(
    family: &FamilySituation,
    step_number: u32,
) -> FamilyAllowanceResult {
    let children = family.children;
    let older_children = family.older_children.min(children);

    let child_allowance = Decimal::from(children) * child_allowance_rate();
    let senior_child_allowance = Decimal::from(older_children) * senior_child_allowance_rate();
    let single_income_allowance = if children > 0 && !family.spouse_employed {
        single_income_allowance_rate()
    } else {
        Decimal::ZERO
    };
    let total = child_allowance + senior_child_allowance + single_income_allowance;

    let audit_step = AuditStep {
        step_number,
        rule_id: "family_allowances".to_string(),
        rule_name: "Family Allowances".to_string(),
        input: serde_json::json!({
            "children": children,
            "older_children": older_children,
            "spouse_employed": family.spouse_employed
        }),
        output: serde_json::json!({
            "child_allowance": child_allowance.normalize().to_string(),
            "senior_child_allowance": senior_child_allowance.normalize().to_string(),
            "single_income_allowance": single_income_allowance.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} × 300 + {} × 11.25 + {} = {}",
            children,
            older_children,
            single_income_allowance.normalize(),
            total.normalize()
        ),
    };

    FamilyAllowanceResult {
        allowances: FamilyAllowances {
            child_allowance,
            senior_child_allowance,
            single_income_allowance,
            total,
        },
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
    fn test_no_children_no_allowances() {
        let result = calculate_family_allowances(&FamilySituation::new(0, 0, false), 12);
        assert_eq!(result.allowances, FamilyAllowances::default());
    }

    #[test]
    fn test_children_with_employed_spouse() {
        let result = calculate_family_allowances(&FamilySituation::new(2, 1, true), 12);
        assert_eq!(result.allowances.child_allowance, dec("600"));
        assert_eq!(result.allowances.senior_child_allowance, dec("11.25"));
        assert_eq!(result.allowances.single_income_allowance, Decimal::ZERO);
        assert_eq!(result.allowances.total, dec("611.25"));
    }

    #[test]
    fn test_single_income_allowance() {
        let result = calculate_family_allowances(&FamilySituation::new(3, 0, false), 12);
        assert_eq!(result.allowances.single_income_allowance, dec("800"));
        assert_eq!(result.allowances.total, dec("1700"));
    }

    #[test]
    fn test_older_children_clamped_even_when_built_directly() {
        let family = FamilySituation {
            children: 1,
            older_children: 4,
            spouse_employed: true,
        };
        let result = calculate_family_allowances(&family, 12);
        assert_eq!(result.allowances.senior_child_allowance, dec("11.25"));
        assert_eq!(result.audit_step.input["older_children"], 1);
    }
}
