//! Printable plain-text payslip.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::SalaryBreakdown;

use super::format::CURRENCY;
use super::summary::{FAMILY_ALLOWANCES, NET_SALARY, SalarySummary, SummaryLine, WITHHOLDINGS};

const RULE_WIDTH: usize = 56;

fn rule(out: &mut String, ch: char) {
    out.extend(std::iter::repeat_n(ch, RULE_WIDTH));
    out.push('\n');
}

fn line(out: &mut String, item: &SummaryLine) {
    let label = match &item.detail {
        Some(detail) => format!("{} ({})", item.label, detail),
        None => item.label.clone(),
    };
    let _ = writeln!(out, "{:<40} {:>14}", label, item.amount);
}

/// Renders a breakdown as a printable payslip.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use salary_engine::calculation::evaluate_selection;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::{ComputationInput, FamilySituation, PositionSelection};
/// use salary_engine::presentation::render_payslip;
///
/// let loader = ConfigLoader::load("./data/reference")?;
/// let input = ComputationInput {
///     main_corp: "شبه الطبيين".to_string(),
///     sub_corp: "الممرضون".to_string(),
///     grade: "ممرض حاصل على شهادة الدولة".to_string(),
///     seniority_step: 5,
///     position: PositionSelection::None,
///     risk_tier: Default::default(),
///     incentive_level: Default::default(),
///     family: FamilySituation::default(),
/// };
/// let breakdown = evaluate_selection(&input, loader.reference())?;
/// let issued_on = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// println!("{}", render_payslip(&breakdown, issued_on));
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
pub fn render_payslip(b: &SalaryBreakdown, issued_on: NaiveDate) -> String {
    let summary = SalarySummary::from_breakdown(b);
    let mut out = String::new();

    rule(&mut out, '=');
    let _ = writeln!(out, "كشف الراتب");
    let _ = writeln!(out, "{}", issued_on.format("%d/%m/%Y"));
    rule(&mut out, '=');

    let _ = writeln!(out, "السلك: {}", b.main_corp);
    let _ = writeln!(out, "السلك الفرعي: {}", b.sub_corp);
    let _ = writeln!(out, "الرتبة: {}", b.grade);
    let _ = writeln!(out, "الصنف: {} ({})", b.category, b.category_index.normalize());
    let _ = writeln!(out, "الدرجة: {} ({})", b.seniority_step, b.step_index.normalize());
    let _ = writeln!(
        out,
        "المنصب العالي: {}",
        b.position_title.as_deref().unwrap_or("بدون")
    );
    let _ = writeln!(out, "طبيعة العقد: {}", b.track.contract_label());
    let _ = writeln!(out, "خطر العدوى: {}", b.risk_tier.label());

    // The net salary closes the monthly part, before the quarterly one.
    let net_after = if summary.section(FAMILY_ALLOWANCES).is_some() {
        FAMILY_ALLOWANCES
    } else {
        WITHHOLDINGS
    };

    for section in &summary.sections {
        rule(&mut out, '-');
        let _ = writeln!(out, "{}", section.title);
        rule(&mut out, '-');
        for item in &section.lines {
            line(&mut out, item);
        }

        if section.title == net_after {
            rule(&mut out, '=');
            let _ = writeln!(
                out,
                "{:<40} {:>14} {}",
                NET_SALARY, summary.net_salary, CURRENCY
            );
            rule(&mut out, '=');
        }
    }

    let _ = writeln!(out, "تم إنشاء هذا الكشف آليا وهو للاستعلام فقط");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{LookupRows, evaluate};
    use crate::models::{
        ComputationInput, FamilySituation, IncentiveLevel, PositionSelection, RiskTier,
    };

    fn breakdown(family: FamilySituation) -> SalaryBreakdown {
        let input = ComputationInput {
            main_corp: "شبه الطبيين".to_string(),
            sub_corp: "الممرضون".to_string(),
            grade: "ممرض حاصل على شهادة الدولة".to_string(),
            seniority_step: 3,
            position: PositionSelection::None,
            risk_tier: RiskTier::MediumCategory2,
            incentive_level: IncentiveLevel::default(),
            family,
        };
        evaluate(&input, &LookupRows::default())
    }

    fn issued_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_payslip_header() {
        let text = render_payslip(&breakdown(FamilySituation::default()), issued_on());
        assert!(text.contains("كشف الراتب"));
        assert!(text.contains("09/03/2025"));
        assert!(text.contains("الرتبة: ممرض حاصل على شهادة الدولة"));
        assert!(text.contains("الصنف: غير محدد (0)"));
        assert!(text.contains("المنصب العالي: بدون"));
        assert!(text.contains("طبيعة العقد: عقد دائم"));
        assert!(text.contains("خطر العدوى: خطر عدوى متوسط الصنف 2"));
    }

    #[test]
    fn test_net_salary_printed_once() {
        let without_family = render_payslip(&breakdown(FamilySituation::default()), issued_on());
        assert_eq!(without_family.matches(NET_SALARY).count(), 1);

        let with_family =
            render_payslip(&breakdown(FamilySituation::new(1, 0, false)), issued_on());
        assert_eq!(with_family.matches(NET_SALARY).count(), 1);
        assert!(with_family.contains("منحة الأجر الوحيد"));
    }

    #[test]
    fn test_net_salary_follows_family_section() {
        let text = render_payslip(&breakdown(FamilySituation::new(1, 0, true)), issued_on());
        let family = text.find("إجمالي المنح العائلية").unwrap();
        let net = text.find(NET_SALARY).unwrap();
        assert!(net > family);
    }

    #[test]
    fn test_amounts_are_formatted() {
        let text = render_payslip(&breakdown(FamilySituation::default()), issued_on());
        // Risk bonus is the only income when no rows resolve.
        assert!(text.contains("3,000.00"));
    }
}
