//! Display-ready view of a salary breakdown.
//!
//! [`SalarySummary`] turns the raw breakdown into labelled sections with
//! formatted amounts. The results endpoint returns it next to the breakdown
//! and the payslip renderer prints it.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CompensationKind, CompensationLine, SalaryBreakdown};

use super::format::{CURRENCY, format_amount, format_rate};

/// Salary details section title.
pub const SALARY_DETAILS: &str = "تفاصيل الراتب";
/// Withholdings section title.
pub const WITHHOLDINGS: &str = "الاقتطاعات";
/// Family allowances section title.
pub const FAMILY_ALLOWANCES: &str = "المنح العائلية";
/// Net salary label.
pub const NET_SALARY: &str = "الراتب الصافي";

/// One labelled amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// Line label.
    pub label: String,
    /// Rate or unit amount shown next to the label, if any.
    pub detail: Option<String>,
    /// Formatted amount.
    pub amount: String,
}

impl SummaryLine {
    fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            detail: None,
            amount: format_amount(amount),
        }
    }

    fn compensation(line: &CompensationLine) -> Self {
        let detail = match line.kind {
            CompensationKind::Percentage => format_rate(line.rate),
            CompensationKind::Fixed => format!("{} {}", format_amount(line.rate), CURRENCY),
        };
        Self {
            label: line.name.clone(),
            detail: Some(detail),
            amount: format_amount(line.amount),
        }
    }
}

/// A titled group of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySection {
    /// Section title.
    pub title: String,
    /// Lines in display order.
    pub lines: Vec<SummaryLine>,
}

/// Ordered, formatted sections for one breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySummary {
    /// Formatted net salary.
    pub net_salary: String,
    /// Sections in display order.
    pub sections: Vec<SummarySection>,
}

/// Pushes a line only when the amount is non-zero.
fn push_optional(lines: &mut Vec<SummaryLine>, label: &str, amount: Decimal) {
    if !amount.is_zero() {
        lines.push(SummaryLine::new(label, amount));
    }
}

impl SalarySummary {
    /// Builds the summary.
    ///
    /// Zero position, risk, incentive and single-income lines are left out.
    /// The family section only appears when allowances are paid, and the
    /// quarterly section only when a quarterly settlement exists.
    pub fn from_breakdown(b: &SalaryBreakdown) -> Self {
        let mut sections = Vec::new();

        let mut details = vec![
            SummaryLine::new("الراتب الأساسي", b.base_salary),
            SummaryLine::new("تعويض الخبرة المهنية", b.seniority_increment),
        ];
        push_optional(&mut details, "المنصب العالي", b.position_bonus);
        details.push(SummaryLine::new("الراتب الرئيسي", b.principal_salary));
        details.extend(b.compensations.iter().map(SummaryLine::compensation));
        push_optional(&mut details, "التعويض عن خطر العدوى", b.risk_bonus);
        push_optional(&mut details, "علاوة الانتفاع", b.incentive_bonus);
        details.push(SummaryLine::new("الأجر الخام", b.gross_salary));
        sections.push(SummarySection {
            title: SALARY_DETAILS.to_string(),
            lines: details,
        });

        let w = &b.withholdings;
        sections.push(SummarySection {
            title: WITHHOLDINGS.to_string(),
            lines: vec![
                SummaryLine::new("الضمان الاجتماعي (9%)", w.social_security),
                SummaryLine::new("الراتب الخاضع للضريبة", w.taxable_base),
                SummaryLine::new("الضريبة على الدخل", w.income_tax),
                SummaryLine::new("إجمالي الاقتطاعات", w.total),
            ],
        });

        let f = &b.family_allowances;
        if !f.total.is_zero() {
            let mut lines = vec![
                SummaryLine::new("منحة الأطفال", f.child_allowance),
                SummaryLine::new("منحة الأطفال فوق 10 سنوات", f.senior_child_allowance),
            ];
            push_optional(&mut lines, "منحة الأجر الوحيد", f.single_income_allowance);
            lines.push(SummaryLine::new("إجمالي المنح العائلية", f.total));
            sections.push(SummarySection {
                title: FAMILY_ALLOWANCES.to_string(),
                lines,
            });
        }

        if let Some(q) = &b.quarterly_bonus {
            let title = b
                .quarterly_compensations
                .first()
                .map(|l| l.name.clone())
                .unwrap_or_else(|| "العلاوة الفصلية".to_string());
            let mut lines: Vec<SummaryLine> = b
                .quarterly_compensations
                .iter()
                .map(SummaryLine::compensation)
                .collect();
            lines.extend([
                SummaryLine::new("مبلغ العلاوة الفصلية", q.gross),
                SummaryLine::new("الضمان الاجتماعي (9%)", q.social_security),
                SummaryLine::new("المبلغ الخاضع للضريبة", q.taxable_base),
                SummaryLine::new("الضريبة على الدخل (10%)", q.income_tax),
                SummaryLine::new("الصافي النهائي (3 أشهر)", q.net),
            ]);
            sections.push(SummarySection { title, lines });
        }

        Self {
            net_salary: format_amount(b.net_salary),
            sections,
        }
    }

    /// Returns the section with the given title.
    pub fn section(&self, title: &str) -> Option<&SummarySection> {
        self.sections.iter().find(|s| s.title == title)
    }
}
