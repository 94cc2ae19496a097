//! Presentation of salary breakdowns.
//!
//! Amount formatting, the sectioned summary returned by the results
//! endpoint, and the printable payslip.

mod format;
mod payslip;
mod summary;

pub use format::{CURRENCY, NumberFormat, format_amount, format_rate};
pub use payslip::render_payslip;
pub use summary::{
    FAMILY_ALLOWANCES, NET_SALARY, SALARY_DETAILS, SalarySummary, SummaryLine, SummarySection,
    WITHHOLDINGS,
};
