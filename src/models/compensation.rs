//! Compensation code model.
//!
//! Compensation codes are the indemnities and allowances a classification can
//! be entitled to. Each code is either a percentage of the principal salary
//! or a fixed amount, and is settled either monthly or quarterly.

use serde::{Deserialize, Serialize};

/// Tag in a code's description marking a quarterly (PRIME) settlement.
pub const QUARTERLY_TAG: &str = "PRIME";

/// How the value recorded on a classification is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompensationKind {
    /// The value is a fraction of the principal salary.
    Percentage,
    /// The value is a monetary amount.
    Fixed,
}

/// When a compensation is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// Included in the monthly gross salary.
    Monthly,
    /// Paid every three months, outside the monthly gross.
    Quarterly,
}

/// A row of the compensation code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationCode {
    /// Short code (e.g. "IQE").
    pub code: String,
    /// Display name.
    pub name: String,
    /// How the recorded value is applied.
    pub kind: CompensationKind,
    /// Free-text description; contains `PRIME` for quarterly bonuses.
    #[serde(default)]
    pub description: String,
}

impl CompensationCode {
    /// Returns the settlement period of this code.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{CompensationCode, CompensationKind, Settlement};
    ///
    /// let code = CompensationCode {
    ///     code: "PRI".to_string(),
    ///     name: "منحة تحسين الأداء".to_string(),
    ///     kind: CompensationKind::Percentage,
    ///     description: "PRIME trimestrielle".to_string(),
    /// };
    /// assert_eq!(code.settlement(), Settlement::Quarterly);
    /// ```
    pub fn settlement(&self) -> Settlement {
        if self.description.contains(QUARTERLY_TAG) {
            Settlement::Quarterly
        } else {
            Settlement::Monthly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_when_no_tag() {
        let code = CompensationCode {
            code: "IQE".to_string(),
            name: "تعويض التأهيل".to_string(),
            kind: CompensationKind::Percentage,
            description: "indemnité mensuelle".to_string(),
        };
        assert_eq!(code.settlement(), Settlement::Monthly);
    }

    #[test]
    fn test_kind_deserializes_from_uppercase() {
        let kind: CompensationKind = serde_yaml::from_str("PERCENTAGE").unwrap();
        assert_eq!(kind, CompensationKind::Percentage);
        let kind: CompensationKind = serde_yaml::from_str("FIXED").unwrap();
        assert_eq!(kind, CompensationKind::Fixed);
    }

    #[test]
    fn test_missing_description_defaults_to_monthly() {
        let yaml = r#"
code: "IFC"
name: "تعويض"
kind: FIXED
"#;
        let code: CompensationCode = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(code.settlement(), Settlement::Monthly);
    }
}
