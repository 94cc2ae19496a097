//! Salary scale model.
//!
//! One row per category: the category's base index and the twelve
//! seniority-step indices used on the standard track.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of seniority steps recorded on a salary scale row.
pub const SCALE_STEPS: usize = 12;

/// A row of the salary scale table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryScale {
    /// The category key.
    pub category: String,
    /// Point index of the category.
    pub base_index: Decimal,
    /// Point index for steps 1 to 12, in order.
    pub steps: [Decimal; SCALE_STEPS],
}

impl SalaryScale {
    /// Returns the index for a seniority step, clamped to `1..=12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use salary_engine::models::SalaryScale;
    ///
    /// let steps = std::array::from_fn(|i| Decimal::from(10 * (i as i64 + 1)));
    /// let scale = SalaryScale {
    ///     category: "7".to_string(),
    ///     base_index: Decimal::from(300),
    ///     steps,
    /// };
    /// assert_eq!(scale.step_index(0), Decimal::from(10));
    /// assert_eq!(scale.step_index(5), Decimal::from(50));
    /// assert_eq!(scale.step_index(40), Decimal::from(120));
    /// ```
    pub fn step_index(&self, step: u32) -> Decimal {
        let clamped = (step as usize).clamp(1, SCALE_STEPS);
        self.steps[clamped - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> SalaryScale {
        SalaryScale {
            category: "11".to_string(),
            base_index: Decimal::from(300),
            steps: std::array::from_fn(|i| Decimal::from(64 * (i as i64 + 1))),
        }
    }

    #[test]
    fn test_step_index_in_range() {
        let scale = scale();
        for step in 1..=12u32 {
            assert_eq!(scale.step_index(step), Decimal::from(64 * step as i64));
        }
    }

    #[test]
    fn test_step_index_clamps_low_and_high() {
        let scale = scale();
        assert_eq!(scale.step_index(0), Decimal::from(64));
        assert_eq!(scale.step_index(13), Decimal::from(768));
        assert_eq!(scale.step_index(32), Decimal::from(768));
    }

    #[test]
    fn test_deserialize_requires_twelve_steps() {
        let yaml = r#"
category: "11"
base_index: 300
steps: [64, 128, 192]
"#;
        let result: Result<SalaryScale, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
