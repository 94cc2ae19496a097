//! Monetary amount formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::round_money;

/// Currency suffix printed after amounts.
pub const CURRENCY: &str = "دج";

/// Separators used when rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Thousands separator.
    pub group: String,
    /// Decimal separator.
    pub decimal: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group: ",".to_string(),
            decimal: ".".to_string(),
        }
    }
}

impl NumberFormat {
    /// Formats an amount with exactly two decimals, rounding halves away
    /// from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use salary_engine::presentation::NumberFormat;
    ///
    /// let format = NumberFormat {
    ///     group: " ".to_string(),
    ///     decimal: ",".to_string(),
    /// };
    /// assert_eq!(format.format(Decimal::from(33700)), "33 700,00");
    /// ```
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = round_money(amount);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(2);

        let text = rounded.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let digits: Vec<char> = integer.chars().collect();
        let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.group);
            }
            grouped.push(*digit);
        }

        format!(
            "{}{}{}{}",
            if negative { "-" } else { "" },
            grouped,
            self.decimal,
            fraction
        )
    }
}

/// Formats an amount with the default separators.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::presentation::format_amount;
///
/// assert_eq!(format_amount(Decimal::new(308689417, 4)), "30,868.94");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    NumberFormat::default().format(amount)
}

/// Formats a fractional rate as a whole percentage, e.g. `0.25` as `25%`.
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", percent.normalize())
}
