//! Superior position model.
//!
//! A superior position (poste supérieur) is an optional administrative role
//! carrying an index bonus on top of the principal salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire value meaning "no superior position held".
pub const NO_POSITION: &str = "none";

/// A row of the superior position table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperiorPosition {
    /// Position identifier.
    pub id: u32,
    /// Position title.
    pub title: String,
    /// Position level.
    pub level: String,
    /// Point index added to the salary while the role is held.
    pub index_bonus: Decimal,
    /// Main corps the role is open to.
    pub main_corp: String,
    /// Sub-corps the role is open to.
    pub sub_corp: String,
}

/// The position selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSelection {
    /// No superior position.
    #[default]
    None,
    /// The position with this identifier.
    Id(u32),
}

impl PositionSelection {
    /// Parses the `posteSup` navigation parameter.
    ///
    /// Empty, `"none"` and unparseable values all mean no position.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::PositionSelection;
    ///
    /// assert_eq!(PositionSelection::from_param("7"), PositionSelection::Id(7));
    /// assert_eq!(PositionSelection::from_param("none"), PositionSelection::None);
    /// assert_eq!(PositionSelection::from_param(""), PositionSelection::None);
    /// ```
    pub fn from_param(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == NO_POSITION {
            return PositionSelection::None;
        }
        value
            .parse::<u32>()
            .map(PositionSelection::Id)
            .unwrap_or(PositionSelection::None)
    }

    /// Renders the selection as a navigation parameter.
    pub fn to_param(self) -> String {
        match self {
            PositionSelection::None => NO_POSITION.to_string(),
            PositionSelection::Id(id) => id.to_string(),
        }
    }

    /// Returns true if a position is selected.
    pub fn is_selected(self) -> bool {
        matches!(self, PositionSelection::Id(_))
    }
}
