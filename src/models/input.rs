//! Computation input models.
//!
//! These types capture one user's selections. They are built per request
//! and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PositionSelection;

/// Contagion-risk exposure tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Not exposed.
    #[default]
    None,
    /// Medium risk, category 3.
    MediumCategory3,
    /// Medium risk, category 2.
    MediumCategory2,
    /// Medium risk, category 1.
    MediumCategory1,
    /// High risk.
    High,
    /// Very high risk.
    VeryHigh,
}

impl RiskTier {
    /// All tiers in ascending order.
    pub const ALL: [RiskTier; 6] = [
        RiskTier::None,
        RiskTier::MediumCategory3,
        RiskTier::MediumCategory2,
        RiskTier::MediumCategory1,
        RiskTier::High,
        RiskTier::VeryHigh,
    ];

    /// The label used in navigation parameters and on payslips.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::None => "غير مستفيد",
            RiskTier::MediumCategory3 => "خطر عدوى متوسط الصنف 3",
            RiskTier::MediumCategory2 => "خطر عدوى متوسط الصنف 2",
            RiskTier::MediumCategory1 => "خطر عدوى متوسط الصنف 1",
            RiskTier::High => "خطر عدوى عال",
            RiskTier::VeryHigh => "خطر عدوى عال جدا",
        }
    }

    /// Monthly bonus paid for the tier.
    pub fn monthly_value(self) -> Decimal {
        match self {
            RiskTier::None => Decimal::ZERO,
            RiskTier::MediumCategory3 => Decimal::from(2500),
            RiskTier::MediumCategory2 => Decimal::from(3000),
            RiskTier::MediumCategory1 => Decimal::from(4000),
            RiskTier::High => Decimal::from(5800),
            RiskTier::VeryHigh => Decimal::from(7200),
        }
    }

    /// Looks a tier up by its label. Unknown labels mean no exposure.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::RiskTier;
    ///
    /// assert_eq!(RiskTier::from_label("خطر عدوى عال"), RiskTier::High);
    /// assert_eq!(RiskTier::from_label("0"), RiskTier::None);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.label() == label)
            .unwrap_or_default()
    }
}

/// Incentive (intéressement) bonus level, 0 to 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct IncentiveLevel(u8);

impl From<u8> for IncentiveLevel {
    fn from(level: u8) -> Self {
        IncentiveLevel::new(level)
    }
}

impl From<IncentiveLevel> for u8 {
    fn from(level: IncentiveLevel) -> Self {
        level.0
    }
}

impl IncentiveLevel {
    /// Highest selectable level.
    pub const MAX: u8 = 5;

    const VALUES: [i64; 6] = [0, 8000, 10000, 12000, 17000, 24000];

    /// Creates a level, clamping out-of-range values to 0.
    pub fn new(level: u8) -> Self {
        if level > Self::MAX {
            IncentiveLevel(0)
        } else {
            IncentiveLevel(level)
        }
    }

    /// Parses the `interessementLevel` navigation parameter.
    ///
    /// Unparseable and out-of-range values mean no incentive.
    pub fn from_param(value: &str) -> Self {
        value
            .trim()
            .parse::<u8>()
            .map(Self::new)
            .unwrap_or_default()
    }

    /// The level number.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Monthly bonus paid for the level.
    pub fn monthly_value(self) -> Decimal {
        Decimal::from(Self::VALUES[self.0 as usize])
    }
}

/// Family situation used for family allowances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySituation {
    /// Number of dependent children.
    pub children: u32,
    /// Number of those children older than ten.
    pub older_children: u32,
    /// Whether the spouse has an income of their own.
    pub spouse_employed: bool,
}

impl FamilySituation {
    /// Creates a family situation, clamping older children to the total.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::FamilySituation;
    ///
    /// let family = FamilySituation::new(2, 5, true);
    /// assert_eq!(family.older_children, 2);
    /// ```
    pub fn new(children: u32, older_children: u32, spouse_employed: bool) -> Self {
        Self {
            children,
            older_children: older_children.min(children),
            spouse_employed,
        }
    }
}

/// Everything the evaluator needs besides the lookup rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationInput {
    /// Selected main corps.
    pub main_corp: String,
    /// Selected sub-corps.
    pub sub_corp: String,
    /// Selected grade.
    pub grade: String,
    /// Seniority step (echelon or contract years).
    pub seniority_step: u32,
    /// Selected superior position.
    #[serde(default)]
    pub position: PositionSelection,
    /// Contagion-risk tier.
    #[serde(default)]
    pub risk_tier: RiskTier,
    /// Incentive level.
    #[serde(default)]
    pub incentive_level: IncentiveLevel,
    /// Family situation.
    #[serde(default)]
    pub family: FamilySituation,
}
