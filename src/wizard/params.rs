//! Query parameters carried between wizard steps.

use serde::{Deserialize, Serialize};

use crate::models::{
    ComputationInput, FamilySituation, IncentiveLevel, PositionSelection, RiskTier,
};

/// Highest number of children selectable.
pub const MAX_CHILDREN: u32 = 5;

/// The wizard's state as flat string parameters.
///
/// Every field is kept as text so that malformed values never reject a
/// request: numbers that do not parse count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationParams {
    /// Main corps.
    pub main_corp: String,
    /// Sub-corps.
    pub sub_corp: String,
    /// Grade.
    pub grade: String,
    /// Seniority step.
    pub echelon: String,
    /// Superior position id, or `none`.
    pub poste_sup: String,
    /// Contagion-risk tier label.
    pub contagion_level: String,
    /// Incentive level index.
    pub interessement_level: String,
    /// Number of children.
    pub children_count: String,
    /// Number of children older than ten.
    pub older_children_count: String,
    /// `"true"` when the single-income allowance applies (spouse not employed).
    pub spouse_status: String,
}

fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

impl NavigationParams {
    /// Names of the required parameters that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("mainCorp", &self.main_corp),
            ("subCorp", &self.sub_corp),
            ("grade", &self.grade),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Converts the parameters into an evaluator input.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{PositionSelection, RiskTier};
    /// use salary_engine::wizard::NavigationParams;
    ///
    /// let params = NavigationParams {
    ///     main_corp: "شبه الطبيين".to_string(),
    ///     echelon: "abc".to_string(),
    ///     poste_sup: "none".to_string(),
    ///     contagion_level: "خطر عدوى عال".to_string(),
    ///     children_count: "2".to_string(),
    ///     older_children_count: "4".to_string(),
    ///     spouse_status: "true".to_string(),
    ///     ..Default::default()
    /// };
    /// let input = params.into_input();
    /// assert_eq!(input.seniority_step, 0);
    /// assert_eq!(input.position, PositionSelection::None);
    /// assert_eq!(input.risk_tier, RiskTier::High);
    /// assert_eq!(input.family.older_children, 2);
    /// assert!(!input.family.spouse_employed);
    /// ```
    pub fn into_input(self) -> ComputationInput {
        let children = parse_count(&self.children_count).min(MAX_CHILDREN);
        let older_children = parse_count(&self.older_children_count);
        let single_income = self.spouse_status.trim() == "true";

        ComputationInput {
            seniority_step: parse_count(&self.echelon),
            position: PositionSelection::from_param(&self.poste_sup),
            risk_tier: RiskTier::from_label(&self.contagion_level),
            incentive_level: IncentiveLevel::from_param(&self.interessement_level),
            family: FamilySituation::new(children, older_children, !single_income),
            main_corp: self.main_corp,
            sub_corp: self.sub_corp,
            grade: self.grade,
        }
    }

    /// Converts an evaluator input back into parameters.
    pub fn from_input(input: &ComputationInput) -> Self {
        Self {
            main_corp: input.main_corp.clone(),
            sub_corp: input.sub_corp.clone(),
            grade: input.grade.clone(),
            echelon: input.seniority_step.to_string(),
            poste_sup: input.position.to_param(),
            contagion_level: input.risk_tier.label().to_string(),
            interessement_level: input.incentive_level.index().to_string(),
            children_count: input.family.children.to_string(),
            older_children_count: input.family.older_children.to_string(),
            spouse_status: (!input.family.spouse_employed).to_string(),
        }
    }
}
