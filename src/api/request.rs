//! Request types for the salary engine API.
//!
//! This module defines the JSON body of `POST /calculate` and the query
//! strings of the lookup endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ComputationInput, FamilySituation, IncentiveLevel, PositionSelection, RiskTier, Track,
};
use crate::wizard::MAX_CHILDREN;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Main corps.
    pub main_corp: String,
    /// Sub-corps.
    pub sub_corp: String,
    /// Grade.
    pub grade: String,
    /// Seniority step (echelon, or years on the contractual track).
    #[serde(default)]
    pub seniority_step: u32,
    /// Superior position.
    #[serde(default)]
    pub position: PositionSelection,
    /// Contagion-risk tier.
    #[serde(default)]
    pub risk_tier: RiskTier,
    /// Incentive level, 0 to 5.
    #[serde(default)]
    pub incentive_level: IncentiveLevel,
    /// Family situation.
    #[serde(default)]
    pub family: FamilyRequest,
}

/// Family situation in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyRequest {
    /// Number of children.
    pub children: u32,
    /// Number of children older than ten.
    pub older_children: u32,
    /// Whether the spouse has an income.
    pub spouse_employed: bool,
}

impl CalculationRequest {
    /// Validates the request and converts it into an evaluator input.
    ///
    /// The seniority step must fit the track; children are clamped like the
    /// wizard does.
    pub fn into_input(self) -> EngineResult<ComputationInput> {
        let max = Track::for_main_corp(&self.main_corp).max_step();
        if self.seniority_step > max {
            return Err(EngineError::invalid_selection(
                "seniority_step",
                format!("must be between 0 and {}", max),
            ));
        }

        let children = self.family.children.min(MAX_CHILDREN);
        Ok(ComputationInput {
            main_corp: self.main_corp,
            sub_corp: self.sub_corp,
            grade: self.grade,
            seniority_step: self.seniority_step,
            position: self.position,
            risk_tier: self.risk_tier,
            incentive_level: self.incentive_level,
            family: FamilySituation::new(
                children,
                self.family.older_children,
                self.family.spouse_employed,
            ),
        })
    }
}

/// Query string selecting a main corps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainCorpQuery {
    /// Main corps.
    pub main_corp: String,
}

/// Query string selecting a sub-corps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubCorpQuery {
    /// Main corps.
    pub main_corp: String,
    /// Sub-corps.
    pub sub_corp: String,
}

/// Query string of the practitioner data endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PractitionerQuery {
    /// Main corps.
    pub main_corp: String,
    /// Sub-corps.
    pub sub_corp: String,
    /// Grade.
    pub grade: String,
    /// Superior position id, or `none`.
    pub poste_sup: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CONTRACTUAL_MAIN_CORP;

    fn request(main_corp: &str, seniority_step: u32) -> CalculationRequest {
        CalculationRequest {
            main_corp: main_corp.to_string(),
            sub_corp: "x".to_string(),
            grade: "y".to_string(),
            seniority_step,
            position: PositionSelection::None,
            risk_tier: RiskTier::None,
            incentive_level: IncentiveLevel::default(),
            family: FamilyRequest {
                children: 7,
                older_children: 9,
                spouse_employed: false,
            },
        }
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{"main_corp":"a","sub_corp":"b","grade":"c"}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.seniority_step, 0);
        assert_eq!(request.position, PositionSelection::None);
        assert_eq!(request.family.children, 0);
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "main_corp": "a", "sub_corp": "b", "grade": "c",
            "seniority_step": 4,
            "position": {"id": 2},
            "risk_tier": "very_high",
            "incentive_level": 3,
            "family": {"children": 2, "older_children": 1, "spouse_employed": true}
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.position, PositionSelection::Id(2));
        assert_eq!(request.risk_tier, RiskTier::VeryHigh);
        assert_eq!(request.incentive_level.index(), 3);
        assert!(request.family.spouse_employed);
    }

    #[test]
    fn test_into_input_clamps_family() {
        let input = request("شبه الطبيين", 3).into_input().unwrap();
        assert_eq!(input.family.children, MAX_CHILDREN);
        assert_eq!(input.family.older_children, MAX_CHILDREN);
    }

    #[test]
    fn test_into_input_bounds_seniority_by_track() {
        assert!(request("شبه الطبيين", 13).into_input().is_err());
        assert!(request(CONTRACTUAL_MAIN_CORP, 32).into_input().is_ok());
        assert!(matches!(
            request(CONTRACTUAL_MAIN_CORP, 33).into_input(),
            Err(EngineError::InvalidSelection { .. })
        ));
    }
}
