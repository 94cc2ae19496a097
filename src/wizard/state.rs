//! Wizard state and its transitions.

use serde::{Deserialize, Serialize};

use crate::config::ReferenceData;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ComputationInput, FamilySituation, INCENTIVE_MAIN_CORP, IncentiveLevel, PositionSelection,
    RiskTier, Track,
};

use super::params::{MAX_CHILDREN, NavigationParams};

/// The page the wizard is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Choosing main corps, sub-corps and grade.
    #[default]
    Classification,
    /// Choosing the seniority step.
    Seniority,
    /// Choosing position, risk, incentive and family situation.
    Extras,
    /// Showing the results.
    Results,
}

/// The user's selections so far.
///
/// Transitions never mutate: each returns a new state, or
/// `InvalidSelection` when the value is not allowed at this point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Current page.
    pub step: WizardStep,
    /// Selected main corps.
    pub main_corp: Option<String>,
    /// Selected sub-corps.
    pub sub_corp: Option<String>,
    /// Selected grade.
    pub grade: Option<String>,
    /// Category of the selected grade.
    pub category: Option<String>,
    /// Seniority step.
    pub seniority_step: u32,
    /// Superior position.
    pub position: PositionSelection,
    /// Contagion-risk tier.
    pub risk_tier: RiskTier,
    /// Incentive level.
    pub incentive_level: IncentiveLevel,
    /// Family situation.
    pub family: FamilySituation,
}

impl WizardState {
    /// A fresh wizard on the classification page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seniority track of the selected main corps.
    pub fn track(&self) -> Track {
        Track::for_main_corp(self.main_corp.as_deref().unwrap_or_default())
    }

    /// Highest seniority step selectable.
    pub fn max_step(&self) -> u32 {
        self.track().max_step()
    }

    /// Returns true if the incentive bonus can be selected.
    pub fn incentive_eligible(&self) -> bool {
        self.main_corp.as_deref() == Some(INCENTIVE_MAIN_CORP)
    }

    /// Selects the main corps.
    ///
    /// Everything downstream is reset. When the corps has a single sub-corps
    /// it is selected too, and likewise for a single grade.
    pub fn select_main_corp(&self, reference: &ReferenceData, main_corp: &str) -> EngineResult<Self> {
        if !reference.main_corps().contains(&main_corp) {
            return Err(EngineError::invalid_selection(
                "mainCorp",
                format!("unknown main corps '{}'", main_corp),
            ));
        }

        let state = Self {
            main_corp: Some(main_corp.to_string()),
            ..Self::default()
        };

        match reference.sub_corps(main_corp).as_slice() {
            [only] => state.select_sub_corp(reference, only),
            _ => Ok(state),
        }
    }

    /// Selects the sub-corps, resetting the grade and everything after it.
    pub fn select_sub_corp(&self, reference: &ReferenceData, sub_corp: &str) -> EngineResult<Self> {
        let main_corp = self.require_main_corp()?;
        if !reference.sub_corps(main_corp).contains(&sub_corp) {
            return Err(EngineError::invalid_selection(
                "subCorp",
                format!("'{}' is not a sub-corps of '{}'", sub_corp, main_corp),
            ));
        }

        let state = Self {
            main_corp: Some(main_corp.to_string()),
            sub_corp: Some(sub_corp.to_string()),
            ..Self::default()
        };

        match reference.grades(main_corp, sub_corp).as_slice() {
            [only] => state.select_grade(reference, only),
            _ => Ok(state),
        }
    }

    /// Selects the grade, resolves its category and moves to the seniority
    /// page.
    pub fn select_grade(&self, reference: &ReferenceData, grade: &str) -> EngineResult<Self> {
        let main_corp = self.require_main_corp()?;
        let sub_corp = self.sub_corp.as_deref().ok_or_else(|| {
            EngineError::invalid_selection("subCorp", "select a sub-corps first")
        })?;
        if !reference.grades(main_corp, sub_corp).contains(&grade) {
            return Err(EngineError::invalid_selection(
                "grade",
                format!("'{}' is not a grade of '{}'", grade, sub_corp),
            ));
        }
        let classification = reference.find_classification(main_corp, sub_corp, grade)?;

        Ok(Self {
            step: WizardStep::Seniority,
            main_corp: Some(main_corp.to_string()),
            sub_corp: Some(sub_corp.to_string()),
            grade: Some(grade.to_string()),
            category: Some(classification.category.clone()),
            ..Self::default()
        })
    }

    /// Sets the seniority step and moves to the extras page.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::wizard::WizardState;
    ///
    /// // No grade selected yet.
    /// assert!(WizardState::new().set_seniority(3).is_err());
    /// ```
    pub fn set_seniority(&self, step: u32) -> EngineResult<Self> {
        if self.step < WizardStep::Seniority {
            return Err(EngineError::invalid_selection("echelon", "select a grade first"));
        }
        let max = self.max_step();
        if step > max {
            return Err(EngineError::invalid_selection(
                "echelon",
                format!("must be between 0 and {}", max),
            ));
        }

        Ok(Self {
            step: WizardStep::Extras,
            seniority_step: step,
            ..self.clone()
        })
    }

    /// Sets the superior position, risk tier and incentive level.
    ///
    /// The position must be open to the selected sub-corps. The incentive
    /// level is forced to zero outside the eligible corps.
    pub fn set_extras(
        &self,
        reference: &ReferenceData,
        position: PositionSelection,
        risk_tier: RiskTier,
        incentive_level: IncentiveLevel,
    ) -> EngineResult<Self> {
        if self.step < WizardStep::Extras {
            return Err(EngineError::invalid_selection(
                "posteSup",
                "select a seniority step first",
            ));
        }
        if let PositionSelection::Id(id) = position {
            let main_corp = self.main_corp.as_deref().unwrap_or_default();
            let sub_corp = self.sub_corp.as_deref().unwrap_or_default();
            if !reference
                .positions_for(main_corp, sub_corp)
                .iter()
                .any(|p| p.id == id)
            {
                return Err(EngineError::invalid_selection(
                    "posteSup",
                    format!("position {} is not open to '{}'", id, sub_corp),
                ));
            }
        }

        Ok(Self {
            position,
            risk_tier,
            incentive_level: if self.incentive_eligible() {
                incentive_level
            } else {
                IncentiveLevel::default()
            },
            ..self.clone()
        })
    }

    /// Sets the family situation and moves to the results page.
    ///
    /// Children are clamped to five, older children to the children count.
    pub fn set_family(
        &self,
        children: u32,
        older_children: u32,
        spouse_employed: bool,
    ) -> EngineResult<Self> {
        if self.step < WizardStep::Extras {
            return Err(EngineError::invalid_selection(
                "childrenCount",
                "select a seniority step first",
            ));
        }
        let children = children.min(MAX_CHILDREN);

        Ok(Self {
            step: WizardStep::Results,
            family: FamilySituation::new(children, older_children, spouse_employed),
            ..self.clone()
        })
    }

    /// Renders the state as navigation parameters.
    pub fn to_params(&self) -> NavigationParams {
        NavigationParams::from_input(&self.to_input())
    }

    /// The evaluator input for the current selections.
    pub fn to_input(&self) -> ComputationInput {
        ComputationInput {
            main_corp: self.main_corp.clone().unwrap_or_default(),
            sub_corp: self.sub_corp.clone().unwrap_or_default(),
            grade: self.grade.clone().unwrap_or_default(),
            seniority_step: self.seniority_step,
            position: self.position,
            risk_tier: self.risk_tier,
            incentive_level: self.incentive_level,
            family: self.family,
        }
    }

    fn require_main_corp(&self) -> EngineResult<&str> {
        self.main_corp
            .as_deref()
            .ok_or_else(|| EngineError::invalid_selection("mainCorp", "select a main corps first"))
    }
}
