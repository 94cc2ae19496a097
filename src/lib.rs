//! Net salary estimation for public health-sector staff.
//!
//! The engine reads four reference tables (practitioner classifications,
//! salary scales, superior positions, compensation codes), evaluates a
//! practitioner's selection into a full salary breakdown with an audit
//! trace, and formats the result for display or print. A step-by-step
//! wizard model and an HTTP API sit on top of the evaluator.
//!
//! ```no_run
//! use salary_engine::calculation::evaluate_selection;
//! use salary_engine::config::ConfigLoader;
//! use salary_engine::models::{
//!     ComputationInput, FamilySituation, IncentiveLevel, PositionSelection, RiskTier,
//! };
//!
//! let loader = ConfigLoader::load("./data/reference")?;
//! let input = ComputationInput {
//!     main_corp: "شبه الطبيين".to_string(),
//!     sub_corp: "الممرضون".to_string(),
//!     grade: "ممرض حاصل على شهادة الدولة".to_string(),
//!     seniority_step: 5,
//!     position: PositionSelection::None,
//!     risk_tier: RiskTier::High,
//!     incentive_level: IncentiveLevel::default(),
//!     family: FamilySituation::new(2, 1, true),
//! };
//! let breakdown = evaluate_selection(&input, loader.reference())?;
//! println!("net: {}", breakdown.net_salary);
//! # Ok::<(), salary_engine::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod telemetry;
pub mod wizard;
