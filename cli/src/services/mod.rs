//! Services behind the crop advisor commands

pub mod catalog;
pub mod recommendations;
pub mod risk_assessment;

pub use catalog::CatalogService;
pub use recommendations::RecommendationService;
pub use risk_assessment::RiskAssessmentService;
