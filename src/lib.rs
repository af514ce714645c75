pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig, OutputFormat};

pub use config::toml_config::TomlConfig;
pub use crate::core::assessment::{
    calculate_constitution, generate_recommendations, AssessmentRequest,
};
pub use crate::core::batch::{BatchRunner, BatchSummary};
pub use domain::model::{
    Assessment, ConstitutionConclusion, ConstitutionResult, ElementKind,
    FiveElementsDistribution, RecommendationSet, CANONICAL_ORDER,
};
pub use utils::error::{Result, WuxingError};
