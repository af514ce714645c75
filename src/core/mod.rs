pub mod analyzer;
pub mod assessment;
pub mod batch;
pub mod deriver;
pub mod recommendation;
pub mod report;

pub use crate::domain::model::{
    Assessment, ConstitutionConclusion, ConstitutionResult, ElementKind,
    FiveElementsDistribution, RecommendationSet,
};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
