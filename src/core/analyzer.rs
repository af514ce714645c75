use crate::domain::model::{
    ConstitutionConclusion, ConstitutionResult, ElementKind, FiveElementsDistribution,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConstitutionAnalyzer;

impl ConstitutionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, distribution: FiveElementsDistribution) -> ConstitutionResult {
        let strongest = distribution.strongest();
        let weakest = distribution.weakest();
        tracing::debug!(
            "Ranked elements: {:?}, strongest={}, weakest={}",
            distribution.ranked(),
            strongest,
            weakest
        );

        let conclusion = weakness_conclusion(weakest);
        let weaknesses = vec![conclusion.to_string()];

        ConstitutionResult {
            distribution,
            conclusion,
            strengths: vec![strength_statement(strongest)],
            weaknesses,
        }
    }
}

pub fn weakness_conclusion(kind: ElementKind) -> ConstitutionConclusion {
    ConstitutionConclusion {
        element_condition: format!("{}偏弱", kind.chinese_name()),
        organ_condition: format!("{}气虚", kind.organ()),
        symptoms: format!("易{}", kind.characteristics()),
    }
}

pub fn strength_statement(kind: ElementKind) -> String {
    format!("{}偏强→{}气盛", kind.chinese_name(), kind.organ())
}
