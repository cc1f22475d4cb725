//! Candidate rating engine.
//!
//! Free-text application answers (and optionally resume text) are scanned for education,
//! institution and experience signals, which are blended into a 0-10 rating with a
//! confidence label. Every computation is pure and independent per candidate.

mod analyzer;
mod calculator;
pub mod domain;
mod extract;
pub mod import;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use analyzer::AnalysisAccumulator;
pub use domain::{
    ApplicationEvidence, ApplicationId, Confidence, EducationBreakdown, EducationSignal,
    EvidenceSource, ExperienceBreakdown, InstitutionSignal, ProvenanceTag, QuestionAnswer,
    RatingBreakdown, RatingResult, SignalCategory,
};
pub use extract::SignalExtractor;
pub use import::{
    answer_rows_from_path, application_json_from_path, load_application_json, parse_answer_rows,
    EvidenceImportError,
};
pub use router::rating_router;
pub use rules::{RatingRules, RuleSet};

use tracing::debug;

/// Stateless rater applying one rule set to candidate evidence.
#[derive(Debug, Clone)]
pub struct CandidateRater {
    extractor: SignalExtractor,
}

impl CandidateRater {
    pub fn new(rules: RatingRules) -> Self {
        Self {
            extractor: SignalExtractor::new(rules),
        }
    }

    pub fn for_rule_set(rule_set: RuleSet) -> Self {
        Self::new(rule_set.rules())
    }

    pub fn rules(&self) -> &RatingRules {
        self.extractor.rules()
    }

    pub fn extractor(&self) -> &SignalExtractor {
        &self.extractor
    }

    pub fn analyze(&self, evidence: &ApplicationEvidence) -> AnalysisAccumulator {
        analyzer::analyze(evidence, &self.extractor)
    }

    pub fn score(&self, analysis: &AnalysisAccumulator) -> RatingResult {
        calculator::calculate(analysis, self.rules())
    }

    pub fn rate(&self, evidence: &ApplicationEvidence) -> RatingResult {
        let analysis = self.analyze(evidence);
        let rating = self.score(&analysis);

        debug!(
            answers = evidence.questions_and_answers.len(),
            has_resume = evidence.fallback_text().is_some(),
            overall = rating.overall,
            confidence = rating.confidence.label(),
            sources = rating.data_source.len(),
            "candidate rated"
        );

        rating
    }
}

impl Default for CandidateRater {
    fn default() -> Self {
        Self::new(RatingRules::standard())
    }
}
