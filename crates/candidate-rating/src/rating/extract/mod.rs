mod education;
mod experience;
mod institution;

use super::domain::{EducationSignal, InstitutionSignal};
use super::rules::RatingRules;

use education::extract_education;
use experience::ExperiencePatterns;
use institution::InstitutionPattern;

/// Compiled extractors for one rule set.
///
/// Regex patterns are built once here so the per-answer work is matching only.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    rules: RatingRules,
    experience: ExperiencePatterns,
    institution: InstitutionPattern,
}

impl SignalExtractor {
    pub fn new(rules: RatingRules) -> Self {
        Self {
            experience: ExperiencePatterns::compile(&rules),
            institution: InstitutionPattern::compile(),
            rules,
        }
    }

    pub fn rules(&self) -> &RatingRules {
        &self.rules
    }

    pub fn education(&self, text: &str) -> Option<EducationSignal> {
        extract_education(text, &self.rules)
    }

    pub fn institution(&self, text: &str, is_direct_question: bool) -> Option<InstitutionSignal> {
        institution::extract_institution(text, is_direct_question, &self.rules, &self.institution)
    }

    pub fn experience_years(&self, text: &str) -> Option<u32> {
        self.experience.extract(text, &self.rules)
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new(RatingRules::standard())
    }
}
