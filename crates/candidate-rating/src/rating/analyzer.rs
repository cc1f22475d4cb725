use super::domain::{
    ApplicationEvidence, EducationSignal, EvidenceSource, InstitutionSignal, ProvenanceTag,
    QuestionAnswer, SignalCategory,
};
use super::extract::SignalExtractor;

/// Best signals found so far plus the provenance of each, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisAccumulator {
    pub education: Option<EducationSignal>,
    pub institution: Option<InstitutionSignal>,
    pub experience: Option<u32>,
    pub sources: Vec<ProvenanceTag>,
}

impl AnalysisAccumulator {
    fn tagged(mut self, source: EvidenceSource, category: SignalCategory) -> Self {
        let tag = ProvenanceTag::new(source, category);
        if !self.sources.contains(&tag) {
            self.sources.push(tag);
        }
        self
    }

    fn with_education(self, signal: EducationSignal, source: EvidenceSource) -> Self {
        let improves = self
            .education
            .as_ref()
            .map_or(true, |current| signal.score > current.score);
        if !improves {
            return self;
        }

        Self {
            education: Some(signal),
            ..self
        }
        .tagged(source, SignalCategory::Education)
    }

    fn with_institution(self, signal: InstitutionSignal, source: EvidenceSource) -> Self {
        Self {
            institution: Some(signal),
            ..self
        }
        .tagged(source, SignalCategory::Institution)
    }

    fn with_experience(self, years: u32, source: EvidenceSource) -> Self {
        Self {
            experience: Some(years),
            ..self
        }
        .tagged(source, SignalCategory::Experience)
    }

    fn absorb(self, pair: &QuestionAnswer, extractor: &SignalExtractor) -> Self {
        let Some(answer) = pair.answer_text() else {
            return self;
        };

        let routing = extractor.rules().routing;
        let question = pair.question_text().to_lowercase();
        let source = EvidenceSource::QuestionsAndAnswers;
        let mut acc = self;

        if mentions_any(&question, routing.education) {
            if let Some(signal) = extractor.education(answer) {
                acc = acc.with_education(signal, source);
            }

            if acc.institution.is_none() {
                if let Some(signal) = extractor.institution(answer, false) {
                    acc = acc.with_institution(signal, source);
                }
            }
        }

        if mentions_any(&question, routing.institution) {
            if let Some(signal) = extractor.institution(answer, true) {
                acc = acc.with_institution(signal, source);
            }
        }

        if mentions_any(&question, routing.experience) {
            if let Some(years) = extractor.experience_years(answer) {
                acc = acc.with_experience(years, source);
            }
        }

        acc
    }

    /// Fills any category still empty from the resume text.
    fn with_resume_fallback(self, resume_text: &str, extractor: &SignalExtractor) -> Self {
        let source = EvidenceSource::ResumeText;
        let mut acc = self;

        if acc.education.is_none() {
            if let Some(signal) = extractor.education(resume_text) {
                acc = acc.with_education(signal, source);
            }
        }

        if acc.institution.is_none() {
            if let Some(signal) = extractor.institution(resume_text, false) {
                acc = acc.with_institution(signal, source);
            }
        }

        if acc.experience.is_none() {
            if let Some(years) = extractor.experience_years(resume_text) {
                acc = acc.with_experience(years, source);
            }
        }

        acc
    }
}

fn mentions_any(question: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| question.contains(keyword))
}

pub(crate) fn analyze(
    evidence: &ApplicationEvidence,
    extractor: &SignalExtractor,
) -> AnalysisAccumulator {
    let from_answers = evidence
        .questions_and_answers
        .iter()
        .fold(AnalysisAccumulator::default(), |acc, pair| {
            acc.absorb(pair, extractor)
        });

    match evidence.fallback_text() {
        Some(resume_text) => from_answers.with_resume_fallback(resume_text, extractor),
        None => from_answers,
    }
}
