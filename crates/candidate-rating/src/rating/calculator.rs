use super::analyzer::AnalysisAccumulator;
use super::domain::{
    Confidence, EducationBreakdown, ExperienceBreakdown, RatingBreakdown, RatingResult,
};
use super::rules::{RatingRules, MAX_SCORE};

const EDUCATION_WEIGHT: f64 = 0.5;
const EXPERIENCE_WEIGHT: f64 = 0.5;

/// Combines accumulated signals into the final rating. Missing data lowers confidence.
pub(crate) fn calculate(analysis: &AnalysisAccumulator, rules: &RatingRules) -> RatingResult {
    let education_score = education_score(analysis, rules);
    let experience_score = analysis
        .experience
        .map(|years| rules.experience_score(years))
        .unwrap_or(0);

    let (overall, confidence) = match (analysis.education.is_some(), analysis.experience.is_some())
    {
        (true, true) => (
            round_to_tenth(
                f64::from(education_score) * EDUCATION_WEIGHT
                    + f64::from(experience_score) * EXPERIENCE_WEIGHT,
            ),
            Confidence::High,
        ),
        (true, false) => (f64::from(education_score), Confidence::Medium),
        (false, true) => (f64::from(experience_score), Confidence::Medium),
        (false, false) => (0.0, Confidence::Low),
    };

    RatingResult {
        overall,
        breakdown: RatingBreakdown {
            education: EducationBreakdown {
                score: education_score,
                level: analysis.education.as_ref().map(|signal| signal.level.clone()),
                institution: analysis
                    .institution
                    .as_ref()
                    .map(|signal| signal.name.clone()),
            },
            experience: ExperienceBreakdown {
                score: experience_score,
                years: analysis.experience,
            },
        },
        confidence,
        data_source: analysis.sources.clone(),
    }
}

fn education_score(analysis: &AnalysisAccumulator, rules: &RatingRules) -> u8 {
    let base = analysis
        .education
        .as_ref()
        .map(|signal| signal.score)
        .unwrap_or(0);

    let bonus = match &analysis.institution {
        Some(institution) if institution.is_prestigious => rules.institution_bonus.prestigious,
        Some(_) => rules.institution_bonus.recognized,
        None => 0,
    };

    base.saturating_add(bonus).min(MAX_SCORE)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
