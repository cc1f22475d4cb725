use crate::rating::domain::EducationSignal;
use crate::rating::rules::RatingRules;

/// Walks the tiers in table order and returns the first tier with any keyword present.
///
/// Matching is a plain substring test on the lower-cased text, so short keywords such as
/// "ma" also hit inside longer words.
pub(crate) fn extract_education(text: &str, rules: &RatingRules) -> Option<EducationSignal> {
    let lower = text.to_lowercase();

    rules
        .education_tiers
        .iter()
        .find(|tier| tier.keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|tier| EducationSignal {
            level: tier.label.to_string(),
            score: tier.score,
        })
}
