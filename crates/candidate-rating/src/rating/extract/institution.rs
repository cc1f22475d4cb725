use regex::Regex;

use crate::rating::domain::InstitutionSignal;
use crate::rating::rules::RatingRules;

/// Heuristic for institution names mentioned in passing inside longer answers.
///
/// The word class is ASCII-only, so accented letters end a captured name.
#[derive(Debug, Clone)]
pub(super) struct InstitutionPattern(Regex);

impl InstitutionPattern {
    pub(super) fn compile() -> Self {
        let pattern = Regex::new(
            r"(?i)(?:university|college|institute|school)\s+of\s+[0-9A-Za-z_\s]+|[0-9A-Za-z_\s]+(?:university|college|institute|school|technikon)",
        )
        .expect("valid institution pattern");
        Self(pattern)
    }

    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.0.find(text).map(|found| found.as_str().trim())
    }
}

pub(super) fn extract_institution(
    text: &str,
    is_direct_question: bool,
    rules: &RatingRules,
    pattern: &InstitutionPattern,
) -> Option<InstitutionSignal> {
    let trimmed = text.trim();
    if trimmed.chars().count() < 2 {
        return None;
    }

    // Aliases are trimmed before the substring test, so " up " also hits inside "support".
    let lower = trimmed.to_lowercase();
    let privileged = rules.privileged_institutions.iter().find(|institution| {
        institution
            .aliases
            .iter()
            .any(|alias| lower.contains(alias.trim()))
    });

    if let Some(institution) = privileged {
        let name = match institution.canonical {
            Some(canonical) => canonical.to_string(),
            None => trimmed.to_string(),
        };
        return Some(InstitutionSignal {
            name,
            is_prestigious: true,
        });
    }

    if is_direct_question {
        return Some(InstitutionSignal {
            name: trimmed.to_string(),
            is_prestigious: false,
        });
    }

    pattern
        .find(text)
        .filter(|name| !name.is_empty())
        .map(|name| InstitutionSignal {
            name: name.to_string(),
            is_prestigious: false,
        })
}
