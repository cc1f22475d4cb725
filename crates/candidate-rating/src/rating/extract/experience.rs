use regex::Regex;

use crate::rating::rules::RatingRules;

/// Year-count patterns in priority order; the first capture group holds the value.
#[derive(Debug, Clone)]
pub(super) struct ExperiencePatterns {
    ordered: Vec<Regex>,
}

impl ExperiencePatterns {
    pub(super) fn compile(rules: &RatingRules) -> Self {
        let words = rules
            .number_words
            .iter()
            .map(|(word, _)| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        let sources = [
            // "5 years", "5+ yrs", "5-7 years" (lower bound)
            r"(?i)([0-9]+)(?:\s*-\s*[0-9]+)?\+?\s*(?:years?|yrs?)".to_string(),
            format!(r"(?i)({words})\s*(?:years?|yrs?)?"),
            r"(?i)([0-9]+)\+?\s*(?:completed|full)?\s*(?:years?|yrs?)?".to_string(),
        ];

        let ordered = sources
            .iter()
            .map(|source| Regex::new(source).expect("valid experience pattern"))
            .collect();

        Self { ordered }
    }

    pub(super) fn extract(&self, text: &str, rules: &RatingRules) -> Option<u32> {
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            if let Ok(years) = trimmed.parse::<u32>() {
                return Some(years);
            }
        }

        self.ordered.iter().find_map(|pattern| {
            let value = pattern.captures(text)?.get(1)?.as_str();
            rules
                .number_word(value)
                .or_else(|| value.parse::<u32>().ok())
        })
    }
}
