//! Immutable keyword and scoring tables consulted by the extractors and calculator.
//!
//! Table order is significant: extractors walk each list top-down and stop at the first
//! hit, so priority lives here as data rather than in control flow.

/// One education credential tier, matched when any keyword occurs in the lower-cased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationTier {
    pub keywords: &'static [&'static str],
    pub score: u8,
    pub label: &'static str,
}

/// Institution that earns the prestigious bonus.
///
/// With no canonical name the trimmed source text is reported as the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegedInstitution {
    pub aliases: &'static [&'static str],
    pub canonical: Option<&'static str>,
}

/// Lower bound of an experience band and the score it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceStep {
    pub min_years: u32,
    pub score: u8,
}

/// Points added to the education score once an institution is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstitutionBonus {
    pub prestigious: u8,
    pub recognized: u8,
}

/// Question keywords deciding which extractors see an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRouting {
    pub education: &'static [&'static str],
    pub institution: &'static [&'static str],
    pub experience: &'static [&'static str],
}

/// Complete rule set handed to the rating engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingRules {
    pub education_tiers: &'static [EducationTier],
    pub privileged_institutions: &'static [PrivilegedInstitution],
    pub number_words: &'static [(&'static str, u32)],
    pub experience_steps: &'static [ExperienceStep],
    pub experience_floor: u8,
    pub institution_bonus: InstitutionBonus,
    pub routing: QuestionRouting,
}

/// Named presets selectable through configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleSet {
    #[default]
    Standard,
    SaAccounting,
}

impl RuleSet {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "default" => Some(Self::Standard),
            "sa-accounting" | "sa_accounting" | "accounting" => Some(Self::SaAccounting),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RuleSet::Standard => "standard",
            RuleSet::SaAccounting => "sa-accounting",
        }
    }

    pub fn rules(self) -> RatingRules {
        match self {
            RuleSet::Standard => RatingRules::standard(),
            RuleSet::SaAccounting => RatingRules::sa_accounting(),
        }
    }
}

impl RatingRules {
    /// Globally prestigious institutions, +2 for those and +1 for any other institution.
    pub const fn standard() -> Self {
        Self {
            education_tiers: EDUCATION_TIERS,
            privileged_institutions: GLOBAL_PRESTIGIOUS_INSTITUTIONS,
            number_words: NUMBER_WORDS,
            experience_steps: EXPERIENCE_STEPS,
            experience_floor: 1,
            institution_bonus: InstitutionBonus {
                prestigious: 2,
                recognized: 1,
            },
            routing: QUESTION_ROUTING,
        }
    }

    /// Top South African accounting universities only, +1 for those and nothing otherwise.
    pub const fn sa_accounting() -> Self {
        Self {
            privileged_institutions: TOP_SA_ACCOUNTING_UNIVERSITIES,
            institution_bonus: InstitutionBonus {
                prestigious: 1,
                recognized: 0,
            },
            ..Self::standard()
        }
    }

    pub fn experience_score(&self, years: u32) -> u8 {
        self.experience_steps
            .iter()
            .find(|step| years >= step.min_years)
            .map(|step| step.score)
            .unwrap_or(self.experience_floor)
            .min(MAX_SCORE)
    }

    pub fn number_word(&self, word: &str) -> Option<u32> {
        self.number_words
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(word))
            .map(|(_, value)| *value)
    }
}

impl Default for RatingRules {
    fn default() -> Self {
        Self::standard()
    }
}

pub const MAX_SCORE: u8 = 10;

const EDUCATION_TIERS: &[EducationTier] = &[
    EducationTier {
        keywords: &["phd", "ph.d", "doctorate", "doctoral", "doctor of"],
        score: 10,
        label: "PhD/Doctorate",
    },
    EducationTier {
        keywords: &[
            "ca(sa)",
            "ca (sa)",
            "chartered accountant",
            "cpa",
            "c.p.a",
            "acca",
        ],
        score: 9,
        label: "Professional (CA/CPA)",
    },
    EducationTier {
        keywords: &[
            "master", "masters", "mba", "m.b.a", "msc", "m.sc", "mcom", "m.com", "ma", "m.a",
        ],
        score: 8,
        label: "Masters",
    },
    EducationTier {
        keywords: &[
            "honour",
            "honors",
            "hons",
            "b.com hons",
            "bcom hons",
            "postgraduate diploma",
            "pgdip",
        ],
        score: 7,
        label: "Honours/Postgrad Diploma",
    },
    EducationTier {
        keywords: &[
            "bachelor",
            "bachelors",
            "bcom",
            "b.com",
            "bsc",
            "b.sc",
            "ba",
            "b.a",
            "bba",
            "b.b.a",
            "llb",
            "l.l.b",
            "btech",
            "b.tech",
            "degree",
            "undergraduate",
        ],
        score: 6,
        label: "Bachelors Degree",
    },
    EducationTier {
        keywords: &["associate", "associates"],
        score: 5,
        label: "Associates",
    },
    EducationTier {
        keywords: &["national diploma", "n.dip", "ndip", "diploma"],
        score: 4,
        label: "Diploma",
    },
    EducationTier {
        keywords: &["certificate", "cert", "certification"],
        score: 3,
        label: "Certificate",
    },
    EducationTier {
        keywords: &[
            "matric",
            "matriculation",
            "high school",
            "secondary",
            "ged",
            "grade 12",
            "nsc",
            "national senior certificate",
        ],
        score: 2,
        label: "Matric/High School",
    },
];

const fn reported_as_written(aliases: &'static [&'static str]) -> PrivilegedInstitution {
    PrivilegedInstitution {
        aliases,
        canonical: None,
    }
}

const GLOBAL_PRESTIGIOUS_INSTITUTIONS: &[PrivilegedInstitution] = &[
    reported_as_written(&["harvard"]),
    reported_as_written(&["stanford"]),
    reported_as_written(&["mit"]),
    reported_as_written(&["yale"]),
    reported_as_written(&["princeton"]),
    reported_as_written(&["columbia"]),
    reported_as_written(&["oxford"]),
    reported_as_written(&["cambridge"]),
    reported_as_written(&["berkeley"]),
    reported_as_written(&["caltech"]),
    reported_as_written(&["chicago"]),
    reported_as_written(&["upenn"]),
    reported_as_written(&["cornell"]),
    reported_as_written(&["duke"]),
    reported_as_written(&["northwestern"]),
    reported_as_written(&["johns hopkins"]),
    reported_as_written(&["ucla"]),
    reported_as_written(&["nyu"]),
    reported_as_written(&["michigan"]),
    reported_as_written(&["carnegie mellon"]),
];

const TOP_SA_ACCOUNTING_UNIVERSITIES: &[PrivilegedInstitution] = &[
    PrivilegedInstitution {
        aliases: &["university of cape town", "uct"],
        canonical: Some("University of Cape Town"),
    },
    PrivilegedInstitution {
        aliases: &["stellenbosch", "maties", "us "],
        canonical: Some("Stellenbosch University"),
    },
    PrivilegedInstitution {
        aliases: &["university of pretoria", "tuks", " up "],
        canonical: Some("University of Pretoria"),
    },
    PrivilegedInstitution {
        aliases: &["witwatersrand", "wits"],
        canonical: Some("University of the Witwatersrand"),
    },
    PrivilegedInstitution {
        aliases: &["university of johannesburg", " uj "],
        canonical: Some("University of Johannesburg"),
    },
];

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("fifteen", 15),
    ("twenty", 20),
];

const EXPERIENCE_STEPS: &[ExperienceStep] = &[
    ExperienceStep {
        min_years: 15,
        score: 10,
    },
    ExperienceStep {
        min_years: 10,
        score: 9,
    },
    ExperienceStep {
        min_years: 7,
        score: 8,
    },
    ExperienceStep {
        min_years: 5,
        score: 7,
    },
    ExperienceStep {
        min_years: 3,
        score: 5,
    },
    ExperienceStep {
        min_years: 2,
        score: 4,
    },
    ExperienceStep {
        min_years: 1,
        score: 3,
    },
];

const QUESTION_ROUTING: QuestionRouting = QuestionRouting {
    education: &["education", "qualification", "degree", "study", "level"],
    institution: &[
        "university",
        "college",
        "institution",
        "school",
        "where",
        "which",
    ],
    experience: &["experience", "years", "work history", "background"],
};
