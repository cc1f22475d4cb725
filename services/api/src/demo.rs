use crate::infra::parse_rule_set;
use candidate_rating::error::AppError;
use candidate_rating::rating::{
    answer_rows_from_path, application_json_from_path, ApplicationEvidence, ApplicationId,
    CandidateRater, QuestionAnswer, RatingResult, RuleSet,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RateArgs {
    /// ATS application JSON document (questionsAndAnswers, resumeText/parsedResume)
    #[arg(long, conflicts_with = "answers_csv", required_unless_present = "answers_csv")]
    pub(crate) application: Option<PathBuf>,
    /// CSV export with application_id,question,answer columns
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Rule set to score against: standard or sa-accounting
    #[arg(long, default_value = "standard", value_parser = parse_rule_set)]
    pub(crate) rule_set: RuleSet,
    /// Print ratings as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Rule set to score the sample applicants against
    #[arg(long, default_value = "standard", value_parser = parse_rule_set)]
    pub(crate) rule_set: RuleSet,
    /// Print ratings as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_rate(args: RateArgs) -> Result<(), AppError> {
    let RateArgs {
        application,
        answers_csv,
        rule_set,
        json,
    } = args;

    let candidates = match (application, answers_csv) {
        (Some(path), _) => {
            let label = path.display().to_string();
            vec![(ApplicationId(label), application_json_from_path(&path)?)]
        }
        (None, Some(path)) => answer_rows_from_path(path)?,
        (None, None) => Vec::new(),
    };

    let rater = CandidateRater::for_rule_set(rule_set);
    let ratings = rate_all(&rater, candidates);
    render_ratings(&ratings, rule_set, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let rater = CandidateRater::for_rule_set(args.rule_set);
    let ratings = rate_all(&rater, sample_candidates());
    render_ratings(&ratings, args.rule_set, args.json)
}

fn rate_all(
    rater: &CandidateRater,
    candidates: Vec<(ApplicationId, ApplicationEvidence)>,
) -> Vec<(ApplicationId, RatingResult)> {
    candidates
        .into_iter()
        .map(|(id, evidence)| {
            let rating = rater.rate(&evidence);
            (id, rating)
        })
        .collect()
}

fn render_ratings(
    ratings: &[(ApplicationId, RatingResult)],
    rule_set: RuleSet,
    as_json: bool,
) -> Result<(), AppError> {
    if as_json {
        let payload: Vec<_> = ratings
            .iter()
            .map(|(id, rating)| serde_json::json!({ "id": id, "rating": rating }))
            .collect();
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Candidate ratings ({} rules)", rule_set.label());
    if ratings.is_empty() {
        println!("No applications found");
    }

    for (id, rating) in ratings {
        println!(
            "\n{} -> {:.1}/10 ({} confidence)",
            id.0,
            rating.overall,
            rating.confidence.label()
        );

        let education = &rating.breakdown.education;
        println!(
            "- education: {}/10, level {}, institution {}",
            education.score,
            education.level.as_deref().unwrap_or("unknown"),
            education.institution.as_deref().unwrap_or("unknown")
        );

        let experience = &rating.breakdown.experience;
        match experience.years {
            Some(years) => println!(
                "- experience: {}/10 from {} year(s)",
                experience.score, years
            ),
            None => println!("- experience: no data"),
        }

        if !rating.data_source.is_empty() {
            let sources: Vec<String> = rating.data_source.iter().map(ToString::to_string).collect();
            println!("- sources: {}", sources.join(", "));
        }
    }

    Ok(())
}

fn sample_candidates() -> Vec<(ApplicationId, ApplicationEvidence)> {
    vec![
        (
            ApplicationId("sample-audit-senior".to_string()),
            ApplicationEvidence::from_answers(vec![
                QuestionAnswer::new(
                    "What is your highest level of education?",
                    "BCom Honours in Accounting",
                ),
                QuestionAnswer::new("Which university did you attend?", "University of Cape Town"),
                QuestionAnswer::new("How many years of experience do you have?", "6 years"),
            ]),
        ),
        (
            ApplicationId("sample-career-changer".to_string()),
            ApplicationEvidence::from_answers(vec![QuestionAnswer::new(
                "Years of experience in finance?",
                "two",
            )])
            .with_resume_text("Bachelor of Arts, Rhodes University. Teaching for nine years."),
        ),
        (
            ApplicationId("sample-sparse".to_string()),
            ApplicationEvidence::from_answers(vec![QuestionAnswer::new(
                "Are you willing to relocate?",
                "Yes",
            )]),
        ),
    ]
}
