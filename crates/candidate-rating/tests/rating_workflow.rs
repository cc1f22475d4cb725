//! End-to-end rating scenarios through the public engine facade and import helpers.

use std::io::Cursor;

use candidate_rating::rating::{
    load_application_json, parse_answer_rows, ApplicationEvidence, CandidateRater, Confidence,
    QuestionAnswer, RuleSet,
};

fn answers(pairs: &[(&str, &str)]) -> ApplicationEvidence {
    ApplicationEvidence::from_answers(
        pairs
            .iter()
            .map(|(question, answer)| QuestionAnswer::new(*question, *answer))
            .collect(),
    )
}

#[test]
fn csv_export_rates_each_application() {
    let csv = "application_id,question,answer\n\
               101,Highest level of education,BCom Honours\n\
               101,Which university did you attend?,Rhodes University\n\
               101,Years of experience,8\n\
               102,Years of experience,less than one year\n\
               103,Are you willing to relocate?,Yes\n";
    let rater = CandidateRater::for_rule_set(RuleSet::Standard);

    let ratings: Vec<_> = parse_answer_rows(Cursor::new(csv))
        .expect("csv parses")
        .into_iter()
        .map(|(id, evidence)| (id.0, rater.rate(&evidence)))
        .collect();

    assert_eq!(ratings.len(), 3);

    let (id, first) = &ratings[0];
    assert_eq!(id, "101");
    assert_eq!(first.confidence, Confidence::High);
    assert_eq!(first.breakdown.education.score, 8);
    assert_eq!(first.breakdown.experience.score, 8);
    assert_eq!(first.overall, 8.0);

    let (_, second) = &ratings[1];
    assert_eq!(second.breakdown.experience.years, Some(1));
    assert_eq!(second.confidence, Confidence::Medium);

    let (_, third) = &ratings[2];
    assert_eq!(third.confidence, Confidence::Low);
    assert_eq!(third.overall, 0.0);
}

#[test]
fn ats_application_document_is_rated_with_resume_fallback() {
    let document = r#"{
        "id": 88,
        "status": { "id": 1, "label": "New" },
        "questionsAndAnswers": [
            { "question": { "label": "How many years of experience do you have?" }, "answer": { "label": "3-5 years" } },
            { "question": { "label": "Salary expectation" }, "answer": { "label": "Negotiable" } }
        ],
        "parsedResume": "Chartered Accountant CA(SA). Trained at Stellenbosch University.",
        "coverLetterText": "I am excited to apply."
    }"#;

    let evidence = load_application_json(Cursor::new(document)).expect("document parses");
    let rating = CandidateRater::for_rule_set(RuleSet::SaAccounting).rate(&evidence);

    assert_eq!(rating.breakdown.experience.years, Some(3));
    assert_eq!(rating.breakdown.experience.score, 5);
    assert_eq!(
        rating.breakdown.education.level.as_deref(),
        Some("Professional (CA/CPA)")
    );
    assert_eq!(
        rating.breakdown.education.institution.as_deref(),
        Some("Stellenbosch University")
    );
    assert_eq!(rating.breakdown.education.score, 10);
    assert_eq!(rating.overall, 7.5);
    assert_eq!(rating.confidence, Confidence::High);
    let sources: Vec<String> = rating.data_source.iter().map(ToString::to_string).collect();
    assert_eq!(
        sources,
        vec![
            "questionsAndAnswers:experience",
            "resumeText:education",
            "resumeText:institution"
        ]
    );
}

#[test]
fn rule_sets_disagree_only_on_institution_bonus() {
    let evidence = answers(&[
        ("Highest qualification", "BSc"),
        ("Where did you study?", "University of Cape Town"),
    ]);

    let standard = CandidateRater::for_rule_set(RuleSet::Standard).rate(&evidence);
    let accounting = CandidateRater::for_rule_set(RuleSet::SaAccounting).rate(&evidence);

    assert_eq!(standard.breakdown.education.score, 7);
    assert_eq!(accounting.breakdown.education.score, 7);
    assert_eq!(
        standard.breakdown.education.institution.as_deref(),
        Some("University of Cape Town")
    );

    let unranked = answers(&[
        ("Highest qualification", "BSc"),
        ("Where did you study?", "Rhodes"),
    ]);
    assert_eq!(
        CandidateRater::for_rule_set(RuleSet::Standard)
            .rate(&unranked)
            .breakdown
            .education
            .score,
        7
    );
    assert_eq!(
        CandidateRater::for_rule_set(RuleSet::SaAccounting)
            .rate(&unranked)
            .breakdown
            .education
            .score,
        6
    );
}

#[test]
fn raters_can_be_shared_across_threads() {
    let rater = std::sync::Arc::new(CandidateRater::default());
    let handles: Vec<_> = (1..=4u32)
        .map(|years| {
            let rater = rater.clone();
            std::thread::spawn(move || {
                rater.rate(&answers(&[("Years of experience", &years.to_string())]))
            })
        })
        .collect();

    let scores: Vec<u8> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes").breakdown.experience.score)
        .collect();

    assert_eq!(scores, vec![3, 4, 5, 5]);
}
