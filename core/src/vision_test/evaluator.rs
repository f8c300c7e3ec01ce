use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::catalog::{catalog, TestQuestion};
use crate::math::stats::StatsHelper;
use crate::profile::{ColorVisionProfile, ColorVisionType};

const UNSURE_MARKERS: &[&str] = &["not sure", "can't tell", "cannot tell", "don't know", "unsure"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResponse {
    pub question_id: u32,
    pub answer: String,
}

impl TestResponse {
    pub fn new(question_id: u32, answer: impl Into<String>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }
}

/// Categorical confidence of a screening result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestConfidence {
    High,
    Medium,
    Low,
}

impl TestConfidence {
    pub fn score(self) -> f32 {
        match self {
            TestConfidence::High => 0.9,
            TestConfidence::Medium => 0.6,
            TestConfidence::Low => 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub vision_type: ColorVisionType,
    pub confidence: TestConfidence,
    pub description: &'static str,
}

impl TestOutcome {
    fn new(
        vision_type: ColorVisionType,
        confidence: TestConfidence,
        description: &'static str,
    ) -> Self {
        Self {
            vision_type,
            confidence,
            description,
        }
    }

    pub fn into_profile(self, now: DateTime<Utc>) -> ColorVisionProfile {
        ColorVisionProfile::new(self.vision_type, self.confidence.score(), Some(now))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnswerKind {
    Unsure,
    Normal,
    RedGreen,
    Other,
}

fn classify(question: &TestQuestion, answer: &str) -> AnswerKind {
    let answer = answer.trim().to_lowercase();
    if UNSURE_MARKERS.iter().any(|marker| answer.contains(marker)) {
        AnswerKind::Unsure
    } else if answer == question.normal_answer.to_lowercase() {
        AnswerKind::Normal
    } else if question
        .red_green_answer
        .map(|expected| answer == expected.to_lowercase())
        .unwrap_or(false)
    {
        AnswerKind::RedGreen
    } else {
        AnswerKind::Other
    }
}

/// Answer counts over a battery. `total` counts every response, including
/// those whose question id is not in the catalog. `matched` counts only the
/// responses to known questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub total: usize,
    pub matched: usize,
    pub unsure: usize,
    pub normal: usize,
    pub red_green: usize,
}

pub fn tally(questions: &[TestQuestion], responses: &[TestResponse]) -> Tally {
    let mut tally = Tally {
        total: responses.len(),
        ..Default::default()
    };
    for response in responses {
        let Some(question) = questions.iter().find(|q| q.id == response.question_id) else {
            debug!("skipping response to unknown question {}", response.question_id);
            continue;
        };
        tally.matched += 1;
        match classify(question, &response.answer) {
            AnswerKind::Unsure => tally.unsure += 1,
            AnswerKind::Normal => tally.normal += 1,
            AnswerKind::RedGreen => tally.red_green += 1,
            AnswerKind::Other => {}
        }
    }
    tally
}

/// Screens a battery against the built-in catalog.
pub fn analyze(responses: &[TestResponse]) -> Option<TestOutcome> {
    analyze_with(catalog(), responses)
}

/// Screens a battery. First matching rule wins. Returns `None` when no
/// response answers a known question. This is a screening heuristic, not a
/// diagnosis.
pub fn analyze_with(
    questions: &[TestQuestion],
    responses: &[TestResponse],
) -> Option<TestOutcome> {
    let tally = tally(questions, responses);
    debug!("vision test tally {:?}", tally);
    let Tally {
        total,
        matched,
        unsure,
        normal,
        red_green,
    } = tally;

    if matched == 0 {
        return None;
    }

    let outcome = if StatsHelper::at_least_tenths(unsure, 6, total) {
        TestOutcome::new(
            ColorVisionType::LowVision,
            TestConfidence::Medium,
            "Many answers were uncertain. Signals will be described by position and announced aloud.",
        )
    } else if StatsHelper::at_least_tenths(normal, 8, total) {
        TestOutcome::new(
            ColorVisionType::Normal,
            TestConfidence::High,
            "Your answers match typical color vision.",
        )
    } else if red_green >= 2 || (StatsHelper::below_tenths(normal, 5, total) && unsure >= 1) {
        let confidence = if red_green >= 2 {
            TestConfidence::High
        } else {
            TestConfidence::Medium
        };
        TestOutcome::new(
            ColorVisionType::Deuteranopia,
            confidence,
            "Your answers suggest red-green color blindness. Signals will use position cues instead of red and green.",
        )
    } else if StatsHelper::below_tenths(normal, 7, total) {
        TestOutcome::new(
            ColorVisionType::Protanopia,
            TestConfidence::Low,
            "Some answers suggest reduced red sensitivity. Consider retaking the test or choosing a type manually.",
        )
    } else {
        TestOutcome::new(
            ColorVisionType::Normal,
            TestConfidence::Medium,
            "Your color vision appears typical, with a few uncertain answers.",
        )
    };

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(pairs: &[(u32, &str)]) -> Vec<TestResponse> {
        pairs
            .iter()
            .map(|(id, answer)| TestResponse::new(*id, *answer))
            .collect()
    }

    #[test]
    fn all_normal_answers_are_normal_with_high_confidence() {
        let outcome =
            analyze(&responses(&[(1, "Red and Green"), (2, "Middle"), (5, "Green")])).unwrap();
        assert_eq!(outcome.vision_type, ColorVisionType::Normal);
        assert_eq!(outcome.confidence, TestConfidence::High);
    }

    #[test]
    fn two_red_green_answers_suggest_deuteranopia() {
        let outcome = analyze(&responses(&[
            (1, "Brown and Brown"),
            (2, "I can't tell"),
            (5, "Brown"),
        ]))
        .unwrap();
        assert_eq!(outcome.vision_type, ColorVisionType::Deuteranopia);
        assert_eq!(outcome.confidence, TestConfidence::High);
    }

    #[test]
    fn mostly_unsure_answers_suggest_low_vision() {
        let outcome = analyze(&responses(&[
            (1, "I'm not sure"),
            (2, "I can't tell"),
            (3, "Not sure"),
            (4, "Red"),
            (5, "Green"),
        ]))
        .unwrap();
        assert_eq!(outcome.vision_type, ColorVisionType::LowVision);
        assert_eq!(outcome.confidence, TestConfidence::Medium);
    }

    #[test]
    fn unsure_rule_wins_over_red_green_matches() {
        let outcome = analyze(&responses(&[
            (1, "Brown and Brown"),
            (3, "21"),
            (2, "can't tell"),
            (4, "can't tell"),
            (5, "not sure"),
        ]))
        .unwrap();
        assert_eq!(outcome.vision_type, ColorVisionType::LowVision);
    }

    #[test]
    fn normal_rule_dominates_a_single_red_green_answer() {
        let outcome = analyze(&responses(&[
            (1, "Red and Green"),
            (2, "Middle"),
            (3, "74"),
            (4, "Red"),
            (5, "Brown"),
        ]))
        .unwrap();
        assert_eq!(outcome.vision_type, ColorVisionType::Normal);
        assert_eq!(outcome.confidence, TestConfidence::High);
    }

    #[test]
    fn few_normal_answers_with_one_unsure_is_medium_deuteranopia() {
        let outcome = analyze(&responses(&[
            (1, "Green and Red"),
            (2, "Top"),
            (3, "not sure"),
            (4, "Red"),
            (5, "White"),
        ]))
        .unwrap();
        assert_eq!(outcome.vision_type, ColorVisionType::Deuteranopia);
        assert_eq!(outcome.confidence, TestConfidence::Medium);
    }

    #[test]
    fn middling_scores_fall_to_protanopia_then_normal() {
        let protan = analyze(&responses(&[
            (1, "Red and Green"),
            (2, "Middle"),
            (3, "No number"),
            (4, "Green"),
            (5, "White"),
        ]))
        .unwrap();
        assert_eq!(protan.vision_type, ColorVisionType::Protanopia);
        assert_eq!(protan.confidence, TestConfidence::Low);

        let normal = analyze(&responses(&[
            (1, "Red and Green"),
            (2, "Middle"),
            (3, "74"),
            (4, "Red"),
            (5, "Green"),
            (1, "Red and Green"),
            (2, "Middle"),
            (3, "No number"),
            (4, "Green"),
            (5, "White"),
        ]))
        .unwrap();
        assert_eq!(normal.vision_type, ColorVisionType::Normal);
        assert_eq!(normal.confidence, TestConfidence::Medium);
    }

    #[test]
    fn unknown_questions_still_count_toward_total() {
        let tally = tally(catalog(), &responses(&[(1, "Red and Green"), (42, "Red and Green")]));
        assert_eq!(tally.total, 2);
        assert_eq!(tally.matched, 1);
        assert_eq!(tally.normal, 1);
    }

    #[test]
    fn battery_of_unknown_questions_has_no_outcome() {
        assert!(analyze(&[TestResponse::new(42, "Red")]).is_none());
        assert!(analyze(&responses(&[(42, "Red"), (77, "Green"), (99, "x")])).is_none());
    }

    #[test]
    fn empty_battery_has_no_outcome() {
        assert!(analyze(&[]).is_none());
    }

    #[test]
    fn outcome_becomes_a_dated_profile() {
        let now = Utc::now();
        let outcome = analyze(&responses(&[(1, "Brown and Brown"), (5, "Brown")])).unwrap();
        let profile = outcome.into_profile(now);
        assert_eq!(profile.vision_type, ColorVisionType::Deuteranopia);
        assert_eq!(profile.confidence, 0.9);
        assert_eq!(profile.test_date, Some(now));
        assert!(profile.problematic_colors.red);
    }
}
