use std::collections::BTreeMap;

use crate::models::Assessment;

/// Selected option per question position. Unanswered positions are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet(BTreeMap<usize, usize>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection, returning the one it replaced.
    pub fn select(&mut self, position: usize, option: usize) -> Option<usize> {
        self.0.insert(position, option)
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(&position).copied()
    }

    pub fn is_answered(&self, position: usize) -> bool {
        self.0.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&position, &option)| (position, option))
    }
}

impl FromIterator<(usize, usize)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Coarse classification of a percent score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Strong,
    Adequate,
    NeedsReview,
}

impl Verdict {
    pub const STRONG_THRESHOLD: u8 = 80;
    pub const ADEQUATE_THRESHOLD: u8 = 60;

    pub fn from_score(percent: u8) -> Self {
        if percent >= Self::STRONG_THRESHOLD {
            Verdict::Strong
        } else if percent >= Self::ADEQUATE_THRESHOLD {
            Verdict::Adequate
        } else {
            Verdict::NeedsReview
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Strong => "strong",
            Verdict::Adequate => "adequate",
            Verdict::NeedsReview => "needs review",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Strong => {
                "Excellent work! You have a strong understanding of the concepts."
            }
            Verdict::Adequate => "Good job! Consider reviewing some topics to improve further.",
            Verdict::NeedsReview => "Keep learning! Review the materials and try again when ready.",
        }
    }
}

/// How a single question was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub position: usize,
    pub selected: Option<usize>,
    pub correct_option: usize,
    pub is_correct: bool,
}

/// Graded result of an assessment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub assessment_id: u32,
    pub percent: u8,
    pub correct: usize,
    pub total: usize,
    pub verdict: Verdict,
    pub breakdown: Vec<AnswerOutcome>,
}

/// Percent of questions answered correctly, rounded half up.
///
/// Missing answers count as incorrect.
pub fn score(assessment: &Assessment, answers: &AnswerSet) -> u8 {
    percent_of(correct_count(assessment, answers), assessment.len())
}

pub fn correct_count(assessment: &Assessment, answers: &AnswerSet) -> usize {
    assessment
        .questions()
        .iter()
        .enumerate()
        .filter(|(position, question)| {
            answers
                .get(*position)
                .is_some_and(|selected| question.is_correct(selected))
        })
        .count()
}

/// Scores an attempt and lays out the per-question breakdown.
pub fn grade(assessment: &Assessment, answers: &AnswerSet) -> ScoreReport {
    let breakdown: Vec<AnswerOutcome> = assessment
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let selected = answers.get(position);
            AnswerOutcome {
                position,
                selected,
                correct_option: question.correct_option,
                is_correct: selected.is_some_and(|s| question.is_correct(s)),
            }
        })
        .collect();

    let correct = breakdown.iter().filter(|o| o.is_correct).count();
    let total = assessment.len();
    let percent = percent_of(correct, total);

    ScoreReport {
        assessment_id: assessment.id(),
        percent,
        correct,
        total,
        verdict: Verdict::from_score(percent),
        breakdown,
    }
}

/// `round(100 * part / whole)` with halves rounded up, in integers.
pub fn percent_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((200 * part + whole) / (2 * whole)) as u8
}
