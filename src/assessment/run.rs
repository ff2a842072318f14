use tracing::info;

use crate::error::AssessmentError;
use crate::models::{Assessment, Question};

use super::scorer::{AnswerSet, ScoreReport, grade, percent_of};

/// One learner's attempt at an assessment.
///
/// Navigation mirrors the question card: the learner can only move forward
/// past a question once it has an answer, can always move back, and can
/// jump to any question directly. Submission is only offered on the last
/// question once it is answered.
#[derive(Debug, Clone)]
pub struct AssessmentRun {
    assessment: Assessment,
    current: usize,
    answers: AnswerSet,
}

impl AssessmentRun {
    pub fn start(assessment: Assessment) -> Self {
        info!(assessment = assessment.id(), "assessment started");
        Self {
            assessment,
            current: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_position(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.assessment.questions()[self.current]
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current)
    }

    pub fn total_questions(&self) -> usize {
        self.assessment.len()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total_questions()
    }

    /// Records `option` for the current question.
    pub fn select(&mut self, option: usize) -> Result<(), AssessmentError> {
        let len = self.current_question().options.len();
        if option >= len {
            return Err(AssessmentError::OptionOutOfRange {
                position: self.current,
                option,
                len,
            });
        }
        self.answers.select(self.current, option);
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.current_answer().is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.is_last() && self.current_answer().is_some()
    }

    /// Moves to the next question. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn jump(&mut self, position: usize) -> bool {
        if position >= self.total_questions() {
            return false;
        }
        self.current = position;
        true
    }

    /// Share of the way through the question list, counting the current one.
    pub fn progress_percent(&self) -> u8 {
        percent_of(self.current + 1, self.total_questions())
    }

    pub fn submit(&self) -> Result<ScoreReport, AssessmentError> {
        if !self.can_submit() {
            return Err(AssessmentError::NotReadyToSubmit);
        }

        let report = grade(&self.assessment, &self.answers);
        info!(
            assessment = self.assessment.id(),
            percent = report.percent,
            verdict = report.verdict.label(),
            "assessment submitted"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Verdict;

    fn three_questions() -> Assessment {
        let questions = vec![
            Question::new(1, "First", ["a", "b"], 0),
            Question::new(2, "Second", ["a", "b", "c"], 2),
            Question::new(3, "Third", ["a", "b"], 1),
        ];
        Assessment::new(1, "Trio", "Three quick ones", 10, questions).unwrap()
    }

    #[test]
    fn cannot_advance_without_an_answer() {
        let mut run = AssessmentRun::start(three_questions());
        assert!(!run.next());
        assert_eq!(run.current_position(), 0);

        run.select(1).unwrap();
        assert!(run.next());
        assert_eq!(run.current_position(), 1);
    }

    #[test]
    fn previous_stops_at_first_question() {
        let mut run = AssessmentRun::start(three_questions());
        assert!(!run.previous());
        run.select(0).unwrap();
        run.next();
        assert!(run.previous());
        assert_eq!(run.current_question().id, 1);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut run = AssessmentRun::start(three_questions());
        let err = run.select(2).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::OptionOutOfRange {
                position: 0,
                option: 2,
                len: 2
            }
        );
        assert_eq!(run.current_answer(), None);
    }

    #[test]
    fn submit_requires_answered_last_question() {
        let mut run = AssessmentRun::start(three_questions());
        assert_eq!(run.submit().unwrap_err(), AssessmentError::NotReadyToSubmit);

        assert!(run.jump(2));
        assert!(!run.can_submit());
        run.select(1).unwrap();
        assert!(run.can_submit());

        let report = run.submit().unwrap();
        assert_eq!(report.correct, 1);
        assert_eq!(report.percent, 33);
        assert_eq!(report.verdict, Verdict::NeedsReview);
    }

    #[test]
    fn jump_rejects_unknown_positions() {
        let mut run = AssessmentRun::start(three_questions());
        assert!(!run.jump(3));
        assert_eq!(run.current_position(), 0);
    }

    #[test]
    fn progress_counts_current_question() {
        let mut run = AssessmentRun::start(three_questions());
        assert_eq!(run.progress_percent(), 33);
        run.jump(2);
        assert_eq!(run.progress_percent(), 100);
    }
}
