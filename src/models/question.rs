use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Minimum number of options a multiple-choice question must offer.
pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_option: usize,
}

impl Question {
    pub fn new<S: Into<String>>(
        id: u32,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_option: usize,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option,
        }
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option
    }

    fn validate(&self) -> Result<(), AssessmentError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(AssessmentError::TooFewOptions {
                question: self.id,
                found: self.options.len(),
            });
        }

        if self.correct_option >= self.options.len() {
            return Err(AssessmentError::CorrectOptionOutOfRange {
                question: self.id,
                index: self.correct_option,
                len: self.options.len(),
            });
        }

        Ok(())
    }
}

/// A timed multiple-choice quiz with a fixed answer key.
///
/// Construction validates the whole definition, so every `Assessment` in
/// circulation has at least one question and every answer key entry points
/// at a real option. Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AssessmentDef", into = "AssessmentDef")]
pub struct Assessment {
    id: u32,
    title: String,
    description: String,
    duration_minutes: u32,
    questions: Vec<Question>,
}

impl Assessment {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
        questions: Vec<Question>,
    ) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::NoQuestions(id));
        }
        if duration_minutes == 0 {
            return Err(AssessmentError::ZeroDuration(id));
        }
        for question in &questions {
            question.validate()?;
        }

        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            duration_minutes,
            questions,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Advisory only; nothing enforces it.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Wire shape of an [`Assessment`], before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssessmentDef {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(alias = "duration")]
    duration_minutes: u32,
    questions: Vec<Question>,
}

impl TryFrom<AssessmentDef> for Assessment {
    type Error = AssessmentError;

    fn try_from(def: AssessmentDef) -> Result<Self, Self::Error> {
        Assessment::new(
            def.id,
            def.title,
            def.description,
            def.duration_minutes,
            def.questions,
        )
    }
}

impl From<Assessment> for AssessmentDef {
    fn from(assessment: Assessment) -> Self {
        Self {
            id: assessment.id,
            title: assessment.title,
            description: assessment.description,
            duration_minutes: assessment.duration_minutes,
            questions: assessment.questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no(id: u32, correct: usize) -> Question {
        Question::new(id, "Is this a question?", ["yes", "no"], correct)
    }

    #[test]
    fn rejects_empty_question_list() {
        let err = Assessment::new(7, "Empty", "", 10, Vec::new()).unwrap_err();
        assert_eq!(err, AssessmentError::NoQuestions(7));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = Assessment::new(3, "Instant", "", 0, vec![yes_no(1, 0)]).unwrap_err();
        assert_eq!(err, AssessmentError::ZeroDuration(3));
    }

    #[test]
    fn rejects_out_of_range_answer_key() {
        let err = Assessment::new(1, "Broken", "", 5, vec![yes_no(1, 0), yes_no(2, 2)]).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::CorrectOptionOutOfRange {
                question: 2,
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn rejects_single_option_question() {
        let lonely = Question::new(4, "Pick one", ["only"], 0);
        let err = Assessment::new(1, "Lonely", "", 5, vec![lonely]).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::TooFewOptions {
                question: 4,
                found: 1
            }
        );
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"id": 9, "title": "Bad", "duration": 5, "questions": []}"#;
        let err = serde_json::from_str::<Assessment>(json).unwrap_err();
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn accepts_legacy_field_names() {
        let json = r#"{
            "id": 1,
            "title": "JS",
            "duration": 30,
            "questions": [
                {"id": 1, "question": "Pick", "options": ["a", "b"], "correctAnswer": 1}
            ]
        }"#;
        let assessment: Assessment = serde_json::from_str(json).unwrap();
        assert_eq!(assessment.duration_minutes(), 30);
        assert_eq!(assessment.questions()[0].prompt, "Pick");
        assert!(assessment.questions()[0].is_correct(1));
    }
}
