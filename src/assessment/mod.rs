//! Assessment scoring and interactive attempts.

mod run;
mod scorer;

pub use run::AssessmentRun;
pub use scorer::{
    AnswerOutcome, AnswerSet, ScoreReport, Verdict, correct_count, grade, percent_of, score,
};
