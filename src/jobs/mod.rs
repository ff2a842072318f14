//! The job board: searching open positions, posting jobs and applying.

mod application;
mod board;
mod posting;

pub use application::{
    APPLICANT_EXPERIENCE, AVAILABILITY, ApplicationField, ApplicationForm, JobApplication,
};
pub use board::{JobBoard, JobFilter};
pub use posting::{JobPosting, JobPostingForm, POSTING_EXPERIENCE, PostingField, split_skills};
