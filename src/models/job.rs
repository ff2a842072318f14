use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
        JobType::Internship,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Internship => "Internship",
        }
    }
}

/// Whether an employer is currently taking applications for a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostingStatus {
    #[default]
    Active,
    Paused,
}

impl PostingStatus {
    pub fn label(self) -> &'static str {
        match self {
            PostingStatus::Active => "active",
            PostingStatus::Paused => "paused",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PostingStatus::Active => PostingStatus::Paused,
            PostingStatus::Paused => PostingStatus::Active,
        }
    }
}

/// Yearly pay band in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

const LAKH: u32 = 100_000;

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min >= LAKH {
            let lakhs = |amount: u32| f64::from(amount) / f64::from(LAKH);
            write!(f, "₹{}-{} LPA", lakhs(self.min), lakhs(self.max))
        } else {
            write!(f, "₹{}-{} per year", self.min, self.max)
        }
    }
}

/// An open position on the job board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default, alias = "type")]
    pub job_type: JobType,
    #[serde(default)]
    pub experience: String,
    pub salary: SalaryRange,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    pub posted_on: NaiveDate,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub urgent: bool,
    /// Email of the employer account that owns the posting.
    #[serde(default)]
    pub posted_by: Option<String>,
    #[serde(default)]
    pub status: PostingStatus,
    #[serde(default)]
    pub applicants: u32,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == PostingStatus::Active
    }

    pub fn place(&self) -> &str {
        if self.remote && self.location.is_empty() {
            "Remote"
        } else {
            &self.location
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    UnderReview,
    Interview,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Interview => "Interview Scheduled",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// A job seeker's application to one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    pub job_id: u32,
    /// Email the applicant applied with.
    pub applicant: String,
    #[serde(default)]
    pub applicant_name: String,
    pub applied_on: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub expected_salary: Option<u32>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub cover_letter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_in_lakhs() {
        let band = SalaryRange {
            min: 800_000,
            max: 1_200_000,
        };
        assert_eq!(band.to_string(), "₹8-12 LPA");

        let band = SalaryRange {
            min: 300_000,
            max: 420_000,
        };
        assert_eq!(band.to_string(), "₹3-4.2 LPA");
    }

    #[test]
    fn small_salaries_stay_in_rupees() {
        let band = SalaryRange {
            min: 60_000,
            max: 90_000,
        };
        assert_eq!(band.to_string(), "₹60000-90000 per year");
    }

    #[test]
    fn application_status_uses_kebab_case() {
        let status: ApplicationStatus = serde_json::from_str("\"under-review\"").unwrap();
        assert_eq!(status, ApplicationStatus::UnderReview);
        assert_eq!(status.label(), "Under Review");
    }

    #[test]
    fn posting_status_toggles() {
        assert_eq!(PostingStatus::Active.toggled(), PostingStatus::Paused);
        assert_eq!(PostingStatus::Paused.toggled(), PostingStatus::Active);
    }
}
