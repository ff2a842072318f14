use chrono::NaiveDate;

use crate::error::{FieldError, FieldErrors};
use crate::form::{Form, cycle_str, step_index};
use crate::models::{JobType, SalaryRange};
use crate::validation;

pub const POSTING_EXPERIENCE: [&str; 5] = [
    "Fresher",
    "Junior (1-3 years)",
    "Mid Level (3-5 years)",
    "Senior (5-8 years)",
    "Lead (8+ years)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingField {
    Title,
    Company,
    Department,
    Remote,
    Location,
    JobType,
    Experience,
    SalaryMin,
    SalaryMax,
    Deadline,
    Description,
    Requirements,
    Benefits,
    Skills,
    Urgent,
}

impl PostingField {
    pub const ALL: [PostingField; 15] = [
        PostingField::Title,
        PostingField::Company,
        PostingField::Department,
        PostingField::Remote,
        PostingField::Location,
        PostingField::JobType,
        PostingField::Experience,
        PostingField::SalaryMin,
        PostingField::SalaryMax,
        PostingField::Deadline,
        PostingField::Description,
        PostingField::Requirements,
        PostingField::Benefits,
        PostingField::Skills,
        PostingField::Urgent,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PostingField::Title => "title",
            PostingField::Company => "company",
            PostingField::Department => "department",
            PostingField::Remote => "remote",
            PostingField::Location => "location",
            PostingField::JobType => "job_type",
            PostingField::Experience => "experience",
            PostingField::SalaryMin => "salary_min",
            PostingField::SalaryMax => "salary_max",
            PostingField::Deadline => "deadline",
            PostingField::Description => "description",
            PostingField::Requirements => "requirements",
            PostingField::Benefits => "benefits",
            PostingField::Skills => "skills",
            PostingField::Urgent => "urgent",
        }
    }
}

/// Raw input of the "post a job" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPostingForm {
    pub title: String,
    pub company: String,
    pub department: String,
    pub remote: bool,
    pub location: String,
    pub job_type: JobType,
    pub experience: Option<&'static str>,
    pub salary_min: String,
    pub salary_max: String,
    pub deadline: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    /// Comma separated.
    pub skills: String,
    pub urgent: bool,
}

/// A validated posting, ready to go on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub department: String,
    pub location: String,
    pub remote: bool,
    pub job_type: JobType,
    pub experience: Option<String>,
    pub salary: SalaryRange,
    pub deadline: NaiveDate,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub skills: Vec<String>,
    pub urgent: bool,
}

/// Splits a comma separated list, dropping blanks and repeats.
pub fn split_skills(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !skills.iter().any(|known| known.eq_ignore_ascii_case(skill)) {
            skills.push(skill.to_string());
        }
    }
    skills
}

impl JobPostingForm {
    pub fn with_company(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..Self::default()
        }
    }

    /// Checks every field. A deadline before `today` is rejected, and the
    /// location may only be left out of remote postings.
    pub fn validate(&self, today: NaiveDate) -> Result<JobPosting, FieldErrors> {
        use PostingField as F;

        let mut errors = FieldErrors::new();
        validation::required(F::Title.key(), "Job title", &self.title, &mut errors);
        validation::required(F::Company.key(), "Company name", &self.company, &mut errors);
        if !self.remote {
            validation::required(F::Location.key(), "Location", &self.location, &mut errors);
        }

        let min = validation::whole_number(
            F::SalaryMin.key(),
            "Minimum salary",
            &self.salary_min,
            &mut errors,
        );
        let max = validation::whole_number(
            F::SalaryMax.key(),
            "Maximum salary",
            &self.salary_max,
            &mut errors,
        );
        if let (Some(min), Some(max)) = (min, max) {
            if max < min {
                errors.push(FieldError::new(
                    F::SalaryMax.key(),
                    "Maximum salary must not be below the minimum",
                ));
            }
        }

        let deadline = validation::date(
            F::Deadline.key(),
            "Application deadline",
            &self.deadline,
            &mut errors,
        );
        if let Some(deadline) = deadline {
            if deadline < today {
                errors.push(FieldError::new(
                    F::Deadline.key(),
                    "Application deadline cannot be in the past",
                ));
            }
        }

        validation::required(
            F::Description.key(),
            "Job description",
            &self.description,
            &mut errors,
        );
        validation::present(
            F::Requirements.key(),
            "Requirements are required",
            &self.requirements,
            &mut errors,
        );
        let skills = split_skills(&self.skills);
        if skills.is_empty() {
            errors.push(FieldError::new(F::Skills.key(), "Key skills are required"));
        }

        let (Some(min), Some(max), Some(deadline)) = (min, max, deadline) else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(JobPosting {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            department: self.department.trim().to_string(),
            location: self.location.trim().to_string(),
            remote: self.remote,
            job_type: self.job_type,
            experience: self.experience.map(str::to_string),
            salary: SalaryRange { min, max },
            deadline,
            description: self.description.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
            benefits: self.benefits.trim().to_string(),
            skills,
            urgent: self.urgent,
        })
    }
}

impl Form for JobPostingForm {
    type Field = PostingField;

    fn fields(&self) -> Vec<PostingField> {
        PostingField::ALL.to_vec()
    }

    fn key(&self, field: PostingField) -> &'static str {
        field.key()
    }

    fn label(&self, field: PostingField) -> &'static str {
        match field {
            PostingField::Title => "Job Title",
            PostingField::Company => "Company Name",
            PostingField::Department => "Department",
            PostingField::Remote => "Remote Work",
            PostingField::Location if self.remote => "Location (optional)",
            PostingField::Location => "Location",
            PostingField::JobType => "Job Type",
            PostingField::Experience => "Experience Level",
            PostingField::SalaryMin => "Minimum Salary (₹/yr)",
            PostingField::SalaryMax => "Maximum Salary (₹/yr)",
            PostingField::Deadline => "Deadline (YYYY-MM-DD)",
            PostingField::Description => "Job Description",
            PostingField::Requirements => "Requirements",
            PostingField::Benefits => "Benefits",
            PostingField::Skills => "Key Skills (comma sep.)",
            PostingField::Urgent => "Urgent Hiring",
        }
    }

    fn is_choice(&self, field: PostingField) -> bool {
        matches!(
            field,
            PostingField::Remote
                | PostingField::JobType
                | PostingField::Experience
                | PostingField::Urgent
        )
    }

    fn value(&self, field: PostingField) -> String {
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" }.to_string();
        match field {
            PostingField::Remote => yes_no(self.remote),
            PostingField::Urgent => yes_no(self.urgent),
            PostingField::JobType => self.job_type.label().to_string(),
            PostingField::Experience => self.experience.unwrap_or_default().to_string(),
            PostingField::Title => self.title.clone(),
            PostingField::Company => self.company.clone(),
            PostingField::Department => self.department.clone(),
            PostingField::Location => self.location.clone(),
            PostingField::SalaryMin => self.salary_min.clone(),
            PostingField::SalaryMax => self.salary_max.clone(),
            PostingField::Deadline => self.deadline.clone(),
            PostingField::Description => self.description.clone(),
            PostingField::Requirements => self.requirements.clone(),
            PostingField::Benefits => self.benefits.clone(),
            PostingField::Skills => self.skills.clone(),
        }
    }

    fn text_mut(&mut self, field: PostingField) -> Option<&mut String> {
        match field {
            PostingField::Title => Some(&mut self.title),
            PostingField::Company => Some(&mut self.company),
            PostingField::Department => Some(&mut self.department),
            PostingField::Location => Some(&mut self.location),
            PostingField::SalaryMin => Some(&mut self.salary_min),
            PostingField::SalaryMax => Some(&mut self.salary_max),
            PostingField::Deadline => Some(&mut self.deadline),
            PostingField::Description => Some(&mut self.description),
            PostingField::Requirements => Some(&mut self.requirements),
            PostingField::Benefits => Some(&mut self.benefits),
            PostingField::Skills => Some(&mut self.skills),
            PostingField::Remote
            | PostingField::JobType
            | PostingField::Experience
            | PostingField::Urgent => None,
        }
    }

    fn cycle(&mut self, field: PostingField, forward: bool) {
        match field {
            PostingField::Remote => self.remote = !self.remote,
            PostingField::Urgent => self.urgent = !self.urgent,
            PostingField::JobType => {
                let current = JobType::ALL.iter().position(|t| *t == self.job_type);
                self.job_type = JobType::ALL[step_index(current, JobType::ALL.len(), forward)];
            }
            PostingField::Experience => {
                self.experience = cycle_str(self.experience, &POSTING_EXPERIENCE, forward)
            }
            _ => {}
        }
    }
}
