use chrono::NaiveDate;
use tracing::info;

use crate::error::JobError;
use crate::models::{Application, ApplicationStatus, Job, PostingStatus};

use super::{JobApplication, JobPosting};

/// Search settings for the job list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Matched against title, company and skills, ignoring case.
    pub query: String,
    /// City to match at the start of the job's location.
    pub city: Option<String>,
    pub remote_only: bool,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_match = query.is_empty()
            || job.title.to_lowercase().contains(&query)
            || job.company.to_lowercase().contains(&query)
            || job.skills.iter().any(|s| s.to_lowercase().contains(&query));

        let city_match = match &self.city {
            Some(city) => city_of(&job.location).eq_ignore_ascii_case(city),
            None => true,
        };

        text_match && city_match && (!self.remote_only || job.remote)
    }
}

fn city_of(location: &str) -> &str {
    location.split(',').next().unwrap_or_default().trim()
}

/// Jobs and the applications made to them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobBoard {
    jobs: Vec<Job>,
    applications: Vec<Application>,
}

impl JobBoard {
    pub fn new(jobs: Vec<Job>, applications: Vec<Application>) -> Self {
        Self { jobs, applications }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: u32) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// Open jobs passing `filter`, newest first.
    pub fn search(&self, filter: &JobFilter) -> Vec<&Job> {
        let mut found: Vec<&Job> = self
            .jobs
            .iter()
            .filter(|job| job.is_open() && filter.matches(job))
            .collect();
        found.sort_by(|a, b| b.posted_on.cmp(&a.posted_on).then(a.id.cmp(&b.id)));
        found
    }

    /// Distinct cities of open jobs, sorted.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .jobs
            .iter()
            .filter(|job| job.is_open() && !job.location.is_empty())
            .map(|job| city_of(&job.location).to_string())
            .collect();
        cities.sort();
        cities.dedup();
        cities
    }

    /// Number of open jobs in each city, by city name.
    pub fn openings_by_city(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for city in self.cities() {
            let open = self
                .jobs
                .iter()
                .filter(|job| job.is_open() && city_of(&job.location) == city)
                .count();
            counts.push((city, open));
        }
        counts
    }

    /// Postings owned by `owner`, or the anonymous ones when `None`.
    pub fn posted_by(&self, owner: Option<&str>) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| job.posted_by.as_deref() == owner)
            .collect()
    }

    pub fn applications_by(&self, applicant: &str) -> Vec<&Application> {
        let mut found: Vec<&Application> = self
            .applications
            .iter()
            .filter(|a| a.applicant.eq_ignore_ascii_case(applicant))
            .collect();
        found.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
        found
    }

    pub fn has_applied(&self, job_id: u32, applicant: &str) -> bool {
        self.applications
            .iter()
            .any(|a| a.job_id == job_id && a.applicant.eq_ignore_ascii_case(applicant))
    }

    /// Publishes `posting` and returns the new job's id.
    pub fn post(&mut self, posting: JobPosting, owner: Option<&str>, today: NaiveDate) -> u32 {
        let id = self.jobs.iter().map(|job| job.id).max().unwrap_or(0) + 1;
        let mut description = posting.description;
        if !posting.benefits.is_empty() {
            description = format!("{}\n\nBenefits: {}", description, posting.benefits);
        }

        info!(job = id, title = %posting.title, owner = owner.unwrap_or("guest"), "job posted");
        self.jobs.push(Job {
            id,
            title: posting.title,
            company: posting.company,
            location: posting.location,
            remote: posting.remote,
            job_type: posting.job_type,
            experience: posting.experience.unwrap_or_default(),
            salary: posting.salary,
            skills: posting.skills,
            description,
            requirements: posting.requirements,
            posted_on: today,
            deadline: Some(posting.deadline),
            verified: false,
            urgent: posting.urgent,
            posted_by: owner.map(str::to_string),
            status: PostingStatus::Active,
            applicants: 0,
        });
        id
    }

    /// Files an application, which starts under review.
    ///
    /// Fails for unknown or paused jobs, for jobs whose deadline has passed
    /// and when this email already applied.
    pub fn apply(
        &mut self,
        job_id: u32,
        application: JobApplication,
        today: NaiveDate,
    ) -> Result<u32, JobError> {
        let job = self
            .jobs
            .iter()
            .find(|job| job.id == job_id)
            .ok_or(JobError::UnknownJob(job_id))?;
        let expired = job.deadline.is_some_and(|deadline| deadline < today);
        if !job.is_open() || expired {
            return Err(JobError::PostingClosed(job_id));
        }
        if self.has_applied(job_id, &application.email) {
            return Err(JobError::AlreadyApplied {
                job: job_id,
                applicant: application.email,
            });
        }

        let id = self.applications.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        info!(application = id, job = job_id, applicant = %application.email, "application filed");
        self.applications.push(Application {
            id,
            job_id,
            applicant: application.email,
            applicant_name: application.name,
            applied_on: today,
            status: ApplicationStatus::UnderReview,
            expected_salary: Some(application.expected_salary),
            availability: application.availability,
            cover_letter: application.cover_letter,
        });
        if let Some(job) = self.jobs.iter_mut().find(|job| job.id == job_id) {
            job.applicants += 1;
        }
        Ok(id)
    }

    /// Pauses an active posting or reopens a paused one.
    pub fn toggle_posting(&mut self, job_id: u32) -> Result<PostingStatus, JobError> {
        let job = self
            .jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or(JobError::UnknownJob(job_id))?;
        job.status = job.status.toggled();
        info!(job = job_id, status = job.status.label(), "posting status changed");
        Ok(job.status)
    }
}
