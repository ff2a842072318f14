use crate::error::FieldErrors;
use crate::form::{Form, cycle_str};
use crate::models::User;
use crate::validation;

pub const APPLICANT_EXPERIENCE: [&str; 5] =
    ["Fresher", "1-2 Years", "3-5 Years", "5-10 Years", "10+ Years"];

pub const AVAILABILITY: [&str; 5] = ["Immediate", "2 Weeks", "1 Month", "2 Months", "3 Months"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    Name,
    Email,
    Phone,
    Experience,
    ExpectedSalary,
    Availability,
    CoverLetter,
}

impl ApplicationField {
    pub const ALL: [ApplicationField; 7] = [
        ApplicationField::Name,
        ApplicationField::Email,
        ApplicationField::Phone,
        ApplicationField::Experience,
        ApplicationField::ExpectedSalary,
        ApplicationField::Availability,
        ApplicationField::CoverLetter,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ApplicationField::Name => "name",
            ApplicationField::Email => "email",
            ApplicationField::Phone => "phone",
            ApplicationField::Experience => "experience",
            ApplicationField::ExpectedSalary => "expected_salary",
            ApplicationField::Availability => "availability",
            ApplicationField::CoverLetter => "cover_letter",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: Option<&'static str>,
    pub expected_salary: String,
    pub availability: Option<&'static str>,
    pub cover_letter: String,
}

/// What an applicant submitted for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: Option<String>,
    pub expected_salary: u32,
    pub availability: Option<String>,
    pub cover_letter: String,
}

impl ApplicationForm {
    /// Starts with the signed-in user's name and email filled in.
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                name: user.name.clone(),
                email: user.email.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<JobApplication, FieldErrors> {
        use ApplicationField as F;

        let mut errors = FieldErrors::new();
        validation::present(F::Name.key(), "Name is required", &self.name, &mut errors);
        validation::email(F::Email.key(), &self.email, &mut errors);
        validation::required(F::Phone.key(), "Phone number", &self.phone, &mut errors);
        let expected_salary = validation::whole_number(
            F::ExpectedSalary.key(),
            "Expected salary",
            &self.expected_salary,
            &mut errors,
        );
        validation::present(
            F::CoverLetter.key(),
            "Cover letter is required",
            &self.cover_letter,
            &mut errors,
        );

        let Some(expected_salary) = expected_salary else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(JobApplication {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            experience: self.experience.map(str::to_string),
            expected_salary,
            availability: self.availability.map(str::to_string),
            cover_letter: self.cover_letter.trim().to_string(),
        })
    }
}

impl Form for ApplicationForm {
    type Field = ApplicationField;

    fn fields(&self) -> Vec<ApplicationField> {
        ApplicationField::ALL.to_vec()
    }

    fn key(&self, field: ApplicationField) -> &'static str {
        field.key()
    }

    fn label(&self, field: ApplicationField) -> &'static str {
        match field {
            ApplicationField::Name => "Full Name",
            ApplicationField::Email => "Email",
            ApplicationField::Phone => "Phone",
            ApplicationField::Experience => "Experience",
            ApplicationField::ExpectedSalary => "Expected Salary (₹/yr)",
            ApplicationField::Availability => "Availability",
            ApplicationField::CoverLetter => "Cover Letter",
        }
    }

    fn is_choice(&self, field: ApplicationField) -> bool {
        matches!(
            field,
            ApplicationField::Experience | ApplicationField::Availability
        )
    }

    fn value(&self, field: ApplicationField) -> String {
        match field {
            ApplicationField::Name => self.name.clone(),
            ApplicationField::Email => self.email.clone(),
            ApplicationField::Phone => self.phone.clone(),
            ApplicationField::Experience => self.experience.unwrap_or_default().to_string(),
            ApplicationField::ExpectedSalary => self.expected_salary.clone(),
            ApplicationField::Availability => self.availability.unwrap_or_default().to_string(),
            ApplicationField::CoverLetter => self.cover_letter.clone(),
        }
    }

    fn text_mut(&mut self, field: ApplicationField) -> Option<&mut String> {
        match field {
            ApplicationField::Name => Some(&mut self.name),
            ApplicationField::Email => Some(&mut self.email),
            ApplicationField::Phone => Some(&mut self.phone),
            ApplicationField::ExpectedSalary => Some(&mut self.expected_salary),
            ApplicationField::CoverLetter => Some(&mut self.cover_letter),
            ApplicationField::Experience | ApplicationField::Availability => None,
        }
    }

    fn cycle(&mut self, field: ApplicationField, forward: bool) {
        match field {
            ApplicationField::Experience => {
                self.experience = cycle_str(self.experience, &APPLICANT_EXPERIENCE, forward)
            }
            ApplicationField::Availability => {
                self.availability = cycle_str(self.availability, &AVAILABILITY, forward)
            }
            _ => {}
        }
    }
}
