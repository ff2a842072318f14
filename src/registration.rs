//! Three-step account registration.
//!
//! The wizard walks through basic details, a role-specific profile and a
//! verification notice. Each step is validated before the learner may move
//! past it, and the whole form is checked again on completion.

use tracing::info;

use crate::assessment::percent_of;
use crate::error::{FieldError, FieldErrors, RegistrationError};
use crate::form::{cycle_str, step_index};
use crate::models::{Role, User};
use crate::validation;

pub const EXPERIENCE_LEVELS: [&str; 4] = ["Fresher", "1-2 Years", "3-5 Years", "5+ Years"];

pub const PROFESSIONS: [&str; 13] = [
    "Plumber",
    "Electrician",
    "Carpenter",
    "Painter",
    "Mechanic",
    "Welder",
    "Mason",
    "Driver",
    "Security Guard",
    "Cleaner",
    "Cook",
    "Gardener",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicInfo,
    Profile,
    Verification,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::BasicInfo, Step::Profile, Step::Verification];

    /// 1-based position in the wizard.
    pub fn number(self) -> usize {
        match self {
            Step::BasicInfo => 1,
            Step::Profile => 2,
            Step::Verification => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Info",
            Step::Profile => "Profile",
            Step::Verification => "Verification",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::BasicInfo => "Personal details",
            Step::Profile => "Professional information",
            Step::Verification => "Document upload",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::BasicInfo => Some(Step::Profile),
            Step::Profile => Some(Step::Verification),
            Step::Verification => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::BasicInfo => None,
            Step::Profile => Some(Step::BasicInfo),
            Step::Verification => Some(Step::Profile),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Role,
    Location,
    Experience,
    Profession,
    Skills,
    Bio,
    Portfolio,
    CompanyName,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Role => "role",
            Field::Location => "location",
            Field::Experience => "experience",
            Field::Profession => "profession",
            Field::Skills => "skills",
            Field::Bio => "bio",
            Field::Portfolio => "portfolio",
            Field::CompanyName => "company_name",
        }
    }

    /// Label shown next to the field. The free-text bio is framed
    /// differently for each role.
    pub fn label(self, role: Option<Role>) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Role => "Role",
            Field::Location => "Location",
            Field::Experience => "Experience",
            Field::Profession => "Profession",
            Field::Skills => "Skills",
            Field::Bio => match role {
                Some(Role::Employer) => "Company Description",
                Some(Role::Franchise) => "Business Plan",
                _ => "Bio/Summary",
            },
            Field::Portfolio => "Portfolio (Optional)",
            Field::CompanyName => "Company Name",
        }
    }

    /// Whether the field is picked from a fixed list rather than typed.
    pub fn is_choice(self) -> bool {
        matches!(self, Field::Role | Field::Experience | Field::Profession)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Option<Role>,
    pub location: String,
    pub experience: Option<&'static str>,
    pub profession: Option<&'static str>,
    pub skills: String,
    pub bio: String,
    pub portfolio: String,
    pub company_name: String,
}

impl RegistrationForm {
    /// Fields shown on `step` for the currently selected role.
    pub fn fields(&self, step: Step) -> Vec<Field> {
        match step {
            Step::BasicInfo => vec![
                Field::FullName,
                Field::Email,
                Field::Phone,
                Field::Role,
                Field::Location,
            ],
            Step::Profile => match self.role {
                Some(Role::JobSeeker) => vec![
                    Field::Experience,
                    Field::Profession,
                    Field::Skills,
                    Field::Bio,
                    Field::Portfolio,
                ],
                Some(Role::Employer) => vec![Field::CompanyName, Field::Bio],
                Some(Role::Franchise) => vec![Field::Bio],
                Some(Role::Admin) | None => Vec::new(),
            },
            Step::Verification => Vec::new(),
        }
    }

    /// Editable buffer for typed fields; `None` for choice fields.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Location => Some(&mut self.location),
            Field::Skills => Some(&mut self.skills),
            Field::Bio => Some(&mut self.bio),
            Field::Portfolio => Some(&mut self.portfolio),
            Field::CompanyName => Some(&mut self.company_name),
            Field::Role | Field::Experience | Field::Profession => None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Role => self.role.map(Role::title).unwrap_or(""),
            Field::Location => &self.location,
            Field::Experience => self.experience.unwrap_or(""),
            Field::Profession => self.profession.unwrap_or(""),
            Field::Skills => &self.skills,
            Field::Bio => &self.bio,
            Field::Portfolio => &self.portfolio,
            Field::CompanyName => &self.company_name,
        }
    }

    /// Steps a choice field to its next or previous option.
    pub fn cycle(&mut self, field: Field, forward: bool) {
        match field {
            Field::Role => {
                let current = self
                    .role
                    .and_then(|role| Role::SELF_SERVICE.iter().position(|r| *r == role));
                let index = step_index(current, Role::SELF_SERVICE.len(), forward);
                self.role = Some(Role::SELF_SERVICE[index]);
            }
            Field::Experience => self.experience = cycle_str(self.experience, &EXPERIENCE_LEVELS, forward),
            Field::Profession => self.profession = cycle_str(self.profession, &PROFESSIONS, forward),
            _ => {}
        }
    }

    pub fn validate_step(&self, step: Step) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match step {
            Step::BasicInfo => {
                validation::required(Field::FullName.key(), "Full name", &self.full_name, &mut errors);
                validation::email(Field::Email.key(), &self.email, &mut errors);
                validation::required(Field::Phone.key(), "Phone number", &self.phone, &mut errors);
                match self.role {
                    None => errors.push(FieldError::new(Field::Role.key(), "Select your role")),
                    Some(Role::Admin) => errors.push(FieldError::new(
                        Field::Role.key(),
                        "Administrator accounts cannot be self-registered",
                    )),
                    Some(_) => {}
                }
                validation::required(Field::Location.key(), "Location", &self.location, &mut errors);
            }
            Step::Profile => {
                if self.role == Some(Role::Employer) {
                    validation::required(
                        Field::CompanyName.key(),
                        "Company name",
                        &self.company_name,
                        &mut errors,
                    );
                }
            }
            Step::Verification => {}
        }
        errors.into_result()
    }
}

/// A completed registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub user: User,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: Step,
    form: RegistrationForm,
    errors: FieldErrors,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            step: Step::BasicInfo,
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    /// Errors from the most recent failed `next` or `submit`.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn progress_percent(&self) -> u8 {
        percent_of(self.step.number(), Step::ALL.len())
    }

    pub fn is_final_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Validates the current step and moves past it.
    pub fn next(&mut self) -> Result<Step, RegistrationError> {
        if let Err(errors) = self.form.validate_step(self.step) {
            self.errors = errors.clone();
            return Err(RegistrationError::Invalid(errors));
        }
        self.errors = FieldErrors::new();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                self.errors = FieldErrors::new();
                true
            }
            None => false,
        }
    }

    /// Completes registration. On failure the wizard returns to the first
    /// step with problems.
    pub fn submit(&mut self) -> Result<Registration, RegistrationError> {
        if !self.is_final_step() {
            return Err(RegistrationError::NotFinalStep);
        }

        for step in Step::ALL {
            if let Err(errors) = self.form.validate_step(step) {
                self.step = step;
                self.errors = errors.clone();
                return Err(RegistrationError::Invalid(errors));
            }
        }

        let Some(role) = self.form.role else {
            return Err(RegistrationError::Invalid(FieldErrors::new()));
        };
        let registration = Registration {
            user: User {
                email: self.form.email.trim().to_string(),
                name: self.form.full_name.trim().to_string(),
                role,
            },
            phone: self.form.phone.trim().to_string(),
            location: self.form.location.trim().to_string(),
        };
        info!(email = %registration.user.email, role = %role, "registration completed");
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_basic_info(role: Role) -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        let form = wizard.form_mut();
        form.full_name = "Asha Rao".to_string();
        form.email = "asha@example.com".to_string();
        form.phone = "98450 12345".to_string();
        form.role = Some(role);
        form.location = "Pune".to_string();
        wizard
    }

    #[test]
    fn empty_basic_info_reports_every_field() {
        let mut wizard = RegistrationWizard::new();
        let Err(RegistrationError::Invalid(errors)) = wizard.next() else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("full_name"), Some("Full name is required"));
        assert_eq!(errors.get("role"), Some("Select your role"));
        assert_eq!(wizard.step(), Step::BasicInfo);
        assert_eq!(wizard.errors().len(), 5);
    }

    #[test]
    fn malformed_email_blocks_progress() {
        let mut wizard = filled_basic_info(Role::JobSeeker);
        wizard.form_mut().email = "asha at example.com".to_string();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.errors().get("email"), Some("Invalid email address"));
    }

    #[test]
    fn employer_needs_company_name() {
        let mut wizard = filled_basic_info(Role::Employer);
        assert_eq!(wizard.next().unwrap(), Step::Profile);
        assert_eq!(wizard.form().fields(Step::Profile), vec![Field::CompanyName, Field::Bio]);

        assert!(wizard.next().is_err());
        assert_eq!(wizard.errors().get("company_name"), Some("Company name is required"));

        wizard.form_mut().company_name = "BuildRight".to_string();
        assert_eq!(wizard.next().unwrap(), Step::Verification);
    }

    #[test]
    fn job_seeker_profile_is_optional() {
        let mut wizard = filled_basic_info(Role::JobSeeker);
        wizard.next().unwrap();
        assert_eq!(wizard.next().unwrap(), Step::Verification);
        assert_eq!(wizard.progress_percent(), 100);

        let registration = wizard.submit().unwrap();
        assert_eq!(registration.user.role, Role::JobSeeker);
        assert_eq!(registration.user.name, "Asha Rao");
        assert_eq!(registration.location, "Pune");
    }

    #[test]
    fn submit_only_from_final_step() {
        let mut wizard = filled_basic_info(Role::Franchise);
        assert_eq!(wizard.submit().unwrap_err(), RegistrationError::NotFinalStep);
    }

    #[test]
    fn submit_returns_to_first_invalid_step() {
        let mut wizard = filled_basic_info(Role::JobSeeker);
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.form_mut().phone.clear();

        assert!(wizard.submit().is_err());
        assert_eq!(wizard.step(), Step::BasicInfo);
        assert!(wizard.errors().get("phone").is_some());
    }

    #[test]
    fn previous_skips_validation() {
        let mut wizard = filled_basic_info(Role::Franchise);
        wizard.next().unwrap();
        assert!(wizard.previous());
        assert!(!wizard.previous());
        assert_eq!(wizard.step(), Step::BasicInfo);
    }

    #[test]
    fn role_cycles_through_self_service_roles() {
        let mut form = RegistrationForm::default();
        form.cycle(Field::Role, true);
        assert_eq!(form.role, Some(Role::JobSeeker));
        form.cycle(Field::Role, false);
        assert_eq!(form.role, Some(Role::Franchise));
        form.cycle(Field::Role, true);
        assert_eq!(form.role, Some(Role::JobSeeker));
    }

    #[test]
    fn choice_fields_have_no_text_buffer() {
        let mut form = RegistrationForm::default();
        assert!(form.text_mut(Field::Profession).is_none());
        form.cycle(Field::Profession, false);
        assert_eq!(form.value(Field::Profession), "Other");
        form.text_mut(Field::Skills).unwrap().push_str("tile work");
        assert_eq!(form.value(Field::Skills), "tile work");
    }

    #[test]
    fn bio_label_follows_role() {
        assert_eq!(Field::Bio.label(Some(Role::Employer)), "Company Description");
        assert_eq!(Field::Bio.label(Some(Role::Franchise)), "Business Plan");
        assert_eq!(Field::Bio.label(None), "Bio/Summary");
    }
}
