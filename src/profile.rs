//! Editing a signed-in user's profile.

use crate::error::{FieldError, FieldErrors};
use crate::form::{Form, cycle_str};
use crate::jobs::split_skills;
use crate::models::{Profile, Role, User};
use crate::registration::{EXPERIENCE_LEVELS, PROFESSIONS};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Phone,
    Location,
    CompanyName,
    Experience,
    Profession,
    Skills,
    Bio,
    Portfolio,
}

impl ProfileField {
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Phone => "phone",
            ProfileField::Location => "location",
            ProfileField::CompanyName => "company_name",
            ProfileField::Experience => "experience",
            ProfileField::Profession => "profession",
            ProfileField::Skills => "skills",
            ProfileField::Bio => "bio",
            ProfileField::Portfolio => "portfolio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub location: String,
    pub company_name: String,
    pub experience: Option<&'static str>,
    pub profession: Option<&'static str>,
    /// Comma separated.
    pub skills: String,
    pub bio: String,
    pub portfolio: String,
}

fn known(value: Option<&str>, options: &[&'static str]) -> Option<&'static str> {
    let value = value?;
    options.iter().copied().find(|o| o.eq_ignore_ascii_case(value))
}

impl ProfileForm {
    /// Starts from what `user` has saved so far.
    pub fn edit(user: &User, profile: &Profile) -> Self {
        Self {
            role: user.role,
            name: user.name.clone(),
            phone: profile.phone.clone(),
            location: profile.location.clone(),
            company_name: profile.company_name.clone().unwrap_or_default(),
            experience: known(profile.experience.as_deref(), &EXPERIENCE_LEVELS),
            profession: known(profile.profession.as_deref(), &PROFESSIONS),
            skills: profile.skills.join(", "),
            bio: profile.bio.clone(),
            portfolio: profile.portfolio.clone(),
        }
    }

    /// Returns the new display name and the profile to store.
    pub fn validate(&self) -> Result<(String, Profile), FieldErrors> {
        let mut errors = FieldErrors::new();
        validation::required(ProfileField::Name.key(), "Full name", &self.name, &mut errors);
        if self.role == Role::Employer {
            validation::required(
                ProfileField::CompanyName.key(),
                "Company name",
                &self.company_name,
                &mut errors,
            );
        }
        let portfolio = self.portfolio.trim();
        if !portfolio.is_empty()
            && !(portfolio.starts_with("http://") || portfolio.starts_with("https://"))
        {
            errors.push(FieldError::new(
                ProfileField::Portfolio.key(),
                "Portfolio must be a web address",
            ));
        }
        errors.into_result()?;

        let company_name = match self.company_name.trim() {
            "" => None,
            name => Some(name.to_string()),
        };
        let profile = Profile {
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            bio: self.bio.trim().to_string(),
            experience: self.experience.map(str::to_string),
            profession: self.profession.map(str::to_string),
            skills: split_skills(&self.skills),
            portfolio: portfolio.to_string(),
            company_name,
        };
        Ok((self.name.trim().to_string(), profile))
    }
}

impl Form for ProfileForm {
    type Field = ProfileField;

    fn fields(&self) -> Vec<ProfileField> {
        use ProfileField as F;
        match self.role {
            Role::JobSeeker => vec![
                F::Name,
                F::Phone,
                F::Location,
                F::Experience,
                F::Profession,
                F::Skills,
                F::Bio,
                F::Portfolio,
            ],
            Role::Employer => vec![F::Name, F::Phone, F::Location, F::CompanyName, F::Bio],
            Role::Franchise | Role::Admin => vec![F::Name, F::Phone, F::Location, F::Bio],
        }
    }

    fn key(&self, field: ProfileField) -> &'static str {
        field.key()
    }

    fn label(&self, field: ProfileField) -> &'static str {
        match field {
            ProfileField::Name => "Full Name",
            ProfileField::Phone => "Phone",
            ProfileField::Location => "Location",
            ProfileField::CompanyName => "Company Name",
            ProfileField::Experience => "Experience Level",
            ProfileField::Profession => "Profession",
            ProfileField::Skills => "Skills (comma sep.)",
            ProfileField::Bio => match self.role {
                Role::Employer => "Company Description",
                _ => "Bio/Summary",
            },
            ProfileField::Portfolio => "Portfolio/Website (Optional)",
        }
    }

    fn is_choice(&self, field: ProfileField) -> bool {
        matches!(field, ProfileField::Experience | ProfileField::Profession)
    }

    fn value(&self, field: ProfileField) -> String {
        match field {
            ProfileField::Name => self.name.clone(),
            ProfileField::Phone => self.phone.clone(),
            ProfileField::Location => self.location.clone(),
            ProfileField::CompanyName => self.company_name.clone(),
            ProfileField::Experience => self.experience.unwrap_or_default().to_string(),
            ProfileField::Profession => self.profession.unwrap_or_default().to_string(),
            ProfileField::Skills => self.skills.clone(),
            ProfileField::Bio => self.bio.clone(),
            ProfileField::Portfolio => self.portfolio.clone(),
        }
    }

    fn text_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        match field {
            ProfileField::Name => Some(&mut self.name),
            ProfileField::Phone => Some(&mut self.phone),
            ProfileField::Location => Some(&mut self.location),
            ProfileField::CompanyName => Some(&mut self.company_name),
            ProfileField::Skills => Some(&mut self.skills),
            ProfileField::Bio => Some(&mut self.bio),
            ProfileField::Portfolio => Some(&mut self.portfolio),
            ProfileField::Experience | ProfileField::Profession => None,
        }
    }

    fn cycle(&mut self, field: ProfileField, forward: bool) {
        match field {
            ProfileField::Experience => {
                self.experience = cycle_str(self.experience, &EXPERIENCE_LEVELS, forward)
            }
            ProfileField::Profession => {
                self.profession = cycle_str(self.profession, &PROFESSIONS, forward)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            email: "rajesh@example.com".to_string(),
            name: "Rajesh Kumar".to_string(),
            role,
        }
    }

    #[test]
    fn loads_saved_profile() {
        let profile = Profile {
            phone: "+91 98765 43210".to_string(),
            experience: Some("5+ Years".to_string()),
            profession: Some("electrician".to_string()),
            skills: vec!["Electrical Wiring".to_string(), "Troubleshooting".to_string()],
            ..Profile::default()
        };
        let form = ProfileForm::edit(&user(Role::JobSeeker), &profile);
        assert_eq!(form.name, "Rajesh Kumar");
        assert_eq!(form.experience, Some("5+ Years"));
        assert_eq!(form.profession, Some("Electrician"));
        assert_eq!(form.skills, "Electrical Wiring, Troubleshooting");
    }

    #[test]
    fn saves_trimmed_profile() {
        let mut form = ProfileForm::edit(&user(Role::JobSeeker), &Profile::default());
        form.name = "  Rajesh K.  ".to_string();
        form.skills = "Wiring, , Panel Upgrades".to_string();
        form.cycle(ProfileField::Profession, true);

        let (name, profile) = form.validate().unwrap();
        assert_eq!(name, "Rajesh K.");
        assert_eq!(profile.skills, vec!["Wiring", "Panel Upgrades"]);
        assert_eq!(profile.profession.as_deref(), Some("Plumber"));
        assert_eq!(profile.company_name, None);
    }

    #[test]
    fn name_is_required() {
        let mut form = ProfileForm::edit(&user(Role::Admin), &Profile::default());
        form.name.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Full name is required"));
    }

    #[test]
    fn employer_needs_company_and_sees_company_fields() {
        let form = ProfileForm::edit(&user(Role::Employer), &Profile::default());
        assert!(form.fields().contains(&ProfileField::CompanyName));
        assert!(!form.fields().contains(&ProfileField::Profession));
        assert_eq!(form.label(ProfileField::Bio), "Company Description");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("company_name"), Some("Company name is required"));
    }

    #[test]
    fn portfolio_must_be_a_link() {
        let mut form = ProfileForm::edit(&user(Role::JobSeeker), &Profile::default());
        form.portfolio = "my site".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("portfolio"), Some("Portfolio must be a web address"));

        form.portfolio = "https://portfolio.example.com".to_string();
        assert!(form.validate().is_ok());
    }
}
