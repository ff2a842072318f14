use std::fmt;

use serde::{Deserialize, Serialize};

use super::Role;

/// A signed-in portal user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Contact and career details a user can edit after signing up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub experience: Option<String>,
    pub profession: Option<String>,
    pub skills: Vec<String>,
    pub portfolio: String,
    pub company_name: Option<String>,
}

/// A demo login. Passwords are plain text; these accounts only exist to
/// exercise the sign-in flow.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl DemoAccount {
    pub fn user(&self) -> User {
        User {
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for DemoAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoAccount")
            .field("email", &self.email)
            .field("password", &"***")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_password() {
        let account = DemoAccount {
            email: "employer@demo.com".to_string(),
            password: "password123".to_string(),
            name: "Jane Smith".to_string(),
            role: Role::Employer,
        };
        let debug = format!("{:?}", account);
        assert!(!debug.contains("password123"));
        assert!(debug.contains("employer@demo.com"));
        assert_eq!(account.user().role, Role::Employer);
    }
}
