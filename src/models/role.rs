use std::fmt;

use serde::{Deserialize, Serialize};

/// The four kinds of portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[serde(alias = "jobSeeker")]
    JobSeeker,
    Employer,
    Franchise,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::JobSeeker, Role::Employer, Role::Franchise, Role::Admin];

    /// Roles a visitor may pick for themselves; admins are provisioned.
    pub const SELF_SERVICE: [Role; 3] = [Role::JobSeeker, Role::Employer, Role::Franchise];

    /// Parses a canonical dashboard token. Anything else is `None`.
    pub fn from_token(token: &str) -> Option<Role> {
        Self::ALL.into_iter().find(|role| role.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Role::JobSeeker => "job-seeker",
            Role::Employer => "employer",
            Role::Franchise => "franchise",
            Role::Admin => "admin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::JobSeeker => "Job Seeker",
            Role::Employer => "Employer",
            Role::Franchise => "Franchise Partner",
            Role::Admin => "Administrator",
        }
    }

    pub fn dashboard_path(self) -> String {
        format!("/dashboard/{}", self.token())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_token(role.token()), Some(role));
        }
    }

    #[test]
    fn camel_case_token_is_only_a_serde_alias() {
        let role: Role = serde_json::from_str("\"jobSeeker\"").unwrap();
        assert_eq!(role, Role::JobSeeker);
        assert_eq!(Role::from_token("jobSeeker"), None);
    }

    #[test]
    fn dashboard_path_uses_token() {
        assert_eq!(Role::Franchise.dashboard_path(), "/dashboard/franchise");
    }
}
