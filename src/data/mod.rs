//! Static portal data: assessments, the module chain, the job board and
//! demo accounts.

mod loader;

use serde::{Deserialize, Serialize};

use crate::models::{Application, Assessment, DemoAccount, Job, Module};

pub use loader::{load_builtin_catalog, load_catalog_from_json, parse_catalog};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    pub modules: Vec<Module>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub accounts: Vec<DemoAccount>,
}

impl Catalog {
    pub fn assessment(&self, id: u32) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.id() == id)
    }
}
