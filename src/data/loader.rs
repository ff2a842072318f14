use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

use super::Catalog;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");
const BUILTIN_ORIGIN: &str = "built-in catalog";

/// The catalog shipped with the binary.
pub fn load_builtin_catalog() -> Result<Catalog, LoadError> {
    parse_catalog(BUILTIN_CATALOG, BUILTIN_ORIGIN)
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&json_content, &path.display().to_string())
}

/// Parses and checks a catalog. `origin` names the source in errors.
pub fn parse_catalog(json: &str, origin: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    if catalog.modules.is_empty() {
        return Err(LoadError::NoModules {
            origin: origin.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for assessment in &catalog.assessments {
        if !seen.insert(assessment.id()) {
            return Err(LoadError::DuplicateAssessment {
                origin: origin.to_string(),
                id: assessment.id(),
            });
        }
    }

    let mut seen = HashSet::new();
    for module in &catalog.modules {
        if !seen.insert(module.id) {
            return Err(LoadError::DuplicateModule {
                origin: origin.to_string(),
                id: module.id,
            });
        }
    }

    let mut seen = HashSet::new();
    for job in &catalog.jobs {
        if !seen.insert(job.id) {
            return Err(LoadError::DuplicateJob {
                origin: origin.to_string(),
                id: job.id,
            });
        }
    }

    if let Some(orphan) = catalog.applications.iter().find(|a| !seen.contains(&a.job_id)) {
        return Err(LoadError::UnknownJob {
            origin: origin.to_string(),
            application: orphan.id,
            job: orphan.job_id,
        });
    }

    debug!(
        origin,
        assessments = catalog.assessments.len(),
        modules = catalog.modules.len(),
        jobs = catalog.jobs.len(),
        accounts = catalog.accounts.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleStatus, Role};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = load_builtin_catalog().unwrap();
        assert_eq!(catalog.assessments.len(), 4);
        assert_eq!(catalog.modules.len(), 4);
        assert_eq!(catalog.modules[0].status, ModuleStatus::Completed);
        assert_eq!(catalog.modules[0].score, Some(85));
        assert_eq!(catalog.modules[1].progress_percent, 60);
        assert!(catalog.accounts.iter().any(|a| a.role == Role::Admin));
        assert_eq!(catalog.assessment(1).unwrap().title(), "JavaScript Fundamentals");
        assert_eq!(catalog.jobs.len(), 8);
        assert_eq!(catalog.applications.len(), 3);
    }

    #[test]
    fn every_builtin_module_has_an_assessment() {
        let catalog = load_builtin_catalog().unwrap();
        for module in &catalog.modules {
            assert!(catalog.assessment(module.id).is_some(), "module {}", module.id);
        }
    }

    #[test]
    fn rejects_duplicate_assessments() {
        let json = r#"{
            "assessments": [
                {"id": 1, "title": "A", "duration": 5, "questions": [{"id": 1, "prompt": "?", "options": ["x", "y"], "correct_option": 0}]},
                {"id": 1, "title": "B", "duration": 5, "questions": [{"id": 1, "prompt": "?", "options": ["x", "y"], "correct_option": 1}]}
            ],
            "modules": [{"id": 1, "title": "A", "status": "available"}]
        }"#;
        let err = parse_catalog(json, "test").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateAssessment { id: 1, .. }));
    }

    #[test]
    fn rejects_catalog_without_modules() {
        let json = r#"{"assessments": [], "modules": []}"#;
        let err = parse_catalog(json, "test").unwrap_err();
        assert!(matches!(err, LoadError::NoModules { .. }));
    }

    #[test]
    fn rejects_duplicate_jobs() {
        let json = r#"{
            "modules": [{"id": 1, "title": "A", "status": "available"}],
            "jobs": [
                {"id": 7, "title": "A", "company": "C", "salary": {"min": 1, "max": 2}, "posted_on": "2025-01-01"},
                {"id": 7, "title": "B", "company": "C", "salary": {"min": 1, "max": 2}, "posted_on": "2025-01-02"}
            ]
        }"#;
        let err = parse_catalog(json, "test").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateJob { id: 7, .. }));
    }

    #[test]
    fn rejects_application_to_unknown_job() {
        let json = r#"{
            "modules": [{"id": 1, "title": "A", "status": "available"}],
            "applications": [
                {"id": 4, "job_id": 9, "applicant": "a@b.c", "applied_on": "2025-01-01", "status": "interview"}
            ]
        }"#;
        let err = parse_catalog(json, "test").unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownJob {
                application: 4,
                job: 9,
                ..
            }
        ));
    }

    #[test]
    fn invalid_assessment_surfaces_as_parse_error() {
        let json = r#"{
            "assessments": [{"id": 2, "title": "A", "duration": 5, "questions": [{"id": 1, "prompt": "?", "options": ["x", "y"], "correct_option": 4}]}],
            "modules": [{"id": 1, "title": "A", "status": "available"}]
        }"#;
        let err = parse_catalog(json, "custom.json").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("failed to parse custom.json"), "{message}");
    }
}
