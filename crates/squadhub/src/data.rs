//! Static datasets.
//!
//! The page is a projection of three read-only lists. They come either from
//! the data shipped with the binary or from a JSON file with the same schema.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filter::distinct_tags;
use crate::model::{Project, ProjectStatus, ReleaseNote, Resource};

/// The three lists rendered on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Resource links.
    pub resources: Vec<Resource>,
    /// Project status cards.
    pub projects: Vec<Project>,
    /// Release notes, newest first.
    pub notes: Vec<ReleaseNote>,
}

impl Dataset {
    /// The squadron's shipped data.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            resources: vec![
                resource(
                    "NGSP Cadet File Review",
                    "https://www.canada.ca/en/department-national-defence/services/cadets-junior-canadian-rangers/cjcr-policy/cjcrgporders/8000/8060-7/8060-7e.html",
                    "Official guidelines for how officers will review a cadet's file for NGSP eligibility scoring.",
                    &["Official", "Flight"],
                ),
                resource(
                    "Instructional Guides Finder",
                    "https://cadetlessons.netlify.app/",
                    "A searchable collection of instructional guides for cadet training.",
                    &["Official", "Training"],
                ),
                resource(
                    "Cadet Uniform Regulations",
                    "https://cadetuniforms.netlify.app/",
                    "Detailed list of proper wear for each uniform/dress.",
                    &["Official", "Drill"],
                ),
                resource(
                    "VFR Radio Communication Handbook",
                    "https://www.navcanada.ca/en/vfr-phraseology.pdf",
                    "Detailed handbook on how to interact with the radio on board of an aircraft.",
                    &["Official", "Flight"],
                ),
            ],
            projects: vec![
                Project {
                    title: "Adding Resources".to_string(),
                    description:
                        "We are working to expand the resources available in the Resources section."
                            .to_string(),
                    status: ProjectStatus::InProgress,
                    progress: 15,
                    due: "2025-11-12".to_string(),
                },
                Project {
                    title: "Creating NGSP Study Game".to_string(),
                    description: "FSgt Meilleur is working hard with the help of other seniors to create a study quiz for the NGSP.".to_string(),
                    status: ProjectStatus::InProgress,
                    progress: 30,
                    due: "2025-11-12".to_string(),
                },
            ],
            notes: vec![ReleaseNote {
                version: "1.0.0".to_string(),
                date: "2025-11-07".to_string(),
                label: "Launch".to_string(),
                title: "Hub goes live".to_string(),
                bullets: vec![
                    "Hub is published and accessible to all squadron members.".to_string(),
                ],
            }],
        }
    }

    /// Load a dataset from a JSON file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for the
    /// dataset schema, or contains a project with out-of-range progress.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::data_load(path, e))?;
        let dataset: Self = serde_json::from_str(&raw).map_err(|e| Error::data_load(path, e))?;
        dataset.validate()?;
        info!(
            path = %path.display(),
            resources = dataset.resources.len(),
            projects = dataset.projects.len(),
            notes = dataset.notes.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Load from `path` when given, otherwise use the shipped data.
    ///
    /// # Errors
    ///
    /// See [`Dataset::load`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                debug!("Using built-in dataset");
                Ok(Self::builtin())
            }
        }
    }

    /// Check record invariants that rendering relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataValidation`] naming the first project whose
    /// progress lies outside `0..=100`.
    pub fn validate(&self) -> Result<()> {
        for project in &self.projects {
            if !(0..=100).contains(&project.progress) {
                return Err(Error::data_validation(format!(
                    "project '{}' has progress {} outside 0..=100",
                    project.title, project.progress
                )));
            }
        }
        Ok(())
    }

    /// Distinct resource tags in first-seen order.
    #[must_use]
    pub fn resource_tags(&self) -> Vec<&str> {
        distinct_tags(&self.resources)
    }

    /// Find a resource by title, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResource`] when nothing matches.
    pub fn find_resource(&self, title: &str) -> Result<&Resource> {
        let wanted = title.trim().to_lowercase();
        self.resources
            .iter()
            .find(|r| r.title.to_lowercase() == wanted)
            .ok_or_else(|| Error::UnknownResource {
                title: title.to_string(),
            })
    }
}

fn resource(title: &str, url: &str, desc: &str, tags: &[&str]) -> Resource {
    Resource {
        title: title.to_string(),
        url: url.to_string(),
        desc: desc.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        ext: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_dataset() {
        let data = Dataset::builtin();
        assert_eq!(data.resources.len(), 4);
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.notes.len(), 1);
        assert!(data.resources.iter().all(|r| r.ext));
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_resource_tags_first_seen_order() {
        let data = Dataset::builtin();
        assert_eq!(
            data.resource_tags(),
            vec!["Official", "Flight", "Training", "Drill"]
        );
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_dataset(
            r#"{
                "resources": [{"title": "A", "url": "https://a", "desc": "d", "tags": ["Tools"]}],
                "projects": [{"title": "P", "description": "d", "status": "completed", "progress": 100, "due": "2025-01-02"}]
            }"#,
        );
        let data = Dataset::load(file.path()).unwrap();
        assert_eq!(data.resources.len(), 1);
        assert_eq!(data.projects[0].status, ProjectStatus::Completed);
        assert!(data.notes.is_empty());
    }

    #[test]
    fn test_load_rejects_out_of_range_progress() {
        let file = write_dataset(
            r#"{"projects": [{"title": "Overdone", "description": "d", "status": "planning", "progress": 130, "due": "2025-01-02"}]}"#,
        );
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::DataValidation { .. }));
        assert!(err.to_string().contains("Overdone"));
    }

    #[test]
    fn test_load_rejects_negative_progress() {
        let mut data = Dataset::builtin();
        data.projects[0].progress = -1;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/squadhub.json")).unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_dataset("{ not json");
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let data = Dataset::load_or_builtin(None).unwrap();
        assert_eq!(data, Dataset::builtin());
    }

    #[test]
    fn test_find_resource_ignores_case() {
        let data = Dataset::builtin();
        let found = data.find_resource("cadet uniform regulations").unwrap();
        assert_eq!(found.url, "https://cadetuniforms.netlify.app/");
        assert!(data.find_resource("Nope").is_err());
    }
}
