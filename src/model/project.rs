//! Host document: a project made of extensions, each holding events functions.

use super::container::EventsFunctionsContainer;
use super::error::ProjectError;
use super::identifiers::ContainerId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An extension and the events functions it declares.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsFunctionsExtension {
    /// Name used to pick the extension.
    pub name: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    /// The functions listed for this extension.
    #[serde(default, rename = "eventsFunctions")]
    pub functions: EventsFunctionsContainer,
}

impl EventsFunctionsExtension {
    /// Empty extension named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: String::new(),
            functions: EventsFunctionsContainer::new(),
        }
    }
}

/// A project document.
///
/// The identity is minted on construction and on every load; containers
/// inside the project are re-parented to it so their list keys change
/// whenever the project is reloaded or cloned.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip)]
    identity: ContainerId,
    /// Project name.
    pub name: String,
    #[serde(default)]
    extensions: Vec<EventsFunctionsExtension>,
}

impl Project {
    /// Empty project named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            identity: ContainerId::mint(),
            name: name.into(),
            extensions: Vec::new(),
        }
    }

    /// Identity of this document.
    pub fn identity(&self) -> ContainerId {
        self.identity
    }

    /// Add an extension, taking ownership of its container.
    pub fn add_extension(&mut self, mut extension: EventsFunctionsExtension) -> usize {
        extension.functions.set_owner(self.identity);
        self.extensions.push(extension);
        self.extensions.len() - 1
    }

    /// Extensions in document order.
    pub fn extensions(&self) -> &[EventsFunctionsExtension] {
        &self.extensions
    }

    /// Index of the extension named `name`, or of the first one when `None`.
    pub fn extension_index(&self, name: Option<&str>) -> Result<usize, ProjectError> {
        match name {
            Some(name) => self
                .extensions
                .iter()
                .position(|e| e.name == name)
                .ok_or_else(|| ProjectError::UnknownExtension(name.to_string())),
            None if self.extensions.is_empty() => Err(ProjectError::NoExtensions),
            None => Ok(0),
        }
    }

    /// Extension at `index`.
    pub fn extension(&self, index: usize) -> Option<&EventsFunctionsExtension> {
        self.extensions.get(index)
    }

    /// Mutable extension at `index`.
    pub fn extension_mut(&mut self, index: usize) -> Option<&mut EventsFunctionsExtension> {
        self.extensions.get_mut(index)
    }

    /// Parse a project from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut project: Project = serde_json::from_str(text)?;
        project.adopt_containers();
        Ok(project)
    }

    /// Pretty JSON for the project file.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        serde_json::to_string_pretty(self).map_err(ProjectError::Serialize)
    }

    /// Load a project file.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the project back as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ProjectError> {
        let text = self.to_json()?;
        std::fs::write(path, text).map_err(|source| ProjectError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn adopt_containers(&mut self) {
        for extension in &mut self.extensions {
            extension.functions.set_owner(self.identity);
        }
    }
}

impl Clone for Project {
    fn clone(&self) -> Self {
        let mut project = Self {
            identity: ContainerId::mint(),
            name: self.name.clone(),
            extensions: self.extensions.clone(),
        };
        project.adopt_containers();
        project
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Demo",
        "extensions": [
            {
                "name": "Platformer",
                "eventsFunctions": [
                    { "name": "Jump", "functionType": "Action" },
                    { "name": "IsFalling", "functionType": "Condition" }
                ]
            },
            { "name": "Empty" }
        ]
    }"#;

    #[test]
    fn from_json_parents_containers_to_project() {
        let project = Project::from_json(SAMPLE).unwrap();
        assert_eq!(project.extensions().len(), 2);
        for extension in project.extensions() {
            assert_eq!(extension.functions.owner(), project.identity());
        }
        let names: Vec<_> = project.extensions()[0].functions.names().collect();
        assert_eq!(names, vec!["Jump", "IsFalling"]);
        assert!(project.extensions()[1].functions.is_empty());
    }

    #[test]
    fn reloading_changes_list_keys() {
        let a = Project::from_json(SAMPLE).unwrap();
        let b = Project::from_json(SAMPLE).unwrap();
        assert_ne!(
            a.extensions()[0].functions.list_key(),
            b.extensions()[0].functions.list_key()
        );
    }

    #[test]
    fn clone_is_a_new_document() {
        let project = Project::from_json(SAMPLE).unwrap();
        let copy = project.clone();
        assert_ne!(copy.identity(), project.identity());
        for (original, cloned) in project.extensions().iter().zip(copy.extensions()) {
            assert_eq!(cloned.functions.owner(), copy.identity());
            assert_ne!(cloned.functions.list_key(), original.functions.list_key());
        }
    }

    #[test]
    fn extension_index_by_name_or_first() {
        let project = Project::from_json(SAMPLE).unwrap();
        assert_eq!(project.extension_index(None).unwrap(), 0);
        assert_eq!(project.extension_index(Some("Empty")).unwrap(), 1);
        assert!(matches!(
            project.extension_index(Some("Nope")),
            Err(ProjectError::UnknownExtension(name)) if name == "Nope"
        ));
    }

    #[test]
    fn extension_index_on_empty_project_errors() {
        let project = Project::new("Empty");
        assert!(matches!(
            project.extension_index(None),
            Err(ProjectError::NoExtensions)
        ));
    }

    #[test]
    fn json_round_trip_keeps_names_and_order() {
        let project = Project::from_json(SAMPLE).unwrap();
        let text = project.to_json().unwrap();
        let again = Project::from_json(&text).unwrap();
        let names: Vec<_> = again.extensions()[0].functions.names().collect();
        assert_eq!(names, vec!["Jump", "IsFalling"]);
        assert_eq!(again.name, "Demo");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = Project::load(Path::new("/nonexistent/fnlist/project.json")).unwrap_err();
        assert!(matches!(err, ProjectError::Read { .. }));
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join("fnlist_project_save_then_load.json");
        let mut project = Project::new("Saved");
        let mut extension = EventsFunctionsExtension::new("Ext");
        extension.functions.push_new("Function");
        project.add_extension(extension);

        project.save(&path).unwrap();
        let loaded = Project::load(&path).unwrap();
        assert_eq!(loaded.extensions()[0].functions.len(), 1);

        let _ = std::fs::remove_file(&path);
    }
}
