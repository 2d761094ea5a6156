use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;

/// The `docker` section of the project file. All keys are optional at parse
/// time; absence is reported at resolution time instead, with the dotted key
/// path of whatever lookup actually failed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DockerConfig {
    /// Publicly distributable base image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,

    /// Internal registry base image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_image_name: Option<String>,

    /// Per-name suffix appended to `<base>:<version>`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tag_suffixes: HashMap<String, String>,

    /// Per-name Dockerfile path, relative to the project root.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub dockerfiles: HashMap<String, String>,

    /// Per-name default remote host (DOCKER_HOST=ssh://<host>).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_hosts: HashMap<String, String>,

    /// Per-name build stage override. Missing entries are fine.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_targets: HashMap<String, String>,

    /// Per-name runtime override. Missing entries are fine.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_runtimes: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Directory containing the project file. Builds pin their working
    /// directory here.
    #[serde(skip)]
    pub root: PathBuf,

    /// Path the configuration was loaded from.
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub docker: DockerConfig,
}

/// Load the project configuration.
///
/// `DOCKHAND_PROJECT` (tilde-expanded) takes precedence when set; it may name
/// the file itself or its directory. Otherwise the nearest dockhand.json
/// walking upward from the current directory wins.
pub fn load() -> Result<Project> {
    if let Ok(spec) = env::var(paths::PROJECT_ENV_VAR) {
        let expanded = shellexpand::tilde(&spec).to_string();
        let path = PathBuf::from(&expanded);
        let file = if path.is_dir() {
            path.join(paths::PROJECT_FILE)
        } else {
            path
        };
        if !file.is_file() {
            return Err(Error::project_not_found(expanded));
        }
        return load_from(&file);
    }

    let cwd = env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve current directory".to_string())))?;

    match find_upward(&cwd) {
        Some(file) => load_from(&file),
        None => Err(Error::project_not_found(cwd.display().to_string())),
    }
}

/// Load the project configuration from an explicit file path.
pub fn load_from(file: &Path) -> Result<Project> {
    let content = std::fs::read_to_string(file).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", file.display())))
    })?;

    let mut project: Project = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(file.display().to_string(), e))?;

    project.config_path = file.to_path_buf();
    project.root = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    log_status!("project", "Using {}", file.display());
    Ok(project)
}

/// Walk upward from `start` looking for the project file.
pub fn find_upward(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(paths::PROJECT_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}
