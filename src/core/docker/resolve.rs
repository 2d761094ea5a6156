use crate::error::{Error, Result};
use crate::project::Project;

use super::ops::DockerfileSource;

/// Version label used when the caller does not supply one.
pub const DEFAULT_VERSION: &str = "latest";

/// Fully qualified image reference for a configured name:
/// `<base>:<version><suffix>`, where the base is the public or private
/// image name depending on the flag.
pub fn image_tag(
    project: &Project,
    name: &str,
    public_image: bool,
    version: Option<&str>,
) -> Result<String> {
    let base = base_image_name(project, public_image)?;
    let suffix = project
        .docker
        .tag_suffixes
        .get(name)
        .ok_or_else(|| missing(project, format!("docker.tagSuffixes.{}", name)))?;

    Ok(format!(
        "{}:{}{}",
        base,
        version.unwrap_or(DEFAULT_VERSION),
        suffix
    ))
}

/// Remote host for a configured name. `None` means "run locally" and is
/// returned whenever local execution is requested, regardless of what is
/// configured.
pub fn host(project: &Project, name: &str, local: bool) -> Result<Option<String>> {
    if local {
        return Ok(None);
    }

    project
        .docker
        .default_hosts
        .get(name)
        .cloned()
        .map(Some)
        .ok_or_else(|| missing(project, format!("docker.defaultHosts.{}", name)))
}

pub fn dockerfile(project: &Project, name: &str) -> Result<String> {
    project
        .docker
        .dockerfiles
        .get(name)
        .cloned()
        .ok_or_else(|| missing(project, format!("docker.dockerfiles.{}", name)))
}

/// Build source for a private image: a stream edit of the Dockerfile that
/// rewrites multi-stage `--from=<public-name>` references to the private
/// name. Those stages would otherwise pull from the wrong registry. The
/// edited text goes straight into the build's stdin and never lands on disk.
pub fn private_build_source(project: &Project, dockerfile: &str) -> Result<DockerfileSource> {
    let public = escape_for_sed(base_image_name(project, true)?);
    let private = escape_for_sed(base_image_name(project, false)?);

    Ok(DockerfileSource::Piped(format!(
        r#"cat {} | sed -e "s/\(--from=\){}\([: ]\)/\1{}\2/""#,
        dockerfile, public, private
    )))
}

fn base_image_name(project: &Project, public_image: bool) -> Result<&str> {
    let (key, value) = if public_image {
        ("docker.imageName", project.docker.image_name.as_deref())
    } else {
        (
            "docker.privateImageName",
            project.docker.private_image_name.as_deref(),
        )
    };

    value.ok_or_else(|| missing(project, key))
}

// Image names contain `/`, which would end the sed pattern early.
fn escape_for_sed(name: &str) -> String {
    name.replace('/', "\\/")
}

fn missing(project: &Project, key: impl Into<String>) -> Error {
    Error::config_missing_key(key, Some(project.config_path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::DockerConfig;
    use crate::ErrorCode;

    fn project() -> Project {
        Project {
            docker: DockerConfig {
                image_name: Some("acme/app".to_string()),
                private_image_name: Some("acme/app-priv".to_string()),
                tag_suffixes: [("web".to_string(), "-web".to_string())].into(),
                dockerfiles: [("web".to_string(), "Dockerfile.web".to_string())].into(),
                default_hosts: [("web".to_string(), "build.acme.internal".to_string())].into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn image_tag_defaults_to_latest() {
        let tag = image_tag(&project(), "web", false, None).unwrap();
        assert_eq!(tag, "acme/app-priv:latest-web");
    }

    #[test]
    fn image_tag_selects_public_base_and_version() {
        let tag = image_tag(&project(), "web", true, Some("v1.4")).unwrap();
        assert_eq!(tag, "acme/app:v1.4-web");
    }

    #[test]
    fn image_tag_requires_suffix_entry() {
        let err = image_tag(&project(), "worker", false, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingKey);
        assert_eq!(err.details["key"], "docker.tagSuffixes.worker");
    }

    #[test]
    fn image_tag_requires_base_name() {
        let mut project = project();
        project.docker.private_image_name = None;
        let err = image_tag(&project, "web", false, None).unwrap_err();
        assert_eq!(err.details["key"], "docker.privateImageName");
    }

    #[test]
    fn host_is_none_when_local() {
        assert_eq!(host(&project(), "web", true).unwrap(), None);
        // local wins even for names with no configured host
        assert_eq!(host(&project(), "worker", true).unwrap(), None);
    }

    #[test]
    fn host_returns_configured_default() {
        assert_eq!(
            host(&project(), "web", false).unwrap().as_deref(),
            Some("build.acme.internal")
        );
    }

    #[test]
    fn host_requires_entry_when_remote() {
        let err = host(&project(), "worker", false).unwrap_err();
        assert_eq!(err.details["key"], "docker.defaultHosts.worker");
    }

    #[test]
    fn dockerfile_lookup() {
        assert_eq!(dockerfile(&project(), "web").unwrap(), "Dockerfile.web");
        assert!(dockerfile(&project(), "worker").is_err());
    }

    #[test]
    fn private_build_source_is_a_sed_pipeline() {
        let source = private_build_source(&project(), "Dockerfile.web").unwrap();
        assert_eq!(
            source,
            DockerfileSource::Piped(
                r#"cat Dockerfile.web | sed -e "s/\(--from=\)acme\/app\([: ]\)/\1acme\/app-priv\2/""#
                    .to_string()
            )
        );
    }
}
