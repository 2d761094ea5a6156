//! Convenience wrappers combining configuration resolution with the raw
//! operations.
//!
//! Resolution only fills fields the caller left absent; caller-supplied
//! values always survive the merge. The plan_* functions are the pure
//! resolution+merge step, split from execution so the merge is testable.

use crate::error::Result;
use crate::executor::Executor;
use crate::project::Project;

use super::ops::{self, BuildOptions, DockerfileSource, RegistryOptions, RunOptions};
use super::resolve;

/// Which configured image an invocation addresses, and how.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Configured name (key into tagSuffixes, dockerfiles, defaultHosts).
    pub name: String,
    /// Run against the local engine instead of the configured default host.
    pub local: bool,
    /// Use the public image name instead of the private one.
    pub public_image: bool,
    /// Version label; defaults to "latest".
    pub version: Option<String>,
}

impl Selection {
    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

pub fn auto_build(
    exec: &Executor,
    project: &Project,
    sel: &Selection,
    opts: BuildOptions,
) -> Result<()> {
    let (source, opts) = plan_build(project, sel, opts)?;
    ops::build(exec, &source, &opts)
}

pub fn plan_build(
    project: &Project,
    sel: &Selection,
    mut opts: BuildOptions,
) -> Result<(DockerfileSource, BuildOptions)> {
    if opts.image.is_none() {
        opts.image = Some(resolve::image_tag(
            project,
            &sel.name,
            sel.public_image,
            sel.version(),
        )?);
    }
    if opts.host.is_none() {
        opts.host = resolve::host(project, &sel.name, sel.local)?;
    }
    if opts.target.is_none() {
        opts.target = project.docker.custom_targets.get(&sel.name).cloned();
    }

    let dockerfile = resolve::dockerfile(project, &sel.name)?;
    let source = if sel.public_image {
        DockerfileSource::Path(dockerfile)
    } else {
        resolve::private_build_source(project, &dockerfile)?
    };

    Ok((source, opts))
}

pub fn auto_push(
    exec: &Executor,
    project: &Project,
    sel: &Selection,
    image: Option<String>,
    opts: RegistryOptions,
) -> Result<()> {
    let (image, opts) = plan_registry(project, sel, image, opts)?;
    ops::push(exec, &image, &opts)
}

pub fn auto_pull(
    exec: &Executor,
    project: &Project,
    sel: &Selection,
    image: Option<String>,
    opts: RegistryOptions,
) -> Result<()> {
    let (image, opts) = plan_registry(project, sel, image, opts)?;
    ops::pull(exec, &image, &opts)
}

pub fn plan_registry(
    project: &Project,
    sel: &Selection,
    image: Option<String>,
    mut opts: RegistryOptions,
) -> Result<(String, RegistryOptions)> {
    let image = match image {
        Some(image) => image,
        None => resolve::image_tag(project, &sel.name, sel.public_image, sel.version())?,
    };
    if opts.host.is_none() {
        opts.host = resolve::host(project, &sel.name, sel.local)?;
    }

    Ok((image, opts))
}

pub fn auto_run(
    exec: &Executor,
    project: &Project,
    sel: &Selection,
    image: Option<String>,
    opts: RunOptions,
) -> Result<()> {
    let (image, opts) = plan_run(project, sel, image, opts)?;
    ops::run(exec, &image, &opts)
}

pub fn plan_run(
    project: &Project,
    sel: &Selection,
    image: Option<String>,
    mut opts: RunOptions,
) -> Result<(String, RunOptions)> {
    let image = match image {
        Some(image) => image,
        None => resolve::image_tag(project, &sel.name, sel.public_image, sel.version())?,
    };
    if opts.host.is_none() {
        opts.host = resolve::host(project, &sel.name, sel.local)?;
    }
    if opts.runtime.is_none() {
        opts.runtime = project.docker.custom_runtimes.get(&sel.name).cloned();
    }

    Ok((image, opts))
}
