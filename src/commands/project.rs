use clap::Args;
use serde::Serialize;

use dockhand::project::{self, DockerConfig};

use super::CmdResult;

#[derive(Args)]
pub struct ProjectArgs {}

#[derive(Serialize)]
pub struct ProjectOutput {
    pub command: String,
    pub path: String,
    pub root: String,
    pub docker: DockerConfig,
}

/// Show the resolved project configuration — what the resolvers see.
pub fn run(_args: ProjectArgs) -> CmdResult<ProjectOutput> {
    let project = project::load()?;

    Ok((
        ProjectOutput {
            command: "project.show".to_string(),
            path: project.config_path.display().to_string(),
            root: project.root.display().to_string(),
            docker: project.docker,
        },
        0,
    ))
}
