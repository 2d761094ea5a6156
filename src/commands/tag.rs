use clap::Args;
use serde::Serialize;

use dockhand::docker::ops;
use dockhand::{Error, Executor};

use super::CmdResult;

#[derive(Args)]
pub struct TagArgs {
    /// Source image reference
    pub source: String,

    /// Target image reference
    pub target: String,

    /// Remote host (DOCKER_HOST=ssh://<host>)
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Serialize)]
pub struct TagOutput {
    pub command: String,
    pub source: String,
    pub target: String,
}

/// Pass-through rename; needs no project configuration.
pub fn run(args: TagArgs) -> CmdResult<TagOutput> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve current directory".to_string())))?;
    let exec = Executor::new(cwd);

    ops::tag(&exec, &args.source, &args.target, args.host.as_deref())?;

    Ok((
        TagOutput {
            command: "tag.run".to_string(),
            source: args.source,
            target: args.target,
        },
        0,
    ))
}
