use clap::Args;
use serde::Serialize;

use dockhand::docker::{auto, BuildOptions, Selection};
use dockhand::{project, Executor};

use super::CmdResult;

#[derive(Args)]
pub struct BuildArgs {
    /// Configured image name (key into tagSuffixes/dockerfiles)
    pub name: String,

    /// Build on the local engine instead of the configured default host
    #[arg(long)]
    pub local: bool,

    /// Use the public image name instead of the private one
    #[arg(long)]
    pub public: bool,

    /// Version label (defaults to "latest")
    #[arg(long)]
    pub version: Option<String>,

    /// Build stage to stop at (overrides the configured custom target)
    #[arg(long)]
    pub target: Option<String>,

    /// Image to use as a layer cache source
    #[arg(long)]
    pub cache_from: Option<String>,

    /// Remote host override (DOCKER_HOST=ssh://<host>)
    #[arg(long)]
    pub host: Option<String>,

    /// Full image reference override (skips name resolution)
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Serialize)]
pub struct BuildOutput {
    pub command: String,
    pub name: String,
    pub local: bool,
    pub public: bool,
}

pub fn run(args: BuildArgs) -> CmdResult<BuildOutput> {
    let project = project::load()?;
    let exec = Executor::new(project.root.clone());

    let sel = Selection {
        name: args.name.clone(),
        local: args.local,
        public_image: args.public,
        version: args.version,
    };
    let opts = BuildOptions {
        image: args.image,
        target: args.target,
        host: args.host,
        cache_from: args.cache_from,
    };

    auto::auto_build(&exec, &project, &sel, opts)?;

    Ok((
        BuildOutput {
            command: "build.run".to_string(),
            name: args.name,
            local: args.local,
            public: args.public,
        },
        0,
    ))
}
