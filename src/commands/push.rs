use clap::Args;
use serde::Serialize;

use dockhand::docker::{auto, RegistryOptions, Selection};
use dockhand::{project, Executor};

use super::CmdResult;

#[derive(Args)]
pub struct PushArgs {
    /// Configured image name
    pub name: String,

    /// Push from the local engine instead of the configured default host
    #[arg(long)]
    pub local: bool,

    /// Use the public image name instead of the private one
    #[arg(long)]
    pub public: bool,

    /// Version label (defaults to "latest")
    #[arg(long)]
    pub version: Option<String>,

    /// Remote host override (DOCKER_HOST=ssh://<host>)
    #[arg(long)]
    pub host: Option<String>,

    /// Full image reference override (skips name resolution)
    #[arg(long)]
    pub image: Option<String>,

    /// Credentials store path passed as `docker --config <path>`
    #[arg(long)]
    pub creds: Option<String>,
}

#[derive(Serialize)]
pub struct PushOutput {
    pub command: String,
    pub name: String,
    pub local: bool,
    pub public: bool,
}

pub fn run(args: PushArgs) -> CmdResult<PushOutput> {
    let project = project::load()?;
    let exec = Executor::new(project.root.clone());

    let sel = Selection {
        name: args.name.clone(),
        local: args.local,
        public_image: args.public,
        version: args.version,
    };
    let opts = RegistryOptions {
        host: args.host,
        credentials: args.creds.map(|c| shellexpand::tilde(&c).to_string()),
    };

    auto::auto_push(&exec, &project, &sel, args.image, opts)?;

    Ok((
        PushOutput {
            command: "push.run".to_string(),
            name: args.name,
            local: args.local,
            public: args.public,
        },
        0,
    ))
}
