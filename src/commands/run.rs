use clap::Args;
use serde::Serialize;

use dockhand::docker::{auto, RunOptions, Selection};
use dockhand::{project, Executor};

use super::CmdResult;

#[derive(Args)]
pub struct RunArgs {
    /// Configured image name
    pub name: String,

    /// Run on the local engine instead of the configured default host
    #[arg(long)]
    pub local: bool,

    /// Use the public image name instead of the private one
    #[arg(long)]
    pub public: bool,

    /// Version label (defaults to "latest")
    #[arg(long)]
    pub version: Option<String>,

    /// Remove the container after it exits
    #[arg(long = "rm")]
    pub remove: bool,

    /// Attach an interactive terminal (-it)
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Port mapping; bare ports map to themselves (80 -> 80:80)
    #[arg(short = 'p', long = "port")]
    pub ports: Vec<String>,

    /// Volume mount; bare paths mount to themselves (/data -> /data:/data)
    #[arg(short = 'v', long = "volume")]
    pub volumes: Vec<String>,

    /// Environment variable (NAME or NAME=value)
    #[arg(short = 'e', long = "env")]
    pub env: Vec<String>,

    /// Container runtime (overrides the configured custom runtime)
    #[arg(long)]
    pub runtime: Option<String>,

    /// Run the container privileged
    #[arg(long)]
    pub privileged: bool,

    /// Entrypoint override
    #[arg(long)]
    pub entrypoint: Option<String>,

    /// Remote host override (DOCKER_HOST=ssh://<host>)
    #[arg(long)]
    pub host: Option<String>,

    /// Full image reference override (skips name resolution)
    #[arg(long)]
    pub image: Option<String>,

    /// Command to run in the container (after `--`)
    #[arg(last = true)]
    pub command: Vec<String>,
}

#[derive(Serialize)]
pub struct RunOutput {
    pub command: String,
    pub name: String,
    pub local: bool,
    pub public: bool,
}

pub fn run(args: RunArgs) -> CmdResult<RunOutput> {
    let project = project::load()?;
    let exec = Executor::new(project.root.clone());

    let sel = Selection {
        name: args.name.clone(),
        local: args.local,
        public_image: args.public,
        version: args.version,
    };
    let opts = RunOptions {
        remove: args.remove,
        interactive: args.interactive,
        ports: args.ports,
        host: args.host,
        volumes: args.volumes,
        runtime: args.runtime,
        env: args.env,
        privileged: args.privileged,
        entrypoint: args.entrypoint,
        command: if args.command.is_empty() {
            None
        } else {
            Some(args.command.join(" "))
        },
    };

    auto::auto_run(&exec, &project, &sel, args.image, opts)?;

    Ok((
        RunOutput {
            command: "run.run".to_string(),
            name: args.name,
            local: args.local,
            public: args.public,
        },
        0,
    ))
}
