use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{build, login, project, pull, push, run, tag};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    /// Interactive container sessions own the terminal; no envelope.
    InteractivePassthrough,
}

#[derive(Parser)]
#[command(name = "dockhand")]
#[command(version = VERSION)]
#[command(about = "CLI for config-driven container image build and deployment automation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a configured image
    Build(build::BuildArgs),
    /// Push a configured image to its registry
    Push(push::PushArgs),
    /// Pull a configured image from its registry
    Pull(pull::PullArgs),
    /// Run a configured image
    Run(run::RunArgs),
    /// Retag an image
    Tag(tag::TagArgs),
    /// Log in to the registry with the dedicated credentials store
    Login(login::LoginArgs),
    /// Show the resolved project configuration
    Project(project::ProjectArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Run(args) if args.interactive => ResponseMode::InteractivePassthrough,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = response_mode(&cli.command);

    let (json_result, exit_code) = commands::run_json(cli.command);

    match mode {
        ResponseMode::Json => {
            let _ = output::print_json_result(json_result);
        }
        ResponseMode::InteractivePassthrough => {}
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
