use clap::Args;
use serde::Serialize;

use dockhand::docker::ops;
use dockhand::{Error, Executor};

use super::CmdResult;

#[derive(Args)]
pub struct LoginArgs {}

#[derive(Serialize)]
pub struct LoginOutput {
    pub command: String,
}

/// Registry login with the dedicated credentials store; needs no project
/// configuration.
pub fn run(_args: LoginArgs) -> CmdResult<LoginOutput> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve current directory".to_string())))?;
    let exec = Executor::new(cwd);

    ops::login(&exec)?;

    Ok((
        LoginOutput {
            command: "login.run".to_string(),
        },
        0,
    ))
}
