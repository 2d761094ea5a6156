pub type CmdResult<T> = dockhand::Result<(T, i32)>;

pub mod build;
pub mod login;
pub mod project;
pub mod pull;
pub mod push;
pub mod run;
pub mod tag;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (dockhand::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Build(args) => dispatch!(args, build),
        crate::Commands::Push(args) => dispatch!(args, push),
        crate::Commands::Pull(args) => dispatch!(args, pull),
        crate::Commands::Run(args) => dispatch!(args, run),
        crate::Commands::Tag(args) => dispatch!(args, tag),
        crate::Commands::Login(args) => dispatch!(args, login),
        crate::Commands::Project(args) => dispatch!(args, project),
    }
}
