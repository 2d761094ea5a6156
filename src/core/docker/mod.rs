//! Container-engine command assembly and execution.
//!
//! Everything here is string formatting over the external `docker` binary:
//! renderers turn optional parameters into flag fragments, operations compose
//! the fragments into one command line per engine subcommand, resolvers map
//! short configured names onto image references, Dockerfiles, and hosts, and
//! the auto_* wrappers tie resolution and operations together.

pub mod auto;
pub mod ops;
pub mod render;
pub mod resolve;

pub use auto::Selection;
pub use ops::{BuildOptions, DockerfileSource, RegistryOptions, RunOptions};
