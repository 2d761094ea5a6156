/// Project configuration file, discovered by walking upward from the
/// working directory.
pub(crate) const PROJECT_FILE: &str = "dockhand.json";

/// Environment variable overriding project discovery. May point at the
/// configuration file itself or at the directory containing it.
pub(crate) const PROJECT_ENV_VAR: &str = "DOCKHAND_PROJECT";

/// Dedicated credentials store used by `login`. Left as a tilde path;
/// expansion happens in the shell that runs the command.
pub(crate) const DOCKER_CREDENTIALS_DIR: &str = "~/.dockhand/docker";
