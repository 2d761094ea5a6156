use crate::error::Result;
use crate::executor::Executor;
use crate::paths;

use super::render;

/// Build input: a Dockerfile on disk, or a shell pipeline whose stdout is
/// streamed into the build (`-f -`). The piped form exists only for the
/// private-registry rewrite and never outlives the build call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerfileSource {
    Path(String),
    Piped(String),
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Image reference to tag the build with (`-t`).
    pub image: Option<String>,
    /// Build stage to stop at (`--target`).
    pub target: Option<String>,
    /// Remote engine host (`DOCKER_HOST=ssh://<host>` prefix).
    pub host: Option<String>,
    /// Layer cache source (`--cache-from`).
    pub cache_from: Option<String>,
}

/// Options shared by push and pull.
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    pub host: Option<String>,
    /// Credentials store path (`docker --config <path>`).
    pub credentials: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub remove: bool,
    pub interactive: bool,
    pub ports: Vec<String>,
    pub host: Option<String>,
    pub volumes: Vec<String>,
    pub runtime: Option<String>,
    pub env: Vec<String>,
    pub privileged: bool,
    pub entrypoint: Option<String>,
    /// Trailing command appended after the image name.
    pub command: Option<String>,
}

/// Build an image. Runs with the working directory pinned to the project
/// root so relative Dockerfile paths and the `.` build context line up.
pub fn build(exec: &Executor, source: &DockerfileSource, opts: &BuildOptions) -> Result<()> {
    exec.run_in_root(&build_command(source, opts))
}

pub fn build_command(source: &DockerfileSource, opts: &BuildOptions) -> String {
    let (pipe, dockerfile) = match source {
        DockerfileSource::Path(path) => (String::new(), path.as_str()),
        DockerfileSource::Piped(command) => (format!("{} |", command), "-"),
    };

    format!(
        "{}{} docker build{}{}{} -f {} .",
        pipe,
        render::host(opts.host.as_deref()),
        render::target(opts.target.as_deref()),
        render::tag(opts.image.as_deref()),
        render::cache_from(opts.cache_from.as_deref()),
        dockerfile,
    )
    .trim_start()
    .to_string()
}

/// Log in against the dedicated credentials store, creating it first.
pub fn login(exec: &Executor) -> Result<()> {
    exec.run(&format!("mkdir -p {}", paths::DOCKER_CREDENTIALS_DIR))?;
    exec.run(&format!(
        "docker --config {} login",
        paths::DOCKER_CREDENTIALS_DIR
    ))
}

pub fn push(exec: &Executor, image: &str, opts: &RegistryOptions) -> Result<()> {
    exec.run(&registry_command("push", image, opts))
}

pub fn pull(exec: &Executor, image: &str, opts: &RegistryOptions) -> Result<()> {
    exec.run(&registry_command("pull", image, opts))
}

pub fn registry_command(verb: &str, image: &str, opts: &RegistryOptions) -> String {
    format!(
        "{} docker{} {} {}",
        render::host(opts.host.as_deref()),
        render::credentials(opts.credentials.as_deref()),
        verb,
        image,
    )
    .trim_start()
    .to_string()
}

pub fn run(exec: &Executor, image: &str, opts: &RunOptions) -> Result<()> {
    exec.run(&run_command(image, opts))
}

pub fn run_command(image: &str, opts: &RunOptions) -> String {
    format!(
        "{} docker run{}{}{}{}{}{}{}{} {}{}",
        render::host(opts.host.as_deref()),
        render::runtime(opts.runtime.as_deref()),
        render::remove(opts.remove),
        render::interactive(opts.interactive),
        render::ports(&opts.ports),
        render::volumes(&opts.volumes),
        render::env_vars(&opts.env),
        render::privileged(opts.privileged),
        render::entrypoint(opts.entrypoint.as_deref()),
        image,
        render::trailing(opts.command.as_deref()),
    )
    .trim_start()
    .to_string()
}

pub fn tag(exec: &Executor, source_image: &str, target_image: &str, host: Option<&str>) -> Result<()> {
    exec.run(&tag_command(source_image, target_image, host))
}

pub fn tag_command(source_image: &str, target_image: &str, host: Option<&str>) -> String {
    format!(
        "{} docker tag {} {}",
        render::host(host),
        source_image,
        target_image,
    )
    .trim_start()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_command_minimal() {
        let source = DockerfileSource::Path("Dockerfile".to_string());
        assert_eq!(
            build_command(&source, &BuildOptions::default()),
            "docker build -f Dockerfile ."
        );
    }

    #[test]
    fn build_command_full() {
        let source = DockerfileSource::Path("Dockerfile.web".to_string());
        let opts = BuildOptions {
            image: Some("acme/app:latest-web".to_string()),
            target: Some("runtime".to_string()),
            host: Some("build.acme.internal".to_string()),
            cache_from: Some("acme/app:latest-web".to_string()),
        };
        assert_eq!(
            build_command(&source, &opts),
            "DOCKER_HOST=ssh://build.acme.internal docker build \
             --target runtime -t acme/app:latest-web --cache-from acme/app:latest-web \
             -f Dockerfile.web ."
        );
    }

    #[test]
    fn build_command_piped_reads_stdin() {
        let source = DockerfileSource::Piped("cat Dockerfile | sed -e s/a/b/".to_string());
        assert_eq!(
            build_command(&source, &BuildOptions::default()),
            "cat Dockerfile | sed -e s/a/b/ | docker build -f - ."
        );
    }

    #[test]
    fn build_command_piped_with_host() {
        let source = DockerfileSource::Piped("cat Dockerfile".to_string());
        let opts = BuildOptions {
            host: Some("h".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_command(&source, &opts),
            "cat Dockerfile | DOCKER_HOST=ssh://h docker build -f - ."
        );
    }

    #[test]
    fn registry_command_minimal() {
        assert_eq!(
            registry_command("push", "acme/app:latest", &RegistryOptions::default()),
            "docker push acme/app:latest"
        );
        assert_eq!(
            registry_command("pull", "acme/app:latest", &RegistryOptions::default()),
            "docker pull acme/app:latest"
        );
    }

    #[test]
    fn registry_command_with_host_and_credentials() {
        let opts = RegistryOptions {
            host: Some("build.acme.internal".to_string()),
            credentials: Some("~/.dockhand/docker".to_string()),
        };
        assert_eq!(
            registry_command("push", "acme/app:latest", &opts),
            "DOCKER_HOST=ssh://build.acme.internal docker --config ~/.dockhand/docker \
             push acme/app:latest"
        );
    }

    #[test]
    fn run_command_minimal() {
        assert_eq!(
            run_command("acme/app:latest", &RunOptions::default()),
            "docker run acme/app:latest"
        );
    }

    #[test]
    fn run_command_orders_flags_before_image() {
        let opts = RunOptions {
            remove: true,
            interactive: true,
            ports: vec!["80".to_string(), "8443:443".to_string()],
            volumes: vec!["/data".to_string()],
            runtime: Some("nvidia".to_string()),
            env: vec!["MODE=dev".to_string()],
            privileged: true,
            entrypoint: Some("/bin/sh".to_string()),
            command: Some("-c ls".to_string()),
            host: Some("gpu.acme.internal".to_string()),
        };
        assert_eq!(
            run_command("acme/app:latest-web", &opts),
            "DOCKER_HOST=ssh://gpu.acme.internal docker run --runtime nvidia --rm -it \
             -p 80:80 -p 8443:443 -v /data:/data -e MODE=dev --privileged \
             --entrypoint /bin/sh acme/app:latest-web -c ls"
        );
    }

    #[test]
    fn tag_command_minimal_and_remote() {
        assert_eq!(
            tag_command("a:1", "b:1", None),
            "docker tag a:1 b:1"
        );
        assert_eq!(
            tag_command("a:1", "b:1", Some("h")),
            "DOCKER_HOST=ssh://h docker tag a:1 b:1"
        );
    }
}
