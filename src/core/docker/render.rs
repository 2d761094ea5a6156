//! Flag fragment renderers.
//!
//! Every renderer is total: an absent value renders to the empty string, a
//! present value to a fixed fragment carrying its own leading space, so
//! fragments concatenate with no separator handling at the call site.
//! Values are embedded uninterpreted; the engine rejects anything malformed.

pub fn host(host: Option<&str>) -> String {
    host.map_or(String::new(), |h| format!(" DOCKER_HOST=ssh://{}", h))
}

pub fn target(target: Option<&str>) -> String {
    target.map_or(String::new(), |t| format!(" --target {}", t))
}

pub fn tag(image: Option<&str>) -> String {
    image.map_or(String::new(), |i| format!(" -t {}", i))
}

pub fn cache_from(image: Option<&str>) -> String {
    image.map_or(String::new(), |i| format!(" --cache-from {}", i))
}

pub fn runtime(runtime: Option<&str>) -> String {
    runtime.map_or(String::new(), |r| format!(" --runtime {}", r))
}

pub fn entrypoint(entrypoint: Option<&str>) -> String {
    entrypoint.map_or(String::new(), |e| format!(" --entrypoint {}", e))
}

/// Credentials store for push/pull (`docker --config <path> ...`).
pub fn credentials(path: Option<&str>) -> String {
    path.map_or(String::new(), |p| format!(" --config {}", p))
}

/// Trailing command appended after the image name.
pub fn trailing(command: Option<&str>) -> String {
    command.map_or(String::new(), |c| format!(" {}", c))
}

// Presence-only flags: false is "absent" and renders empty.

pub fn remove(remove: bool) -> String {
    if remove { " --rm".to_string() } else { String::new() }
}

pub fn interactive(interactive: bool) -> String {
    if interactive { " -it".to_string() } else { String::new() }
}

pub fn privileged(privileged: bool) -> String {
    if privileged { " --privileged".to_string() } else { String::new() }
}

/// Host:container disambiguation shared by ports and volumes: a value with
/// an explicit `:` passes through, a bare value is mirrored on both sides.
fn mapping(flag: &str, value: &str) -> String {
    if value.contains(':') {
        format!(" {} {}", flag, value)
    } else {
        format!(" {} {}:{}", flag, value, value)
    }
}

pub fn ports(ports: &[String]) -> String {
    ports.iter().map(|p| mapping("-p", p)).collect()
}

pub fn volumes(volumes: &[String]) -> String {
    volumes.iter().map(|v| mapping("-v", v)).collect()
}

pub fn env_vars(env: &[String]) -> String {
    env.iter().map(|e| format!(" -e {}", e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_render_empty() {
        assert_eq!(host(None), "");
        assert_eq!(target(None), "");
        assert_eq!(tag(None), "");
        assert_eq!(cache_from(None), "");
        assert_eq!(runtime(None), "");
        assert_eq!(entrypoint(None), "");
        assert_eq!(credentials(None), "");
        assert_eq!(trailing(None), "");
        assert_eq!(remove(false), "");
        assert_eq!(interactive(false), "");
        assert_eq!(privileged(false), "");
        assert_eq!(ports(&[]), "");
        assert_eq!(volumes(&[]), "");
        assert_eq!(env_vars(&[]), "");
    }

    #[test]
    fn present_values_render_fixed_fragments() {
        assert_eq!(host(Some("build.internal")), " DOCKER_HOST=ssh://build.internal");
        assert_eq!(target(Some("runtime")), " --target runtime");
        assert_eq!(tag(Some("acme/app:latest-web")), " -t acme/app:latest-web");
        assert_eq!(cache_from(Some("acme/app:latest")), " --cache-from acme/app:latest");
        assert_eq!(runtime(Some("nvidia")), " --runtime nvidia");
        assert_eq!(entrypoint(Some("/bin/sh")), " --entrypoint /bin/sh");
        assert_eq!(credentials(Some("~/.dockhand/docker")), " --config ~/.dockhand/docker");
        assert_eq!(trailing(Some("echo hi")), " echo hi");
        assert_eq!(remove(true), " --rm");
        assert_eq!(interactive(true), " -it");
        assert_eq!(privileged(true), " --privileged");
    }

    #[test]
    fn bare_port_is_mirrored() {
        assert_eq!(ports(&["80".to_string()]), " -p 80:80");
    }

    #[test]
    fn explicit_port_mapping_passes_through() {
        assert_eq!(ports(&["8080:80".to_string()]), " -p 8080:80");
    }

    #[test]
    fn volume_sequence_concatenates_in_order() {
        let vols = vec!["/a".to_string(), "/b:/c".to_string()];
        assert_eq!(volumes(&vols), " -v /a:/a -v /b:/c");
    }

    #[test]
    fn env_vars_have_no_colon_rule() {
        let env = vec!["MODE=dev".to_string(), "VERBOSE".to_string()];
        assert_eq!(env_vars(&env), " -e MODE=dev -e VERBOSE");
    }
}
