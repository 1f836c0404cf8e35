use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Docker";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"Cannot connect to the Docker daemon",
        title: "Docker Daemon Not Running",
        category: CATEGORY,
        explanation: "The docker CLI cannot reach the daemon socket.",
        fix: "Start Docker Desktop, or run `sudo systemctl start docker` on Linux.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"permission denied while trying to connect to the Docker daemon socket",
        title: "Docker Socket Permission Denied",
        category: CATEGORY,
        explanation: "Your user is not allowed to use the Docker socket.",
        fix: "Add your user to the docker group, then log out and back in.",
        auto_fix_cmd: Some("sudo usermod -aG docker $USER"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Bind for [\d.:\[\]]+:(\d+) failed: port is already allocated",
        title: "Docker Port Already Allocated",
        category: CATEGORY,
        explanation: "Another container or host process already publishes this port.",
        fix: "Stop whatever holds port $1 (`docker ps` to find containers) or map the container to another host port.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"pull access denied for ([^\s,]+)",
        title: "Docker Image Not Found",
        category: CATEGORY,
        explanation: "The image does not exist, or it is private and you are not logged in.",
        fix: "Check the spelling of '$1', or run `docker login` for private registries.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"manifest for (\S+) not found",
        title: "Docker Tag Not Found",
        category: CATEGORY,
        explanation: "The image exists but the requested tag does not.",
        fix: "Check the available tags for $1 on the registry.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"container name "/?([^"]+)" is already in use"#,
        title: "Container Name Conflict",
        category: CATEGORY,
        explanation: "A container with the same name exists, possibly stopped.",
        fix: "Remove the old container with `docker rm -f $1`, or pick another --name.",
        auto_fix_cmd: Some("docker rm -f $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"COPY failed",
        title: "Docker COPY Failed",
        category: CATEGORY,
        explanation: "The source path of a COPY instruction is not in the build context.",
        fix: "Paths are relative to the build context. Check .dockerignore and the directory passed to `docker build`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"exec format error",
        title: "Exec Format Error",
        category: CATEGORY,
        explanation: "The binary was built for a different CPU architecture, or a script lacks a shebang.",
        fix: "Build for the target platform (`docker build --platform linux/amd64`) or add `#!/bin/sh` to the script.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
