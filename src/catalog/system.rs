use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "System";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"([\w.-]+): command not found(?:$|[^:])",
        title: "Command Not Found",
        category: CATEGORY,
        explanation: "The shell could not find the program on PATH.",
        fix: "Install '$1' or add its directory to PATH. For project tools, try `npx $1`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"'([^']+)' is not recognized as an internal or external command",
        title: "Windows Command Not Recognized",
        category: CATEGORY,
        explanation: "cmd.exe could not find the program on PATH.",
        fix: "Install '$1' or add its install folder to the PATH environment variable, then open a new terminal.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"System limit for number of file watchers reached",
        title: "File Watcher Limit Reached",
        category: CATEGORY,
        explanation: "Linux ran out of inotify watches, which dev servers use to watch files.",
        fix: "Raise fs.inotify.max_user_watches (for example to 524288).",
        auto_fix_cmd: Some("sudo sysctl fs.inotify.max_user_watches=524288"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"no space left on device",
        title: "Disk Full",
        category: CATEGORY,
        explanation: "The file system is out of space.",
        fix: "Free space: clear caches, old Docker images (`docker system prune`) and build artifacts.",
        auto_fix_cmd: Some("df -h"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"EMFILE|too many open files",
        title: "Too Many Open Files",
        category: CATEGORY,
        explanation: "The process hit its open file descriptor limit.",
        fix: "Close files and sockets you no longer need, or raise the limit with `ulimit -n`.",
        auto_fix_cmd: Some("ulimit -n 65536"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"OOMKilled|Out of memory: Killed process",
        title: "Killed by OOM Killer",
        category: CATEGORY,
        explanation: "The kernel or container runtime killed the process for using too much memory.",
        fix: "Raise the memory limit or reduce the process's memory use.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Segmentation fault|SIGSEGV",
        title: "Segmentation Fault",
        category: CATEGORY,
        explanation: "Native code accessed invalid memory.",
        fix: "Rebuild native dependencies for your platform, and update the crashing library.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"(?:bash|sh|zsh): ([^:\s]+): Permission denied",
        title: "Script Not Executable",
        category: CATEGORY,
        explanation: "The file lacks the execute permission bit.",
        fix: "Make it executable with `chmod +x $1`.",
        auto_fix_cmd: Some("chmod +x $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"EPERM: operation not permitted",
        title: "Operation Not Permitted",
        category: CATEGORY,
        explanation: "The OS refused the operation. On Windows a file is often locked by another process, such as an editor or antivirus.",
        fix: "Close programs holding the file, and check ownership and permissions.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
