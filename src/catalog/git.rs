use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Git";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"CONFLICT \([\w/ ]+\): Merge conflict in (.+)",
        title: "Git Merge Conflict",
        category: CATEGORY,
        explanation: "Both sides changed the same lines, and git needs you to pick the result.",
        fix: "Edit $1, resolve the <<<<<<< / >>>>>>> markers, then `git add` it and continue.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Updates were rejected because the (?:remote contains work|tip of your current branch is behind)",
        title: "Git Push Rejected",
        category: CATEGORY,
        explanation: "The remote branch has commits you do not have locally.",
        fix: "Integrate the remote changes first with `git pull --rebase`, then push again.",
        auto_fix_cmd: Some("git pull --rebase"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"not a git repository",
        title: "Not a Git Repository",
        category: CATEGORY,
        explanation: "The command ran outside any git working tree.",
        fix: "Change into the repository directory, or create one with `git init`.",
        auto_fix_cmd: Some("git init"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Authentication failed for '([^']+)'",
        title: "Git Authentication Failed",
        category: CATEGORY,
        explanation: "The remote rejected your credentials. Most hosts no longer accept account passwords over HTTPS.",
        fix: "Use a personal access token or switch $1 to an SSH remote.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Permission denied \(publickey\)",
        title: "SSH Key Rejected",
        category: CATEGORY,
        explanation: "The server did not accept any of your SSH keys.",
        fix: "Check `ssh -T git@github.com`, load your key with ssh-add, and register the public key with the host.",
        auto_fix_cmd: Some("ssh -T git@github.com"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"You are in 'detached HEAD' state",
        title: "Detached HEAD",
        category: CATEGORY,
        explanation: "HEAD points at a commit, not a branch. New commits will not belong to any branch.",
        fix: "Create a branch to keep your work (`git switch -c <name>`), or switch back to an existing branch.",
        auto_fix_cmd: None,
        severity: Severity::Info,
    },
    PatternDef {
        pattern: r"pathspec '([^']+)' did not match any file\(s\) known to git",
        title: "Git Pathspec Not Found",
        category: CATEGORY,
        explanation: "The branch or path given to git does not exist.",
        fix: "Check the spelling of '$1'. For remote branches, run `git fetch` first.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"refusing to merge unrelated histories",
        title: "Unrelated Histories",
        category: CATEGORY,
        explanation: "The two branches share no common commit, typically a fresh local repo and a remote created with a README.",
        fix: "If that is expected, merge with --allow-unrelated-histories.",
        auto_fix_cmd: Some("git pull --allow-unrelated-histories"),
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"Your local changes to the following files would be overwritten",
        title: "Local Changes Would Be Overwritten",
        category: CATEGORY,
        explanation: "Uncommitted changes conflict with the checkout, merge or pull.",
        fix: "Commit or stash your changes, run the command again, then `git stash pop`.",
        auto_fix_cmd: Some("git stash"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"The current branch (\S+) has no upstream branch",
        title: "No Upstream Branch",
        category: CATEGORY,
        explanation: "The local branch is not linked to a remote branch yet.",
        fix: "Push with `git push --set-upstream origin $1`.",
        auto_fix_cmd: Some("git push --set-upstream origin $1"),
        severity: Severity::Error,
    },
];
