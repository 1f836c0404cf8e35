use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Package Managers";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"ERESOLVE",
        title: "npm Peer Dependency Conflict",
        category: CATEGORY,
        explanation: "npm 7+ enforces peer dependencies, and two packages require incompatible versions.",
        fix: "Align the conflicting versions. As a stopgap, install with --legacy-peer-deps.",
        auto_fix_cmd: Some("npm install --legacy-peer-deps"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"Missing script: "?([\w:.-]+)"?"#,
        title: "npm Missing Script",
        category: CATEGORY,
        explanation: "package.json has no script with that name.",
        fix: "Add a \"$1\" entry to the scripts section of package.json, or run `npm run` to list the available scripts.",
        auto_fix_cmd: Some("npm run"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"package\.json and package-lock\.json (?:or npm-shrinkwrap\.json )?are (?:not )?in sync",
        title: "Lockfile Out of Sync",
        category: CATEGORY,
        explanation: "`npm ci` requires package-lock.json to match package.json exactly.",
        fix: "Run `npm install` locally and commit the updated package-lock.json.",
        auto_fix_cmd: Some("npm install"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Your lockfile needs to be updated",
        title: "Yarn Lockfile Outdated",
        category: CATEGORY,
        explanation: "yarn ran with --frozen-lockfile but yarn.lock does not match package.json.",
        fix: "Run `yarn install` locally and commit yarn.lock.",
        auto_fix_cmd: Some("yarn install"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ERR_PNPM_OUTDATED_LOCKFILE",
        title: "pnpm Lockfile Outdated",
        category: CATEGORY,
        explanation: "pnpm-lock.yaml is out of date with package.json, and CI installs use a frozen lockfile.",
        fix: "Run `pnpm install` locally and commit pnpm-lock.yaml.",
        auto_fix_cmd: Some("pnpm install --no-frozen-lockfile"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"404 Not Found - GET https://registry\.npmjs\.org/(\S+)",
        title: "npm Package Not Found",
        category: CATEGORY,
        explanation: "The registry has no package with that name, or it is private.",
        fix: "Check the spelling of '$1', or log in to the right registry for scoped/private packages.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"gyp ERR!",
        title: "Native Build Failed",
        category: CATEGORY,
        explanation: "node-gyp failed to compile a native add-on. Build tools or Python are missing, or the Node version is too new for the package.",
        fix: "Install build tools (Xcode CLT, build-essential, or VS Build Tools) and Python 3, or upgrade the package.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
