use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Build Tools";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"Module not found: (?:Error: )?Can't resolve '([^']+)'",
        title: "Bundler Cannot Resolve Module",
        category: CATEGORY,
        explanation: "The bundler could not find an imported module.",
        fix: "If '$1' is a package, install it. Otherwise fix the relative path and check the case of the file name.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"Failed to resolve import "([^"]+)" from "([^"]+)""#,
        title: "Vite Failed to Resolve Import",
        category: CATEGORY,
        explanation: "Vite could not resolve an import during dev or build.",
        fix: "Install \"$1\" or fix the import path in $2. Check resolve.alias in vite.config for aliased paths.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Parsing error: (.+)",
        title: "ESLint Parsing Error",
        category: CATEGORY,
        explanation: "ESLint's parser could not read the file. The configured parser usually does not support the syntax.",
        fix: "Configure the right parser (e.g. @typescript-eslint/parser) for the file type: $1",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"caniuse-lite is outdated",
        title: "Browserslist Data Outdated",
        category: CATEGORY,
        explanation: "The browser compatibility database used by build tools is old.",
        fix: "Update it with `npx update-browserslist-db@latest`.",
        auto_fix_cmd: Some("npx update-browserslist-db@latest"),
        severity: Severity::Info,
    },
    PatternDef {
        pattern: r"Cannot find (?:module|package) '(@babel/[^']+)'",
        title: "Missing Babel Package",
        category: CATEGORY,
        explanation: "The Babel config references a preset or plugin that is not installed.",
        fix: "Install it with `npm install --save-dev $1`.",
        auto_fix_cmd: Some("npm install --save-dev $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"The `([^`]+)` class does not exist",
        title: "Unknown Tailwind Class",
        category: CATEGORY,
        explanation: "@apply used a class Tailwind does not generate.",
        fix: "Check the spelling of `$1`, and that any custom value is defined in tailwind.config.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Test environment jest-environment-jsdom cannot be found",
        title: "Jest jsdom Environment Missing",
        category: CATEGORY,
        explanation: "Jest 28+ no longer bundles the jsdom environment.",
        fix: "Install jest-environment-jsdom as a dev dependency.",
        auto_fix_cmd: Some("npm install --save-dev jest-environment-jsdom"),
        severity: Severity::Error,
    },
];
