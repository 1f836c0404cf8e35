use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Next.js";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r#"hostname "([^"]+)" is not configured under images"#,
        title: "Unconfigured Image Host",
        category: CATEGORY,
        explanation: "next/image only optimizes remote images from hosts listed in next.config.js.",
        fix: "Add '$1' to images.remotePatterns in next.config.js and restart the dev server.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"You're importing a component that needs (\w+)\.",
        title: "Client Hook in Server Component",
        category: CATEGORY,
        explanation: "In the App Router, components are Server Components by default and cannot use client-only APIs.",
        fix: "Add \"use client\" at the top of the file that calls $1.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Dynamic server usage",
        title: "Dynamic Server Usage",
        category: CATEGORY,
        explanation: "A route marked static used dynamic data (cookies, headers, searchParams) during the build.",
        fix: "Export `const dynamic = 'force-dynamic'` from the route, or stop reading request data there.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"\b(window|document|localStorage|navigator) is not defined",
        title: "Browser Global on Server",
        category: CATEGORY,
        explanation: "Browser-only globals do not exist while a component renders on the server.",
        fix: "Access `$1` inside useEffect, or guard with `typeof window !== 'undefined'`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
