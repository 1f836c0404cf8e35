use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Node.js";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"Cannot find module '([^']+)'",
        title: "Module Not Found",
        category: CATEGORY,
        explanation: "Node could not resolve an import or require() call. The package is not installed, or the relative path is wrong.",
        fix: "Install the package with `npm install $1`. If '$1' is a local file, check the relative path and file extension.",
        auto_fix_cmd: Some("npm install $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Cannot read propert(?:y|ies) of (undefined|null)",
        title: "Cannot Read Property of Undefined",
        category: CATEGORY,
        explanation: "Code accessed a property on a value that is undefined or null at runtime. Usually data has not loaded yet, or a function returned nothing.",
        fix: "Guard the access with optional chaining (`obj?.prop`) or a default value (`list ?? []`), and check where the $1 value comes from.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"TypeError: ([\w.$\[\]]+) is not a function",
        title: "Not a Function",
        category: CATEGORY,
        explanation: "A value was called like a function but holds something else. Common causes are a wrong import (default vs named) or a typo.",
        fix: "Check that `$1` is imported correctly and is actually a function at the call site.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ReferenceError: (\w+) is not defined",
        title: "Reference Not Defined",
        category: CATEGORY,
        explanation: "An identifier was used that does not exist in the current scope.",
        fix: "Declare or import `$1` before using it, and check for typos in the name.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"EADDRINUSE.*?:(\d+)",
        title: "Port Already In Use",
        category: CATEGORY,
        explanation: "The server tried to listen on a port that another process already holds.",
        fix: "Stop the process using port $1 (find it with `lsof -i :$1`) or start the server on another port.",
        auto_fix_cmd: Some("npx kill-port $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"JavaScript heap out of memory",
        title: "Heap Out of Memory",
        category: CATEGORY,
        explanation: "The V8 heap limit was reached. Large builds or a memory leak can exhaust the default limit.",
        fix: "Raise the limit with NODE_OPTIONS=--max-old-space-size=4096, then look for leaks if it keeps growing.",
        auto_fix_cmd: Some("export NODE_OPTIONS=--max-old-space-size=4096"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Maximum call stack size exceeded",
        title: "Maximum Call Stack Exceeded",
        category: CATEGORY,
        explanation: "A function recursed without reaching a base case, or two functions call each other forever.",
        fix: "Find the recursive call in the stack trace and add or fix its termination condition.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Unhandled ?Promise ?Rejection",
        title: "Unhandled Promise Rejection",
        category: CATEGORY,
        explanation: "A promise rejected and nothing caught it. Recent Node versions terminate the process on this.",
        fix: "Add `.catch()` to the promise chain or wrap the `await` in try/catch.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ERR_REQUIRE_ESM|require\(\) of ES Module",
        title: "Require of ES Module",
        category: CATEGORY,
        explanation: "A CommonJS file used require() on a package that only ships ES modules.",
        fix: "Switch the importing file to `import`, use a dynamic `await import()`, or pin an older CommonJS release of the package.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Cannot use import statement outside a module",
        title: "Import Outside Module",
        category: CATEGORY,
        explanation: "Node treated the file as CommonJS, where `import` syntax is not allowed.",
        fix: "Add \"type\": \"module\" to package.json, rename the file to .mjs, or use require().",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ENOENT: no such file or directory, \w+ '([^']+)'",
        title: "File Not Found",
        category: CATEGORY,
        explanation: "A file system call referenced a path that does not exist.",
        fix: "Check that '$1' exists and that the path is relative to the directory you expect (process.cwd()).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"EACCES: permission denied",
        title: "EACCES Permission Denied",
        category: CATEGORY,
        explanation: "The process lacks permission to read, write or execute the target path.",
        fix: "Fix ownership of the path (`chown`) instead of running as root. For global npm installs, configure a user-writable prefix.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Assignment to constant variable",
        title: "Assignment to Constant",
        category: CATEGORY,
        explanation: "A variable declared with `const` was reassigned.",
        fix: "Declare the variable with `let` if it must change, or assign to a new variable.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Unexpected token .{1,3} in JSON|is not valid JSON|Unexpected end of JSON input",
        title: "Invalid JSON",
        category: CATEGORY,
        explanation: "JSON.parse() received text that is not JSON. Often an HTML error page or an empty response body.",
        fix: "Log the raw text before parsing and check the response status and content-type.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"TypeError: fetch failed",
        title: "Fetch Failed",
        category: CATEGORY,
        explanation: "The built-in fetch could not complete the request. The underlying cause (DNS, refused connection, TLS) is in the `cause` field.",
        fix: "Print `error.cause` to see the network-level reason and check the URL.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"The engine "node" is incompatible with this module\. Expected version "([^"]+)""#,
        title: "Node Version Mismatch",
        category: CATEGORY,
        explanation: "A dependency declares an engines.node range that your Node version does not satisfy.",
        fix: "Switch to a Node version matching $1 (for example with nvm or fnm).",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"DeprecationWarning: Buffer\(\) is deprecated",
        title: "Deprecated Buffer Constructor",
        category: CATEGORY,
        explanation: "new Buffer() is unsafe and deprecated.",
        fix: "Use Buffer.from(), Buffer.alloc() or Buffer.allocUnsafe() instead.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"ExperimentalWarning: (.+)",
        title: "Experimental Feature Warning",
        category: CATEGORY,
        explanation: "Node is reporting use of an experimental API. It works but may change between releases.",
        fix: "No action needed unless you want stability guarantees ($1).",
        auto_fix_cmd: None,
        severity: Severity::Info,
    },
];
