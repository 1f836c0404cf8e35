use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "TypeScript";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"Argument of type '(.+?)' is not assignable to parameter of type '(.+?)'",
        title: "Argument Type Mismatch",
        category: CATEGORY,
        explanation: "A function was called with an argument whose type does not fit the parameter.",
        fix: "Pass a value of type '$2', or convert the '$1' value before the call.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Type '(.+?)' is not assignable to type '(.+?)'",
        title: "Type Not Assignable",
        category: CATEGORY,
        explanation: "A value of one type is used where an incompatible type is expected.",
        fix: "Make the value a '$2', widen the declared type, or narrow the '$1' value with a type guard.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Property '([^']+)' does not exist on type '(.+?)'",
        title: "Property Does Not Exist",
        category: CATEGORY,
        explanation: "The compiler does not know about the accessed property on this type.",
        fix: "Add '$1' to the '$2' type definition, fix the property name, or narrow the type first.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Could not find a declaration file for module '([^']+)'",
        title: "Missing Type Declarations",
        category: CATEGORY,
        explanation: "The package ships no TypeScript types, so it is implicitly typed as any.",
        fix: "Install community types with `npm install --save-dev @types/$1`, or declare the module in a .d.ts file.",
        auto_fix_cmd: Some("npm install --save-dev @types/$1"),
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"Cannot find module '([^']+)' or its corresponding type declarations",
        title: "Cannot Resolve Module Types",
        category: CATEGORY,
        explanation: "TypeScript could resolve neither the module nor its type declarations (TS2307).",
        fix: "Install '$1' if it is a package, or check the path and the `paths`/`baseUrl` settings in tsconfig.json.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"is possibly '(undefined|null)'",
        title: "Possibly Undefined Value",
        category: CATEGORY,
        explanation: "Strict null checks found a value that may be undefined or null where it is used.",
        fix: "Check for $1 before use, use optional chaining, or provide a default value.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Parameter '([^']+)' implicitly has an 'any' type",
        title: "Implicit Any",
        category: CATEGORY,
        explanation: "noImplicitAny is enabled and a parameter has no type annotation.",
        fix: "Add a type annotation to '$1'.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Property '([^']+)' is missing in type",
        title: "Missing Required Property",
        category: CATEGORY,
        explanation: "An object literal or value lacks a property the target type requires.",
        fix: "Provide '$1', or mark it optional in the type definition.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Cannot redeclare block-scoped variable '([^']+)'",
        title: "Block-Scoped Redeclaration",
        category: CATEGORY,
        explanation: "The same name is declared twice in one scope, or a script file collides with a global.",
        fix: "Rename one '$1' declaration, or add `export {}` to make the file a module.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"No overload matches this call",
        title: "No Matching Overload",
        category: CATEGORY,
        explanation: "None of the function's overload signatures accept these arguments.",
        fix: "Read the per-overload errors below this line and adjust the argument types.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"'([^']+)' is declared but its value is never read",
        title: "Unused Declaration",
        category: CATEGORY,
        explanation: "A variable or import is declared but never used.",
        fix: "Remove '$1', or prefix it with an underscore if it must stay.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"Expected (\d+) arguments?, but got (\d+)",
        title: "Wrong Argument Count",
        category: CATEGORY,
        explanation: "The call passes a different number of arguments than the signature declares.",
        fix: "Pass $1 argument(s) instead of $2, or make the extra parameters optional.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
