use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Python";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"ModuleNotFoundError: No module named '([^']+)'",
        title: "Python Module Not Found",
        category: CATEGORY,
        explanation: "The interpreter cannot find the module on sys.path. It is not installed in the active environment.",
        fix: "Install it with `pip install $1` inside the virtualenv you run from. The PyPI name can differ from the import name.",
        auto_fix_cmd: Some("pip install $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ImportError: cannot import name '([^']+)'",
        title: "Python Import Name Error",
        category: CATEGORY,
        explanation: "The module exists but does not export the requested name. Often a circular import or a version change.",
        fix: "Check that '$1' exists in the installed version, and break any circular import between the two modules.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"IndentationError: (.+)",
        title: "Python Indentation Error",
        category: CATEGORY,
        explanation: "Python uses indentation for block structure, and this block is inconsistent.",
        fix: "Fix the indentation ($1). Do not mix tabs and spaces; use 4 spaces.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"NameError: name '([^']+)' is not defined",
        title: "Python Name Not Defined",
        category: CATEGORY,
        explanation: "A name was used before assignment or without import.",
        fix: "Define or import '$1' before this line and check its spelling.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"'NoneType' object has no attribute '([^']+)'",
        title: "Python NoneType Attribute",
        category: CATEGORY,
        explanation: "A variable holds None where an object was expected. A function probably returned None implicitly.",
        fix: "Find where the value became None and check it before accessing '.$1'.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"AttributeError: '(\w+)' object has no attribute '([^']+)'",
        title: "Python Attribute Error",
        category: CATEGORY,
        explanation: "The object does not have the attribute or method that was accessed.",
        fix: "'$1' objects have no '$2'. Check the spelling and the object's actual type (print type(obj)).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"KeyError: (.+)",
        title: "Python Key Error",
        category: CATEGORY,
        explanation: "A dictionary lookup used a key that is not present.",
        fix: "Use `.get($1)` with a default, or check `in` before indexing.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"TypeError: '(\w+)' object is not callable",
        title: "Python Object Not Callable",
        category: CATEGORY,
        explanation: "A value was called with () but is not a function. Often a variable shadows a function name.",
        fix: "Check for a variable named like a function that now holds a '$1'.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"unsupported operand type\(s\) for (.+?): '(\w+)' and '(\w+)'",
        title: "Python Unsupported Operand",
        category: CATEGORY,
        explanation: "An operator was applied to two types that do not support it together.",
        fix: "Convert one operand so that '$2' $1 '$3' is valid (for example int() or str()).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"RecursionError: maximum recursion depth exceeded",
        title: "Python Recursion Limit",
        category: CATEGORY,
        explanation: "A function recursed past the interpreter's limit (1000 by default).",
        fix: "Add a proper base case or rewrite the recursion as a loop.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"SyntaxError: invalid syntax",
        title: "Python Syntax Error",
        category: CATEGORY,
        explanation: "The parser could not understand the line. Look at the caret and the line before it.",
        fix: "Check for missing colons, unbalanced brackets or Python 2 syntax such as `print x`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ZeroDivisionError",
        title: "Python Division by Zero",
        category: CATEGORY,
        explanation: "A division or modulo used zero as the divisor.",
        fix: "Check the divisor before dividing.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"externally-managed-environment",
        title: "Externally Managed Environment",
        category: CATEGORY,
        explanation: "The system Python is managed by the OS package manager and refuses pip installs (PEP 668).",
        fix: "Create and activate a virtualenv, then install there. Use pipx for command-line tools.",
        auto_fix_cmd: Some("python3 -m venv .venv"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"FileNotFoundError: \[Errno 2\] No such file or directory: '([^']+)'",
        title: "Python File Not Found",
        category: CATEGORY,
        explanation: "open() or an os call got a path that does not exist.",
        fix: "Check that '$1' exists relative to the current working directory (os.getcwd()).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"IndexError: list index out of range",
        title: "Python Index Out of Range",
        category: CATEGORY,
        explanation: "A list was indexed past its end.",
        fix: "Check len() before indexing, and look for off-by-one errors in loops.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
