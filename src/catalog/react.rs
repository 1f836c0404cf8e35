use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "React";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"Invalid hook call",
        title: "Invalid Hook Call",
        category: CATEGORY,
        explanation: "A hook was called outside a function component body, or two copies of React are loaded.",
        fix: "Call hooks only at the top level of components or custom hooks. Run `npm ls react` to check for duplicate React copies.",
        auto_fix_cmd: Some("npm ls react"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"Each child in a list should have a unique "key" prop"#,
        title: "Missing Key Prop",
        category: CATEGORY,
        explanation: "Elements rendered from an array need a stable key so React can track them between renders.",
        fix: "Add `key={item.id}` (a stable unique id, not the array index) to the outermost element returned from map().",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"Too many re-renders",
        title: "Too Many Re-renders",
        category: CATEGORY,
        explanation: "State is set during render, which triggers another render, forever.",
        fix: "Move the state update into an event handler or useEffect. Write `onClick={() => setX(1)}` instead of `onClick={setX(1)}`.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Hydration failed|Text content does not match server-rendered HTML|hydration mismatch",
        title: "Hydration Mismatch",
        category: CATEGORY,
        explanation: "The HTML rendered on the server differs from the first client render.",
        fix: "Avoid rendering values that differ between server and client (dates, Math.random, window) during the first render. Move them into useEffect.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Objects are not valid as a React child",
        title: "Object Rendered as Child",
        category: CATEGORY,
        explanation: "A plain object (or a Promise) was placed directly in JSX.",
        fix: "Render a field of the object, or map it to elements. Use JSON.stringify for debugging output.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Can't perform a React state update on an unmounted component",
        title: "State Update After Unmount",
        category: CATEGORY,
        explanation: "An async callback set state after its component was removed.",
        fix: "Cancel the pending work in the effect cleanup (AbortController, clearTimeout, unsubscribe).",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"React Hook (\w+) has a missing dependency: '([^']+)'",
        title: "Missing Hook Dependency",
        category: CATEGORY,
        explanation: "The effect reads a value that is not listed in its dependency array, so it can run with stale data.",
        fix: "Add '$2' to the $1 dependency array, or move it inside the hook.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"Rendered (?:more|fewer) hooks than",
        title: "Conditional Hook Order",
        category: CATEGORY,
        explanation: "Hooks ran in a different order than in the previous render, usually because a hook is behind a condition or early return.",
        fix: "Call every hook unconditionally at the top of the component, before any early return.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Element type is invalid",
        title: "Invalid Element Type",
        category: CATEGORY,
        explanation: "JSX referenced something that is not a component, typically undefined from a wrong import.",
        fix: "Check default vs named imports for the component being rendered.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"changing an? (?:un)?controlled input to be (?:un)?controlled",
        title: "Controlled Input Switch",
        category: CATEGORY,
        explanation: "An input's value switched between undefined and a defined value.",
        fix: "Initialize the state with an empty string instead of undefined.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
    PatternDef {
        pattern: r"Cannot update a component \(`(\w+)`\) while rendering a different component",
        title: "Update During Render",
        category: CATEGORY,
        explanation: "A component updated another component's state while rendering.",
        fix: "Move the update of `$1` into useEffect or an event handler.",
        auto_fix_cmd: None,
        severity: Severity::Warning,
    },
];
