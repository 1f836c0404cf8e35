use errlens::services::matcher::Matcher;
use errlens::services::pattern_catalog::PatternCatalog;
use errlens::structs::match_result::MatchResult;

pub fn builtin_matcher() -> Matcher<'static> {
    Matcher::new(PatternCatalog::builtin().expect("built-in catalog compiles")).expect("frame recognizers compile")
}

pub fn titles(results: &[MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.title().to_string()).collect()
}

pub const TYPE_ERROR_TRACE: &str = "TypeError: Cannot read properties of undefined (reading 'map')
    at UserList (/app/components/UserList.tsx:12:18)
    at renderWithHooks (/app/node_modules/react-dom/cjs/react-dom.development.js:14985:18)";
