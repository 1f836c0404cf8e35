use once_cell::sync::OnceCell;
use regex::Regex;
use crate::config::constants::{EXCLUDED_PATH_MARKERS, FRAME_BARE_AT, FRAME_BARE_PATH, FRAME_WITH_DESCRIPTION};
use crate::errors::{ErrlensError, ErrlensResult};
use crate::structs::stack_location::StackLocation;

static EXTRACTOR: OnceCell<LocationExtractor> = OnceCell::new();

/// Finds the first stack frame that points into the user's own code.
#[derive(Debug)]
pub struct LocationExtractor {
    /// Tried in order: `at fn (file:l:c)`, `at file:l:c`, bare `file:l:c`.
    recognizers: Vec<Regex>,
}

impl LocationExtractor {
    pub fn global() -> ErrlensResult<&'static Self> {
        EXTRACTOR.get_or_try_init(Self::new)
    }

    pub fn new() -> ErrlensResult<Self> {
        let recognizers = [FRAME_WITH_DESCRIPTION, FRAME_BARE_AT, FRAME_BARE_PATH]
            .into_iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ErrlensError::invalid_pattern("stack frame", pattern, &e.to_string()))
            })
            .collect::<ErrlensResult<Vec<_>>>()?;
        Ok(Self { recognizers })
    }

    pub fn extract(&self, input: &str) -> Option<StackLocation> {
        input.split('\n').find_map(|line| self.extract_line(line))
    }

    fn extract_line(&self, line: &str) -> Option<StackLocation> {
        // One attempt per recognizer: its leftmost match qualifies or the recognizer is skipped.
        self.recognizers.iter().find_map(|recognizer| {
            let caps = recognizer.captures(line)?;
            Self::qualify(caps.get(1)?.as_str(), caps.get(2)?.as_str(), caps.get(3)?.as_str())
        })
    }

    fn qualify(file: &str, line: &str, column: &str) -> Option<StackLocation> {
        if EXCLUDED_PATH_MARKERS.iter().any(|marker| file.contains(marker)) {
            return None;
        }
        Some(StackLocation {
            file: file.to_string(),
            line: line.parse().ok()?,
            column: column.parse().ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Option<StackLocation> {
        LocationExtractor::new().unwrap().extract(input)
    }

    fn location(file: &str, line: u32, column: u32) -> Option<StackLocation> {
        Some(StackLocation { file: file.to_string(), line, column })
    }

    #[test]
    fn test_frame_with_description() {
        assert_eq!(
            extract("    at UserList (/app/components/UserList.tsx:12:18)"),
            location("/app/components/UserList.tsx", 12, 18)
        );
    }

    #[test]
    fn test_anonymous_description_with_spaces() {
        assert_eq!(
            extract("    at Object.<anonymous> (/srv/index.js:3:9)"),
            location("/srv/index.js", 3, 9)
        );
    }

    #[test]
    fn test_bare_at_frame() {
        assert_eq!(extract("    at /srv/server.js:40:5"), location("/srv/server.js", 40, 5));
    }

    #[test]
    fn test_file_url_frame() {
        assert_eq!(
            extract("    at file:///app/src/main.mjs:7:11"),
            location("file:///app/src/main.mjs", 7, 11)
        );
    }

    #[test]
    fn test_bare_path() {
        assert_eq!(
            extract("src/app.ts:14:3 - error TS2304: Cannot find name 'foo'."),
            location("src/app.ts", 14, 3)
        );
    }

    #[test]
    fn test_dependency_frame_only_yields_none() {
        assert_eq!(extract("    at next (/app/node_modules/express/lib/router/index.js:280:10)"), None);
    }

    #[test]
    fn test_internal_frame_skipped() {
        let input = "    at Module._compile (node:internal/modules/cjs/loader:1256:14)\n    at main (/app/index.js:2:1)";
        assert_eq!(extract(input), location("/app/index.js", 2, 1));
    }

    #[test]
    fn test_excluded_frame_ends_attempt_on_that_line() {
        assert_eq!(extract("at /app/node_modules/a.js:1:1 at /app/src/b.js:2:2"), None);
        let input = "at /app/node_modules/a.js:1:1 at /app/src/b.js:2:2\n    at main (/app/src/c.js:3:3)";
        assert_eq!(extract(input), location("/app/src/c.js", 3, 3));
    }

    #[test]
    fn test_bare_path_needs_an_extension() {
        assert_eq!(extract("Makefile:12:3: *** missing separator.  Stop."), None);
        assert_eq!(extract("build/rules.mk:12:3: *** missing separator."), location("build/rules.mk", 12, 3));
    }

    #[test]
    fn test_first_qualifying_line_wins() {
        let input = "    at a (/app/a.js:1:1)\n    at b (/app/b.js:2:2)";
        assert_eq!(extract(input), location("/app/a.js", 1, 1));
    }

    #[test]
    fn test_overflowing_line_number_does_not_qualify() {
        assert_eq!(extract("    at f (/app/a.js:99999999999:1)"), None);
    }

    #[test]
    fn test_no_frames() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("TypeError: x is not a function"), None);
    }
}
