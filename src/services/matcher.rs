use std::collections::HashSet;
use crate::errors::ErrlensResult;
use crate::services::location_extractor::LocationExtractor;
use crate::services::pattern_catalog::PatternCatalog;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::match_result::MatchResult;
use crate::structs::stack_location::StackLocation;

/// Scans error text against a catalog.
///
/// Results borrow their entries from the catalog, so a `Matcher` never
/// outlives the catalog it reads.
pub struct Matcher<'a> {
    catalog: &'a PatternCatalog,
    extractor: &'static LocationExtractor,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> ErrlensResult<Self> {
        Ok(Self {
            catalog,
            extractor: LocationExtractor::global()?,
        })
    }

    pub const fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    /// Matches every non-blank line against every entry, in catalog order.
    ///
    /// A title is reported at most once: the first line that triggers it
    /// wins, and within a line the earlier catalog entry wins.
    pub fn analyze(&self, input: &str) -> Vec<MatchResult<'a>> {
        let mut results = Vec::new();
        let mut seen: HashSet<&'a str> = HashSet::new();

        for (index, raw_line) in input.split('\n').enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            for entry in self.catalog {
                if seen.contains(entry.title.as_str()) {
                    continue;
                }
                let Some(caps) = entry.regex.captures(line) else {
                    continue;
                };

                let groups = caps
                    .iter()
                    .skip(1)
                    .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                    .collect();

                log::debug!("🎯 Line {} matched '{}'", index + 1, entry.title);
                seen.insert(entry.title.as_str());
                results.push(MatchResult {
                    entry,
                    matched_line: line.to_string(),
                    line_number: index + 1,
                    groups,
                });
            }
        }

        results
    }

    pub fn extract_location(&self, input: &str) -> Option<StackLocation> {
        self.extractor.extract(input)
    }

    /// Runs both passes and packages the outcome, keeping at most
    /// `max_matches` results in discovery order.
    pub fn analyze_report(&self, input: &str, max_matches: Option<usize>) -> AnalysisReport {
        let mut results = self.analyze(input);
        if let Some(limit) = max_matches {
            if results.len() > limit {
                log::info!("✂️ Reporting {} of {} matches", limit, results.len());
                results.truncate(limit);
            }
        }
        AnalysisReport::new(&results, self.extract_location(input))
    }
}
