use std::collections::HashSet;
use once_cell::sync::OnceCell;
use crate::catalog;
use crate::enums::severity::Severity;
use crate::errors::{ErrlensError, ErrlensResult};
use crate::structs::catalog_stats::CatalogStats;
use crate::structs::category_stats::CategoryStats;
use crate::structs::config::pattern_rule::PatternRule;
use crate::structs::pattern_def::PatternDef;
use crate::structs::pattern_entry::PatternEntry;

static BUILTIN: OnceCell<PatternCatalog> = OnceCell::new();

/// Ordered, read-only list of compiled entries. Position is match priority.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    entries: Vec<PatternEntry>,
}

impl PatternCatalog {
    /// The compiled built-in catalog, shared for the life of the process.
    ///
    /// The first call compiles every built-in signature; a bad entry fails
    /// that call and every later one, so nothing is ever analyzed against a
    /// partial catalog.
    pub fn builtin() -> ErrlensResult<&'static Self> {
        BUILTIN.get_or_try_init(|| {
            let catalog = Self::from_defs(catalog::builtin_definitions())?;
            log::debug!("📚 Compiled {} built-in patterns", catalog.len());
            Ok(catalog)
        })
    }

    pub fn from_defs<'d>(defs: impl IntoIterator<Item = &'d PatternDef>) -> ErrlensResult<Self> {
        let mut catalog = Self { entries: Vec::new() };
        for def in defs {
            catalog.push(PatternEntry::compile(def)?)?;
        }
        Ok(catalog)
    }

    /// A copy of this catalog with `rules` appended after the existing entries.
    pub fn extended_with(&self, rules: &[PatternRule]) -> ErrlensResult<Self> {
        let mut catalog = self.clone();
        for rule in rules {
            catalog.push(rule.to_entry()?)?;
        }
        if !rules.is_empty() {
            log::info!("🧩 Added {} custom patterns", rules.len());
        }
        Ok(catalog)
    }

    fn push(&mut self, entry: PatternEntry) -> ErrlensResult<()> {
        if self.find(&entry.title).is_some() {
            return Err(ErrlensError::duplicate_title(&entry.title, &entry.category));
        }

        let groups = entry.capture_group_count();
        let highest = entry.highest_placeholder();
        if highest > groups {
            log::warn!(
                "⚠️ Pattern '{}' references ${} but only defines {} capture group(s); the placeholder will be left as is",
                entry.title, highest, groups
            );
        }

        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, title: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.title == title)
    }

    /// Category names in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Entries whose category equals `category`, ignoring case.
    pub fn in_category<'c>(&'c self, category: &'c str) -> impl Iterator<Item = &'c PatternEntry> + 'c {
        self.entries
            .iter()
            .filter(move |entry| entry.category.eq_ignore_ascii_case(category))
    }

    pub fn stats(&self) -> CatalogStats {
        let total = self.entries.len();
        let categories = self
            .categories()
            .into_iter()
            .map(|category| {
                let (count, auto_fix_count) = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category)
                    .fold((0, 0), |(count, fixes), entry| {
                        (count + 1, fixes + usize::from(entry.has_auto_fix()))
                    });
                CategoryStats {
                    category: category.to_string(),
                    count,
                    percentage: if total == 0 { 0 } else { count * 100 / total },
                    auto_fix_count,
                }
            })
            .collect();

        let by_severity = |severity: Severity| self.entries.iter().filter(|entry| entry.severity == severity).count();

        CatalogStats {
            total_count: total,
            auto_fix_count: self.entries.iter().filter(|entry| entry.has_auto_fix()).count(),
            error_count: by_severity(Severity::Error),
            warning_count: by_severity(Severity::Warning),
            info_count: by_severity(Severity::Info),
            categories,
        }
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a PatternEntry;
    type IntoIter = std::slice::Iter<'a, PatternEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(title: &str, pattern: &str) -> PatternRule {
        PatternRule {
            pattern: pattern.to_string(),
            title: title.to_string(),
            category: "Internal".to_string(),
            explanation: String::new(),
            fix: "Check $1".to_string(),
            auto_fix_cmd: None,
            severity: "warning".to_string(),
        }
    }

    #[test]
    fn test_builtin_compiles_every_definition() {
        let catalog = PatternCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), catalog::builtin_definitions().count());
        assert!(catalog.len() > 50);
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = PatternCatalog::builtin().unwrap();
        let second = PatternCatalog::builtin().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_builtin_placeholders_stay_within_groups() {
        for entry in PatternCatalog::builtin().unwrap() {
            assert!(
                entry.highest_placeholder() <= entry.capture_group_count(),
                "'{}' references ${} with {} group(s)",
                entry.title,
                entry.highest_placeholder(),
                entry.capture_group_count()
            );
        }
    }

    #[test]
    fn test_builtin_auto_fixes_are_never_blank() {
        for entry in PatternCatalog::builtin().unwrap() {
            if let Some(cmd) = &entry.auto_fix_cmd {
                assert!(!cmd.trim().is_empty(), "'{}' has a blank auto-fix", entry.title);
            }
        }
    }

    #[test]
    fn test_duplicate_definition_fails_fast() {
        let def = catalog::node::PATTERNS[0];
        let err = PatternCatalog::from_defs([&def, &def]).unwrap_err();
        assert!(matches!(err, ErrlensError::DuplicateTitle { .. }));
    }

    #[test]
    fn test_invalid_definition_fails_fast() {
        let broken = PatternDef {
            pattern: r"(unclosed",
            title: "Broken",
            category: "Test",
            explanation: "",
            fix: "",
            auto_fix_cmd: None,
            severity: Severity::Info,
        };
        let err = PatternCatalog::from_defs([&broken]).unwrap_err();
        assert!(matches!(err, ErrlensError::InvalidPattern { .. }));
    }

    #[test]
    fn test_custom_rules_append_after_builtins() {
        let builtin = PatternCatalog::builtin().unwrap();
        let extended = builtin
            .extended_with(&[custom("Billing Timeout", r"billing timed out after (\d+)ms")])
            .unwrap();
        assert_eq!(extended.len(), builtin.len() + 1);
        assert_eq!(extended.entries().last().unwrap().title, "Billing Timeout");
        assert_eq!(extended.entries()[0].title, builtin.entries()[0].title);
    }

    #[test]
    fn test_custom_rule_colliding_with_builtin_rejected() {
        let err = PatternCatalog::builtin()
            .unwrap()
            .extended_with(&[custom("Module Not Found", "whatever")])
            .unwrap_err();
        assert!(matches!(err, ErrlensError::DuplicateTitle { .. }));
    }

    #[test]
    fn test_placeholder_past_groups_is_accepted() {
        let extended = PatternCatalog::builtin()
            .unwrap()
            .extended_with(&[custom("No Groups", "plain text")])
            .unwrap();
        assert!(extended.find("No Groups").is_some());
    }

    #[test]
    fn test_stats_add_up() {
        let catalog = PatternCatalog::builtin().unwrap();
        let stats = catalog.stats();
        assert_eq!(stats.total_count, catalog.len());
        assert_eq!(stats.error_count + stats.warning_count + stats.info_count, stats.total_count);
        assert_eq!(stats.categories.iter().map(|c| c.count).sum::<usize>(), stats.total_count);
        assert_eq!(stats.categories.len(), catalog.categories().len());
        assert_eq!(stats.categories[0].category, "Node.js");
    }

    #[test]
    fn test_in_category_ignores_case() {
        let catalog = PatternCatalog::builtin().unwrap();
        let docker: Vec<_> = catalog.in_category("docker").collect();
        assert!(!docker.is_empty());
        assert!(docker.iter().all(|entry| entry.category == "Docker"));
    }
}
