use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::structs::category_stats::CategoryStats;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_count: usize,
    pub auto_fix_count: usize,

    // By severity
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,

    /// In catalog order of first appearance.
    pub categories: Vec<CategoryStats>,
}

impl CatalogStats {
    pub const fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error_count,
            Severity::Warning => self.warning_count,
            Severity::Info => self.info_count,
        }
    }

    pub fn largest_category(&self) -> Option<&CategoryStats> {
        self.categories.iter().max_by_key(|c| c.count)
    }
}
