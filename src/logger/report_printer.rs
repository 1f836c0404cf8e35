use owo_colors::{OwoColorize, Style};
use crate::config::constants::SEPARATOR_WIDTH;
use crate::enums::severity::Severity;
use crate::services::pattern_catalog::PatternCatalog;
use crate::structs::analysis_report::{AnalysisReport, MatchReport};
use crate::structs::catalog_stats::CatalogStats;
use crate::structs::stack_location::StackLocation;

/// Renders reports for the terminal. Every `render_*` returns the text so it
/// can be checked without a terminal; `print_*` writes it to stdout.
pub struct ReportPrinter {
    color: bool,
}

impl ReportPrinter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn severity_style(severity: Severity) -> Style {
        match severity {
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Info => Style::new().cyan().bold(),
        }
    }

    fn separator(&self) -> String {
        self.paint(&"━".repeat(SEPARATOR_WIDTH), Style::new().dimmed())
    }

    pub fn render_match(&self, index: usize, total: usize, report: &MatchReport) -> String {
        let badge = format!("{} {}", report.severity.icon(), report.severity.as_str().to_uppercase());

        let mut lines = vec![
            format!(
                "{} {} {}",
                self.paint(&badge, Self::severity_style(report.severity)),
                self.paint(&report.title, Style::new().bold()),
                self.paint(&format!("[{}] ({}/{})", report.category, index, total), Style::new().dimmed()),
            ),
            format!(
                "   {} {}",
                self.paint(&format!("line {}:", report.line_number), Style::new().dimmed()),
                report.matched_line
            ),
            String::new(),
            format!("   {} {}", self.paint("What happened:", Style::new().bold()), report.explanation),
            format!("   {} {}", self.paint("How to fix:", Style::new().green().bold()), report.fix),
        ];
        if let Some(cmd) = &report.auto_fix_cmd {
            lines.push(format!(
                "   {} {}",
                self.paint("Try:", Style::new().green().bold()),
                self.paint(cmd, Style::new().green())
            ));
        }
        Self::join(lines)
    }

    pub fn render_location(&self, location: &StackLocation) -> String {
        format!(
            "📍 {} {}\n",
            self.paint("Source location:", Style::new().bold()),
            self.paint(&location.to_string(), Style::new().cyan().underline())
        )
    }

    pub fn render_no_match(&self) -> String {
        format!(
            "🤷 {}\n   {}\n",
            self.paint("No known error pattern matched.", Style::new().yellow()),
            self.paint("Run `errlens --list` to see what is recognized, or add your own [[patterns]] to the config.", Style::new().dimmed())
        )
    }

    /// Full text output for one analysis run.
    pub fn render_report(&self, report: &AnalysisReport, show_location: bool) -> String {
        let mut out = String::new();

        if report.is_empty() {
            out.push_str(&self.render_no_match());
        } else {
            let matches: Vec<String> = report
                .matches
                .iter()
                .enumerate()
                .map(|(i, m)| self.render_match(i + 1, report.match_count, m))
                .collect();

            out.push_str(&Self::join(vec![
                format!("🔍 Found {} known error(s)", report.match_count),
                self.separator(),
            ]));
            out.push_str(&matches.join("\n"));
            out.push_str(&Self::join(vec![self.separator()]));
        }

        if show_location {
            if let Some(location) = &report.source_location {
                out.push_str(&self.render_location(location));
            }
        }
        out
    }

    /// Entries grouped by category. `category` filters case-insensitively.
    pub fn render_list(&self, catalog: &PatternCatalog, category: Option<&str>) -> String {
        let mut lines = Vec::new();
        let mut listed = 0;

        for name in catalog.categories() {
            if category.is_some_and(|wanted| !wanted.eq_ignore_ascii_case(name)) {
                continue;
            }
            lines.push(self.paint(&format!("[{}]", name), Style::new().cyan().bold()));
            for entry in catalog.in_category(name) {
                let fix_marker = if entry.has_auto_fix() { " 🔧" } else { "" };
                lines.push(format!(
                    "  {} {}{}",
                    self.paint(entry.severity.icon(), Self::severity_style(entry.severity)),
                    entry.title,
                    fix_marker
                ));
                listed += 1;
            }
            lines.push(String::new());
        }

        match category {
            Some(wanted) if listed == 0 => lines.push(format!(
                "⚠️ No patterns in category '{}'. Known categories: {}",
                wanted,
                catalog.categories().join(", ")
            )),
            _ => lines.push(self.paint(
                &format!("{} pattern(s) listed, 🔧 = auto-fix available", listed),
                Style::new().dimmed(),
            )),
        }
        Self::join(lines)
    }

    pub fn render_stats(&self, stats: &CatalogStats) -> String {
        let mut lines = vec![
            format!("📊 {}", self.paint("Pattern catalog", Style::new().bold())),
            self.separator(),
            format!("  Total patterns: {}", stats.total_count),
            format!("  With auto-fix:  {}", stats.auto_fix_count),
        ];
        for severity in Severity::ALL {
            lines.push(format!(
                "  {:<15} {}",
                self.paint(&format!("{}:", severity.as_str()), Self::severity_style(severity)),
                stats.count_for(severity)
            ));
        }
        lines.push(String::new());

        let width = stats.categories.iter().map(|c| c.category.len()).max().unwrap_or(0);
        for c in &stats.categories {
            lines.push(format!(
                "  {:<width$}  {:>3}  {:>3}%  {} auto-fix",
                c.category,
                c.count,
                c.percentage,
                c.auto_fix_count,
                width = width
            ));
        }
        if let Some(largest) = stats.largest_category() {
            lines.push(String::new());
            lines.push(format!("  Largest category: {} ({} patterns)", largest.category, largest.count));
        }
        lines.push(self.separator());
        Self::join(lines)
    }

    /// Newline-terminated block.
    fn join(lines: Vec<String>) -> String {
        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    pub fn print_report(&self, report: &AnalysisReport, show_location: bool) {
        print!("{}", self.render_report(report, show_location));
    }

    pub fn print_list(&self, catalog: &PatternCatalog, category: Option<&str>) {
        print!("{}", self.render_list(catalog, category));
    }

    pub fn print_stats(&self, stats: &CatalogStats) {
        print!("{}", self.render_stats(stats));
    }
}
