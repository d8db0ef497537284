use crate::license_audit::domain::{IssueSet, IssueStatus, LicenseId};
use owo_colors::OwoColorize;

/// IssueSummaryPrinter adapter formatting the end-of-run audit summary
///
/// One line per flagged license: identifier, status and reason.
pub struct IssueSummaryPrinter {
    colored: bool,
}

impl IssueSummaryPrinter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Formats the summary for `issues` found against `main_license`
    pub fn format(&self, main_license: &LicenseId, issues: &IssueSet) -> String {
        if issues.is_empty() {
            let line = format!(
                "✅ All dependency licenses are compatible with {}",
                main_license
            );
            return self.paint(&line, None);
        }

        let mut out = format!(
            "⚠️  {} license issue(s) found against project license {}:\n",
            issues.len(),
            main_license
        );
        for issue in issues.iter() {
            let status = format!("[{}]", issue.status());
            out.push_str(&format!(
                "   - {} {}: {}\n",
                self.paint(&status, Some(issue.status())),
                issue.license(),
                issue.reason()
            ));
        }
        out
    }

    /// Prints the summary to stderr
    pub fn print(&self, main_license: &LicenseId, issues: &IssueSet) {
        eprint!("{}", self.format(main_license, issues));
        if issues.is_empty() {
            eprintln!();
        }
    }

    fn paint(&self, text: &str, status: Option<IssueStatus>) -> String {
        if !self.colored {
            return text.to_string();
        }
        match status {
            None => text.green().to_string(),
            Some(IssueStatus::Incompatible) => text.red().bold().to_string(),
            Some(IssueStatus::Warning) => text.yellow().to_string(),
            Some(IssueStatus::LookupError) => text.magenta().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_audit::domain::Issue;

    #[test]
    fn test_format_clean() {
        let printer = IssueSummaryPrinter::new(false);
        let output = printer.format(&"MIT".into(), &IssueSet::new());
        assert_eq!(output, "✅ All dependency licenses are compatible with MIT");
    }

    #[test]
    fn test_format_issues_plain() {
        let mut issues = IssueSet::new();
        issues.record(Issue::new("GPL-3.0".into(), IssueStatus::Incompatible, "copyleft conflict"));
        issues.record(Issue::lookup_error("ISC".into()));

        let output = IssueSummaryPrinter::new(false).format(&"MIT".into(), &issues);

        assert!(output.contains("2 license issue(s) found against project license MIT"));
        assert!(output.contains("   - [incompatible] GPL-3.0: copyleft conflict\n"));
        assert!(output.contains(
            "   - [lookup-error] ISC: License not found in compatibility matrix.\n"
        ));
    }

    #[test]
    fn test_format_colored_adds_escape_codes() {
        let mut issues = IssueSet::new();
        issues.record(Issue::new("MPL-2.0".into(), IssueStatus::Warning, "file-level"));

        let output = IssueSummaryPrinter::new(true).format(&"MIT".into(), &issues);

        assert!(output.contains("\u{1b}["));
        assert!(output.contains("MPL-2.0: file-level"));
    }
}
