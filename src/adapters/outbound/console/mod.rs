/// Console adapters writing to stderr
mod issue_summary;
mod progress_reporter;

pub use issue_summary::IssueSummaryPrinter;
pub use progress_reporter::StderrProgressReporter;
