pub mod report;

pub use report::{ReportOptions, run_report, run_report_impl};
