//! Console adapters for operator-facing status output

mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
