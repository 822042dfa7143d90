/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts operator-facing status reporting (e.g. to stderr)
/// so it never interleaves with the SBOM content itself.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning that did not abort the run
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
