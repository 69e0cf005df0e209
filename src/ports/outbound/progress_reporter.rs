/// ProgressReporter port for status output during a run
///
/// Status goes to a side channel (stderr for the CLI) so the manifest can be
/// piped from stdout.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports closure progress
    ///
    /// # Arguments
    /// * `processed` - Edges processed so far
    /// * `total` - Processed plus still pending edges; grows as children are discovered
    /// * `message` - Optional detail, e.g. the edge just processed
    fn report_progress(&self, processed: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error line
    fn report_error(&self, message: &str);

    /// Reports completion of a step
    fn report_completion(&self, message: &str);
}
