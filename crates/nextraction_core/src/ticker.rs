/// Repeating UI timers a view can ask the platform to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickerKind {
    /// Cosmetic ingestion progress bar.
    Progress,
    /// Knowledge-base counter count-up.
    Counter,
}
