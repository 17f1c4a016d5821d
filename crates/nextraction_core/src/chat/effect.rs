use crate::{ApiCall, Theme, TickerKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    Call(ApiCall),
    /// Ask the user to confirm clearing the transcript; dispatch
    /// [`crate::chat::ChatMsg::ClearConfirmed`] on acceptance.
    ConfirmClear(String),
    StartTicker { kind: TickerKind, interval_ms: u32 },
    StopTicker(TickerKind),
    PersistTheme(Theme),
    /// Developer-facing diagnostics; never shown verbatim to the user.
    ReportError(String),
}
