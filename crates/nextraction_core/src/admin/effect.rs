use crate::admin::AdminMsg;
use crate::{ApiCall, TickerKind};

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEffect {
    Call(ApiCall),
    /// Blocking user-facing notice.
    Alert(String),
    /// Ask the user to confirm clearing the URL box; dispatch
    /// [`AdminMsg::ClearConfirmed`] on acceptance.
    ConfirmClear(String),
    StartTicker { kind: TickerKind, interval_ms: u32 },
    StopTicker(TickerKind),
    /// Dispatch `msg` once after `delay_ms`.
    Schedule { delay_ms: u32, msg: Box<AdminMsg> },
    /// Open a relative location in a new browsing context.
    OpenInNewTab(String),
}
