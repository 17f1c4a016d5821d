use crate::{ApiReply, TickerKind};

#[derive(Debug, Clone, PartialEq)]
pub enum AdminMsg {
    /// Page finished loading.
    Started,
    /// User edited the URL text box.
    InputChanged(String),
    VerifyClicked,
    IngestClicked,
    /// User asked to clear the URL box; confirmation pending.
    ClearClicked,
    /// User confirmed the clear prompt.
    ClearConfirmed,
    LoadExamplesClicked,
    TestConnectionClicked,
    ClearLogClicked,
    /// User asked to try the knowledge base in the chat client.
    OpenChatClicked,
    /// Periodic stats poll.
    StatsTick,
    /// A ticker started through [`crate::admin::AdminEffect::StartTicker`] fired.
    Ticked(TickerKind),
    /// Delay after a completed progress bar elapsed. `run` is the ingestion
    /// run that scheduled it.
    ProgressHideElapsed { run: u32 },
    /// A backend call finished.
    Api(ApiReply),
    /// Uncaught error reported by the page.
    RuntimeError(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
