use crate::{ApiReply, TickerKind};

#[derive(Debug, Clone, PartialEq)]
pub enum ChatMsg {
    /// Page finished loading.
    Started,
    /// User edited the question box.
    InputChanged(String),
    /// User pressed send (button or Enter) with the current input.
    SendClicked,
    /// Ask a question directly, bypassing the input box.
    Ask(String),
    /// User asked to clear the conversation; confirmation pending.
    ClearClicked,
    ClearConfirmed,
    ThemeToggled,
    StatsTick,
    HealthTick,
    Ticked(TickerKind),
    /// A backend call finished.
    Api(ApiReply),
    /// Uncaught error reported by the page.
    RuntimeError(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
