//! Chat client: question answering transcript, health badge, theme.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::ChatEffect;
pub use msg::ChatMsg;
pub use state::{ChatMessage, ChatState, Connection, Role, APOLOGY, WELCOME};
pub use update::update;
pub use view_model::{ChatViewModel, KnowledgeView, MessageView};
