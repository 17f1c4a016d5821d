use chrono::{Local, NaiveTime};
use nextraction_core::admin::{self, AdminEffect, AdminMsg, AdminState, AdminViewModel};
use nextraction_core::chat::{self, ChatEffect, ChatMsg, ChatState, ChatViewModel};
use nextraction_core::{ActivityLevel, ActivityLog, ConsoleConfig, Theme};
use nextraction_logging::{nx_debug, nx_error, nx_info, nx_warn};

/// Outcome of feeding one message through an update function.
#[derive(Debug)]
pub struct Dispatched<E, V> {
    pub effects: Vec<E>,
    /// Present only when the state changed and the page needs a repaint.
    pub view: Option<V>,
}

/// Owns the admin console state between browser events.
pub struct AdminController {
    state: AdminState,
    mirrored: u64,
}

impl AdminController {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            state: AdminState::new(config),
            mirrored: 0,
        }
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    pub fn view(&self) -> AdminViewModel {
        self.state.view()
    }

    pub fn dispatch(&mut self, msg: AdminMsg, now: NaiveTime) -> Dispatched<AdminEffect, AdminViewModel> {
        nx_debug!("admin <- {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = admin::update(state, msg, now);
        self.mirrored = mirror_activity(state.log(), self.mirrored);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;
        Dispatched { effects, view }
    }

    pub fn on_input_changed(&mut self, text: String) -> Dispatched<AdminEffect, AdminViewModel> {
        self.dispatch(AdminMsg::InputChanged(text), wall_clock())
    }

    pub fn on_verify(&mut self) -> Dispatched<AdminEffect, AdminViewModel> {
        self.dispatch(AdminMsg::VerifyClicked, wall_clock())
    }

    pub fn on_ingest(&mut self) -> Dispatched<AdminEffect, AdminViewModel> {
        self.dispatch(AdminMsg::IngestClicked, wall_clock())
    }

    pub fn on_event(&mut self, msg: AdminMsg) -> Dispatched<AdminEffect, AdminViewModel> {
        self.dispatch(msg, wall_clock())
    }
}

fn wall_clock() -> NaiveTime {
    Local::now().time()
}

/// Copies activity entries the developer log has not seen yet.
fn mirror_activity(log: &ActivityLog, seen: u64) -> u64 {
    for entry in log.entries_since(seen) {
        match entry.level {
            ActivityLevel::Info | ActivityLevel::Success => nx_info!("[activity] {}", entry.message),
            ActivityLevel::Warning => nx_warn!("[activity] {}", entry.message),
            ActivityLevel::Error => nx_error!("[activity] {}", entry.message),
        }
    }
    log.pushed()
}

/// Owns the chat transcript between browser events.
pub struct ChatController {
    state: ChatState,
}

impl ChatController {
    pub fn new(config: ConsoleConfig, theme: Theme, now: NaiveTime) -> Self {
        Self {
            state: ChatState::new(config, theme, now),
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn view(&self) -> ChatViewModel {
        self.state.view()
    }

    pub fn dispatch(&mut self, msg: ChatMsg, now: NaiveTime) -> Dispatched<ChatEffect, ChatViewModel> {
        nx_debug!("chat <- {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = chat::update(state, msg, now);
        for effect in &effects {
            if let ChatEffect::ReportError(message) = effect {
                nx_error!("{}", message);
            }
        }
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;
        Dispatched { effects, view }
    }

    pub fn on_input_changed(&mut self, text: String) -> Dispatched<ChatEffect, ChatViewModel> {
        self.dispatch(ChatMsg::InputChanged(text), wall_clock())
    }

    /// Send button or Enter key.
    pub fn on_submit(&mut self) -> Dispatched<ChatEffect, ChatViewModel> {
        self.dispatch(ChatMsg::SendClicked, wall_clock())
    }

    pub fn on_event(&mut self, msg: ChatMsg) -> Dispatched<ChatEffect, ChatViewModel> {
        self.dispatch(msg, wall_clock())
    }
}
