use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use chrono::Local;
use gloo_timers::callback::Interval;
use nextraction_client::ReqwestApiClient;
use nextraction_core::chat::{ChatEffect, ChatMsg, ChatViewModel};
use nextraction_core::Theme;
use nextraction_logging::nx_warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::storage::LocalStorageStore;
use super::{dom, install_hooks, load_config, Tickers};
use crate::constants::chat::*;
use crate::{client_settings, perform, render_chat, ChatController};

struct ChatApp {
    controller: RefCell<ChatController>,
    painted: RefCell<Option<ChatViewModel>>,
    client: ReqwestApiClient,
    settings: RefCell<LocalStorageStore>,
    tickers: Tickers,
}

pub fn run_chat() -> Result<()> {
    install_hooks();
    let config = load_config();
    let client = ReqwestApiClient::new(client_settings(&config))?;
    let settings = LocalStorageStore::open();
    let theme = Theme::load_from(&settings);
    let stats_interval = config.stats_interval_ms;
    let health_interval = config.health_interval_ms;

    let app = Rc::new(ChatApp {
        controller: RefCell::new(ChatController::new(config, theme, Local::now().time())),
        painted: RefCell::new(None),
        client,
        settings: RefCell::new(settings),
        tickers: Tickers::default(),
    });
    let initial = app.controller.borrow().view();
    paint(&app, initial);

    wire_events(&app)?;

    let stats = app.clone();
    Interval::new(stats_interval, move || send(&stats, ChatMsg::StatsTick)).forget();
    let health = app.clone();
    Interval::new(health_interval, move || send(&health, ChatMsg::HealthTick)).forget();

    send(&app, ChatMsg::Started);
    Ok(())
}

fn wire_events(app: &Rc<ChatApp>) -> Result<()> {
    let clicks = [
        (BUTTON_SEND, ChatMsg::SendClicked),
        (BUTTON_CLEAR, ChatMsg::ClearClicked),
        (THEME_TOGGLE, ChatMsg::ThemeToggled),
    ];
    for (id, msg) in clicks {
        let app = app.clone();
        dom::on(id, "click", move |event| {
            event.prevent_default();
            send(&app, msg.clone());
        })?;
    }

    let input = app.clone();
    dom::on(INPUT_QUESTION, "input", move |_| {
        send(&input, ChatMsg::InputChanged(dom::field_value(INPUT_QUESTION)));
    })?;

    let keys = app.clone();
    dom::on(INPUT_QUESTION, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if key.key() == "Enter" {
            event.prevent_default();
            send(&keys, ChatMsg::SendClicked);
        }
    })?;

    let errors = app.clone();
    dom::on_window("error", move |event| {
        let message = event
            .dyn_ref::<web_sys::ErrorEvent>()
            .map(|err| err.message())
            .unwrap_or_else(|| "unknown error".to_string());
        send(&errors, ChatMsg::RuntimeError(message));
    })
}

fn send(app: &Rc<ChatApp>, msg: ChatMsg) {
    let dispatched = app.controller.borrow_mut().on_event(msg);
    if let Some(view) = dispatched.view {
        paint(app, view);
    }
    for effect in dispatched.effects {
        run_effect(app, effect);
    }
}

fn paint(app: &ChatApp, view: ChatViewModel) {
    let mut painted = app.painted.borrow_mut();
    dom::apply(&render_chat(&view, painted.as_ref()));
    *painted = Some(view);
}

fn run_effect(app: &Rc<ChatApp>, effect: ChatEffect) {
    match effect {
        ChatEffect::Call(call) => {
            let app = app.clone();
            spawn_local(async move {
                let reply = perform(&app.client, call).await;
                send(&app, ChatMsg::Api(reply));
            });
        }
        ChatEffect::ConfirmClear(question) => {
            if dom::confirm(&question) {
                send(app, ChatMsg::ClearConfirmed);
            }
        }
        ChatEffect::StartTicker { kind, interval_ms } => {
            let ticking = app.clone();
            let interval = Interval::new(interval_ms, move || {
                send(&ticking, ChatMsg::Ticked(kind));
            });
            app.tickers.start(kind, interval);
        }
        ChatEffect::StopTicker(kind) => app.tickers.stop(kind),
        ChatEffect::PersistTheme(theme) => {
            if let Err(err) = theme.save_to(&mut *app.settings.borrow_mut()) {
                nx_warn!("Theme preference not saved: {}", err);
            }
        }
        // Already logged by the controller.
        ChatEffect::ReportError(_) => {}
    }
}
