use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use gloo_timers::callback::{Interval, Timeout};
use nextraction_client::ReqwestApiClient;
use nextraction_core::admin::{AdminEffect, AdminMsg, AdminViewModel};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::{dom, install_hooks, load_config, Tickers};
use crate::constants::admin::*;
use crate::{client_settings, perform, render_admin, AdminController};

struct AdminApp {
    controller: RefCell<AdminController>,
    painted: RefCell<Option<AdminViewModel>>,
    client: ReqwestApiClient,
    tickers: Tickers,
}

pub fn run_admin() -> Result<()> {
    install_hooks();
    let config = load_config();
    let client = ReqwestApiClient::new(client_settings(&config))?;
    let stats_interval = config.stats_interval_ms;

    let app = Rc::new(AdminApp {
        controller: RefCell::new(AdminController::new(config)),
        painted: RefCell::new(None),
        client,
        tickers: Tickers::default(),
    });
    let initial = app.controller.borrow().view();
    paint(&app, initial);

    wire_events(&app)?;

    let poller = app.clone();
    Interval::new(stats_interval, move || send(&poller, AdminMsg::StatsTick)).forget();

    send(&app, AdminMsg::Started);
    Ok(())
}

fn wire_events(app: &Rc<AdminApp>) -> Result<()> {
    let clicks = [
        (BUTTON_VERIFY, AdminMsg::VerifyClicked),
        (BUTTON_INGEST, AdminMsg::IngestClicked),
        (BUTTON_CLEAR, AdminMsg::ClearClicked),
        (BUTTON_EXAMPLES, AdminMsg::LoadExamplesClicked),
        (BUTTON_TEST_CONNECTION, AdminMsg::TestConnectionClicked),
        (BUTTON_CLEAR_LOG, AdminMsg::ClearLogClicked),
        (BUTTON_OPEN_CHAT, AdminMsg::OpenChatClicked),
    ];
    for (id, msg) in clicks {
        let app = app.clone();
        dom::on(id, "click", move |event| {
            event.prevent_default();
            send(&app, msg.clone());
        })?;
    }

    let input = app.clone();
    dom::on(INPUT_URLS, "input", move |_| {
        send(&input, AdminMsg::InputChanged(dom::field_value(INPUT_URLS)));
    })?;

    let errors = app.clone();
    dom::on_window("error", move |event| {
        let message = event
            .dyn_ref::<web_sys::ErrorEvent>()
            .map(|err| err.message())
            .unwrap_or_else(|| "unknown error".to_string());
        send(&errors, AdminMsg::RuntimeError(message));
    })
}

fn send(app: &Rc<AdminApp>, msg: AdminMsg) {
    let dispatched = app.controller.borrow_mut().on_event(msg);
    if let Some(view) = dispatched.view {
        paint(app, view);
    }
    for effect in dispatched.effects {
        run_effect(app, effect);
    }
}

fn paint(app: &AdminApp, view: AdminViewModel) {
    let mut painted = app.painted.borrow_mut();
    dom::apply(&render_admin(&view, painted.as_ref()));
    *painted = Some(view);
}

fn run_effect(app: &Rc<AdminApp>, effect: AdminEffect) {
    match effect {
        AdminEffect::Call(call) => {
            let app = app.clone();
            spawn_local(async move {
                let reply = perform(&app.client, call).await;
                send(&app, AdminMsg::Api(reply));
            });
        }
        AdminEffect::Alert(message) => dom::alert(&message),
        AdminEffect::ConfirmClear(question) => {
            if dom::confirm(&question) {
                send(app, AdminMsg::ClearConfirmed);
            }
        }
        AdminEffect::StartTicker { kind, interval_ms } => {
            let ticking = app.clone();
            let interval = Interval::new(interval_ms, move || {
                send(&ticking, AdminMsg::Ticked(kind));
            });
            app.tickers.start(kind, interval);
        }
        AdminEffect::StopTicker(kind) => app.tickers.stop(kind),
        AdminEffect::Schedule { delay_ms, msg } => {
            let app = app.clone();
            Timeout::new(delay_ms, move || send(&app, *msg)).forget();
        }
        AdminEffect::OpenInNewTab(url) => dom::open_in_new_tab(&url),
    }
}
