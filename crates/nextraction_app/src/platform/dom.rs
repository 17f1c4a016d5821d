use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::DomCommand;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("window has no document"))
}

fn by_id(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|doc| doc.get_element_by_id(id))
}

/// Attaches `handler` to `event` on the element with `id`. Missing elements
/// are reported so a broken page template shows up in the console.
pub fn on<F>(id: &str, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let node = by_id(id).ok_or_else(|| anyhow!("missing element #{id}"))?;
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    node.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("cannot listen for {event} on #{id}: {err:?}"))?;
    callback.forget();
    Ok(())
}

pub fn on_window<F>(event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    window()?
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("cannot listen for {event} on window: {err:?}"))?;
    callback.forget();
    Ok(())
}

/// Current value of a text input or textarea.
pub fn field_value(id: &str) -> String {
    let Some(node) = by_id(id) else {
        return String::new();
    };
    if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    node.dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(question: &str) -> bool {
    window()
        .ok()
        .and_then(|window| window.confirm_with_message(question).ok())
        .unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) {
    if let Ok(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

thread_local! {
    /// Markup last written per element. The browser re-serializes
    /// `innerHTML` (entities included), so reading it back never matches.
    static APPLIED_HTML: RefCell<HashMap<&'static str, String>> = RefCell::new(HashMap::new());
}

/// Records `html` for `id` and reports whether it differs from the last write.
fn html_changed(id: &'static str, html: &str) -> bool {
    APPLIED_HTML.with(|applied| {
        let mut applied = applied.borrow_mut();
        if applied.get(id).is_some_and(|last| last == html) {
            return false;
        }
        applied.insert(id, html.to_string());
        true
    })
}

pub fn apply(commands: &[DomCommand]) {
    for command in commands {
        apply_one(command);
    }
}

fn apply_one(command: &DomCommand) {
    match command {
        DomCommand::ToggleBodyClass { class, on } => {
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|doc| doc.body())
            {
                let _ = body.class_list().toggle_with_force(class, *on);
            }
        }
        DomCommand::SetText { id, text } => {
            if let Some(node) = by_id(id) {
                if node.text_content().as_deref() != Some(text.as_str()) {
                    node.set_text_content(Some(text));
                }
            }
        }
        DomCommand::SetHtml { id, html } => {
            if let Some(node) = by_id(id) {
                if html_changed(id, html) {
                    node.set_inner_html(html);
                }
            }
        }
        DomCommand::SetValue { id, value } => {
            // Writing an unchanged value would move the caret.
            if field_value(id) == *value {
                return;
            }
            if let Some(node) = by_id(id) {
                if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
                    area.set_value(value);
                } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                    input.set_value(value);
                }
            }
        }
        DomCommand::SetEnabled { id, enabled } => {
            if let Some(node) = by_id(id) {
                let _ = if *enabled {
                    node.remove_attribute("disabled")
                } else {
                    node.set_attribute("disabled", "")
                };
            }
        }
        DomCommand::SetHidden { id, hidden } => {
            if let Some(node) = by_id(id).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                node.set_hidden(*hidden);
            }
        }
        DomCommand::SetStyle {
            id,
            property,
            value,
        } => {
            if let Some(node) = by_id(id).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                let _ = node.style().set_property(property, value);
            }
        }
        DomCommand::SetClassName { id, class } => {
            if let Some(node) = by_id(id) {
                node.set_class_name(class);
            }
        }
        DomCommand::ToggleClass { id, class, on } => {
            if let Some(node) = by_id(id) {
                let _ = node.class_list().toggle_with_force(class, *on);
            }
        }
        DomCommand::ScrollToBottom { id } => {
            if let Some(node) = by_id(id) {
                node.set_scroll_top(node.scroll_height());
            }
        }
    }
}
