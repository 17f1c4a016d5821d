//! Nextraction app: drives the admin console and the chat client in the
//! browser. The controllers, effect executor and renderer are plain Rust and
//! run anywhere; only [`platform`] touches the DOM.
pub mod constants;
mod controller;
mod effects;
mod render;

#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use controller::{AdminController, ChatController, Dispatched};
pub use effects::{client_settings, perform};
pub use render::{render_admin, render_chat, DomCommand};
