#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    nextraction_app::platform::run_chat()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("The chat client runs in the browser. Build it for wasm32-unknown-unknown.");
}
