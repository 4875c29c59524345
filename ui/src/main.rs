fn main() {
    ui::logs::init_logging();

    if let Err(e) = ui::start(ui::MOUNT_ELEMENT_ID) {
        tracing::error!("Startup failed: {e}");
        wasm_bindgen::throw_str(&e.to_string());
    }
}
