#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(shopfront_app::App);
}

/// The app only runs in the browser; the native binary exists so the
/// workspace builds and tests on every target.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("shopfront-app targets wasm32; build with trunk for the browser");
}
