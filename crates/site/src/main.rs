//! `site_app`: wasm entry that mounts the portfolio desktop.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("site_app only runs in the browser; build it for wasm32-unknown-unknown with `trunk serve`.");
}
