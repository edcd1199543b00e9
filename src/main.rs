#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(recycler_nui::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("recycler-nui is a browser app; build it with `trunk serve --features csr`");
}
