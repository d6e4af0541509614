mod app;
mod browser;
mod context;
mod layout;
mod pages;
mod player;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<app::App>::new().render();
}
