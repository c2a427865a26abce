mod api;
mod app;
mod components;
mod state;
mod widget;

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<app::App>::new().render();
}
