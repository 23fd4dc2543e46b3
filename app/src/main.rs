#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

mod app;
mod components;
mod dismiss;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(app::App);
}
