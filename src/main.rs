//! Far Away Frontend Entry Point

mod app;
mod components;
mod config;
mod error;
mod list;
mod logging;
mod message;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
