//! Yolakay Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod i18n;
mod models;
mod pages;
mod search;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
