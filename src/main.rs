//! MotorSport Cart Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod dialog;
mod models;
mod storage;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
