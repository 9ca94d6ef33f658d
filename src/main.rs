#![allow(warnings)]
//! Notebook Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logger;
mod login;
mod store;
mod todo;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init_logger();
    mount_to_body(App);
}
