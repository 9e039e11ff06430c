#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod components;

mod home;
use home::ShopHome;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the whole site is one promotional page, so there is no router; the nav
// links are plain fragment anchors into the sections below the hero

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SHOP_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        ShopHome {}
    }
}
