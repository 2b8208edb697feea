//! `icons`
//!
//! Generates the Chrome extension's toolbar and store icons from the
//! vector logo.

use icons::IconConfig;

fn main() {
    env_logger::init();

    let config = IconConfig::default();
    icons::render_icons(&config).expect("Failed to render extension icons");
}
