use leptos::prelude::*;
use torrentplay::{App, config, utils::dom};

fn main() {
    console_error_panic_hook::set_once();

    let root = dom::element_by_id(config::ROOT_ELEMENT_ID).expect("Failed to find #root element");

    mount_to(root, App).forget();
}
