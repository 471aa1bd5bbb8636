#![allow(non_snake_case)]
use dioxus::prelude::*;
use gloo_console::console_error;
use tracing::{Level, debug};

use webapp::{
    Island, IslandRoot, IslandRootProps,
    dom::{self, MountPoint},
};

fn mount(point: MountPoint) {
    let island = match Island::decode(&point.props) {
        Ok(island) => island,
        Err(err) => {
            console_error!(format!("failed to decode island {}: {err}", point.id));
            return;
        }
    };

    debug!("mounting {:?} on #{}", island.mount_id(), point.id);

    // every island is its own root: islands share no component state, only the
    // page (history, popstate, the dark class), so one failing to mount leaves
    // the others and the static markup around them intact
    let vdom = VirtualDom::new_with_props(IslandRoot, IslandRootProps { island });
    let config = dioxus::web::Config::new().rootname(point.id);

    wasm_bindgen_futures::spawn_local(async move {
        dioxus::web::run(vdom, config).await;
    });
}

fn main() {
    if let Err(err) = dioxus_logger::init(Level::DEBUG) {
        console_error!(format!("failed to init logger: {err}"));
    }

    for point in dom::take_mount_points() {
        mount(point);
    }
}
