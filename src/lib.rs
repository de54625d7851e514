mod app;
mod bootstrap;
mod catalog;
mod components;
mod types;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());

    // Third-party runtimes load first; the root view mounts only once
    // both dependency groups have joined. Any setup error is logged once
    // here and the page is left as-is.
    wasm_bindgen_futures::spawn_local(async {
        match bootstrap::run().await {
            Ok(()) => mount(),
            Err(err) => log::error!("[bootstrap] startup aborted: {err:?}"),
        }
    });
}

fn mount() {
    let Some(root) = gloo::utils::document().get_element_by_id("root") else {
        log::error!("[bootstrap] mount node #root not found");
        return;
    };
    yew::Renderer::<App>::with_root(root).render();
}
