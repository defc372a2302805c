//! Platform glue for detaching futures from the render loop.

use std::future::Future;

/// Run `fut` to completion outside the current render pass. On wasm the
/// future is detached; on native it stays tied to the Dioxus scope so it is
/// torn down with the component.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

/// Run `fut` to completion outside the current render pass.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let _ = dioxus::prelude::spawn(fut);
}
