mod view;
mod web_app;

pub use view::SencView;
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use std::rc::Rc;

    use senc_app::{apply_fragment, boot, AppServices, DEFAULT_CONTAINER_ID};
    use senc_host_web::{BrowserSpawner, JsDecryptService, WebLocation};
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let surface = SencView::new();
    let ui = surface.clone();
    let container = leptos::document()
        .get_element_by_id(DEFAULT_CONTAINER_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    match container {
        Some(parent) => leptos::mount_to(parent, move || leptos::view! { <SiteApp surface=ui /> }),
        None => leptos::mount_to_body(move || leptos::view! { <SiteApp surface=ui /> }),
    }

    let app = boot(
        Rc::new(WebLocation),
        AppServices {
            view: Rc::new(surface),
            data: Rc::new(JsDecryptService),
            spawner: Rc::new(BrowserSpawner),
        },
    );

    let listener_app = app.clone();
    match WebLocation.watch_fragment(move |raw| apply_fragment(&listener_app, &raw)) {
        // Both live for the page session.
        Ok(listener) => std::mem::forget(listener),
        Err(err) => leptos::logging::warn!("hashchange tracking disabled: {err}"),
    }
    std::mem::forget(app);
}
