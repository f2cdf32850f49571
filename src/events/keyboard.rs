use crate::dom::Listener;
use web_sys as web;

/// Window-level keydown hook. `handler` receives the key name and returns
/// true when it consumed the key.
pub fn wire_window_keydown(mut handler: impl FnMut(&str) -> bool + 'static) -> Option<Listener> {
    Listener::on_window("keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if handler(&key) {
            ev.prevent_default();
        }
    })
}
