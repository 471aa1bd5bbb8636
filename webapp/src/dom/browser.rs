use chrono::{DateTime, Utc};
use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, PopStateEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use site::spy::Observation;

use super::{THEME_KEY, WatchOptions};

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window()?.document()
}

fn element(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{context}: {err:?}"))
}

pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn write_history(path: &str, push: bool) -> anyhow::Result<()> {
    let history = window()
        .ok_or_else(|| anyhow::Error::msg("no window"))?
        .history()
        .map_err(|err| js_error("history unavailable", err))?;

    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };

    result.map_err(|err| js_error("failed to update history", err))
}

// rewrite the current history entry
pub fn replace_path(path: &str) {
    if let Err(err) = write_history(path, false) {
        console_error!(err.to_string());
    }
}

pub fn push_path(path: &str) {
    if let Err(err) = write_history(path, true) {
        console_error!(err.to_string());
    }
}

// history api calls do not fire popstate on their own, so listeners (the sidebar)
// are told explicitly
pub fn dispatch_popstate() {
    let Some(window) = window() else {
        return;
    };

    match PopStateEvent::new("popstate") {
        Ok(event) => {
            if let Err(err) = window.dispatch_event(&event) {
                console_error!(format!("failed to dispatch popstate: {err:?}"));
            }
        }
        Err(err) => console_error!(format!("failed to create popstate: {err:?}")),
    }
}

// smooth scroll to the top of an element; false when it is not in the document
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = element(id) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);

    true
}

pub fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };

    if let Err(err) = result {
        console_error!(format!("failed to toggle body scrolling: {err:?}"));
    }
}

pub fn is_dark() -> bool {
    document()
        .and_then(|d| d.document_element())
        .is_some_and(|root| root.class_list().contains("dark"))
}

// apply and persist the color scheme
//
// the stored value is a bare "dark"/"light" string, since the inline theme script
// reads it before the bundle loads
pub fn set_dark(dark: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        if let Err(err) = root.class_list().toggle_with_force("dark", dark) {
            console_error!(format!("failed to toggle dark class: {err:?}"));
        }
    }

    let value = if dark { "dark" } else { "light" };

    if let Err(err) = LocalStorage::raw().set_item(THEME_KEY, value) {
        console_error!(format!("Failed to set local storage {THEME_KEY}: {err:?}"));
    }
}

pub fn viewport() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };

    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());

    (width.unwrap_or_default(), height.unwrap_or_default())
}

pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

pub async fn copy_text(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };

    let promise = window.navigator().clipboard().write_text(text);

    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(err) => {
            console_error!(format!("failed to write clipboard: {err:?}"));
            false
        }
    }
}

pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await
}

// viewport intersection observer over a set of element ids
//
// elements missing from the document are skipped.  every batch the browser
// delivers is converted to observations and handed to the callback
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    running: bool,
}

impl VisibilityWatcher {
    pub fn start<'a, F>(
        options: WatchOptions,
        ids: impl IntoIterator<Item = &'a str>,
        mut on_batch: F,
    ) -> Option<Self>
    where
        F: FnMut(Vec<Observation>) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        let id = entry.target().id();
                        if entry.is_intersecting() {
                            Observation::visible(id, entry.bounding_client_rect().top())
                        } else {
                            Observation::hidden(id)
                        }
                    })
                    .collect();

                on_batch(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => observer,
                Err(err) => {
                    console_error!(format!("failed to create intersection observer: {err:?}"));
                    return None;
                }
            };

        for id in ids {
            if let Some(el) = element(id) {
                observer.observe(&el);
            }
        }

        Some(VisibilityWatcher {
            observer,
            _callback: callback,
            running: true,
        })
    }

    pub fn stop(&mut self) {
        if self.running {
            self.observer.disconnect();
            self.running = false;
        }
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

// event listener on the window
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl WindowListener {
    pub fn start(event: &'static str, mut on_event: impl FnMut() + 'static) -> Option<Self> {
        Self::attach(event, Closure::new(move |_: Event| on_event()))
    }

    // keydown, reduced to the key name
    pub fn keys(mut on_key: impl FnMut(String) + 'static) -> Option<Self> {
        Self::attach(
            "keydown",
            Closure::new(move |event: Event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    on_key(event.key());
                }
            }),
        )
    }

    fn attach(event: &'static str, callback: Closure<dyn FnMut(Event)>) -> Option<Self> {
        let window = window()?;

        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            console_error!(format!("failed to listen for {event}: {err:?}"));
            return None;
        }

        Some(WindowListener {
            event,
            callback,
            attached: true,
        })
    }

    pub fn stop(&mut self) {
        if !self.attached {
            return;
        }

        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }

        self.attached = false;
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.stop();
    }
}

// one-shot timer, cancelled when dropped
pub struct Timer(Option<Timeout>);

impl Timer {
    pub fn once(ms: u32, f: impl FnOnce() + 'static) -> Self {
        Timer(Some(Timeout::new(ms, f)))
    }

    pub fn cancel(&mut self) {
        self.0 = None;
    }
}

// a server-rendered island placeholder
pub struct MountPoint {
    pub id: String,
    pub props: String,
}

// collect every island placeholder and empty it, so the client render replaces the
// server markup instead of appending to it
pub fn take_mount_points() -> Vec<MountPoint> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all("[data-island]").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| {
            let props = el.get_attribute("data-island")?;
            el.set_inner_html("");
            Some(MountPoint { id: el.id(), props })
        })
        .collect()
}
