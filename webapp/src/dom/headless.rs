// stand-ins used when rendering outside the browser; nothing here touches state
use chrono::{DateTime, Utc};

use site::spy::Observation;

use super::WatchOptions;

pub fn location_path() -> String {
    String::new()
}

pub fn replace_path(_path: &str) {}

pub fn push_path(_path: &str) {}

pub fn dispatch_popstate() {}

pub fn scroll_to_section(_id: &str) -> bool {
    false
}

pub fn set_scroll_locked(_locked: bool) {}

pub fn is_dark() -> bool {
    false
}

pub fn set_dark(_dark: bool) {}

pub fn viewport() -> (f64, f64) {
    (0.0, 0.0)
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub async fn copy_text(_text: &str) -> bool {
    false
}

// never resolves, so timer loops stay parked
pub async fn sleep_ms(_ms: u32) {
    std::future::pending::<()>().await
}

pub struct VisibilityWatcher;

impl VisibilityWatcher {
    pub fn start<'a, F>(
        _options: WatchOptions,
        _ids: impl IntoIterator<Item = &'a str>,
        _on_batch: F,
    ) -> Option<Self>
    where
        F: FnMut(Vec<Observation>) + 'static,
    {
        None
    }

    pub fn stop(&mut self) {}
}

pub struct WindowListener;

impl WindowListener {
    pub fn start(_event: &'static str, _on_event: impl FnMut() + 'static) -> Option<Self> {
        None
    }

    pub fn keys(_on_key: impl FnMut(String) + 'static) -> Option<Self> {
        None
    }

    pub fn stop(&mut self) {}
}

pub struct Timer;

impl Timer {
    pub fn once(_ms: u32, _f: impl FnOnce() + 'static) -> Self {
        Timer
    }

    pub fn cancel(&mut self) {}
}

pub struct MountPoint {
    pub id: String,
    pub props: String,
}

pub fn take_mount_points() -> Vec<MountPoint> {
    Vec::new()
}
