// synthetic log lines for the decorative page background
//
// nothing here is a real log: the generator only produces plausible looking text.
// the clock is passed in by the caller so the same code runs natively (tests, ssr)
// and in the browser, where the wasm target has no system time.
use std::fmt;

use chrono::{DateTime, Utc};
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};
use ringbuffer::{AllocRingBuffer, RingBuffer};
use serde::Serialize;

use crate::SITE_HOST;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
    Trace,
    Notice,
    Fatal,
    Critical,
}

pub const LEVELS: [LogLevel; 8] = [
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Debug,
    LogLevel::Trace,
    LogLevel::Notice,
    LogLevel::Fatal,
    LogLevel::Critical,
];

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Notice => "NOTICE",
            LogLevel::Fatal => "FATAL",
            LogLevel::Critical => "CRITICAL",
        }
    }

    fn messages(self) -> &'static [&'static str] {
        match self {
            LogLevel::Info => &[
                "Starting service...",
                "Job queued",
                "Task completed",
                "Listening on port 8080",
                "Reconnected successfully",
                "Cache invalidated",
                "Loaded 134 modules",
                "Environment: production",
                "Wrote 13.4MB to disk",
                "No updates available",
                "Backup completed successfully",
                "Heartbeat received",
            ],
            LogLevel::Warn => &[
                "Retrying in 5s",
                "Deprecation warning: legacy mode",
                "Worker pool saturated, queuing job",
                "Authentication fallback triggered",
            ],
            LogLevel::Error => &[
                "Connection timeout",
                "Invalid token",
                "Permission denied",
                "Background job stopped unexpectedly",
                "Token expired, requesting new one",
            ],
            LogLevel::Debug => &[
                "Received payload",
                "Compiling source files...",
                "Applying migration v12.3.1",
                "New connection from 192.168.1.24",
            ],
            LogLevel::Trace => &[
                "TRACE log enabled",
                "Inspecting DB pool",
                "Checking cache entry...",
            ],
            LogLevel::Notice => &["Service registered", "Update available", "Resync started"],
            LogLevel::Fatal => &[
                "Kernel panic",
                "Fatal exception in thread",
                "Stack overflow detected",
            ],
            LogLevel::Critical => &[
                "CRITICAL system failure",
                "Filesystem read-only",
                "Database unreachable",
            ],
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogLine {
    pub level: LogLevel,
    pub text: String,
}

const MODULES: [&str; 13] = [
    "Core",
    "App",
    "DB",
    "Auth",
    "API",
    "Worker",
    "Logger",
    "Scheduler",
    "System",
    "Cache",
    "Net",
    "Mail",
    "Sync",
];

const BUILD_PHRASES: [&str; 10] = [
    "Compiling src/components/navbar/Sidebar.rs",
    "Transpiling Rust to wasm32",
    "Optimizing assets for production",
    "Generating source maps...",
    "Minification complete",
    "Creating deployment bundle",
    "Processing environment variables from .env",
    "Injecting global styles into main.css",
    "Running postcss transformations",
    "Saving build artifacts to ./dist",
];

const BUILD_OPTIONS: [&str; 8] = [
    "--minify",
    "--sourcemap",
    "--target=esnext",
    "--watch",
    "--clean",
    "--no-cache",
    "--config=build.config.toml",
    "--analyze",
];

const HTTP_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

const HTTP_ENDPOINTS: [&str; 8] = [
    "/api/users",
    "/api/auth/login",
    "/api/posts",
    "/api/comments",
    "/health",
    "/api/profile",
    "/api/settings",
    "/api/logs",
];

const HTTP_STATUSES: [u16; 9] = [200, 201, 204, 400, 401, 403, 404, 500, 503];

const USER_PREFIXES: [&str; 9] = [
    "root", "admin", "user", "dev", "sys", "net", "cloud", "debug", "mnlaugh",
];

const USER_SUFFIXES: [&str; 7] = ["master", "hunter", "coder", "ghost", "man", "warrior", "lord"];

// the event printed by the multi-line json entries
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginEvent {
    event: &'static str,
    user_id: u32,
    ip: String,
    success: bool,
    timestamp: String,
}

fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub struct LogGenerator {
    rng: SmallRng,
}

impl LogGenerator {
    pub fn new(seed: u64) -> Self {
        LogGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        // every table above is non-empty
        items.choose(&mut self.rng).copied().unwrap_or(items[0])
    }

    // one generic leveled line, used to fill the window
    pub fn line(&mut self, now: DateTime<Utc>) -> LogLine {
        let level = self.pick(&LEVELS);
        let module = self.pick(&MODULES);
        let message = self.pick(level.messages());

        LogLine {
            level,
            text: format!(
                "[{:<5}] {} [{:<9}] {}",
                level.label(),
                timestamp(now),
                module,
                message
            ),
        }
    }

    pub fn build_line(&mut self, now: DateTime<Utc>) -> LogLine {
        let phrase = self.pick(&BUILD_PHRASES);
        let count = self.rng.random_range(2..=5);
        let options = (0..count)
            .map(|_| self.pick(&BUILD_OPTIONS))
            .collect::<Vec<_>>()
            .join(" ");

        LogLine {
            level: LogLevel::Debug,
            text: format!(
                "[{:<5}] {} [{:<6}] {} {}",
                LogLevel::Debug.label(),
                timestamp(now),
                "Build",
                phrase,
                options
            ),
        }
    }

    pub fn http_line(&mut self, now: DateTime<Utc>) -> LogLine {
        let method = self.pick(&HTTP_METHODS);
        let endpoint = self.pick(&HTTP_ENDPOINTS);
        let status = self.pick(&HTTP_STATUSES);
        let duration = self.rng.random_range(10..310);

        LogLine {
            level: LogLevel::Info,
            text: format!(
                "[{:<5}] {} [{:<6}] {} {} → {} in {}ms",
                LogLevel::Info.label(),
                timestamp(now),
                "HTTP",
                method,
                endpoint,
                status,
                duration
            ),
        }
    }

    // a pretty-printed json object, one log line per json line, continuation lines
    // aligned under the first one
    pub fn json_block(&mut self, now: DateTime<Utc>) -> Vec<LogLine> {
        const MODULE: &str = "Logger";

        let ts = timestamp(now);
        let event = LoginEvent {
            event: "user_login",
            user_id: self.rng.random_range(0..10_000),
            ip: self.ip(),
            success: self.rng.random_bool(0.8),
            timestamp: ts.clone(),
        };

        let json = serde_json::to_string_pretty(&event).unwrap_or_default();
        let indent = " ".repeat(25 + MODULE.len() + 2);

        json.lines()
            .enumerate()
            .map(|(i, line)| LogLine {
                level: LogLevel::Trace,
                text: if i == 0 {
                    format!("[{:<5}] {} [{:<6}] {}", LogLevel::Trace.label(), ts, MODULE, line)
                } else {
                    format!("{indent}{line}")
                },
            })
            .collect()
    }

    // one of the four entry kinds, each with the same probability
    pub fn next_entry(&mut self, now: DateTime<Utc>) -> Vec<LogLine> {
        match self.rng.random_range(0..4) {
            0 => self.json_block(now),
            1 => vec![self.build_line(now)],
            2 => vec![self.http_line(now)],
            _ => vec![self.line(now)],
        }
    }

    // pause before the next entry, in milliseconds
    pub fn next_delay_ms(&mut self) -> u32 {
        self.rng.random_range(800..3000)
    }

    pub fn ip(&mut self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.rng.random_range(1..=255),
            self.rng.random_range(0..=255),
            self.rng.random_range(0..=255),
            self.rng.random_range(1..=254)
        )
    }

    pub fn username(&mut self) -> String {
        let prefix = self.pick(&USER_PREFIXES);
        let suffix = self.pick(&USER_SUFFIXES);
        let number = self.rng.random_range(0..100);
        format!("{prefix}_{suffix}{number}")
    }

    // the fake shell prompt pinned under the log lines
    pub fn prompt(&mut self) -> ShellPrompt {
        ShellPrompt {
            user: format!("mnlaugh@{SITE_HOST}"),
            command: format!("ssh {}@{}", self.username(), self.ip()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellPrompt {
    pub user: String,
    pub command: String,
}

impl fmt::Display for ShellPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:~$ {}", self.user, self.command)
    }
}

pub fn line_height(viewport_width: f64) -> f64 {
    if viewport_width >= 1024.0 {
        26.0
    } else {
        16.0
    }
}

// how many lines fit the viewport, keeping one line free for the prompt
pub fn visible_lines(viewport_width: f64, viewport_height: f64) -> usize {
    let lines = (viewport_height / line_height(viewport_width)).floor() - 1.0;
    if lines.is_finite() && lines > 0.0 {
        lines as usize
    } else {
        0
    }
}

// fixed-size window of lines; pushing past capacity drops the oldest ones
pub struct LogWindow {
    lines: Option<AllocRingBuffer<LogLine>>,
}

impl LogWindow {
    pub fn new(capacity: usize) -> Self {
        LogWindow {
            lines: (capacity > 0).then(|| AllocRingBuffer::new(capacity)),
        }
    }

    // a full window of generic lines
    pub fn filled(capacity: usize, generator: &mut LogGenerator, now: DateTime<Utc>) -> Self {
        let mut window = LogWindow::new(capacity);
        for _ in 0..capacity {
            window.push(generator.line(now));
        }
        window
    }

    pub fn push(&mut self, line: LogLine) {
        if let Some(lines) = self.lines.as_mut() {
            lines.enqueue(line);
        }
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = LogLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn capacity(&self) -> usize {
        self.lines.as_ref().map_or(0, |l| l.capacity())
    }

    pub fn len(&self) -> usize {
        self.lines.as_ref().map_or(0, |l| l.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines
            .as_ref()
            .map(|l| l.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 15, 9, 30, 0).single().unwrap()
    }

    #[test]
    fn line_count_follows_viewport() {
        assert_eq!(line_height(1280.0), 26.0);
        assert_eq!(line_height(800.0), 16.0);
        assert_eq!(visible_lines(1280.0, 800.0), 29);
        assert_eq!(visible_lines(375.0, 667.0), 40);
        assert_eq!(visible_lines(375.0, 10.0), 0);
    }

    #[test]
    fn generic_line_layout() {
        let mut generator = LogGenerator::new(7);
        let line = generator.line(now());

        let prefix = format!("[{:<5}] 2025-07-15 09:30:00 [", line.level.label());
        assert!(line.text.starts_with(&prefix), "{}", line.text);
        assert!(line.level.messages().iter().any(|m| line.text.ends_with(m)));
    }

    #[test]
    fn json_block_is_aligned() {
        let mut generator = LogGenerator::new(1);
        let block = generator.json_block(now());

        assert!(block.len() > 2);
        assert!(block.iter().all(|l| l.level == LogLevel::Trace));
        assert!(block[0].text.starts_with("[TRACE] 2025-07-15 09:30:00 [Logger] {"));
        assert!(block[1].text.starts_with(&" ".repeat(33)));
        assert!(block.iter().any(|l| l.text.contains("\"userId\"")));
    }

    #[test]
    fn delays_stay_in_range() {
        let mut generator = LogGenerator::new(42);
        for _ in 0..200 {
            let delay = generator.next_delay_ms();
            assert!((800..3000).contains(&delay));
        }
    }

    #[test]
    fn same_seed_same_output() {
        let mut a = LogGenerator::new(99);
        let mut b = LogGenerator::new(99);

        assert_eq!(a.next_entry(now()), b.next_entry(now()));
        assert_eq!(a.prompt(), b.prompt());
    }

    #[test]
    fn window_drops_oldest() {
        let mut generator = LogGenerator::new(3);
        let mut window = LogWindow::filled(4, &mut generator, now());
        assert_eq!(window.len(), 4);

        let marker = LogLine {
            level: LogLevel::Notice,
            text: "marker".to_owned(),
        };
        window.push(marker.clone());

        let lines = window.lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.last(), Some(&marker));
    }

    #[test]
    fn zero_sized_window_ignores_lines() {
        let mut generator = LogGenerator::new(3);
        let mut window = LogWindow::new(0);
        window.extend(generator.json_block(now()));

        assert!(window.is_empty());
        assert_eq!(window.capacity(), 0);
    }

    #[test]
    fn prompt_shape() {
        let prompt = LogGenerator::new(5).prompt();
        assert_eq!(prompt.user, "mnlaugh@nicolas-metivier.fr");
        assert!(prompt.command.starts_with("ssh "));
        assert!(prompt.to_string().contains(":~$ ssh "));
    }
}
