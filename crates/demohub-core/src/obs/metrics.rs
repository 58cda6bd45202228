//! Minimal counter type rendered in Prometheus text exposition format.
//!
//! The rendering mirrors the reference Prometheus client: a counter family
//! named `foo` exports `foo_total` (the running count) and `foo_created`
//! (Unix seconds at which the counter was registered). Sample values are
//! floats printed the way Go's `strconv` prints them.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Content type for the text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Write one single-sample family: HELP, TYPE, then `name value`.
pub(crate) fn write_family(out: &mut String, name: &str, help: &str, kind: &str, value: f64) {
    let _ = writeln!(out, "# HELP {name} {}", escape_help(help));
    let _ = writeln!(out, "# TYPE {name} {kind}");
    let _ = writeln!(out, "{name} {}", format_value(value));
}

/// Render a sample value.
///
/// Shortest round-trip form (`3.0`, `0.25`), switching to exponent form once
/// the integer part exceeds six digits (`1234567.0` -> `1.234567e+06`).
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf".into() } else { "-Inf".into() };
    }

    let s = format!("{v:?}");
    match s.find('.') {
        Some(dot) if v > 0.0 && dot > 6 => {
            let mantissa = format!("{}.{}{}", &s[..1], &s[1..dot], &s[dot + 1..]);
            let mantissa = mantissa.trim_end_matches(|c: char| c == '0' || c == '.');
            format!("{}e+{:02}", mantissa, dot - 1)
        }
        _ => s,
    }
}

/// Monotonic process-wide counter.
pub struct Counter {
    family: &'static str,
    help: &'static str,
    value: AtomicU64,
    created: f64,
}

impl Counter {
    /// Create a counter. A trailing `_total` on `name` is stripped to form the family name.
    pub fn new(name: &'static str, help: &'static str) -> Self {
        let created = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        Self::with_created(name, help, created)
    }

    /// Create a counter with an explicit creation timestamp (Unix seconds).
    pub fn with_created(name: &'static str, help: &'static str, created: f64) -> Self {
        Self {
            family: name.strip_suffix("_total").unwrap_or(name),
            help,
            value: AtomicU64::new(0),
            created,
        }
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    /// Current count.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self, out: &mut String) {
        let name = self.family;
        write_family(out, &format!("{name}_total"), self.help, "counter", self.get() as f64);
        write_family(out, &format!("{name}_created"), self.help, "gauge", self.created);
    }
}
