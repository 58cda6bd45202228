//! Standard `process_*` families, read from `/proc/self` at scrape time.
//!
//! Families follow the reference Prometheus client's process collector. A
//! family whose source cannot be read is skipped rather than failing the
//! scrape. On platforms without procfs nothing is rendered.

/// Collector for the calling process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCollector;

impl ProcessCollector {
    pub fn new() -> Self {
        Self
    }

    /// Append every readable process family to `out`.
    pub fn render(&self, out: &mut String) {
        imp::render(out);
    }
}

#[cfg(target_os = "linux")]
mod imp {
    use procfs::process::{LimitValue, Process};

    use crate::obs::metrics::write_family;

    pub(super) fn render(out: &mut String) {
        let Ok(me) = Process::myself() else {
            return;
        };

        let ticks = procfs::ticks_per_second() as f64;

        if let Ok(stat) = me.stat() {
            write_family(
                out,
                "process_virtual_memory_bytes",
                "Virtual memory size in bytes.",
                "gauge",
                stat.vsize as f64,
            );
            write_family(
                out,
                "process_resident_memory_bytes",
                "Resident memory size in bytes.",
                "gauge",
                (stat.rss * procfs::page_size()) as f64,
            );
            if let Ok(boot) = procfs::boot_time_secs() {
                write_family(
                    out,
                    "process_start_time_seconds",
                    "Start time of the process since unix epoch in seconds.",
                    "gauge",
                    stat.starttime as f64 / ticks + boot as f64,
                );
            }
            write_family(
                out,
                "process_cpu_seconds_total",
                "Total user and system CPU time spent in seconds.",
                "counter",
                (stat.utime + stat.stime) as f64 / ticks,
            );
        }

        if let Ok(open) = me.fd_count() {
            write_family(
                out,
                "process_open_fds",
                "Number of open file descriptors.",
                "gauge",
                open as f64,
            );
        }

        if let Ok(limits) = me.limits() {
            let max = match limits.max_open_files.soft_limit {
                LimitValue::Value(v) => v as f64,
                LimitValue::Unlimited => f64::INFINITY,
            };
            write_family(
                out,
                "process_max_fds",
                "Maximum number of open file descriptors.",
                "gauge",
                max,
            );
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod imp {
    pub(super) fn render(_out: &mut String) {}
}
