use std::sync::Mutex;

/// Counters shared between the profile store and the frame runner.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub frames: usize,
    pub alerts: usize,
    pub announcements: usize,
    pub persistence_errors: usize,
}

#[derive(Default)]
struct Metrics {
    frames: usize,
    alerts: usize,
    announcements: usize,
    persistence_errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_frame(&self, alert_count: usize, announced: bool) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames += 1;
            metrics.alerts += alert_count;
            if announced {
                metrics.announcements += 1;
            }
        }
    }

    pub fn record_persistence_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.persistence_errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                frames: metrics.frames,
                alerts: metrics.alerts,
                announcements: metrics.announcements,
                persistence_errors: metrics.persistence_errors,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
