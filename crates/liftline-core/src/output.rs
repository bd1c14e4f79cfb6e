// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Diagnostic Output Sinks
// Mirrors: amr-wind/wind_energy/actuator/wing/wing_ops.H (prepare_outputs, write_outputs)
// ─────────────────────────────────────────────────────────────────────

use parking_lot::Mutex;

use liftline_types::WingOutputRecord;

/// Consumer of per-wing diagnostic records.
pub trait OutputSink: Send + Sync {
    fn write(&self, record: WingOutputRecord);
}

/// Keeps every record in memory.
///
/// Thread-safe: the record list is guarded by a `parking_lot::Mutex`.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<WingOutputRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of the records written so far.
    pub fn records(&self) -> Vec<WingOutputRecord> {
        self.records.lock().clone()
    }

    /// Drain all records.
    pub fn take(&self) -> Vec<WingOutputRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl OutputSink for MemorySink {
    fn write(&self, record: WingOutputRecord) {
        self.records.lock().push(record);
    }
}

/// Reports totals at info level and the full record at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn write(&self, record: WingOutputRecord) {
        log::info!(
            "wing '{}' t={:.6} step {}: lift {:.6e} drag {:.6e}",
            record.label,
            record.time,
            record.time_index,
            record.lift,
            record.drag
        );
        log::trace!("{}", record.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, time_index: usize) -> WingOutputRecord {
        WingOutputRecord {
            label: label.to_string(),
            time: time_index as f64 * 0.1,
            time_index,
            lift: 1.0,
            drag: 0.1,
            aoa: vec![0.0],
            cl: vec![0.5],
            cd: vec![0.05],
            vel_rel: vec![[10.0, 0.0, 0.0]],
            force: vec![[-0.1, 0.0, -1.0]],
        }
    }

    #[test]
    fn test_memory_sink_collects_and_drains() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write(record("a", 0));
        sink.write(record("b", 0));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[1].label, "b");
        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_shared_across_threads() {
        let sink = std::sync::Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = sink.clone();
                std::thread::spawn(move || sink.write(record("w", i)))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(sink.len(), 4);
    }

    #[test]
    fn test_log_sink_accepts_records() {
        LogSink.write(record("a", 10));
    }
}
