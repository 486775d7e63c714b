use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(false);
static PERF_INIT: Once = Once::new();

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
    static PATIENT_COUNT: Cell<u64> = Cell::new(0);
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 性能日志开关
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭（可通过环境变量开启）
/// - `AI_AGENTS_ROI_PERF=1` 强制开启，`AI_AGENTS_ROI_PERF=0` 强制关闭
pub fn is_enabled() -> bool {
    PERF_INIT.call_once(|| {
        let enabled = match std::env::var("AI_AGENTS_ROI_PERF") {
            Ok(v) => is_true(&v),
            Err(_) => cfg!(debug_assertions),
        };
        PERF_ENABLED.store(enabled, Ordering::Relaxed);
    });
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 记录本线程生成的患者数（仅在 PerfGuard 作用域内计数）
pub fn record_patients(count: usize) {
    let active = PERF_DEPTH.with(|d| d.get() > 0);
    if !active {
        return;
    }
    PATIENT_COUNT.with(|c| c.set(c.get().saturating_add(count as u64)));
}

/// 性能统计 Guard：记录 elapsed_ms + 生成患者数
///
/// 使用方式：
/// ```ignore
/// let _perf = ai_agents_roi::perf::PerfGuard::new("engine.run_comparative");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    patients_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        PERF_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        let patients_start = PATIENT_COUNT.with(|c| c.get());
        Self {
            op,
            start: Instant::now(),
            patients_start,
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if is_enabled() {
            let elapsed_ms = self.start.elapsed().as_millis() as u64;
            let patients_end = PATIENT_COUNT.with(|c| c.get());
            let patient_count = patients_end.saturating_sub(self.patients_start);

            tracing::info!(
                target: "perf",
                op = self.op,
                elapsed_ms,
                patient_count,
                "done"
            );
        }

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patients_counted_only_inside_guard() {
        let before = PATIENT_COUNT.with(|c| c.get());
        record_patients(5);
        assert_eq!(PATIENT_COUNT.with(|c| c.get()), before);

        {
            let _perf = PerfGuard::new("test");
            record_patients(7);
        }
        assert_eq!(PATIENT_COUNT.with(|c| c.get()), before + 7);
    }
}
