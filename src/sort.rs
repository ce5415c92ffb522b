use std::cmp::Ordering;
use std::time::Duration;

use crate::system::snapshot::ProcessRecord;

/// Default CPU measurement window used when sorting by CPU usage.
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_millis(500);

/// Ordering key for a snapshot. `None` at the call site (an `Option<SortStrategy>`)
/// means enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// CPU usage measured over `window` before the records are read.
    ByCpuPercent { window: Duration },
    ByMemPercent,
    ByName,
    ByPid,
}

/// A key extracted from one record. Variants never compare across kinds
/// because a strategy always extracts the same kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Percent(f32),
    Text(&'a str),
    Pid(u32),
}

impl SortKey<'_> {
    fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Percent(a), SortKey::Percent(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Pid(a), SortKey::Pid(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl SortStrategy {
    pub fn cpu() -> Self {
        SortStrategy::ByCpuPercent {
            window: DEFAULT_CPU_WINDOW,
        }
    }

    pub fn key(self) -> for<'a> fn(&'a ProcessRecord) -> SortKey<'a> {
        match self {
            SortStrategy::ByCpuPercent { .. } => cpu_key,
            SortStrategy::ByMemPercent => mem_key,
            SortStrategy::ByName => name_key,
            SortStrategy::ByPid => pid_key,
        }
    }

    /// Blocking measurement the sampler must perform before keys are valid.
    pub fn measurement_window(self) -> Option<Duration> {
        match self {
            SortStrategy::ByCpuPercent { window } => Some(window),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortStrategy::ByCpuPercent { .. } => "BY_CPU_PERCENT",
            SortStrategy::ByMemPercent => "BY_RAM_PERCENT",
            SortStrategy::ByName => "BY_NAME",
            SortStrategy::ByPid => "BY_PID",
        }
    }

    /// Parses a config/CLI value. `"none"` and unknown values yield `None`.
    pub fn from_str_config(s: &str, cpu_window: Duration) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cpu" => Some(SortStrategy::ByCpuPercent { window: cpu_window }),
            "memory" | "mem" | "ram" => Some(SortStrategy::ByMemPercent),
            "name" => Some(SortStrategy::ByName),
            "pid" => Some(SortStrategy::ByPid),
            _ => None,
        }
    }
}

fn cpu_key(r: &ProcessRecord) -> SortKey<'_> {
    SortKey::Percent(r.cpu_percent)
}

fn mem_key(r: &ProcessRecord) -> SortKey<'_> {
    SortKey::Percent(r.mem_percent)
}

fn name_key(r: &ProcessRecord) -> SortKey<'_> {
    SortKey::Text(&r.name)
}

fn pid_key(r: &ProcessRecord) -> SortKey<'_> {
    SortKey::Pid(r.pid)
}

pub fn sort_label(strategy: Option<SortStrategy>) -> &'static str {
    strategy.map(SortStrategy::label).unwrap_or("Nothing")
}

/// Stable ascending sort by the strategy key, then the whole sequence is
/// reversed when `reversed` is set. Ties therefore come out in reverse
/// enumeration order under `reversed`.
pub fn apply(records: &mut [ProcessRecord], strategy: Option<SortStrategy>, reversed: bool) {
    let Some(strategy) = strategy else {
        return;
    };
    let key = strategy.key();
    records.sort_by(|a, b| key(a).total_cmp(&key(b)));
    if reversed {
        records.reverse();
    }
}
