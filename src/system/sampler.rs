use tracing::Instrument;

use super::snapshot::{ProcessRecord, Snapshot};
use super::source::{MetricsSource, ProcessHandle};
use super::stats::SystemStats;
use crate::sort::{self, SortStrategy};

/// Turns the source's process enumeration into per-tick snapshots.
pub struct Sampler<S> {
    source: S,
}

impl<S: MetricsSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn system_stats(&mut self) -> SystemStats {
        self.source.refresh_system();
        SystemStats {
            total_cpu_percent: self.source.system_cpu_percent(),
            per_core_cpu_percent: self.source.per_core_cpu_percent(),
            mem_percent: self.source.system_memory_percent(),
            battery: self.source.battery_status(),
        }
    }

    /// Enumerates, resolves and orders the current process set.
    ///
    /// When the strategy carries a measurement window (CPU sorting) the pid
    /// list is taken first, the window elapses, and the records are read from
    /// a second refresh so every CPU figure covers that same window. Pids that
    /// exit in between are skipped.
    pub async fn sample(&mut self, strategy: Option<SortStrategy>, reversed: bool) -> Snapshot {
        let span = tracing::debug_span!(
            "sampler.sample",
            strategy = sort::sort_label(strategy),
            reversed
        );
        self.collect(strategy, reversed).instrument(span).await
    }

    async fn collect(&mut self, strategy: Option<SortStrategy>, reversed: bool) -> Snapshot {
        self.source.refresh_processes();
        let pids = self.source.list_pids();

        if let Some(window) = strategy.and_then(SortStrategy::measurement_window) {
            tokio::time::sleep(window).await;
            self.source.refresh_processes();
        }

        let mut records = Vec::with_capacity(pids.len());
        let mut vanished = 0usize;
        for pid in pids {
            match self.source.process_handle(pid) {
                Ok(handle) => records.push(ProcessRecord {
                    name: handle.name(),
                    pid: handle.pid(),
                    cpu_percent: handle.cpu_percent(),
                    mem_percent: handle.memory_percent(),
                }),
                Err(err) => {
                    vanished += 1;
                    tracing::trace!(%err, "skipping process");
                }
            }
        }
        if vanished > 0 {
            tracing::debug!(vanished, "processes exited during sampling");
        }

        sort::apply(&mut records, strategy, reversed);
        Snapshot::new(records)
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::mock::MockSource;
    use super::*;

    fn pids(snapshot: &Snapshot) -> Vec<u32> {
        snapshot.records().iter().map(|r| r.pid).collect()
    }

    fn instant_cpu() -> SortStrategy {
        SortStrategy::ByCpuPercent {
            window: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn unsorted_sample_keeps_enumeration_order() {
        let source = MockSource::with(&[
            (30, "c", 1.0, 3.0),
            (10, "a", 9.0, 1.0),
            (20, "b", 5.0, 2.0),
        ]);
        let mut sampler = Sampler::new(source);
        let snap = sampler.sample(None, false).await;
        assert_eq!(pids(&snap), vec![30, 10, 20]);

        let snap = sampler.sample(None, true).await;
        assert_eq!(pids(&snap), vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn sorts_by_each_strategy() {
        let source = MockSource::with(&[
            (30, "zeta", 1.0, 3.0),
            (10, "alpha", 9.0, 1.0),
            (20, "mid", 5.0, 2.0),
        ]);
        let mut sampler = Sampler::new(source);

        let snap = sampler.sample(Some(instant_cpu()), false).await;
        assert_eq!(pids(&snap), vec![30, 20, 10]);
        let snap = sampler.sample(Some(SortStrategy::ByMemPercent), true).await;
        assert_eq!(pids(&snap), vec![30, 20, 10]);
        let snap = sampler.sample(Some(SortStrategy::ByName), false).await;
        assert_eq!(pids(&snap), vec![10, 20, 30]);
        let snap = sampler.sample(Some(SortStrategy::ByPid), true).await;
        assert_eq!(pids(&snap), vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn vanished_processes_are_skipped() {
        let mut source = MockSource::with(&[(1, "init", 0.0, 0.1), (2, "short", 0.0, 0.1)]);
        // Enumerated but never resolvable.
        source.enumerated.push(99);
        let mut sampler = Sampler::new(source);
        let snap = sampler.sample(Some(SortStrategy::ByPid), false).await;
        assert_eq!(pids(&snap), vec![1, 2]);
    }

    #[tokio::test]
    async fn cpu_window_re_reads_after_measurement() {
        let mut source = MockSource::with(&[(1, "a", 3.0, 0.1), (2, "b", 2.0, 0.1)]);
        source.exit_on_refresh.push(2);
        let mut sampler = Sampler::new(source);

        let snap = sampler.sample(Some(instant_cpu()), false).await;
        assert_eq!(pids(&snap), vec![1]);
        assert_eq!(sampler.source().refreshes, 2);
    }

    #[tokio::test]
    async fn non_cpu_strategies_refresh_once() {
        let source = MockSource::with(&[(1, "a", 3.0, 0.1)]);
        let mut sampler = Sampler::new(source);
        sampler.sample(Some(SortStrategy::ByName), false).await;
        assert_eq!(sampler.source().refreshes, 1);
    }

    #[test]
    fn system_stats_reads_every_figure() {
        let mut source = MockSource::default();
        source.battery = Some(crate::system::stats::BatteryStatus {
            percent: 50.0,
            charging: false,
        });
        let mut sampler = Sampler::new(source);
        let stats = sampler.system_stats();
        assert_eq!(stats.total_cpu_percent, 42.0);
        assert_eq!(stats.per_core_cpu_percent, vec![40.0, 44.0]);
        assert_eq!(stats.mem_percent, 61.5);
        assert!(stats.battery.is_some());
    }
}
