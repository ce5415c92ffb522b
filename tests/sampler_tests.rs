use std::collections::HashMap;
use std::time::Duration;

use procdash::error::SourceError;
use procdash::sort::SortStrategy;
use procdash::system::sampler::Sampler;
use procdash::system::snapshot::Snapshot;
use procdash::system::source::{MetricsSource, ProcessHandle};
use procdash::system::stats::BatteryStatus;
use procdash::view::ViewState;

#[derive(Clone)]
struct FakeProcess {
    pid: u32,
    name: String,
    cpu: f32,
    mem: f32,
}

impl ProcessHandle for FakeProcess {
    fn pid(&self) -> u32 {
        self.pid
    }
    fn name(&self) -> String {
        self.name.clone()
    }
    fn cpu_percent(&self) -> f32 {
        self.cpu
    }
    fn memory_percent(&self) -> f32 {
        self.mem
    }
}

/// Enumerates `order`, but only pids in `alive` resolve.
struct FakeSource {
    order: Vec<u32>,
    alive: HashMap<u32, FakeProcess>,
}

impl FakeSource {
    fn new(procs: &[(u32, &str, f32, f32)]) -> Self {
        FakeSource {
            order: procs.iter().map(|p| p.0).collect(),
            alive: procs
                .iter()
                .map(|&(pid, name, cpu, mem)| {
                    (
                        pid,
                        FakeProcess {
                            pid,
                            name: name.to_string(),
                            cpu,
                            mem,
                        },
                    )
                })
                .collect(),
        }
    }
}

impl MetricsSource for FakeSource {
    type Handle<'a> = FakeProcess;

    fn refresh_processes(&mut self) {}
    fn refresh_system(&mut self) {}

    fn list_pids(&self) -> Vec<u32> {
        self.order.clone()
    }

    fn process_handle(&self, pid: u32) -> Result<FakeProcess, SourceError> {
        self.alive
            .get(&pid)
            .cloned()
            .ok_or(SourceError::ProcessVanished(pid))
    }

    fn system_cpu_percent(&self) -> f32 {
        0.0
    }
    fn per_core_cpu_percent(&self) -> Vec<f32> {
        Vec::new()
    }
    fn system_memory_percent(&self) -> f32 {
        0.0
    }
    fn battery_status(&self) -> Option<BatteryStatus> {
        None
    }
}

fn pids(snapshot: &Snapshot) -> Vec<u32> {
    snapshot.records().iter().map(|r| r.pid).collect()
}

fn fixture() -> FakeSource {
    // Two memory ties (7, 3) and (5, 9) in enumeration order.
    FakeSource::new(&[
        (7, "sshd", 0.5, 2.0),
        (3, "bash", 4.0, 2.0),
        (5, "Xorg", 9.0, 8.0),
        (9, "cron", 0.1, 8.0),
        (1, "init", 0.0, 0.5),
    ])
}

#[tokio::test]
async fn unsorted_snapshot_matches_enumeration() {
    let mut sampler = Sampler::new(fixture());
    assert_eq!(pids(&sampler.sample(None, false).await), vec![7, 3, 5, 9, 1]);
}

#[tokio::test]
async fn memory_ties_keep_enumeration_order_ascending() {
    let mut sampler = Sampler::new(fixture());
    let snap = sampler.sample(Some(SortStrategy::ByMemPercent), false).await;
    assert_eq!(pids(&snap), vec![1, 7, 3, 5, 9]);
}

#[tokio::test]
async fn reversed_memory_sort_reverses_ties_too() {
    let mut sampler = Sampler::new(fixture());
    let snap = sampler.sample(Some(SortStrategy::ByMemPercent), true).await;
    assert_eq!(pids(&snap), vec![9, 5, 3, 7, 1]);
}

#[tokio::test]
async fn cpu_sort_with_window() {
    let mut sampler = Sampler::new(fixture());
    let strategy = SortStrategy::ByCpuPercent {
        window: Duration::from_millis(5),
    };
    let snap = sampler.sample(Some(strategy), true).await;
    assert_eq!(pids(&snap), vec![5, 3, 7, 9, 1]);
}

#[tokio::test]
async fn vanished_pids_never_abort_the_batch() {
    let mut source = fixture();
    source.alive.remove(&5);
    source.alive.remove(&1);
    let mut sampler = Sampler::new(source);
    let snap = sampler.sample(Some(SortStrategy::ByName), false).await;
    let names: Vec<&str> = snap.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["bash", "cron", "sshd"]);
}

#[tokio::test]
async fn scroll_offset_follows_shrinking_snapshots() {
    let mut sampler = Sampler::new(fixture());
    let mut view = ViewState::default();
    view.scroll_offset = 4;

    let snap = sampler.sample(None, false).await;
    view.clamp_scroll(snap.len());
    assert_eq!(view.scroll_offset, 4);

    sampler = Sampler::new(FakeSource::new(&[(1, "init", 0.0, 0.1), (2, "kthreadd", 0.0, 0.0)]));
    let snap = sampler.sample(None, false).await;
    view.clamp_scroll(snap.len());
    assert_eq!(view.scroll_offset, 1);

    sampler = Sampler::new(FakeSource::new(&[]));
    let snap = sampler.sample(None, false).await;
    view.clamp_scroll(snap.len());
    assert_eq!(view.scroll_offset, 0);
}
