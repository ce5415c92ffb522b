use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use super::platform;
use super::stats::BatteryStatus;
use crate::error::SourceError;

/// Read access to one live process.
pub trait ProcessHandle {
    fn pid(&self) -> u32;
    fn name(&self) -> String;
    /// CPU busy percentage accumulated since the previous process refresh.
    fn cpu_percent(&self) -> f32;
    fn memory_percent(&self) -> f32;
}

/// OS data access. No caching beyond what the last `refresh_*` call captured.
pub trait MetricsSource {
    type Handle<'a>: ProcessHandle
    where
        Self: 'a;

    fn refresh_processes(&mut self);
    fn refresh_system(&mut self);

    fn list_pids(&self) -> Vec<u32>;
    fn process_handle(&self, pid: u32) -> Result<Self::Handle<'_>, SourceError>;

    fn system_cpu_percent(&self) -> f32;
    fn per_core_cpu_percent(&self) -> Vec<f32>;
    fn system_memory_percent(&self) -> f32;
    fn battery_status(&self) -> Option<BatteryStatus>;
}

pub struct SysinfoSource {
    sys: System,
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        SysinfoSource { sys }
    }
}

pub struct SysinfoProcess<'a> {
    pid: u32,
    process: &'a sysinfo::Process,
    total_memory: u64,
}

impl ProcessHandle for SysinfoProcess<'_> {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn name(&self) -> String {
        self.process.name().to_string_lossy().to_string()
    }

    fn cpu_percent(&self) -> f32 {
        self.process.cpu_usage()
    }

    fn memory_percent(&self) -> f32 {
        percent_of(self.process.memory(), self.total_memory)
    }
}

impl MetricsSource for SysinfoSource {
    type Handle<'a> = SysinfoProcess<'a>;

    fn refresh_processes(&mut self) {
        let _span = tracing::trace_span!("source.refresh_processes").entered();
        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
    }

    fn refresh_system(&mut self) {
        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
    }

    /// Ascending pid order stands in for the OS enumeration order.
    fn list_pids(&self) -> Vec<u32> {
        let mut pids: Vec<u32> = self.sys.processes().keys().map(|pid| pid.as_u32()).collect();
        pids.sort_unstable();
        pids
    }

    fn process_handle(&self, pid: u32) -> Result<SysinfoProcess<'_>, SourceError> {
        // Dead processes are dropped on refresh, so a miss means it exited.
        let process = self
            .sys
            .process(Pid::from_u32(pid))
            .ok_or(SourceError::ProcessVanished(pid))?;
        Ok(SysinfoProcess {
            pid,
            process,
            total_memory: self.sys.total_memory(),
        })
    }

    fn system_cpu_percent(&self) -> f32 {
        self.sys.global_cpu_usage()
    }

    fn per_core_cpu_percent(&self) -> Vec<f32> {
        self.sys.cpus().iter().map(|cpu| cpu.cpu_usage()).collect()
    }

    fn system_memory_percent(&self) -> f32 {
        percent_of(self.sys.used_memory(), self.sys.total_memory())
    }

    fn battery_status(&self) -> Option<BatteryStatus> {
        platform::battery_status()
    }
}

fn percent_of(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0) as f32
}
