/// One process as observed during a single tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub name: String,
    pub pid: u32,
    pub cpu_percent: f32,
    pub mem_percent: f32,
}

/// Ordered, immutable view of the process set for one tick.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    records: Vec<ProcessRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records visible from `offset`, at most `rows` of them.
    pub fn window(&self, offset: usize, rows: usize) -> &[ProcessRecord] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(rows).min(self.records.len());
        &self.records[start..end]
    }
}
