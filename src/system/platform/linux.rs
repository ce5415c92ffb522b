use std::fs;
use std::path::Path;

use super::PlatformExtensions;
use crate::system::stats::BatteryStatus;

const POWER_SUPPLY: &str = "/sys/class/power_supply";

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery_status() -> Option<BatteryStatus> {
        read_battery(Path::new(POWER_SUPPLY))
    }
}

/// Reads the first `BAT*`/`battery*` entry under a power_supply directory.
pub(super) fn read_battery(root: &Path) -> Option<BatteryStatus> {
    let mut names: Vec<String> = fs::read_dir(root)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("BAT") || name.starts_with("battery"))
        .collect();
    names.sort();

    names.iter().find_map(|name| {
        let dir = root.join(name);
        let capacity: f32 = fs::read_to_string(dir.join("capacity"))
            .ok()?
            .trim()
            .parse()
            .ok()?;
        let status = fs::read_to_string(dir.join("status")).unwrap_or_default();
        // "Full" and "Not charging" both mean the adapter is plugged in.
        let charging = matches!(
            status.trim().to_lowercase().as_str(),
            "charging" | "full" | "not charging"
        );
        Some(BatteryStatus {
            percent: capacity.clamp(0.0, 100.0),
            charging,
        })
    })
}
