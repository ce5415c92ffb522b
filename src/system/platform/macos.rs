use super::PlatformExtensions;
use crate::system::stats::BatteryStatus;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery_status() -> Option<BatteryStatus> {
        // IOKit power sources are not wired up; report no battery.
        None
    }
}
