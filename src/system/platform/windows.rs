use super::PlatformExtensions;
use crate::system::stats::BatteryStatus;

use windows_sys::Win32::System::Power::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

const NO_SYSTEM_BATTERY: u8 = 128;
const UNKNOWN: u8 = 255;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery_status() -> Option<BatteryStatus> {
        // SAFETY: SYSTEM_POWER_STATUS is plain data and GetSystemPowerStatus
        // only writes into the struct we pass.
        let mut status: SYSTEM_POWER_STATUS = unsafe { std::mem::zeroed() };
        let ok = unsafe { GetSystemPowerStatus(&mut status) };
        if ok == 0 || status.BatteryFlag == NO_SYSTEM_BATTERY || status.BatteryLifePercent == UNKNOWN
        {
            return None;
        }
        Some(BatteryStatus {
            percent: f32::from(status.BatteryLifePercent).min(100.0),
            charging: status.ACLineStatus == 1,
        })
    }
}
