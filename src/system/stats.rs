#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryStatus {
    pub percent: f32,
    pub charging: bool,
}

impl BatteryStatus {
    pub fn state_label(&self) -> &'static str {
        if self.charging {
            "Charging"
        } else {
            "Discharging"
        }
    }
}

/// System-wide figures for one tick. Not retained between ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemStats {
    pub total_cpu_percent: f32,
    pub per_core_cpu_percent: Vec<f32>,
    pub mem_percent: f32,
    pub battery: Option<BatteryStatus>,
}

impl SystemStats {
    pub fn battery_percent_label(&self) -> String {
        match self.battery {
            Some(b) => format!("{:.2}", b.percent),
            None => "Not found".to_string(),
        }
    }

    pub fn battery_state_label(&self) -> &'static str {
        self.battery
            .as_ref()
            .map(BatteryStatus::state_label)
            .unwrap_or("Unknown")
    }
}
