//! Battery monitor: a presentation-free poll state machine.
//!
//! The caller owns the clock. Every decision takes `now` so the schedule can
//! be driven by a real loop or by tests.

use crate::battery::{read_battery_level, read_charging_status};
use crate::device::{scan, DeviceDescriptor, ExchangeDiagnostics};
use crate::registry::DeviceType;
use crate::settings::{DisplayMode, Settings};
use crate::transport::{prioritize_interfaces, HidBackend};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Poll interval while the device is missing or failing.
pub const DISCONNECTED_POLL: Duration = Duration::from_secs(30);
/// A successful reading older than this forces a rescan.
pub const STALENESS_THRESHOLD: Duration = Duration::from_secs(600);
/// Failures before the monitor starts emitting access hints.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;
/// Upper bound on the failure backoff.
pub const MAX_FAILURE_BACKOFF: Duration = Duration::from_secs(300);
/// Minimum spacing between two access hints.
pub const ACCESS_HINT_COOLDOWN: Duration = Duration::from_secs(900);

/// Coarse battery state, one per tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryState {
    Charging,
    ChargingLow,
    Critical,
    Low,
    Medium,
    Full,
}

impl BatteryState {
    pub fn classify(level: u8, charging: bool) -> Self {
        match (charging, level) {
            (true, 31..=u8::MAX) => Self::Charging,
            (true, _) => Self::ChargingLow,
            (false, 0..=10) => Self::Critical,
            (false, 11..=30) => Self::Low,
            (false, 31..=60) => Self::Medium,
            (false, _) => Self::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Charging => "charging",
            Self::ChargingLow => "charging_low",
            Self::Critical => "critical",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Full => "full",
        }
    }
}

const ICON_CHARGING: &str = "\u{26A1}";
const ICON_LOW: &str = "\u{1FAAB}";
const ICON_BATTERY: &str = "\u{1F50B}";

/// Status text for a reading.
///
/// `low_threshold` of 0 disables the low-battery icon.
pub fn format_title(mode: DisplayMode, level: u8, charging: bool, low_threshold: u8) -> String {
    let icon = if charging {
        ICON_CHARGING
    } else if low_threshold > 0 && level <= low_threshold {
        ICON_LOW
    } else {
        ICON_BATTERY
    };

    match mode {
        DisplayMode::PercentOnly => format!("{level}%"),
        DisplayMode::IconOnly => icon.to_string(),
        DisplayMode::IconPercent => format!("{icon} {level}%"),
    }
}

/// Status text when no reading is available.
pub fn format_unavailable(warning: bool) -> String {
    if warning {
        format!("{ICON_BATTERY} \u{26A0}\u{FE0F}")
    } else {
        format!("{ICON_BATTERY} --")
    }
}

/// One successful battery reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub device: String,
    pub level: u8,
    pub charging: bool,
    pub state: BatteryState,
}

/// Why repeated reads are failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessHint {
    /// Every interface failed to open: the OS is refusing HID access.
    PermissionDenied { recent_errors: Vec<String> },
    /// Device missing or not answering.
    RepeatedFailures,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MonitorEvent {
    /// First successful read after one or more failures.
    Reconnected,
    LowBattery { level: u8 },
    AccessHint(AccessHint),
}

/// Result of one [`Monitor::refresh`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub reading: Option<Reading>,
    pub events: Vec<MonitorEvent>,
}

/// Poll state for a single monitored mouse.
#[derive(Debug, Default)]
pub struct Monitor {
    device: Option<DeviceDescriptor>,
    /// Survives rescans so the working interface is tried first.
    preferred_path: Option<String>,
    consecutive_failures: u32,
    last_success: Option<Instant>,
    last_attempt: Option<Instant>,
    last_access_hint: Option<Instant>,
    last_failure: Option<ExchangeDiagnostics>,
    was_disconnected: bool,
    low_battery_notified: bool,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device(&self) -> Option<&DeviceDescriptor> {
        self.device.as_ref()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// True once enough failures have piled up to warrant a warning.
    pub fn is_warning(&self) -> bool {
        self.consecutive_failures >= MAX_CONSECUTIVE_FAILURES
    }

    /// Exponential backoff: 30s doubling per failure, capped at 300s.
    pub fn failure_backoff(&self) -> Duration {
        if self.consecutive_failures <= 1 {
            return DISCONNECTED_POLL;
        }
        let exponent = (self.consecutive_failures - 1).min(4);
        (DISCONNECTED_POLL * 2u32.pow(exponent)).min(MAX_FAILURE_BACKOFF)
    }

    pub fn is_stale(&self, now: Instant) -> bool {
        self.last_success
            .is_some_and(|t| now.saturating_duration_since(t) > STALENESS_THRESHOLD)
    }

    /// Time left until the next poll is due; zero when due now.
    pub fn time_until_due(&self, now: Instant, poll_interval: Duration) -> Duration {
        let (since, wait) = if self.consecutive_failures > 0 {
            (self.last_attempt, self.failure_backoff())
        } else {
            (self.last_success, poll_interval)
        };
        match since {
            Some(t) => wait.saturating_sub(now.saturating_duration_since(t)),
            None => Duration::ZERO,
        }
    }

    pub fn poll_due(&self, now: Instant, poll_interval: Duration) -> bool {
        self.time_until_due(now, poll_interval).is_zero()
    }

    /// Forget the selected device so the next refresh rescans.
    pub fn force_rescan(&mut self) {
        self.device = None;
    }

    /// Select the first mouse from a fresh scan.
    fn find_device(&mut self, backend: &dyn HidBackend) {
        let found = scan(backend)
            .into_iter()
            .find(|d| d.device_type == DeviceType::Mouse);

        match found {
            Some(mut device) => {
                device.preferred_path = self.preferred_path.clone();
                prioritize_interfaces(&mut device.interfaces, self.preferred_path.as_deref());
                if self.device.is_none() {
                    info!(
                        name = %device.name,
                        pid = format_args!("0x{:04X}", device.product_id),
                        "Device found"
                    );
                }
                self.device = Some(device);
            }
            None => {
                if let Some(lost) = self.device.take() {
                    info!(name = %lost.name, "Device lost");
                }
            }
        }
    }

    /// Poll the device once.
    pub fn refresh(
        &mut self,
        backend: &dyn HidBackend,
        settings: &Settings,
        now: Instant,
    ) -> RefreshOutcome {
        let mut outcome = RefreshOutcome::default();
        self.last_attempt = Some(now);

        if self.is_stale(now) {
            warn!(
                threshold_secs = STALENESS_THRESHOLD.as_secs(),
                "Battery reading stale, forcing re-scan"
            );
            self.device = None;
        }
        if self.device.is_none() {
            self.find_device(backend);
        }

        let Some(device) = self.device.as_mut() else {
            debug!("No Razer mouse connected");
            self.last_failure = None;
            self.record_failure(now, &mut outcome);
            return outcome;
        };

        let Some(level) = read_battery_level(backend, device) else {
            warn!("Battery read failed, marking device disconnected");
            self.last_failure = device.diagnostics.clone();
            self.device = None;
            self.record_failure(now, &mut outcome);
            return outcome;
        };
        if device.preferred_path.is_some() {
            self.preferred_path = device.preferred_path.clone();
        }

        let charging = read_charging_status(backend, device).unwrap_or(false);
        let name = device.name.clone();

        self.last_success = Some(now);
        self.consecutive_failures = 0;
        self.last_failure = None;
        if self.was_disconnected {
            info!(level, charging, "Device reconnected");
            self.was_disconnected = false;
            outcome.events.push(MonitorEvent::Reconnected);
        }

        if let Some(event) = self.check_low_battery(level, settings) {
            outcome.events.push(event);
        }

        info!(level, charging, "Battery");
        outcome.reading = Some(Reading {
            device: name,
            level,
            charging,
            state: BatteryState::classify(level, charging),
        });
        outcome
    }

    fn record_failure(&mut self, now: Instant, outcome: &mut RefreshOutcome) {
        self.was_disconnected = true;
        self.consecutive_failures += 1;
        if self.is_warning() {
            if let Some(hint) = self.access_hint(now) {
                outcome.events.push(MonitorEvent::AccessHint(hint));
            }
        }
    }

    fn access_hint(&mut self, now: Instant) -> Option<AccessHint> {
        let cooling = self
            .last_access_hint
            .is_some_and(|t| now.saturating_duration_since(t) < ACCESS_HINT_COOLDOWN);
        if cooling {
            return None;
        }
        self.last_access_hint = Some(now);

        match &self.last_failure {
            Some(diag) if diag.is_full_open_failure() => {
                error!("HID open failed on every interface, access is likely being denied");
                if !diag.io_errors.is_empty() {
                    error!(errors = %diag.io_errors.join("; "), "Recent HID I/O errors");
                }
                Some(AccessHint::PermissionDenied {
                    recent_errors: diag.io_errors.clone(),
                })
            }
            _ => {
                error!(
                    failures = self.consecutive_failures,
                    "Repeated battery read failures"
                );
                Some(AccessHint::RepeatedFailures)
            }
        }
    }

    /// Latched: fires once per dip below the threshold.
    fn check_low_battery(&mut self, level: u8, settings: &Settings) -> Option<MonitorEvent> {
        let threshold = settings.low_battery_threshold;
        if !settings.low_battery_notify || threshold == 0 {
            return None;
        }
        if level > threshold {
            self.low_battery_notified = false;
            return None;
        }
        if self.low_battery_notified {
            return None;
        }
        self.low_battery_notified = true;
        info!(level, threshold, "Low battery");
        Some(MonitorEvent::LowBattery { level })
    }
}
