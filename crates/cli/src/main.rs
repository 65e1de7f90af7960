//! razer-battery CLI: battery status and lighting for Razer wireless devices.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use razer_battery_core::battery::{self, DEFAULT_TRANSACTION_ID};
use razer_battery_core::device::{scan, DeviceDescriptor};
use razer_battery_core::hid::HidApiBackend;
use razer_battery_core::monitor::{
    format_title, format_unavailable, AccessHint, Monitor, MonitorEvent,
};
use razer_battery_core::registry::DeviceType;
use razer_battery_core::report::{arguments_from_values, effect_request, effects};
use razer_battery_core::settings::{self, Settings, KEYS};
use razer_battery_core::transport::{prioritize_interfaces, send_only, HidBackend};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "razer-battery",
    version,
    about = "Battery and charging monitor for Razer wireless peripherals"
)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List connected Razer devices.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Read battery level and charging state.
    Battery {
        /// Index from `list`; defaults to the first mouse.
        #[arg(short, long)]
        device: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Poll the first mouse continuously using the saved settings.
    Watch {
        /// Settings file to use instead of the default location.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show or change persisted settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
        /// Settings file to use instead of the default location.
        #[arg(long, global = true)]
        config: Option<PathBuf>,
    },
    /// Apply a lighting effect.
    Effect {
        effect: Effect,
        /// Extra effect parameters, each 0-255 (e.g. an RGB colour).
        params: Vec<i64>,
        #[arg(short, long)]
        device: Option<usize>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print all settings.
    Show,
    /// Change one setting.
    Set { key: String, value: String },
    /// Print the settings file location.
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
enum Effect {
    Static,
    Breathing,
    Wave,
    Reactive,
}

impl Effect {
    fn code(self) -> u8 {
        match self {
            Self::Static => effects::STATIC,
            Self::Breathing => effects::BREATHING,
            Self::Wave => effects::WAVE,
            Self::Reactive => effects::REACTIVE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Static => "set_static",
            Self::Breathing => "set_breathing",
            Self::Wave => "set_wave",
            Self::Reactive => "set_reactive",
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick a device by list index, or the first mouse.
fn select_device(devices: Vec<DeviceDescriptor>, index: Option<usize>) -> Result<DeviceDescriptor> {
    if devices.is_empty() {
        bail!("No Razer devices found. Ensure the device or its receiver is plugged in.");
    }
    let count = devices.len();
    let mut selected = match index {
        Some(i) => devices
            .into_iter()
            .nth(i)
            .with_context(|| format!("No device at index {i} ({count} found)"))?,
        None => devices
            .into_iter()
            .find(|d| d.device_type == DeviceType::Mouse)
            .context("No Razer mouse found; pass --device to pick another device")?,
    };
    prioritize_interfaces(&mut selected.interfaces, None);
    Ok(selected)
}

fn config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => Ok(settings::settings_path()?),
    }
}

fn print_access_hint(hint: &AccessHint) {
    match hint {
        AccessHint::PermissionDenied { recent_errors } => {
            eprintln!("HID open failed on every interface; access to the device is being denied.");
            for e in recent_errors {
                eprintln!("  {e}");
            }
            eprintln!("On Linux, install a udev rule granting access to Razer (1532) hidraw nodes.");
            eprintln!("On macOS, allow this program under Privacy & Security > Input Monitoring.");
        }
        AccessHint::RepeatedFailures => {
            eprintln!("Repeated battery read failures. Rerun with --verbose for details.");
        }
    }
}

fn cmd_list(backend: &dyn HidBackend, json: bool) -> Result<()> {
    let devices = scan(backend);
    if json {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }
    if devices.is_empty() {
        println!("No Razer devices found.");
        return Ok(());
    }
    for (i, dev) in devices.iter().enumerate() {
        println!(
            "[{i}] {} (PID: 0x{:04X}, type: {}, interfaces: {})",
            dev.name,
            dev.product_id,
            dev.device_type,
            dev.interfaces.len()
        );
        for iface in &dev.interfaces {
            println!("      #{} {}", iface.interface_number, iface.path);
        }
    }
    Ok(())
}

fn cmd_battery(backend: &dyn HidBackend, index: Option<usize>, json: bool) -> Result<()> {
    let mut device = select_device(scan(backend), index)?;

    let Some(level) = battery::read_battery_level(backend, &mut device) else {
        let diag = device.diagnostics.clone().unwrap_or_default();
        if json {
            println!("{}", serde_json::to_string_pretty(&diag)?);
        } else {
            eprintln!(
                "Could not read battery from {} (tried interfaces {:?}).",
                device.name, diag.attempted_interfaces
            );
        }
        if diag.is_full_open_failure() {
            print_access_hint(&AccessHint::PermissionDenied {
                recent_errors: diag.io_errors,
            });
        }
        bail!("battery read failed");
    };
    let charging = battery::read_charging_status(backend, &mut device);

    if json {
        let out = serde_json::json!({
            "device": device.name,
            "product_id": device.product_id,
            "battery": level,
            "charging": charging,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let charging = match charging {
            Some(true) => "charging",
            Some(false) => "not charging",
            None => "charging state unknown",
        };
        println!("{}: {level}% ({charging})", device.name);
    }
    Ok(())
}

fn cmd_watch(backend: &dyn HidBackend, config: Option<PathBuf>) -> Result<()> {
    let path = config_path(config)?;
    let mut monitor = Monitor::new();
    info!(settings = %path.display(), "Watching for battery changes");

    loop {
        // Reloaded each cycle so `settings set` applies to a running watch.
        let settings = Settings::load(&path);
        let interval = Duration::from_secs(settings.poll_interval);
        let now = Instant::now();

        if monitor.poll_due(now, interval) {
            let outcome = monitor.refresh(backend, &settings, now);
            let title = match &outcome.reading {
                Some(r) => {
                    let threshold = if settings.low_battery_notify {
                        settings.low_battery_threshold
                    } else {
                        0
                    };
                    let title = format_title(settings.display_mode, r.level, r.charging, threshold);
                    format!("{title}  {} [{}]", r.device, r.state.as_str())
                }
                None => format_unavailable(monitor.is_warning()),
            };
            println!("{title}");

            for event in &outcome.events {
                match event {
                    MonitorEvent::Reconnected => println!("Device reconnected"),
                    MonitorEvent::LowBattery { level } => {
                        println!("Battery low: {level}%, plug in soon")
                    }
                    MonitorEvent::AccessHint(hint) => print_access_hint(hint),
                }
            }
        }

        let wait = monitor.time_until_due(Instant::now(), interval);
        debug!(wait_secs = wait.as_secs(), "Next poll");
        std::thread::sleep(wait.max(Duration::from_secs(1)));
    }
}

fn cmd_settings(action: SettingsAction, config: Option<PathBuf>) -> Result<()> {
    let path = config_path(config)?;
    match action {
        SettingsAction::Show => {
            let settings = Settings::load(&path);
            for key in KEYS {
                if let Some(value) = settings.get(key) {
                    println!("{key} = {value}");
                }
            }
        }
        SettingsAction::Set { key, value } => {
            let mut settings = Settings::load(&path);
            settings.set(&key, &value)?;
            settings
                .save(&path)
                .with_context(|| format!("saving {}", path.display()))?;
            println!("{key} set to {value}");
        }
        SettingsAction::Path => println!("{}", path.display()),
    }
    Ok(())
}

fn cmd_effect(
    backend: &dyn HidBackend,
    effect: Effect,
    params: &[i64],
    index: Option<usize>,
) -> Result<()> {
    let extra = arguments_from_values(params)?;
    let device = select_device(scan(backend), index)?;
    debug!(device = %device.name, effect = effect.label(), "Building effect report");
    let report = effect_request(
        device.transaction_id.unwrap_or(DEFAULT_TRANSACTION_ID),
        device.device_type,
        effect.code(),
        &extra,
    )
    .encode()?;

    if !send_only(backend, &device, &report, effect.label()) {
        bail!("{} did not accept the effect on any interface", device.name);
    }
    println!("Applied {} to {}", effect.label(), device.name);
    Ok(())
}

fn open_backend() -> Result<HidApiBackend> {
    HidApiBackend::new().context("hidapi init")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { json } => cmd_list(&open_backend()?, json),
        Commands::Battery { device, json } => cmd_battery(&open_backend()?, device, json),
        Commands::Watch { config } => cmd_watch(&open_backend()?, config),
        Commands::Settings { action, config } => cmd_settings(action, config),
        Commands::Effect {
            effect,
            params,
            device,
        } => cmd_effect(&open_backend()?, effect, &params, device),
    }
}
