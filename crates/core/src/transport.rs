//! HID feature-report transport.
//!
//! A device usually exposes several HID interfaces and only some of them
//! answer vendor feature reports, often depending on the OS permission state
//! and whether the wireless link is up. [`exchange`] walks the interfaces in
//! priority order, retries transient I/O failures once per interface, and
//! leaves an [`ExchangeDiagnostics`] record on the descriptor.
//!
//! No handle outlives a single attempt: every attempt opens, uses and closes
//! its interface.

use crate::device::{DeviceDescriptor, ExchangeDiagnostics, InterfaceHandle};
use crate::error::{Error, Result};
use crate::report::{validate_response, REPORT_ID, REPORT_LEN};
use std::time::Duration;
use tracing::{debug, error, trace, warn};

/// Attempts per interface before moving on.
pub const ATTEMPTS_PER_INTERFACE: usize = 2;
/// Number of I/O error messages kept in diagnostics.
pub const MAX_IO_ERRORS: usize = 5;

/// Let the device settle after open.
pub const OPEN_SETTLE: Duration = Duration::from_millis(50);
/// Give the firmware time to prepare the response.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(80);
/// Wait before retrying an interface after an I/O failure.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// One raw HID enumeration record.
///
/// `path` and `product_id` are optional because platforms do not always
/// deliver them in usable form; such entries are skipped by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HidDeviceEntry {
    pub path: Option<String>,
    pub product_id: Option<u16>,
    pub interface_number: i32,
    pub serial_number: Option<String>,
    pub product_string: Option<String>,
}

/// An open HID interface.
pub trait HidHandle {
    /// Send a feature report (report ID first) and return the bytes written.
    fn send_feature_report(&mut self, data: &[u8]) -> Result<usize>;

    /// Read a feature report of up to `length` bytes, report ID included.
    fn get_feature_report(&mut self, report_id: u8, length: usize) -> Result<Vec<u8>>;

    /// Release the interface. Further calls on the handle fail.
    fn close(&mut self) -> Result<()>;
}

/// Access to the platform HID subsystem.
pub trait HidBackend {
    /// List HID entries for a vendor.
    fn enumerate(&self, vendor_id: u16) -> Result<Vec<HidDeviceEntry>>;

    /// Open one interface by platform path.
    fn open_path(&self, path: &str) -> Result<Box<dyn HidHandle>>;

    /// Block the calling thread.
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Closes the wrapped handle when dropped, ignoring close errors.
struct ScopedHandle {
    handle: Box<dyn HidHandle>,
    path: String,
}

impl ScopedHandle {
    fn open(backend: &dyn HidBackend, path: &str) -> Result<Self> {
        Ok(Self {
            handle: backend.open_path(path)?,
            path: path.to_string(),
        })
    }
}

impl Drop for ScopedHandle {
    fn drop(&mut self) {
        if let Err(e) = self.handle.close() {
            debug!(path = %self.path, error = %e, "Ignoring close failure");
        }
    }
}

/// Result of one open/send/read attempt on one interface.
enum Attempt {
    /// Response passed validation.
    Valid(Vec<u8>),
    /// Device answered but the response is unusable; not retried here.
    Rejected,
    /// I/O failure worth one more try on the same interface.
    Transient(Error),
    /// Failure that will repeat on this interface.
    Permanent(Error),
}

impl From<Error> for Attempt {
    fn from(e: Error) -> Self {
        if e.is_argument_error() {
            Attempt::Permanent(e)
        } else {
            Attempt::Transient(e)
        }
    }
}

/// Order interfaces for an exchange.
///
/// The preferred path comes first, then interface 0, then ascending interface
/// numbers with unknown (-1) last. The sort is stable.
pub fn prioritize_interfaces(interfaces: &mut [InterfaceHandle], preferred: Option<&str>) {
    interfaces.sort_by_key(|iface| {
        let number = if iface.interface_number < 0 {
            i32::MAX
        } else {
            iface.interface_number
        };
        (
            preferred != Some(iface.path.as_str()),
            iface.interface_number != 0,
            number,
        )
    });
}

fn with_report_id(report: &[u8; REPORT_LEN]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(REPORT_LEN + 1);
    framed.push(REPORT_ID);
    framed.extend_from_slice(report);
    framed
}

fn push_error(errors: &mut Vec<String>, message: String) {
    errors.push(message);
    if errors.len() > MAX_IO_ERRORS {
        errors.remove(0);
    }
}

fn attempt_exchange(backend: &dyn HidBackend, path: &str, framed: &[u8], label: &str) -> Attempt {
    let mut device = match ScopedHandle::open(backend, path) {
        Ok(device) => device,
        Err(e) => return e.into(),
    };
    backend.pause(OPEN_SETTLE);

    trace!(label, path, report_hex = format_args!("{:02X?}", framed), "Razer TX");
    if let Err(e) = device.handle.send_feature_report(framed) {
        return e.into();
    }
    backend.pause(RESPONSE_DELAY);

    let response = match device.handle.get_feature_report(REPORT_ID, REPORT_LEN + 1) {
        Ok(response) => response,
        Err(e) => return e.into(),
    };
    drop(device);
    trace!(label, path, report_hex = format_args!("{:02X?}", response), "Razer RX");

    if validate_response(&response, label) {
        Attempt::Valid(response)
    } else {
        Attempt::Rejected
    }
}

/// Send a request and read back the device's response.
///
/// Returns `None` once every interface and attempt is exhausted. The
/// descriptor's diagnostics are replaced in either case, and on success its
/// preferred path is set to the interface that answered.
pub fn exchange(
    backend: &dyn HidBackend,
    device: &mut DeviceDescriptor,
    report: &[u8; REPORT_LEN],
    label: &str,
) -> Option<Vec<u8>> {
    let framed = with_report_id(report);
    let mut interfaces = device.interfaces.clone();
    prioritize_interfaces(&mut interfaces, device.preferred_path.as_deref());

    let mut diag = ExchangeDiagnostics {
        command: label.to_string(),
        ..Default::default()
    };

    for iface in &interfaces {
        let number = iface.interface_number;
        diag.attempted_interfaces.push(number);

        for attempt in 1..=ATTEMPTS_PER_INTERFACE {
            match attempt_exchange(backend, &iface.path, &framed, label) {
                Attempt::Valid(response) => {
                    debug!(label, interface = number, attempt, "Exchange succeeded");
                    device.preferred_path = Some(iface.path.clone());
                    diag.ok = true;
                    diag.interface = Some(number);
                    device.diagnostics = Some(diag);
                    return Some(response);
                }
                Attempt::Rejected => {
                    debug!(label, interface = number, "Unusable response, trying next interface");
                    break;
                }
                Attempt::Permanent(e) => {
                    warn!(label, interface = number, error = %e, "Malformed report");
                    push_error(&mut diag.io_errors, e.to_string());
                    break;
                }
                Attempt::Transient(e) => {
                    if e.is_open_failure() {
                        diag.open_failed_count += 1;
                    }
                    if matches!(e, Error::Hid(_) | Error::Open { .. }) {
                        warn!(label, interface = number, attempt, error = %e, "Device I/O error");
                    } else {
                        error!(label, interface = number, attempt, error = %e, "Unexpected error");
                    }
                    push_error(&mut diag.io_errors, e.to_string());
                    if attempt < ATTEMPTS_PER_INTERFACE {
                        backend.pause(RETRY_BACKOFF);
                    }
                }
            }
        }
    }

    warn!(
        label,
        attempted = ?diag.attempted_interfaces,
        open_failed = diag.open_failed_count,
        "Exchange failed on every interface"
    );
    device.diagnostics = Some(diag);
    None
}

/// Send a request without reading a response.
///
/// Tries every interface once and reports whether at least one accepted the
/// full report.
pub fn send_only(
    backend: &dyn HidBackend,
    device: &DeviceDescriptor,
    report: &[u8; REPORT_LEN],
    label: &str,
) -> bool {
    let framed = with_report_id(report);
    let mut delivered = false;

    for iface in &device.interfaces {
        let mut handle = match ScopedHandle::open(backend, &iface.path) {
            Ok(handle) => handle,
            Err(e) => {
                warn!(label, path = %iface.path, error = %e, "I/O error on interface");
                continue;
            }
        };
        backend.pause(OPEN_SETTLE);

        match handle.handle.send_feature_report(&framed) {
            Ok(written) if written == framed.len() => delivered = true,
            Ok(written) => warn!(
                label,
                path = %iface.path,
                written,
                expected = framed.len(),
                "Partial write"
            ),
            Err(e) => warn!(label, path = %iface.path, error = %e, "I/O error on interface"),
        }
    }

    delivered
}

/// A scripted HID backend for testing.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::sync::{Arc, Mutex};

    /// Behaviour of one open attempt on a path.
    #[derive(Debug, Clone)]
    pub enum Step {
        /// `open_path` fails with [`Error::Open`].
        OpenFails(String),
        /// Sending fails with [`Error::Hid`].
        SendFails(String),
        /// Sending fails with [`Error::InvalidArgument`].
        SendRejectsArgument(String),
        /// Reading fails with the given error message.
        ReadFails(String),
        /// Reading fails with an error outside the HID family.
        ReadFailsUnexpected(String),
        /// Full write, then this response.
        Respond(Vec<u8>),
        /// Write reports only this many bytes.
        ShortWrite(usize),
    }

    #[derive(Default)]
    pub struct State {
        entries: Vec<HidDeviceEntry>,
        enumerate_error: Option<Error>,
        scripts: HashMap<String, VecDeque<Step>>,
        fallback: HashMap<String, Step>,
        close_failures: HashSet<String>,
        pub opened: Vec<String>,
        pub sent: Vec<(String, Vec<u8>)>,
        pub reads: Vec<(u8, usize)>,
        pub closed: Vec<String>,
        pub pauses: Vec<Duration>,
    }

    /// Mock backend with per-path scripted outcomes.
    ///
    /// Each `open_path` consumes the next scripted step for that path, falling
    /// back to the path's default step and then to an open failure.
    #[derive(Clone, Default)]
    pub struct MockBackend {
        state: Arc<Mutex<State>>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_entries(&self, entries: Vec<HidDeviceEntry>) {
            self.state.lock().unwrap().entries = entries;
        }

        pub fn fail_enumeration(&self, error: Error) {
            self.state.lock().unwrap().enumerate_error = Some(error);
        }

        /// Queue steps for successive opens of `path`.
        pub fn script(&self, path: &str, steps: impl IntoIterator<Item = Step>) {
            self.state
                .lock()
                .unwrap()
                .scripts
                .entry(path.to_string())
                .or_default()
                .extend(steps);
        }

        /// Step used for `path` once its script is exhausted.
        pub fn always(&self, path: &str, step: Step) {
            self.state
                .lock()
                .unwrap()
                .fallback
                .insert(path.to_string(), step);
        }

        pub fn fail_close(&self, path: &str) {
            self.state
                .lock()
                .unwrap()
                .close_failures
                .insert(path.to_string());
        }

        /// Inspect recorded calls.
        pub fn with_state<T>(&self, f: impl FnOnce(&State) -> T) -> T {
            f(&self.state.lock().unwrap())
        }

        pub fn opened(&self) -> Vec<String> {
            self.with_state(|s| s.opened.clone())
        }

        pub fn closed(&self) -> Vec<String> {
            self.with_state(|s| s.closed.clone())
        }

        pub fn pauses(&self) -> Vec<Duration> {
            self.with_state(|s| s.pauses.clone())
        }
    }

    struct MockHandle {
        path: String,
        step: Step,
        state: Arc<Mutex<State>>,
    }

    impl HidHandle for MockHandle {
        fn send_feature_report(&mut self, data: &[u8]) -> Result<usize> {
            match &self.step {
                Step::SendFails(msg) => Err(Error::Hid(msg.clone())),
                Step::SendRejectsArgument(msg) => Err(Error::InvalidArgument(msg.clone())),
                Step::ShortWrite(n) => Ok(*n),
                _ => {
                    self.state
                        .lock()
                        .unwrap()
                        .sent
                        .push((self.path.clone(), data.to_vec()));
                    Ok(data.len())
                }
            }
        }

        fn get_feature_report(&mut self, report_id: u8, length: usize) -> Result<Vec<u8>> {
            self.state.lock().unwrap().reads.push((report_id, length));
            match &self.step {
                Step::ReadFails(msg) => Err(Error::Hid(msg.clone())),
                Step::ReadFailsUnexpected(msg) => Err(Error::Enumeration(msg.clone())),
                Step::Respond(resp) => Ok(resp.clone()),
                _ => Ok(Vec::new()),
            }
        }

        fn close(&mut self) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.closed.push(self.path.clone());
            if state.close_failures.contains(&self.path) {
                return Err(Error::Hid("close failed".into()));
            }
            Ok(())
        }
    }

    impl HidBackend for MockBackend {
        fn enumerate(&self, _vendor_id: u16) -> Result<Vec<HidDeviceEntry>> {
            let mut state = self.state.lock().unwrap();
            if let Some(e) = state.enumerate_error.take() {
                return Err(e);
            }
            Ok(state.entries.clone())
        }

        fn open_path(&self, path: &str) -> Result<Box<dyn HidHandle>> {
            let mut state = self.state.lock().unwrap();
            state.opened.push(path.to_string());
            let scripted = state.scripts.get_mut(path).and_then(VecDeque::pop_front);
            let step = scripted
                .or_else(|| state.fallback.get(path).cloned())
                .unwrap_or_else(|| Step::OpenFails("no such device".into()));

            if let Step::OpenFails(reason) = step {
                return Err(Error::Open {
                    path: path.to_string(),
                    reason,
                });
            }
            Ok(Box::new(MockHandle {
                path: path.to_string(),
                step,
                state: Arc::clone(&self.state),
            }))
        }

        fn pause(&self, duration: Duration) {
            self.state.lock().unwrap().pauses.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockBackend, Step};
    use super::*;
    use crate::report::construct_report;
    use crate::report::testing::make_response;

    fn request() -> [u8; REPORT_LEN] {
        construct_report(0x1F, 0x07, 0x80, 0x02, &[0x00, 0x00]).unwrap()
    }

    fn device(interfaces: &[(&str, i32)]) -> DeviceDescriptor {
        let mut dev = DeviceDescriptor::from_product_id(0x00B7);
        for (path, number) in interfaces {
            dev.add_interface(path.to_string(), *number);
        }
        dev
    }

    fn ok_response() -> Step {
        Step::Respond(make_response(0x02, 0x80))
    }

    #[test]
    fn prioritize_orders_preferred_zero_then_ascending() {
        let mut ifaces = device(&[("d", -1), ("c", 2), ("b", 1), ("a", 0), ("p", 3)]).interfaces;
        prioritize_interfaces(&mut ifaces, Some("p"));
        let order: Vec<&str> = ifaces.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(order, ["p", "a", "b", "c", "d"]);
    }

    #[test]
    fn prioritize_without_preference() {
        let mut ifaces = device(&[("b", 1), ("u", -1), ("a", 0)]).interfaces;
        prioritize_interfaces(&mut ifaces, None);
        let order: Vec<&str> = ifaces.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(order, ["a", "b", "u"]);
    }

    #[test]
    fn empty_interface_list_returns_none() {
        let backend = MockBackend::new();
        let mut dev = device(&[]);
        assert!(exchange(&backend, &mut dev, &request(), "battery").is_none());
        let diag = dev.diagnostics.unwrap();
        assert!(!diag.ok);
        assert!(diag.attempted_interfaces.is_empty());
        assert!(backend.opened().is_empty());
    }

    #[test]
    fn report_id_prepended_and_full_length_read() {
        let backend = MockBackend::new();
        backend.script("/a", [ok_response()]);
        let mut dev = device(&[("/a", 0)]);
        let report = request();

        let resp = exchange(&backend, &mut dev, &report, "battery").unwrap();
        assert_eq!(resp.len(), REPORT_LEN + 1);

        backend.with_state(|s| {
            let (path, sent) = &s.sent[0];
            assert_eq!(path, "/a");
            assert_eq!(sent.len(), REPORT_LEN + 1);
            assert_eq!(sent[0], 0x00);
            assert_eq!(&sent[1..], &report[..]);
            assert_eq!(s.reads, vec![(0x00, REPORT_LEN + 1)]);
        });
    }

    #[test]
    fn success_stamps_diagnostics_and_preference() {
        let backend = MockBackend::new();
        backend.script("/a", [ok_response()]);
        let mut dev = device(&[("/a", 0), ("/b", 1)]);

        assert!(exchange(&backend, &mut dev, &request(), "get_battery_level").is_some());
        assert_eq!(dev.preferred_path.as_deref(), Some("/a"));
        let diag = dev.diagnostics.as_ref().unwrap();
        assert!(diag.ok);
        assert_eq!(diag.command, "get_battery_level");
        assert_eq!(diag.interface, Some(0));
        assert_eq!(diag.attempted_interfaces, vec![0]);
        assert!(diag.io_errors.is_empty());
        assert_eq!(backend.opened(), vec!["/a"]);
        assert_eq!(backend.closed(), vec!["/a"]);
    }

    #[test]
    fn preferred_path_tried_first_and_rewritten() {
        let backend = MockBackend::new();
        backend.always("/pref", Step::OpenFails("open failed".into()));
        backend.script("/zero", [ok_response()]);
        let mut dev = device(&[("/two", 2), ("/zero", 0), ("/pref", 1)]);
        dev.preferred_path = Some("/pref".into());

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_some());
        assert_eq!(backend.opened(), vec!["/pref", "/pref", "/zero"]);
        assert_eq!(dev.preferred_path.as_deref(), Some("/zero"));
        let diag = dev.diagnostics.unwrap();
        assert_eq!(diag.attempted_interfaces, vec![1, 0]);
        assert_eq!(diag.open_failed_count, 2);
        assert_eq!(diag.io_errors.len(), 2);
    }

    #[test]
    fn transient_error_retried_once_with_backoff() {
        let backend = MockBackend::new();
        backend.script("/a", [Step::ReadFails("timeout".into()), ok_response()]);
        let mut dev = device(&[("/a", 0)]);

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_some());
        assert_eq!(backend.opened(), vec!["/a", "/a"]);
        assert_eq!(
            backend.pauses(),
            vec![
                OPEN_SETTLE,
                RESPONSE_DELAY,
                RETRY_BACKOFF,
                OPEN_SETTLE,
                RESPONSE_DELAY
            ]
        );
        assert_eq!(dev.diagnostics.unwrap().io_errors, vec!["HID error: timeout"]);
    }

    #[test]
    fn unexpected_error_retried_like_io_error() {
        let backend = MockBackend::new();
        backend.script("/a", [Step::ReadFailsUnexpected("weird".into()), ok_response()]);
        let mut dev = device(&[("/a", 0)]);

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_some());
        assert_eq!(backend.opened(), vec!["/a", "/a"]);
        let backoffs = backend
            .pauses()
            .into_iter()
            .filter(|d| *d == RETRY_BACKOFF)
            .count();
        assert_eq!(backoffs, 1);

        let diag = dev.diagnostics.unwrap();
        assert!(diag.ok);
        assert_eq!(diag.io_errors, vec!["enumeration failed: weird"]);
        assert_eq!(diag.open_failed_count, 0);
    }

    #[test]
    fn second_failure_moves_on_without_backoff() {
        let backend = MockBackend::new();
        backend.always("/a", Step::SendFails("pipe error".into()));
        backend.script("/b", [ok_response()]);
        let mut dev = device(&[("/a", 0), ("/b", 1)]);

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_some());
        assert_eq!(backend.opened(), vec!["/a", "/a", "/b"]);
        let backoffs = backend
            .pauses()
            .into_iter()
            .filter(|d| *d == RETRY_BACKOFF)
            .count();
        assert_eq!(backoffs, 1);
        assert_eq!(dev.diagnostics.unwrap().open_failed_count, 0);
    }

    #[test]
    fn rejected_response_skips_to_next_interface() {
        let backend = MockBackend::new();
        backend.always("/a", Step::Respond(make_response(0x01, 0x00)));
        backend.script("/b", [ok_response()]);
        let mut dev = device(&[("/a", 0), ("/b", 1)]);

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_some());
        assert_eq!(backend.opened(), vec!["/a", "/b"]);
        assert_eq!(dev.preferred_path.as_deref(), Some("/b"));
    }

    #[test]
    fn argument_error_not_retried() {
        let backend = MockBackend::new();
        backend.always("/a", Step::SendRejectsArgument("bad byte".into()));
        let mut dev = device(&[("/a", 0)]);

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_none());
        assert_eq!(backend.opened(), vec!["/a"]);
        let diag = dev.diagnostics.unwrap();
        assert_eq!(diag.io_errors, vec!["invalid argument: bad byte"]);
        assert_eq!(diag.open_failed_count, 0);
    }

    #[test]
    fn exhaustion_records_failure_diagnostics() {
        let backend = MockBackend::new();
        let mut dev = device(&[("/a", 0), ("/b", 1), ("/c", 2)]);
        dev.preferred_path = Some("/b".into());

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_none());
        assert_eq!(dev.preferred_path.as_deref(), Some("/b"));
        let diag = dev.diagnostics.unwrap();
        assert!(!diag.ok);
        assert_eq!(diag.interface, None);
        assert_eq!(diag.attempted_interfaces, vec![1, 0, 2]);
        assert_eq!(diag.open_failed_count, 6);
        assert_eq!(diag.io_errors.len(), MAX_IO_ERRORS);
        // Oldest error (first /b attempt) dropped.
        assert!(diag.io_errors[0].contains("/b"));
        assert!(diag.io_errors[4].contains("/c"));
        assert!(diag.is_full_open_failure());
    }

    #[test]
    fn diagnostics_replaced_on_next_call() {
        let backend = MockBackend::new();
        backend.script("/a", [Step::ReadFails("x".into()), Step::ReadFails("y".into())]);
        let mut dev = device(&[("/a", 0)]);
        assert!(exchange(&backend, &mut dev, &request(), "first").is_none());
        assert_eq!(dev.diagnostics.as_ref().unwrap().io_errors.len(), 2);

        backend.script("/a", [ok_response()]);
        assert!(exchange(&backend, &mut dev, &request(), "second").is_some());
        let diag = dev.diagnostics.unwrap();
        assert_eq!(diag.command, "second");
        assert!(diag.io_errors.is_empty());
    }

    #[test]
    fn handle_closed_on_error_even_if_close_fails() {
        let backend = MockBackend::new();
        backend.always("/a", Step::ReadFails("boom".into()));
        backend.fail_close("/a");
        let mut dev = device(&[("/a", 0)]);

        assert!(exchange(&backend, &mut dev, &request(), "battery").is_none());
        assert_eq!(backend.closed(), vec!["/a", "/a"]);
    }

    #[test]
    fn send_only_succeeds_on_any_full_write() {
        let backend = MockBackend::new();
        backend.always("/a", Step::ShortWrite(10));
        backend.always("/b", Step::Respond(Vec::new()));
        let dev = device(&[("/a", 0), ("/b", 1)]);

        assert!(send_only(&backend, &dev, &request(), "effect"));
        assert_eq!(backend.opened(), vec!["/a", "/b"]);
        assert_eq!(backend.closed(), vec!["/a", "/b"]);
    }

    #[test]
    fn send_only_partial_write_is_failure() {
        let backend = MockBackend::new();
        backend.always("/a", Step::ShortWrite(10));
        let dev = device(&[("/a", 0)]);
        assert!(!send_only(&backend, &dev, &request(), "effect"));
    }

    #[test]
    fn send_only_closes_on_write_error() {
        let backend = MockBackend::new();
        backend.always("/a", Step::SendFails("pipe".into()));
        backend.fail_close("/a");
        let dev = device(&[("/a", 0)]);
        assert!(!send_only(&backend, &dev, &request(), "effect"));
        assert_eq!(backend.closed(), vec!["/a"]);
    }

    #[test]
    fn send_only_without_interfaces_is_false() {
        let backend = MockBackend::new();
        assert!(!send_only(&backend, &device(&[]), &request(), "effect"));
    }
}
