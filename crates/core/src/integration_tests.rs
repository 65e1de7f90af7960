//! Integration tests: discovery, battery query, and monitor against a
//! simulated wireless mouse that exposes several HID interfaces.

#[cfg(test)]
mod tests {
    use crate::battery::{self, BATTERY_UNAVAILABLE};
    use crate::device::scan;
    use crate::monitor::{AccessHint, BatteryState, Monitor, MonitorEvent};
    use crate::registry::DeviceType;
    use crate::report::testing::make_response;
    use crate::report::{effect_request, effects, REPORT_LEN};
    use crate::settings::Settings;
    use crate::transport::mock::{MockBackend, Step};
    use crate::transport::{prioritize_interfaces, send_only, HidDeviceEntry};
    use std::time::{Duration, Instant};

    const VIPER_ULTIMATE_WIRELESS: u16 = 0x007B;

    fn entry(path: &str, iface: i32) -> HidDeviceEntry {
        HidDeviceEntry {
            path: Some(path.to_string()),
            product_id: Some(VIPER_ULTIMATE_WIRELESS),
            interface_number: iface,
            serial_number: Some("000000000000".to_string()),
            product_string: Some("Razer Viper Ultimate".to_string()),
        }
    }

    /// Receiver with three interfaces; interface 0 listed twice (two usage pages).
    fn receiver() -> MockBackend {
        let backend = MockBackend::new();
        backend.set_entries(vec![
            entry("/hid/2", 2),
            entry("/hid/0", 0),
            entry("/hid/0", 0),
            entry("/hid/1", 1),
        ]);
        backend
    }

    #[test]
    fn discover_then_read_battery() {
        let backend = receiver();
        backend.script("/hid/0", [Step::Respond(make_response(0x02, 200))]);

        let mut devices = scan(&backend);
        assert_eq!(devices.len(), 1);
        let mouse = &mut devices[0];
        assert_eq!(mouse.device_type, DeviceType::Mouse);
        assert_eq!(mouse.transaction_id, Some(0x3F));
        assert_eq!(mouse.interfaces.len(), 3);

        prioritize_interfaces(&mut mouse.interfaces, None);
        assert_eq!(battery::battery_level(&backend, mouse), 78);

        let diag = mouse.diagnostics.as_ref().unwrap();
        assert!(diag.ok);
        assert_eq!(diag.interface, Some(0));
        assert_eq!(mouse.preferred_path.as_deref(), Some("/hid/0"));

        backend.with_state(|s| {
            let (path, frame) = &s.sent[0];
            assert_eq!(path, "/hid/0");
            assert_eq!(frame.len(), REPORT_LEN + 1);
            assert_eq!(frame[0], 0x00);
            assert_eq!(frame[2], 0x3F);
        });
    }

    #[test]
    fn sleeping_interface_falls_through_to_working_one() {
        let backend = receiver();
        backend.always("/hid/0", Step::Respond(make_response(0x01, 0)));
        backend.script(
            "/hid/1",
            [
                Step::Respond(make_response(0x02, 255)),
                Step::Respond(make_response(0x02, 0)),
            ],
        );

        let mut devices = scan(&backend);
        let mouse = &mut devices[0];
        prioritize_interfaces(&mut mouse.interfaces, None);

        assert_eq!(battery::battery_level(&backend, mouse), 100);
        assert_eq!(mouse.preferred_path.as_deref(), Some("/hid/1"));

        // The second query goes straight to the interface that worked.
        assert_eq!(battery::read_charging_status(&backend, mouse), Some(false));
        backend.with_state(|s| {
            assert_eq!(s.sent.len(), 3);
            assert_eq!(s.sent[2].0, "/hid/1");
        });
    }

    #[test]
    fn unreachable_mouse_reports_sentinel() {
        let backend = receiver();
        let mut devices = scan(&backend);
        let mouse = &mut devices[0];

        assert_eq!(battery::battery_level(&backend, mouse), BATTERY_UNAVAILABLE);
        assert!(!battery::charging_status(&backend, mouse));
        let diag = mouse.diagnostics.as_ref().unwrap();
        assert!(diag.is_full_open_failure());
        assert!(diag.io_errors.len() <= 5);
    }

    #[test]
    fn effect_delivered_with_send_only() {
        let backend = receiver();
        backend.always("/hid/0", Step::Respond(Vec::new()));
        let devices = scan(&backend);
        let mouse = &devices[0];

        let report = effect_request(
            mouse.transaction_id.unwrap_or(0x1F),
            mouse.device_type,
            effects::STATIC,
            &[0x00, 0xFF, 0x00],
        )
        .encode()
        .unwrap();
        assert!(send_only(&backend, mouse, &report, "set_static"));

        backend.with_state(|s| {
            let frame = &s.sent[0].1;
            assert_eq!(frame[6], effects::DATA_SIZE);
            assert_eq!(frame[7], effects::CMD_CLASS);
            assert_eq!(frame[9], effects::VARSTORE);
            assert_eq!(frame[10], effects::MOUSE_SCROLL_WHEEL_LED);
            assert_eq!(frame[11], effects::STATIC);
            assert_eq!(s.reads.len(), 0);
        });
    }

    #[test]
    fn monitor_through_disconnect_and_reconnect() {
        let backend = receiver();
        let settings = Settings::default();
        let mut monitor = Monitor::new();
        let t0 = Instant::now();
        let secs = Duration::from_secs;

        backend.script(
            "/hid/0",
            [
                Step::Respond(make_response(0x02, 230)),
                Step::Respond(make_response(0x02, 0)),
            ],
        );
        let first = monitor.refresh(&backend, &settings, t0);
        let reading = first.reading.unwrap();
        assert_eq!(reading.level, 90);
        assert_eq!(reading.state, BatteryState::Full);

        // Mouse switched off: every open fails from here on.
        let mut when = t0 + secs(300);
        let mut hints = Vec::new();
        for _ in 0..3 {
            assert!(monitor.poll_due(when, secs(settings.poll_interval)));
            let outcome = monitor.refresh(&backend, &settings, when);
            assert!(outcome.reading.is_none());
            hints.extend(outcome.events);
            when += monitor.failure_backoff();
        }
        assert_eq!(monitor.consecutive_failures(), 3);
        assert!(matches!(
            hints.as_slice(),
            [MonitorEvent::AccessHint(AccessHint::PermissionDenied { .. })]
        ));

        backend.script(
            "/hid/0",
            [
                Step::Respond(make_response(0x02, 26)),
                Step::Respond(make_response(0x02, 1)),
            ],
        );
        let back = monitor.refresh(&backend, &settings, when);
        assert_eq!(
            back.events,
            vec![
                MonitorEvent::Reconnected,
                MonitorEvent::LowBattery { level: 10 }
            ]
        );
        assert_eq!(back.reading.unwrap().state, BatteryState::ChargingLow);
    }
}
