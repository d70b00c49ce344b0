use crux_core::{render::render, Command};
use log::info;

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::types::DeviceConfig;
use crate::update::dispatch;
use crate::{update_field, Effect, NavigationCmd};

/// Handle configuration form input
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::Edit { field, value } => {
            if model.form.set(field, value) {
                render()
            } else {
                Command::done()
            }
        }

        FormEvent::SetAccessPoint(enabled) => update_field!(model.form.access_point, enabled),

        FormEvent::Save => save(model),
    }
}

/// Apply the configuration reported by the device. This is also the signal
/// that the initial load is complete.
pub fn hydrate(config: DeviceConfig, model: &mut Model) -> Command<Effect, Event> {
    model.form.hydrate(config);
    model.is_loading = false;
    render()
}

/// Send the whole configuration and reload the page.
///
/// The device does not acknowledge `configfile`; the reload is what brings the
/// page back in sync with whatever the device made of it.
pub fn save(model: &Model) -> Command<Effect, Event> {
    let record = model.collect();
    info!(
        "saving configuration (ssid {:?}, mode {})",
        record.ssid,
        record.mode.as_wire()
    );

    Command::all([dispatch::save_config(record, model), NavigationCmd::reload()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{reload_requested, texts_in};
    use crate::types::{ConfigRecord, ConnectionState, FormField, WifiMode};
    use crate::update::{router, scan};

    fn open_model() -> Model {
        let mut model = Model::default();
        model.connection.state = ConnectionState::Open;
        model
    }

    #[test]
    fn edit_updates_named_control() {
        let mut model = Model::default();

        let _ = handle(
            FormEvent::Edit {
                field: FormField::SensorPin,
                value: "12".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.form.sensor_pin, "12");
    }

    #[test]
    fn unchanged_access_point_does_not_render() {
        let mut model = Model::default();

        let mut cmd = handle(FormEvent::SetAccessPoint(false), &mut model);

        assert!(cmd.effects().next().is_none());
    }

    #[test]
    fn hydrate_then_collect_round_trips_record() {
        let record = ConfigRecord {
            ssid: "HomeNet".to_string(),
            mode: WifiMode::AccessPoint,
            password: "hunter22".to_string(),
            sensor_pin: "4".to_string(),
            rfid_gain: "32".to_string(),
            relay_pin: "5".to_string(),
            relay_time_ms: "400".to_string(),
        };
        let mut payload = serde_json::to_value(&record).unwrap();
        payload["command"] = serde_json::json!("configfile");
        let mut model = Model::default();

        let _ = router::route(&payload.to_string(), &mut model);

        assert_eq!(model.collect(), record);
    }

    #[test]
    fn wmode_round_trips_through_form() {
        for (wmode, expected) in [
            (Some("1"), WifiMode::AccessPoint),
            (Some("0"), WifiMode::Station),
            (None, WifiMode::Station),
        ] {
            let mut model = Model::default();
            let _ = hydrate(
                DeviceConfig {
                    mode: wmode.map(str::to_string),
                    ..Default::default()
                },
                &mut model,
            );

            assert_eq!(model.form.access_point, expected == WifiMode::AccessPoint);
            assert_eq!(model.collect().mode, expected);
        }
    }

    #[test]
    fn save_sends_configuration_and_reloads() {
        let mut model = open_model();
        model.form.ssid = "HomeNet".to_string();
        model.form.access_point = true;

        let mut cmd = handle(FormEvent::Save, &mut model);
        let effects: Vec<Effect> = cmd.effects().collect();

        assert_eq!(
            texts_in(&effects),
            vec![
                r#"{"command":"configfile","ssid":"HomeNet","wmode":"1","pswd":"","sspin":"","rfidgain":"","rpin":"","rtime":""}"#
            ]
        );
        assert!(reload_requested(&effects));
    }

    #[test]
    fn save_uses_selected_scan_result() {
        let mut model = open_model();
        model.form.ssid = "Typed".to_string();
        let _ = scan::begin_scan(&mut model);
        let _ = scan::populate_results(vec!["NetA".to_string(), "NetB".to_string()], &mut model);
        let _ = scan::handle(crate::events::ScanEvent::Select("NetB".to_string()), &mut model);

        assert_eq!(model.collect().ssid, "NetB");
    }

    #[test]
    fn save_without_channel_still_reloads() {
        let mut model = Model::default();
        let before = model.clone();

        let mut cmd = handle(FormEvent::Save, &mut model);
        let effects: Vec<Effect> = cmd.effects().collect();

        assert!(texts_in(&effects).is_empty());
        assert!(reload_requested(&effects));
        assert_eq!(model, before);
    }
}
