use serde::{Deserialize, Serialize};

use crate::types::protocol::DeviceConfig;

/// Network role of the device, transmitted as `"0"` / `"1"`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum WifiMode {
    #[default]
    #[serde(rename = "0")]
    Station,
    #[serde(rename = "1")]
    AccessPoint,
}

impl WifiMode {
    /// Only the literal `"1"` selects access point mode; anything else, including
    /// an absent value, falls back to station mode.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("1") => Self::AccessPoint,
            _ => Self::Station,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Station => "0",
            Self::AccessPoint => "1",
        }
    }
}

/// Full device configuration as sent with the `configfile` command.
///
/// Field order matches the wire order of the command object. Every value is
/// string-typed on the wire, including pins and timings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigRecord {
    pub ssid: String,
    #[serde(rename = "wmode")]
    pub mode: WifiMode,
    #[serde(rename = "pswd")]
    pub password: String,
    #[serde(rename = "sspin")]
    pub sensor_pin: String,
    #[serde(rename = "rfidgain")]
    pub rfid_gain: String,
    #[serde(rename = "rpin")]
    pub relay_pin: String,
    #[serde(rename = "rtime")]
    pub relay_time_ms: String,
}

/// Text controls of the configuration form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Ssid,
    Password,
    SensorPin,
    RfidGain,
    RelayPin,
    RelayTime,
}

/// Values currently shown in the configuration form.
///
/// `ssid` is the manual entry text field. Whether it is used on save depends on
/// the scan selection mode, see [`crate::types::ScanState::current_selected_ssid`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigForm {
    pub ssid: String,
    pub password: String,
    pub sensor_pin: String,
    pub rfid_gain: String,
    pub relay_pin: String,
    pub relay_time_ms: String,
    pub access_point: bool,
}

impl ConfigForm {
    /// Copy device values into the form.
    ///
    /// Absent fields leave their control untouched. The mode checkbox is always
    /// written: it is checked exactly when the device reports `wmode == "1"`.
    pub fn hydrate(&mut self, config: DeviceConfig) {
        let DeviceConfig {
            ssid,
            password,
            sensor_pin,
            rfid_gain,
            relay_pin,
            relay_time_ms,
            mode,
        } = config;

        for (control, value) in [
            (&mut self.ssid, ssid),
            (&mut self.password, password),
            (&mut self.sensor_pin, sensor_pin),
            (&mut self.rfid_gain, rfid_gain),
            (&mut self.relay_pin, relay_pin),
            (&mut self.relay_time_ms, relay_time_ms),
        ] {
            if let Some(value) = value {
                *control = value;
            }
        }

        self.access_point = WifiMode::from_wire(mode.as_deref()) == WifiMode::AccessPoint;
    }

    /// Build the record to send, taking the SSID from the caller since it may
    /// come from the scan dropdown rather than the text field.
    pub fn collect(&self, ssid: String) -> ConfigRecord {
        ConfigRecord {
            ssid,
            mode: self.mode(),
            password: self.password.clone(),
            sensor_pin: self.sensor_pin.clone(),
            rfid_gain: self.rfid_gain.clone(),
            relay_pin: self.relay_pin.clone(),
            relay_time_ms: self.relay_time_ms.clone(),
        }
    }

    pub fn mode(&self) -> WifiMode {
        if self.access_point {
            WifiMode::AccessPoint
        } else {
            WifiMode::Station
        }
    }

    /// Set a text control. Returns `true` if the value changed.
    pub fn set(&mut self, field: FormField, value: String) -> bool {
        let control = match field {
            FormField::Ssid => &mut self.ssid,
            FormField::Password => &mut self.password,
            FormField::SensorPin => &mut self.sensor_pin,
            FormField::RfidGain => &mut self.rfid_gain,
            FormField::RelayPin => &mut self.relay_pin,
            FormField::RelayTime => &mut self.relay_time_ms,
        };

        if *control == value {
            return false;
        }
        *control = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device_config(wmode: Option<&str>) -> DeviceConfig {
        DeviceConfig {
            ssid: Some("HomeNet".to_string()),
            password: Some("hunter22".to_string()),
            sensor_pin: Some("4".to_string()),
            rfid_gain: Some("32".to_string()),
            relay_pin: Some("5".to_string()),
            relay_time_ms: Some("400".to_string()),
            mode: wmode.map(str::to_string),
        }
    }

    #[test]
    fn wifi_mode_serializes_as_string_literal() {
        assert_eq!(serde_json::to_string(&WifiMode::Station).unwrap(), "\"0\"");
        assert_eq!(serde_json::to_string(&WifiMode::AccessPoint).unwrap(), "\"1\"");
    }

    #[test]
    fn wifi_mode_from_wire_only_accepts_one_as_access_point() {
        assert_eq!(WifiMode::from_wire(Some("1")), WifiMode::AccessPoint);
        assert_eq!(WifiMode::from_wire(Some("0")), WifiMode::Station);
        assert_eq!(WifiMode::from_wire(Some("2")), WifiMode::Station);
        assert_eq!(WifiMode::from_wire(None), WifiMode::Station);
    }

    #[test]
    fn hydrate_fills_every_control() {
        let mut form = ConfigForm::default();

        form.hydrate(device_config(Some("1")));

        assert_eq!(form.ssid, "HomeNet");
        assert_eq!(form.password, "hunter22");
        assert_eq!(form.sensor_pin, "4");
        assert_eq!(form.rfid_gain, "32");
        assert_eq!(form.relay_pin, "5");
        assert_eq!(form.relay_time_ms, "400");
        assert!(form.access_point);
    }

    #[test]
    fn hydrate_leaves_absent_fields_untouched() {
        let mut form = ConfigForm {
            relay_time_ms: "250".to_string(),
            ..Default::default()
        };

        form.hydrate(DeviceConfig {
            ssid: Some("HomeNet".to_string()),
            ..Default::default()
        });

        assert_eq!(form.ssid, "HomeNet");
        assert_eq!(form.relay_time_ms, "250");
        assert_eq!(form.password, "");
        assert!(!form.access_point);
    }

    #[test]
    fn hydrate_resets_access_point_for_station_mode() {
        let mut form = ConfigForm {
            access_point: true,
            ..Default::default()
        };

        form.hydrate(device_config(Some("0")));

        assert!(!form.access_point);
        assert_eq!(form.collect(form.ssid.clone()).mode, WifiMode::Station);
    }

    #[test]
    fn collect_after_hydrate_reproduces_record() {
        let mut form = ConfigForm::default();
        form.hydrate(device_config(Some("1")));

        let record = form.collect(form.ssid.clone());

        assert_eq!(
            record,
            ConfigRecord {
                ssid: "HomeNet".to_string(),
                mode: WifiMode::AccessPoint,
                password: "hunter22".to_string(),
                sensor_pin: "4".to_string(),
                rfid_gain: "32".to_string(),
                relay_pin: "5".to_string(),
                relay_time_ms: "400".to_string(),
            }
        );
    }

    #[test]
    fn set_reports_whether_value_changed() {
        let mut form = ConfigForm::default();

        assert!(form.set(FormField::RelayTime, "300".to_string()));
        assert!(!form.set(FormField::RelayTime, "300".to_string()));
        assert_eq!(form.relay_time_ms, "300");
    }
}
