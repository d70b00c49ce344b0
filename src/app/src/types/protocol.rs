//! Command messages exchanged with the device firmware.
//!
//! Both directions are JSON objects tagged by their `command` field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::config::ConfigRecord;

/// Commands sent to the device. None of them is acknowledged.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "command")]
pub enum DeviceCommand {
    #[serde(rename = "getconf")]
    GetConfig,
    #[serde(rename = "scan")]
    Scan,
    #[serde(rename = "testrelay")]
    TestRelay,
    #[serde(rename = "configfile")]
    SaveConfig(ConfigRecord),
}

impl DeviceCommand {
    /// Wire tag of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetConfig => "getconf",
            Self::Scan => "scan",
            Self::TestRelay => "testrelay",
            Self::SaveConfig(_) => "configfile",
        }
    }
}

/// Messages pushed by the device.
///
/// Commands this client does not know about land in `Unknown` and are ignored,
/// so newer firmware can add messages without breaking older pages.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "command")]
pub enum DeviceMessage {
    #[serde(rename = "ssidlist")]
    SsidList {
        #[serde(default)]
        ssid: Vec<String>,
    },
    #[serde(rename = "configfile")]
    Config(DeviceConfig),
    #[serde(other)]
    Unknown,
}

/// Configuration as reported by the device.
///
/// Nothing here is required: missing fields stay `None` and are simply not
/// applied to the form. Scalars may arrive as JSON strings or numbers.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub ssid: Option<String>,
    #[serde(default, rename = "pswd", deserialize_with = "scalar_as_string")]
    pub password: Option<String>,
    #[serde(default, rename = "sspin", deserialize_with = "scalar_as_string")]
    pub sensor_pin: Option<String>,
    #[serde(default, rename = "rfidgain", deserialize_with = "scalar_as_string")]
    pub rfid_gain: Option<String>,
    #[serde(default, rename = "rpin", deserialize_with = "scalar_as_string")]
    pub relay_pin: Option<String>,
    #[serde(default, rename = "rtime", deserialize_with = "scalar_as_string")]
    pub relay_time_ms: Option<String>,
    #[serde(default, rename = "wmode", deserialize_with = "scalar_as_string")]
    pub mode: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    }))
}
