use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Device channel
    pub connection: Connection,

    // Configuration form, hydrated from the device
    pub form: ConfigForm,

    // Network scan sub-state
    pub scan: ScanState,

    // Loading indicator, shown until the device has sent its configuration
    pub is_loading: bool,
}

impl Model {
    /// Record to send on save: form values plus the SSID picked by the scan flow.
    pub fn collect(&self) -> ConfigRecord {
        self.form.collect(self.scan.current_selected_ssid(&self.form.ssid))
    }
}
