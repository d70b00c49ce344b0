use serde::{Deserialize, Serialize};

/// Where the SSID sent on save comes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScanSelectionMode {
    /// Free text field.
    #[default]
    ManualEntry,
    /// Dropdown of scan results. Entered on the first scan and never left.
    DropdownSelect,
}

pub const SCAN_LABEL_IDLE: &str = "Scan";
pub const SCAN_LABEL_BUSY: &str = "...";
pub const SCAN_LABEL_RESCAN: &str = "Re-Scan";

/// Network scan sub-state of the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanState {
    pub mode: ScanSelectionMode,
    /// Scan results in the order the device reported them.
    pub results: Vec<String>,
    /// Index into `results` of the chosen entry.
    pub selected: Option<usize>,
    pub is_scanning: bool,
    /// Scans requested whose `ssidlist` reply has not arrived yet.
    pub pending_scans: u32,
    pub button_label: String,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            mode: ScanSelectionMode::ManualEntry,
            results: Vec::new(),
            selected: None,
            is_scanning: false,
            pending_scans: 0,
            button_label: SCAN_LABEL_IDLE.to_string(),
        }
    }
}

impl ScanState {
    /// Drop previous results and switch to the dropdown, waiting for `ssidlist`.
    ///
    /// `requested` tells whether a `scan` command actually went out; only those
    /// scans expect a reply.
    pub fn begin(&mut self, requested: bool) {
        self.results.clear();
        self.selected = None;
        self.is_scanning = true;
        if requested {
            self.pending_scans = self.pending_scans.saturating_add(1);
        }
        self.mode = ScanSelectionMode::DropdownSelect;
        self.button_label = SCAN_LABEL_BUSY.to_string();
    }

    /// Show the reported networks, one entry each. The first entry becomes the
    /// selection, like a fresh `<select>`.
    ///
    /// Replies are matched to scans by arrival order only. While more than one
    /// scan is outstanding the reply belongs to an earlier scan and is dropped.
    /// Returns `false` in that case.
    pub fn populate(&mut self, ssids: Vec<String>) -> bool {
        if self.pending_scans > 1 {
            self.pending_scans -= 1;
            return false;
        }

        self.pending_scans = 0;
        self.results = ssids;
        self.selected = if self.results.is_empty() { None } else { Some(0) };
        self.is_scanning = false;
        self.button_label = SCAN_LABEL_RESCAN.to_string();
        true
    }

    /// Select a scan result by name. Returns `false` if it is not in the list.
    pub fn select(&mut self, ssid: &str) -> bool {
        match self.results.iter().position(|entry| entry == ssid) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// SSID to send on save: the manual text in manual mode, otherwise the chosen
    /// dropdown entry (empty while no result is available).
    pub fn current_selected_ssid(&self, manual: &str) -> String {
        match self.mode {
            ScanSelectionMode::ManualEntry => manual.to_string(),
            ScanSelectionMode::DropdownSelect => self
                .selected
                .and_then(|index| self.results.get(index))
                .cloned()
                .unwrap_or_default(),
        }
    }
}
