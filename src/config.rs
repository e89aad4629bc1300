mod config_validator;
pub mod raw_config;

use std::{io, path::Path};

pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

const APP_NAME: &str = "relayout";
const CONFIG_FILE: &str = "config";

/// One keyboard layout enabled as a conversion candidate, as enumerated by
/// the OS keyboard-layout collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnabledLayout {
    pub id: String,
    pub display_name: String,
}

impl EnabledLayout {
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// What happens when the conversion hotkey fires without a selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SmartConversionMode {
    Disabled,
    LastWord,
    #[default]
    GreedyLine,
}

/// Whether the OS layout is flipped after a conversion. Persisted here and
/// read by the layout-switch collaborator; the engine never interprets it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSwitchMode {
    #[default]
    Always,
    IfLastWordConverted,
    IfAnyWordConverted,
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    enabled_layouts: Vec<EnabledLayout>,
    smart_conversion_mode: SmartConversionMode,
    layout_switch_mode: LayoutSwitchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled_layouts: default_enabled_layouts(),
            smart_conversion_mode: SmartConversionMode::default(),
            layout_switch_mode: LayoutSwitchMode::default(),
        }
    }
}

pub(crate) fn default_enabled_layouts() -> Vec<EnabledLayout> {
    vec![
        EnabledLayout::new("com.apple.keylayout.US", "U.S."),
        EnabledLayout::new("com.apple.keylayout.Russian", "Russian"),
    ]
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

pub fn load() -> io::Result<Config> {
    confy::load(APP_NAME, CONFIG_FILE).map_err(confy_err)
}

pub fn save(cfg: &Config) -> io::Result<()> {
    confy::store(APP_NAME, CONFIG_FILE, cfg).map_err(confy_err)
}

/// Explicit-path variants, used by tests and by callers that manage their
/// own config location.
pub fn load_from(path: &Path) -> io::Result<Config> {
    confy::load_path(path).map_err(confy_err)
}

pub fn save_to(path: &Path, cfg: &Config) -> io::Result<()> {
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        raw.validate_enabled_layouts()?;

        Ok(Self {
            enabled_layouts: raw.enabled_layouts,
            smart_conversion_mode: raw.smart_conversion_mode,
            layout_switch_mode: raw.layout_switch_mode,
        })
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    pub fn enabled_layouts(&self) -> &[EnabledLayout] {
        &self.enabled_layouts
    }

    /// Snapshot of enabled layout ids in configured order, in the shape the
    /// engine operations take.
    pub fn enabled_layout_ids(&self) -> Vec<&str> {
        self.enabled_layouts.iter().map(|l| l.id.as_str()).collect()
    }

    pub fn set_enabled_layouts(&mut self, layouts: Vec<EnabledLayout>) {
        self.enabled_layouts = layouts;
    }

    pub fn smart_conversion_mode(&self) -> SmartConversionMode {
        self.smart_conversion_mode
    }

    pub fn set_smart_conversion_mode(&mut self, mode: SmartConversionMode) {
        self.smart_conversion_mode = mode;
    }

    pub fn layout_switch_mode(&self) -> LayoutSwitchMode {
        self.layout_switch_mode
    }

    pub fn set_layout_switch_mode(&mut self, mode: LayoutSwitchMode) {
        self.layout_switch_mode = mode;
    }
}
