use serde::Deserialize;

use super::{EnabledLayout, LayoutSwitchMode, SmartConversionMode, default_enabled_layouts};

/// On-disk shape of the configuration, before validation. Turned into
/// [`super::Config`] via `TryFrom`, so an invalid file fails to deserialize
/// instead of producing a half-valid config.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    #[serde(default = "default_enabled_layouts")]
    pub enabled_layouts: Vec<EnabledLayout>,
    #[serde(default)]
    pub smart_conversion_mode: SmartConversionMode,
    #[serde(default)]
    pub layout_switch_mode: LayoutSwitchMode,
}
