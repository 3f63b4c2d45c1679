use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    model::{
        gesture::{CancelPolicy, SwipeThresholds},
        header::HeaderThresholds,
    },
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// User config file names, in priority order (later sources override earlier ones)
const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub pin_threshold: f64,
    pub archive_threshold: f64,
    pub delete_threshold: f64,
    pub cancel_policy: CancelPolicy,
    /// Logical units per terminal column of mouse drag
    pub units_per_column: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        let thresholds = SwipeThresholds::default();
        Self {
            pin_threshold: thresholds.pin,
            archive_threshold: thresholds.archive,
            delete_threshold: thresholds.delete,
            cancel_policy: CancelPolicy::default(),
            units_per_column: 8.0,
        }
    }
}

impl GestureConfig {
    /// Configured swipe thresholds, or the defaults when they are inconsistent
    pub fn thresholds(&self) -> SwipeThresholds {
        let thresholds = SwipeThresholds {
            pin: self.pin_threshold,
            archive: self.archive_threshold,
            delete: self.delete_threshold,
        };
        if thresholds.is_valid() {
            thresholds
        } else {
            log::warn!("Invalid swipe thresholds {thresholds:?}, using defaults");
            SwipeThresholds::default()
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub fade_start: f64,
    pub fade_end: f64,
    pub displacement_factor: f64,
    pub max_displacement: f64,
    /// Scroll offset change per mouse wheel notch
    pub scroll_step: f64,
    /// Logical units per terminal line of list content
    pub units_per_line: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        let thresholds = HeaderThresholds::default();
        Self {
            fade_start: thresholds.fade_start,
            fade_end: thresholds.fade_end,
            displacement_factor: thresholds.displacement_factor,
            max_displacement: thresholds.max_displacement,
            scroll_step: 10.0,
            units_per_line: 10.0,
        }
    }
}

impl HeaderConfig {
    pub fn thresholds(&self) -> HeaderThresholds {
        let thresholds = HeaderThresholds {
            fade_start: self.fade_start,
            fade_end: self.fade_end,
            displacement_factor: self.displacement_factor,
            max_displacement: self.max_displacement,
        };
        if thresholds.is_valid() {
            thresholds
        } else {
            log::warn!("Invalid header thresholds {thresholds:?}, using defaults");
            HeaderThresholds::default()
        }
    }

    pub fn units_per_line(&self) -> f64 {
        if self.units_per_line > 0.0 {
            self.units_per_line
        } else {
            Self::default().units_per_line
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Answer given to camera permission requests
    pub camera_access: bool,
    /// Ring the terminal bell on heavy haptic feedback
    pub bell_on_heavy: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            camera_access: true,
            bell_on_heavy: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub device: DeviceConfig,
}

impl Config {
    /// Load the embedded defaults overlaid with any user config file
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(&utils::get_config_dir())
    }

    pub fn from_dir(config_dir: &std::path::Path) -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        builder.build()?.try_deserialize()
    }

    pub fn config_dir(&self) -> &std::path::Path {
        &self.config._config_dir
    }
}
