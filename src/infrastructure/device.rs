//! Device capabilities: haptic feedback and camera access
//!
//! A terminal has neither, so the implementations here log, optionally
//! ring the bell, and answer camera requests from config.

use std::io::Write;
use std::sync::{Arc, Mutex};

use color_eyre::eyre::{eyre, Result};
use futures::future::BoxFuture;

use crate::{infrastructure::config::DeviceConfig, model::gesture::HapticIntensity};

/// Fire-and-forget tactile feedback
pub trait Haptics: Send + Sync {
    fn emit(&self, intensity: HapticIntensity) -> Result<()>;
}

pub trait CameraAccess: Send + Sync {
    /// Resolves to `true` when access was granted
    fn request(&self) -> BoxFuture<'_, Result<bool>>;
}

#[derive(Debug, Clone, Default)]
pub struct LogHaptics {
    bell_on_heavy: bool,
}

impl LogHaptics {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            bell_on_heavy: config.bell_on_heavy,
        }
    }
}

impl Haptics for LogHaptics {
    fn emit(&self, intensity: HapticIntensity) -> Result<()> {
        log::debug!("haptic feedback: {intensity}");
        if self.bell_on_heavy && intensity == HapticIntensity::Heavy {
            let mut stdout = std::io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }
}

/// Records every pulse; can be told to fail for tests of the failure path
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    pulses: Arc<Mutex<Vec<HapticIntensity>>>,
    failing: bool,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn pulses(&self) -> Vec<HapticIntensity> {
        self.pulses
            .lock()
            .map(|pulses| pulses.clone())
            .unwrap_or_default()
    }
}

impl Haptics for RecordingHaptics {
    fn emit(&self, intensity: HapticIntensity) -> Result<()> {
        if let Ok(mut pulses) = self.pulses.lock() {
            pulses.push(intensity);
        }
        if self.failing {
            return Err(eyre!("haptic engine unavailable"));
        }
        Ok(())
    }
}

/// Answers every request with the configured decision
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredCameraAccess {
    granted: bool,
}

impl ConfiguredCameraAccess {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

impl From<&DeviceConfig> for ConfiguredCameraAccess {
    fn from(config: &DeviceConfig) -> Self {
        Self::new(config.camera_access)
    }
}

impl CameraAccess for ConfiguredCameraAccess {
    fn request(&self) -> BoxFuture<'_, Result<bool>> {
        let granted = self.granted;
        Box::pin(async move {
            log::info!("camera access {}", if granted { "granted" } else { "denied" });
            Ok(granted)
        })
    }
}
