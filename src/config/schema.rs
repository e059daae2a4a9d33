//! YAML schema for the visualizer configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::raster::Normalization;

/// Sub-directory of the experiment directory holding epoch snapshots
pub const IMAGE_DIR_NAME: &str = "images";

/// File name of the append-only loss log
pub const LOSS_LOG_NAME: &str = "loss_log.txt";

/// Experiment settings consumed by [`Visualizer`](crate::Visualizer)
///
/// ```yaml
/// name: facades_pix2pix
/// checkpoints_dir: ./checkpoints
/// normalization: signed_unit
/// aspect_ratio: 1.0
/// display_width: 512
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Experiment name; becomes a directory under `checkpoints_dir`
    pub name: String,

    /// Root directory shared by all experiments
    #[serde(default = "default_checkpoints_dir")]
    pub checkpoints_dir: PathBuf,

    /// How raw tensor values map to 8-bit pixels
    #[serde(default)]
    pub normalization: Normalization,

    /// Output aspect ratio (width / height) for gallery images
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f32,

    /// Display width of gallery images in pixels
    #[serde(default = "default_display_width")]
    pub display_width: u32,
}

fn default_checkpoints_dir() -> PathBuf {
    PathBuf::from("./checkpoints")
}

fn default_aspect_ratio() -> f32 {
    1.0
}

fn default_display_width() -> u32 {
    512
}

impl VisualizerConfig {
    /// Create a configuration with defaults for everything but the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checkpoints_dir: default_checkpoints_dir(),
            normalization: Normalization::default(),
            aspect_ratio: default_aspect_ratio(),
            display_width: default_display_width(),
        }
    }

    /// Set the checkpoint root directory
    pub fn with_checkpoints_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.checkpoints_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the pixel normalization
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Set the gallery aspect ratio
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set the gallery display width
    pub fn with_display_width(mut self, width: u32) -> Self {
        self.display_width = width;
        self
    }

    /// `{checkpoints_dir}/{name}`
    pub fn experiment_dir(&self) -> PathBuf {
        self.checkpoints_dir.join(&self.name)
    }

    /// `{checkpoints_dir}/{name}/images`
    pub fn image_dir(&self) -> PathBuf {
        self.experiment_dir().join(IMAGE_DIR_NAME)
    }

    /// `{checkpoints_dir}/{name}/loss_log.txt`
    pub fn log_path(&self) -> PathBuf {
        self.experiment_dir().join(LOSS_LOG_NAME)
    }
}
