//! Bitacora: training artifact logger
//!
//! Persists what a training loop wants to look at later: sample images per
//! epoch/iteration, an optional HTML gallery, and a human-readable loss log.
//!
//! # Layout
//!
//! ```text
//! {checkpoints_dir}/{name}/images/epoch{NNN}_iter{NNN}_{label}.png
//! {checkpoints_dir}/{name}/loss_log.txt
//! ```
//!
//! # Example
//!
//! ```no_run
//! use bitacora::{LossSet, VisualSet, Visualizer, VisualizerConfig};
//! use ndarray::Array3;
//!
//! # fn main() -> bitacora::Result<()> {
//! let config = VisualizerConfig::new("facades").with_checkpoints_dir("./checkpoints");
//! let mut visualizer = Visualizer::new(&config)?;
//!
//! let fake_b = Array3::<f32>::zeros((3, 64, 64));
//! let visuals = VisualSet::new().with("fake_B", &fake_b);
//! visualizer.display_current_results(&visuals, 1, 100, true)?;
//!
//! let losses = LossSet::new().with("G_GAN", 0.693).with("D_real", 0.41);
//! visualizer.print_current_losses(1, 100, &losses, 0.052, 0.004)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod raster;
pub mod visualizer;
pub mod visuals;

pub use config::{load_config, validate_config, ValidationError, VisualizerConfig};
pub use error::{Error, Result};
pub use html::{HtmlPage, IndexBuilder};
pub use raster::{
    save_image, tensor_to_image, ColorMode, DimOrder, DisplayImage, ImageSource, Normalization,
    TensorView,
};
pub use visualizer::{
    format_losses, save_images, save_iteration_images, LossLog, SaveOptions, Visualizer,
};
pub use visuals::{LossSet, VisualSet};
