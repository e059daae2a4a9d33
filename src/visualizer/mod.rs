//! Training artifact logger
//!
//! [`Visualizer`] owns the per-experiment layout: epoch snapshots under
//! `images/` and the running `loss_log.txt`. [`save_images`] and
//! [`save_iteration_images`] write image sets anywhere without touching
//! logger state.
//!
//! # Example
//!
//! ```no_run
//! use bitacora::{LossSet, VisualSet, Visualizer, VisualizerConfig};
//! use ndarray::Array3;
//!
//! # fn main() -> bitacora::Result<()> {
//! let mut visualizer = Visualizer::new(&VisualizerConfig::new("edges2shoes"))?;
//! let real = Array3::<f32>::zeros((3, 32, 32));
//!
//! for epoch in 1..=2 {
//!     visualizer.reset();
//!     for iter in 0..100 {
//!         let visuals = VisualSet::new().with("real_A", &real);
//!         // only the first call of the epoch and every 25th iteration write
//!         visualizer.display_current_results(&visuals, epoch, iter, iter % 25 == 0)?;
//!
//!         let losses = LossSet::new().with("G_L1", 0.12);
//!         visualizer.print_current_losses(epoch, iter, &losses, 0.031, 0.002)?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod loss_log;
mod save;

#[cfg(test)]
mod tests;

pub use loss_log::{session_header, LossLog};
pub use save::{
    epoch_image_name, iteration_image_name, sample_base_name, save_images,
    save_iteration_images, SaveOptions,
};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{validate_config, VisualizerConfig};
use crate::error::{Error, Result};
use crate::raster::{save_image, tensor_to_image, Normalization};
use crate::visuals::{LossSet, VisualSet};

/// Per-experiment image and loss logger
///
/// Not synchronized: call it from the training loop thread only.
#[derive(Debug)]
pub struct Visualizer {
    name: String,
    img_dir: PathBuf,
    log: LossLog,
    normalization: Normalization,
    saved: bool,
}

impl Visualizer {
    /// Create `{checkpoints_dir}/{name}/images` and start a session in the loss log
    pub fn new(config: &VisualizerConfig) -> Result<Self> {
        validate_config(config)?;

        let img_dir = config.image_dir();
        fs::create_dir_all(&img_dir)
            .map_err(|e| Error::io(format!("creating image directory {}", img_dir.display()), e))?;

        let loss_log = LossLog::open(config.log_path())?;
        log::info!(
            "Visualizer '{}': images in {}, losses in {}",
            config.name,
            img_dir.display(),
            loss_log.path().display()
        );

        Ok(Self {
            name: config.name.clone(),
            img_dir,
            log: loss_log,
            normalization: config.normalization,
            saved: false,
        })
    }

    /// Forget that results were saved, so the next display call writes
    pub fn reset(&mut self) {
        self.saved = false;
    }

    /// Whether a snapshot has been written since the last [`reset`](Self::reset)
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_dir(&self) -> &Path {
        &self.img_dir
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Path a snapshot image for (epoch, iter, label) is written to
    pub fn image_path(&self, epoch: usize, iter: usize, label: &str) -> PathBuf {
        self.img_dir.join(epoch_image_name(epoch, iter, label))
    }

    /// Write `visuals` as `epoch{NNN}_iter{NNN}_{label}.png` snapshots
    ///
    /// Writes when `save_result` is set or nothing was saved since the last
    /// reset; otherwise does nothing. The saved flag is only raised once the
    /// whole set is on disk.
    pub fn display_current_results(
        &mut self,
        visuals: &VisualSet<'_>,
        epoch: usize,
        iter: usize,
        save_result: bool,
    ) -> Result<()> {
        if !save_result && self.saved {
            return Ok(());
        }

        for (label, image) in visuals.iter() {
            let display = tensor_to_image(image, self.normalization)?;
            save_image(&display, self.image_path(epoch, iter, label), 1.0)?;
        }
        log::debug!("Saved {} snapshot image(s) for epoch {epoch}, iter {iter}", visuals.len());

        self.saved = true;
        Ok(())
    }

    /// Print a loss line to stdout and append it to the loss log
    ///
    /// `t_comp` and `t_data` are per-sample compute and data loading times.
    pub fn print_current_losses(
        &self,
        epoch: usize,
        iters: usize,
        losses: &LossSet,
        t_comp: f64,
        t_data: f64,
    ) -> Result<()> {
        let message = format_losses(epoch, iters, losses, t_comp, t_data);
        println!("{message}");
        self.log.append(&message)
    }
}

/// `(epoch: E, iters: I, time: T, data: D) name: value ...` with three decimals
///
/// Every field, including the last loss, is followed by a single space.
pub fn format_losses(epoch: usize, iters: usize, losses: &LossSet, t_comp: f64, t_data: f64) -> String {
    let mut message = format!("(epoch: {epoch}, iters: {iters}, time: {t_comp:.3}, data: {t_data:.3}) ");
    for (name, value) in losses.iter() {
        message.push_str(&format!("{name}: {value:.3} "));
    }
    message
}
