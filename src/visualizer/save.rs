//! Writing labeled image sets outside the per-epoch snapshot flow

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::html::IndexBuilder;
use crate::raster::{save_image, tensor_to_image, Normalization};
use crate::visuals::VisualSet;

/// Options for [`save_images`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOptions {
    /// Output aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Display width registered with the index builder
    pub width: u32,
    pub normalization: Normalization,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { aspect_ratio: 1.0, width: 512, normalization: Normalization::default() }
    }
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// `epoch{NNN}_iter{NNN}_{label}.png`
pub fn epoch_image_name(epoch: usize, iter: usize, label: &str) -> String {
    format!("epoch{epoch:03}_iter{iter:03}_{label}.png")
}

/// `iter{NNN}_{label}.png`
pub fn iteration_image_name(iter: usize, label: &str) -> String {
    format!("iter{iter:03}_{label}.png")
}

/// File stem of the first path: `data/test/0042.jpg` becomes `0042`
pub fn sample_base_name<P: AsRef<Path>>(image_paths: &[P]) -> Result<String> {
    let first = image_paths.first().ok_or(Error::MissingImagePath)?;
    first
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or(Error::MissingImagePath)
}

/// Save the images of one sample as `{image_dir}/{base}_{label}.png`
///
/// `base` is derived from the first of `image_paths`. When `index` is given,
/// a section titled `base` is added before any file is written (also for an
/// empty set), followed by one row listing every written file.
pub fn save_images<P: AsRef<Path>>(
    image_dir: impl AsRef<Path>,
    visuals: &VisualSet<'_>,
    image_paths: &[P],
    mut index: Option<&mut dyn IndexBuilder>,
    options: &SaveOptions,
) -> Result<()> {
    let image_dir = image_dir.as_ref();
    let name = sample_base_name(image_paths)?;

    if let Some(index) = index.as_deref_mut() {
        index.add_header(&name);
    }

    let mut ims = Vec::with_capacity(visuals.len());
    let mut txts = Vec::with_capacity(visuals.len());
    let mut links = Vec::with_capacity(visuals.len());
    for (label, image) in visuals.iter() {
        let display = tensor_to_image(image, options.normalization)?;
        let image_name = format!("{name}_{label}.png");
        save_image(&display, image_dir.join(&image_name), options.aspect_ratio)?;

        ims.push(image_name.clone());
        txts.push(label.to_string());
        links.push(image_name);
    }

    if let Some(index) = index {
        if !ims.is_empty() {
            index.add_images(&ims, &txts, &links, options.width);
        }
    }

    Ok(())
}

/// Save the images of one iteration as `{output_dir}/iter{NNN}_{label}.png`
///
/// Creates `output_dir` if needed. Saving the same iteration again overwrites.
pub fn save_iteration_images(
    output_dir: impl AsRef<Path>,
    visuals: &VisualSet<'_>,
    iter: usize,
    normalization: Normalization,
) -> Result<()> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)
        .map_err(|e| Error::io(format!("creating {}", output_dir.display()), e))?;

    for (label, image) in visuals.iter() {
        let display = tensor_to_image(image, normalization)?;
        save_image(&display, output_dir.join(iteration_image_name(iter, label)), 1.0)?;
    }

    Ok(())
}
