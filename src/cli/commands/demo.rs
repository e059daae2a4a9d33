//! Demo command: a synthetic training loop driving every logger operation

use ndarray::Array3;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, DemoArgs, VisualizerConfig};
use crate::html::HtmlPage;
use crate::visualizer::{save_images, SaveOptions, Visualizer};
use crate::visuals::{LossSet, VisualSet};

const IMAGE_SIZE: usize = 32;

/// Target image: diagonal stripes in [-1, 1]
fn target_image() -> Array3<f32> {
    Array3::from_shape_fn((3, IMAGE_SIZE, IMAGE_SIZE), |(c, y, x)| {
        if (x + y + c * 4) / 8 % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    })
}

/// "Generator output" moving from a flat gradient toward `target` as `progress` goes 0 → 1
fn generated_image(target: &Array3<f32>, progress: f32) -> Array3<f32> {
    Array3::from_shape_fn(target.dim(), |(c, y, x)| {
        let start = (x as f32 / IMAGE_SIZE as f32) * 2.0 - 1.0;
        (1.0 - progress) * start + progress * target[[c, y, x]]
    })
}

/// Synthetic data step; returns the batch and the seconds spent building it
fn load_batch() -> (Array3<f32>, f64) {
    let start = Instant::now();
    let batch = target_image();
    (batch, start.elapsed().as_secs_f64())
}

fn l1_distance(a: &Array3<f32>, b: &Array3<f32>) -> f32 {
    let total: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
    total / a.len() as f32
}

fn synthetic_losses(fake: &Array3<f32>, real: &Array3<f32>, progress: f32) -> LossSet {
    LossSet::new()
        .with("G_GAN", 0.7 + 0.3 * (1.0 - progress))
        .with("G_L1", l1_distance(fake, real))
        .with("D_real", 0.69 * progress)
        .with("D_fake", 0.69 * (1.0 - progress))
}

fn write_gallery(
    config: &VisualizerConfig,
    visuals: &VisualSet<'_>,
    sample: &Path,
) -> crate::Result<PathBuf> {
    let mut page = HtmlPage::new(
        config.experiment_dir().join("web"),
        format!("Experiment = {}", config.name),
        0,
    )?;
    let image_dir = page.image_dir().to_path_buf();
    let options = SaveOptions::new()
        .with_aspect_ratio(config.aspect_ratio)
        .with_width(config.display_width)
        .with_normalization(config.normalization);

    save_images(&image_dir, visuals, &[sample], Some(&mut page), &options)?;
    page.save()
}

pub fn run_demo(args: DemoArgs, level: LogLevel) -> Result<(), String> {
    let mut config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    if let Some(dir) = args.output_dir {
        config.checkpoints_dir = dir;
    }

    let mut visualizer = Visualizer::new(&config).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("Logging to {}", config.experiment_dir().display()),
    );

    let real = target_image();
    let mut fake = generated_image(&real, 0.0);
    let total_steps = (args.epochs * args.iters).max(1) as f32;

    for epoch in 1..=args.epochs {
        visualizer.reset();
        for iter in 0..args.iters {
            let (batch, t_data) = load_batch();

            let step = ((epoch - 1) * args.iters + iter + 1) as f32;
            let progress = step / total_steps;
            let comp_start = Instant::now();
            fake = generated_image(&batch, progress);
            let t_comp = comp_start.elapsed().as_secs_f64();

            let visuals = VisualSet::new().with("real_B", &batch).with("fake_B", &fake);
            let force = iter as u64 % args.display_freq == 0;
            visualizer
                .display_current_results(&visuals, epoch, iter, force)
                .map_err(|e| e.to_string())?;

            if iter as u64 % args.print_freq == 0 {
                let losses = synthetic_losses(&fake, &batch, progress);
                visualizer
                    .print_current_losses(epoch, iter, &losses, t_comp, t_data)
                    .map_err(|e| e.to_string())?;
            }
        }
        log(level, LogLevel::Verbose, &format!("End of epoch {epoch}"));
    }

    let visuals = VisualSet::new().with("real_B", &real).with("fake_B", &fake);
    let sample = format!("sample_{:03}", args.epochs);
    let index = write_gallery(&config, &visuals, Path::new(&sample)).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("Gallery written to {}", index.display()),
    );

    Ok(())
}
