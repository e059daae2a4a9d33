//! Tests for the training artifact logger

use super::*;
use crate::config::ValidationError;
use crate::html::HtmlPage;
use crate::raster::ImageSource;
use ndarray::{Array2, Array3};
use std::path::Path;
use tempfile::TempDir;

fn setup(name: &str) -> (TempDir, Visualizer) {
    let dir = tempfile::tempdir().unwrap();
    let config = VisualizerConfig::new(name).with_checkpoints_dir(dir.path());
    let visualizer = Visualizer::new(&config).unwrap();
    (dir, visualizer)
}

fn gradient(channels: usize, size: usize) -> Array3<f32> {
    Array3::from_shape_fn((channels, size, size), |(_, y, x)| {
        (x + y) as f32 / (2 * size) as f32 * 2.0 - 1.0
    })
}

fn png_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

fn log_lines(visualizer: &Visualizer) -> Vec<String> {
    std::fs::read_to_string(visualizer.log_path())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_new_creates_layout() {
    let (dir, visualizer) = setup("facades");

    let exp = dir.path().join("facades");
    assert!(exp.join("images").is_dir());
    assert_eq!(visualizer.image_dir(), exp.join("images"));
    assert_eq!(visualizer.log_path(), exp.join("loss_log.txt"));
    assert_eq!(visualizer.name(), "facades");
    assert!(!visualizer.is_saved());

    let lines = log_lines(&visualizer);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("================ Training Loss ("));
}

#[test]
fn test_new_is_idempotent_on_existing_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let config = VisualizerConfig::new("again").with_checkpoints_dir(dir.path());

    let first = Visualizer::new(&config).unwrap();
    first.print_current_losses(1, 1, &LossSet::new().with("G", 1.0), 0.1, 0.1).unwrap();
    let second = Visualizer::new(&config).unwrap();

    // previous session kept, new header appended
    let lines = log_lines(&second);
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("================ Training Loss"));
}

#[test]
fn test_new_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = VisualizerConfig::new("../escape").with_checkpoints_dir(dir.path());
    assert!(matches!(Visualizer::new(&config), Err(Error::Validation(_))));
}

#[test]
fn test_display_writes_predicted_paths() {
    let (_dir, mut visualizer) = setup("exp");
    let real = gradient(3, 8);
    let fake = gradient(1, 8);
    let visuals = VisualSet::new().with("real_A", &real).with("fake_B", &fake);

    visualizer.display_current_results(&visuals, 3, 7, true).unwrap();

    assert_eq!(png_count(visualizer.image_dir()), 2);
    assert!(visualizer.image_dir().join("epoch003_iter007_real_A.png").is_file());
    assert!(visualizer.image_dir().join("epoch003_iter007_fake_B.png").is_file());
    assert!(visualizer.is_saved());
}

#[test]
fn test_display_without_force_is_noop_after_save() {
    let (_dir, mut visualizer) = setup("exp");
    let real = gradient(3, 4);
    let visuals = VisualSet::new().with("real", &real);

    visualizer.display_current_results(&visuals, 1, 1, true).unwrap();
    let path = visualizer.image_path(1, 1, "real");
    std::fs::remove_file(&path).unwrap();

    visualizer.display_current_results(&visuals, 1, 1, false).unwrap();
    visualizer.display_current_results(&visuals, 1, 2, false).unwrap();

    assert!(!path.exists());
    assert_eq!(png_count(visualizer.image_dir()), 0);
}

#[test]
fn test_first_display_writes_without_force() {
    let (_dir, mut visualizer) = setup("exp");
    let real = gradient(3, 4);
    let visuals = VisualSet::new().with("real", &real);

    visualizer.display_current_results(&visuals, 1, 0, false).unwrap();
    assert!(visualizer.image_path(1, 0, "real").is_file());
}

#[test]
fn test_reset_forces_next_write() {
    let (_dir, mut visualizer) = setup("exp");
    let real = gradient(3, 4);
    let visuals = VisualSet::new().with("real", &real);

    visualizer.display_current_results(&visuals, 1, 1, true).unwrap();
    visualizer.reset();
    assert!(!visualizer.is_saved());

    visualizer.display_current_results(&visuals, 2, 1, false).unwrap();
    assert!(visualizer.image_path(2, 1, "real").is_file());
    assert!(visualizer.is_saved());
}

#[test]
fn test_force_writes_every_time() {
    let (_dir, mut visualizer) = setup("exp");
    let real = gradient(3, 4);
    let visuals = VisualSet::new().with("real", &real);

    for iter in 0..3 {
        visualizer.display_current_results(&visuals, 1, iter, true).unwrap();
    }
    assert_eq!(png_count(visualizer.image_dir()), 3);
}

#[test]
fn test_failed_display_leaves_flag_clear() {
    let (_dir, mut visualizer) = setup("exp");
    let bad = Array3::<f32>::zeros((6, 2, 2));
    let visuals = VisualSet::new().with("bad", &bad);

    let err = visualizer.display_current_results(&visuals, 1, 1, false).unwrap_err();
    assert!(matches!(err, Error::UnsupportedChannels { channels: 6 }));
    assert!(!visualizer.is_saved());
}

#[test]
fn test_display_stops_at_first_failure() {
    let (_dir, mut visualizer) = setup("exp");
    let good = gradient(3, 4);
    let bad = Array3::<f32>::zeros((6, 2, 2));
    let visuals = VisualSet::new().with("good", &good).with("bad", &bad).with("late", &good);

    assert!(visualizer.display_current_results(&visuals, 1, 1, true).is_err());
    assert!(visualizer.image_path(1, 1, "good").is_file());
    assert!(!visualizer.image_path(1, 1, "late").exists());
}

#[test]
fn test_format_losses_exact_line() {
    let losses = LossSet::new().with("G", 1.2345).with("D", 0.5);
    let line = format_losses(3, 10, &losses, 0.100, 0.020);
    assert_eq!(line, "(epoch: 3, iters: 10, time: 0.100, data: 0.020) G: 1.235 D: 0.500 ");
}

#[test]
fn test_format_losses_empty_set() {
    let line = format_losses(1, 0, &LossSet::new(), 1.0, 0.0);
    assert_eq!(line, "(epoch: 1, iters: 0, time: 1.000, data: 0.000) ");
}

#[test]
fn test_print_current_losses_appends_line() {
    let (_dir, visualizer) = setup("exp");
    let losses = LossSet::new().with("G", 1.2345).with("D", 0.5);

    visualizer.print_current_losses(3, 10, &losses, 0.100, 0.020).unwrap();

    let lines = log_lines(&visualizer);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "(epoch: 3, iters: 10, time: 0.100, data: 0.020) G: 1.235 D: 0.500 ");
}

#[test]
fn test_log_is_append_only_in_call_order() {
    let (_dir, visualizer) = setup("exp");

    for i in 0..5 {
        let losses = LossSet::new().with("loss", i as f32);
        visualizer.print_current_losses(1, i * 10, &losses, 0.0, 0.0).unwrap();
    }

    let lines = log_lines(&visualizer);
    assert_eq!(lines.len(), 6);
    for (i, line) in lines[1..].iter().enumerate() {
        assert_eq!(line, &format_losses(1, i * 10, &LossSet::new().with("loss", i as f32), 0.0, 0.0));
    }
}

#[test]
fn test_print_losses_fails_when_log_dir_removed() {
    let (dir, visualizer) = setup("exp");
    std::fs::remove_dir_all(dir.path().join("exp")).unwrap();

    let err = visualizer.print_current_losses(1, 1, &LossSet::new(), 0.0, 0.0).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_save_iteration_images_creates_dir_and_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results").join("test_latest");
    let img = gradient(3, 4);
    let visuals = VisualSet::new().with("fake_B", &img);

    save_iteration_images(&out, &visuals, 5, Normalization::SignedUnit).unwrap();
    assert!(out.join("iter005_fake_B.png").is_file());
}

#[test]
fn test_save_iteration_images_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let white = Array2::<f32>::ones((4, 4));
    let black = Array2::<f32>::from_elem((4, 4), -1.0);

    save_iteration_images(dir.path(), &VisualSet::new().with("x", &white), 1, Normalization::SignedUnit)
        .unwrap();
    save_iteration_images(dir.path(), &VisualSet::new().with("x", &black), 1, Normalization::SignedUnit)
        .unwrap();

    let decoded = image::open(dir.path().join("iter001_x.png")).unwrap().to_luma8();
    assert!(decoded.pixels().all(|p| p.0[0] == 0));
    assert_eq!(png_count(dir.path()), 1);
}

#[test]
fn test_save_images_names_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let mut page = HtmlPage::new(dir.path().join("web"), "test", 0).unwrap();
    let image_dir = page.image_dir().to_path_buf();
    let real = gradient(3, 4);
    let fake = gradient(3, 4);
    let visuals = VisualSet::new().with("real_B", &real).with("fake_B", &fake);

    save_images(
        &image_dir,
        &visuals,
        &["datasets/facades/test/12.jpg"],
        Some(&mut page),
        &SaveOptions::new().with_width(256),
    )
    .unwrap();

    assert!(image_dir.join("12_real_B.png").is_file());
    assert!(image_dir.join("12_fake_B.png").is_file());

    let html = page.render();
    assert!(html.contains("<h3>12</h3>"));
    let real_pos = html.find("images/12_real_B.png").unwrap();
    let fake_pos = html.find("images/12_fake_B.png").unwrap();
    assert!(real_pos < fake_pos);
    assert!(html.contains("width:256px"));
}

#[test]
fn test_save_images_empty_set_registers_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut page = HtmlPage::new(dir.path(), "test", 0).unwrap();
    let image_dir = page.image_dir().to_path_buf();

    save_images(&image_dir, &VisualSet::new(), &["a/b/sample.png"], Some(&mut page), &SaveOptions::new())
        .unwrap();

    assert_eq!(png_count(&image_dir), 0);
    assert_eq!(page.header_count(), 1);
    assert!(page.render().contains("<h3>sample</h3>"));
    assert!(!page.render().contains("<img"));
}

#[test]
fn test_save_images_without_index() {
    let dir = tempfile::tempdir().unwrap();
    let img = gradient(1, 4);
    let visuals = VisualSet::new().with("depth", &img);

    save_images(dir.path(), &visuals, &[Path::new("0001.png")], None, &SaveOptions::new()).unwrap();
    assert!(dir.path().join("0001_depth.png").is_file());
}

#[test]
fn test_save_images_uses_first_path_and_aspect_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let img = gradient(3, 4);
    let visuals = VisualSet::new().with("out", &img);

    save_images(
        dir.path(),
        &visuals,
        &["x/first.jpg", "x/second.jpg"],
        None,
        &SaveOptions::new().with_aspect_ratio(2.0),
    )
    .unwrap();

    let path = dir.path().join("first_out.png");
    assert_eq!(image::image_dimensions(&path).unwrap(), (8, 4));
    assert!(!dir.path().join("second_out.png").exists());
}

#[test]
fn test_save_images_requires_path() {
    let dir = tempfile::tempdir().unwrap();
    let paths: [&str; 0] = [];
    let err = save_images(dir.path(), &VisualSet::new(), &paths, None, &SaveOptions::new()).unwrap_err();
    assert!(matches!(err, Error::MissingImagePath));
}

#[test]
fn test_name_helpers() {
    assert_eq!(epoch_image_name(1, 20, "fake_B"), "epoch001_iter020_fake_B.png");
    assert_eq!(epoch_image_name(1234, 5, "x"), "epoch1234_iter005_x.png");
    assert_eq!(iteration_image_name(7, "real"), "iter007_real.png");
    assert_eq!(sample_base_name(&["/data/img/0042.tar.gz"]).unwrap(), "0042.tar");
}

#[test]
fn test_visuals_are_borrowed_not_consumed() {
    let (_dir, mut visualizer) = setup("exp");
    let real = gradient(3, 4);
    {
        let visuals = VisualSet::new().with("real", &real);
        visualizer.display_current_results(&visuals, 1, 1, true).unwrap();
    }
    assert_eq!(real.width(), 4);
}

#[test]
fn test_save_images_rejects_infinite_aspect_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let img = Array3::<f32>::zeros((3, 4, 4));
    let visuals = VisualSet::new().with("fake_B", &img);

    let options = SaveOptions::new().with_aspect_ratio(f32::INFINITY);
    let err = save_images(dir.path(), &visuals, &["s.png"], None, &options).unwrap_err();

    assert!(matches!(err, Error::Validation(ValidationError::InvalidAspectRatio(_))));
    assert!(!dir.path().join("s_fake_B.png").exists());
}
