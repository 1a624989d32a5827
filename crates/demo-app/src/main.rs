//! Demo driver for the Glide animation-value engine.
//!
//! Prints a small tween sweep to stdout, plays a sequence back with
//! completion callbacks, then renders the configured easing-curve catalog
//! to PNG files. Configure via `glide.toml` or `GLIDE_*` environment
//! variables (see the `glide-config` crate).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glide_config::GlideConfig;
use glide_ease::EasingKind;
use glide_plot::Canvas;
use glide_tween::Tween;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = GlideConfig::load();

    print_ramp();
    stepped_playback();

    let out_dir = config
        .demo
        .out_dir
        .clone()
        .unwrap_or_else(|| "plots".into());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    for kind in selected_kinds(&config) {
        render_curve(kind, &config, &out_dir)?;
    }

    Ok(())
}

/// The canonical two-segment ramp: 1 -> 3 over 2 ticks, then 3 -> 5 over 2
/// ticks. Evaluated at ticks 0..=5 this prints 1 2 3 4 5 5 (the final tick
/// is past the end and clamps).
fn print_ramp() {
    let mut tween = Tween::new(0.0);
    tween
        .reset(1.0)
        .to(3.0, 2, EasingKind::Linear)
        .to(5.0, 2, EasingKind::Linear);

    for position in 0..6 {
        println!("{}", tween.evaluate(position));
    }
}

/// Caller-driven playback: advance one tick at a time, as a frame loop
/// would, and let segment completion callbacks report progress.
fn stepped_playback() {
    let mut tween = Tween::new(0.0);
    tween
        .reset(0.0)
        .to(10.0, 4, EasingKind::QuadraticOut)
        .call(|| println!("reached 10"))
        .wait(2)
        .to(-5.0, 6, EasingKind::BackInOut)
        .call(|| println!("settled at -5"));

    while !tween.is_finished() {
        tween.step();
        println!("tick {:>2}: {:.3}", tween.cursor(), tween.current_value());
    }
}

/// Resolve the configured curve names, falling back to the whole catalog.
/// Unknown names are skipped with a warning.
fn selected_kinds(config: &GlideConfig) -> Vec<EasingKind> {
    match &config.demo.curves {
        None => EasingKind::ALL.to_vec(),
        Some(names) => names
            .iter()
            .filter_map(|name| {
                let kind = EasingKind::from_name(name);
                if kind.is_none() {
                    log::warn!("unknown easing curve {:?} in config, skipping", name);
                }
                kind
            })
            .collect(),
    }
}

/// Render one easing curve as a 0 -> 1 sweep and write it to
/// `<out_dir>/<name>.png`.
fn render_curve(kind: EasingKind, config: &GlideConfig, out_dir: &Path) -> Result<()> {
    let mut tween = Tween::new(0.0);
    tween.reset(0.0).to(1.0, config.plot.sweep_ticks, kind);

    let mut canvas = Canvas::new(config.plot.width, config.plot.height, config.plot.background);
    canvas.trace(&tween, config.plot.foreground);

    let path = out_dir.join(format!("{}.png", kind.name()));
    canvas
        .write(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
