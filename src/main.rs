//! pixel-noise: renders an image to a WAV file, one sine tone per pixel.

use std::time::Instant;

use pixel_noise::audio::inspect_wav;
use pixel_noise::cli::Cli;
use pixel_noise::error::Result;
use pixel_noise::scanner::render_image;
use pixel_noise::RenderConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e.code.description());
        eprintln!("  {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.render_config();

    print_plan(&config);

    let start_time = Instant::now();
    let show_progress = config.progress;
    let stats = render_image(&config, |row, total| {
        if show_progress {
            eprintln!("{} out of {}", row, total);
        }
    })?;
    let render_time_sec = start_time.elapsed().as_secs_f32();

    // Re-read the file with an independent parser before reporting success
    let summary = inspect_wav(&config.output)?;

    if cli.json {
        let report = serde_json::json!({
            "input": config.input.display().to_string(),
            "output": config.output.display().to_string(),
            "stats": stats,
            "wav": summary,
            "render_time_sec": render_time_sec,
        });
        println!("{}", report);
    } else {
        eprintln!();
        eprintln!("Render complete!");
        eprintln!("  Time: {:.2}s", render_time_sec);
        eprintln!("  Pixels: {}", stats.pixels);
        eprintln!("  Frames: {}", summary.frames);
        eprintln!("  Audio duration: {:.2}s", summary.duration_sec);
        if stats.overflowed_samples > 0 {
            eprintln!(
                "  Overflowed samples: {} ({})",
                stats.overflowed_samples, config.overflow
            );
        }
        eprintln!("Saved to: {}", config.output.display());
    }

    Ok(())
}

/// Prints the effective settings before rendering starts.
fn print_plan(config: &RenderConfig) {
    eprintln!("=== pixel-noise ===");
    eprintln!("Input: {}", config.input.display());
    eprintln!("Output: {}", config.output.display());
    eprintln!("Gain: {}", config.gain);
    eprintln!("Overflow: {}", config.overflow);
    eprintln!();
}
