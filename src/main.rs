//! noisegen: procedural ambient noise generator.
//!
//! Tries the cached container first, falls back to generating a fresh
//! track, and hands a playable WAV file to the user either way.

use std::time::Instant;

use noisegen::audio::samples_to_duration;
use noisegen::cli::Cli;
use noisegen::session::{NoiseSession, Outcome};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let config = cli.to_config();
    let output_path = cli.output_path();

    eprintln!("=== noisegen ===");
    eprintln!("Sample rate: {} Hz", config.sample_rate);
    eprintln!("Duration: {}s", config.duration_sec);
    eprintln!("Cache root: {}", config.effective_cache_path().display());
    eprintln!("Output: {}", output_path.display());
    if let Some(seed) = config.seed {
        eprintln!("Seed: {}", seed);
    }
    eprintln!();

    let session = NoiseSession::new(config);

    if cli.no_cache {
        eprintln!("Cache bypassed (--no-cache)...");
    } else if cli.regenerate {
        eprintln!("Regenerating (cache lookup skipped)...");
    } else {
        if let Outcome::Ready(container) = session.load_cached() {
            eprintln!("Cache hit: reusing stored track ({} bytes)", container.len());
            std::fs::write(&output_path, &container)?;
            eprintln!("Saved to: {}", output_path.display());
            return Ok(());
        }
        eprintln!("Cache miss: generating a fresh track...");
    }

    let sample_rate = session.config().sample_rate;
    let start_time = Instant::now();

    // One chunk per second of audio; report every 60 chunks.
    let progress = |completed: usize, total: usize| {
        let chunk = completed / sample_rate as usize;
        if chunk % 60 == 0 || completed == total {
            eprintln!("Progress: {}/{} samples", completed, total);
        }
    };
    let outcome = if cli.no_cache {
        session.generate_uncached_with_progress(progress)
    } else {
        session.generate_with_progress(progress)
    };

    let container = match outcome {
        Outcome::Ready(container) => container,
        Outcome::NeedsGeneration => {
            return Err("generation failed; see warnings above".into());
        }
        Outcome::InFlight => {
            return Err("another generation is already in flight".into());
        }
    };

    let generation_time_sec = start_time.elapsed().as_secs_f32();
    let sample_count = (container.len() - 44) / 4;

    eprintln!();
    eprintln!("Generation complete!");
    eprintln!("  Time: {:.2}s", generation_time_sec);
    eprintln!("  Samples: {}", sample_count);
    eprintln!(
        "  Audio duration: {:.2}s",
        samples_to_duration(sample_count, sample_rate)
    );
    eprintln!();

    std::fs::write(&output_path, &container)?;
    eprintln!("Saved to: {}", output_path.display());

    Ok(())
}
