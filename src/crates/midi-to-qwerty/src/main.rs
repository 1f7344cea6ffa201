use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use midi_to_qwerty::midi::find_midi_file;
use midi_to_qwerty::{ConvertOptions, Converter, OutputFormatter};

#[derive(Parser, Debug)]
#[command(name = "midi-to-qwerty")]
#[command(about = "Convert MIDI files to QWERTY key sequences", long_about = None)]
struct Args {
    /// Path to the MIDI file (default: uses first .mid file in current directory)
    #[arg(short, long)]
    midi: Option<PathBuf>,

    /// Output file path (default: `<midi-name>.txt`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of file
    #[arg(long)]
    stdout: bool,

    /// Emit the result as JSON (bpm, text and counts)
    #[arg(long)]
    json: bool,

    /// Suppress informational messages (only errors)
    #[arg(short, long)]
    quiet: bool,

    /// Notes starting within this many seconds of the previous note form a chord
    #[arg(short = 'w', long, default_value = "0.05")]
    chord_window: f64,

    /// Wrap key text after this many characters. 0 means no wrapping.
    #[arg(short, long, default_value = "0")]
    line_width: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Find MIDI file
    let midi_path = if let Some(path) = args.midi {
        if !path.exists() {
            anyhow::bail!("MIDI file not found: {}", path.display());
        }
        path
    } else {
        find_first_midi_file()?
    };

    let output_path = if let Some(path) = args.output {
        path
    } else {
        let stem = midi_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        PathBuf::from(format!("{}.txt", stem))
    };

    log::info!("Processing MIDI file: {}", midi_path.display());

    let converter = Converter::new(ConvertOptions {
        chord_window: args.chord_window,
    })?;
    let result = converter
        .convert_file(&midi_path)
        .with_context(|| format!("Failed to convert {}", midi_path.display()))?;

    if !args.quiet {
        eprintln!("{}", result.bpm_label());
    }
    if result.text.is_empty() {
        log::warn!("No notes within the keyboard range were found");
    }

    let formatter = OutputFormatter::new(args.json, args.line_width);
    let output = formatter.build_output(&result);

    if args.stdout {
        println!("{}", output);
    } else {
        fs::write(&output_path, format!("{}\n", output))
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        log::info!("Output saved to {}", output_path.display());
    }

    Ok(())
}

fn find_first_midi_file() -> Result<PathBuf> {
    find_midi_file(Path::new("."))
        .context("Failed to read current directory")?
        .ok_or_else(|| anyhow::anyhow!("No MIDI files found in current directory"))
}
