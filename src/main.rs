use clap::Parser;
use imgfit::cli::{self, Cli, Mode};
use imgfit::FileProcessor;
use log::LevelFilter;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    println!("Image Resizing and Copying Tool");
    println!("-------------------------------");

    let mode = match cli::prompt_mode()? {
        Some(mode) => mode,
        None => {
            println!(
                "Invalid mode selected. Please enter 's' for single image or 'd' for directory."
            );
            return Ok(());
        }
    };

    let input = cli::prompt_input_path(mode)?;
    let output_dir = cli::prompt_output_dir()?;
    let max_size = cli::prompt_max_size()?;

    let processor = FileProcessor::new(max_size);

    match mode {
        Mode::Single => process_single(&processor, &input, &output_dir),
        Mode::Directory => process_directory(&processor, &input, &output_dir),
    }

    Ok(())
}

// Per-file errors are reported and swallowed; the process always exits
// normally.
fn process_single(processor: &FileProcessor, input: &Path, output_dir: &Path) {
    if let Err(e) = processor.process_file(input, output_dir) {
        log::error!("{}", e);
    }
}

fn process_directory(processor: &FileProcessor, input_dir: &Path, output_dir: &Path) {
    match processor.process_directory(input_dir, output_dir) {
        Ok(stats) => {
            println!(
                "Done: {} resized, {} copied, {} failed.",
                stats.resized,
                stats.copied,
                stats.errors.len()
            );
        }
        Err(e) => log::error!("{}", e),
    }
}
