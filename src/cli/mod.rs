// imgfit/src/cli/mod.rs
use crate::core::{DEFAULT_MAX_SIZE, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imgfit",
    about = "Resizes images so no side exceeds a maximum, copying the rest verbatim"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Directory,
}

/// First prompt: "s" for a single file, "d" for a directory. Anything else
/// is an invalid mode and aborts the run.
pub fn prompt_mode() -> io::Result<Option<Mode>> {
    let answer = read_line(
        "Do you want to process a single image (s) or a directory of images (d)? (s/d): ",
    )?;
    Ok(match answer.to_lowercase().as_str() {
        "s" => Some(Mode::Single),
        "d" => Some(Mode::Directory),
        _ => None,
    })
}

pub fn prompt_input_path(mode: Mode) -> io::Result<PathBuf> {
    let message = match mode {
        Mode::Single => "Enter the path to the image file: ",
        Mode::Directory => "Enter the path to the directory containing images: ",
    };
    Ok(PathBuf::from(read_line(message)?))
}

pub fn prompt_output_dir() -> io::Result<PathBuf> {
    let answer = read_line(&format!(
        "Enter the output directory (leave blank for '{}'): ",
        DEFAULT_OUTPUT_DIR
    ))?;
    Ok(if answer.is_empty() {
        PathBuf::from(DEFAULT_OUTPUT_DIR)
    } else {
        PathBuf::from(answer)
    })
}

pub fn prompt_max_size() -> io::Result<u32> {
    let answer = read_line(&format!(
        "Enter the maximum size for the longest side (default: {}): ",
        DEFAULT_MAX_SIZE
    ))?;
    Ok(parse_max_size(&answer))
}

/// Blank input takes the default. Unparsable or zero input also takes the
/// default, with a warning, instead of failing the run.
pub fn parse_max_size(input: &str) -> u32 {
    let input = input.trim();
    if input.is_empty() {
        return DEFAULT_MAX_SIZE;
    }
    match input.parse::<u32>() {
        Ok(0) => {
            println!(
                "Invalid input for maximum size. Using default value of {}.",
                DEFAULT_MAX_SIZE
            );
            DEFAULT_MAX_SIZE
        }
        Ok(value) => value,
        Err(_) => {
            println!(
                "Invalid input for maximum size. Using default value of {}.",
                DEFAULT_MAX_SIZE
            );
            DEFAULT_MAX_SIZE
        }
    }
}

fn read_line(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_max_size_takes_default() {
        assert_eq!(parse_max_size(""), DEFAULT_MAX_SIZE);
        assert_eq!(parse_max_size("   "), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn numeric_max_size_parses() {
        assert_eq!(parse_max_size("1920"), 1920);
        assert_eq!(parse_max_size(" 800 "), 800);
    }

    #[test]
    fn non_numeric_max_size_falls_back() {
        assert_eq!(parse_max_size("huge"), DEFAULT_MAX_SIZE);
        assert_eq!(parse_max_size("12.5"), DEFAULT_MAX_SIZE);
        assert_eq!(parse_max_size("-100"), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn zero_max_size_falls_back() {
        assert_eq!(parse_max_size("0"), DEFAULT_MAX_SIZE);
    }
}
