// vidinfo-cli/src/main.rs
//
// Command-line interface for the vidinfo media inspection tool.
//
// Parses the list of paths to inspect, configures logging, and prints one
// report block per file in order. Directories expand to the video files
// they contain. The process always exits 0: an unopenable file produces a
// zeroed report and a warning on the log facade, not a failure.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use vidinfo_core::{CoreError, external, find_processable_files, write_report};

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidinfo: Media inspection tool",
    long_about = "Prints container and stream metadata (resolution, frame rate, \
                 frame count, FourCC, bitrate) for video files using ffprobe."
)]
struct Cli {
    /// Video files or directories to inspect, reported in order
    #[arg(required = true, value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed logging output")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still takes precedence over the flag, matching env_logger
    // conventions.
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if external::check_dependency("ffprobe").is_err() {
        log::warn!("ffprobe is not available; reports will contain zeroed properties");
    }

    let mut stdout = std::io::stdout().lock();
    for path in &cli.paths {
        if path.is_dir() {
            match find_processable_files(path) {
                Ok(files) => {
                    log::debug!("Found {} file(s) in {}", files.len(), path.display());
                    for file in &files {
                        report_one(&mut stdout, file);
                    }
                }
                Err(CoreError::NoFilesFound) => {
                    log::warn!("No video files found in directory '{}'", path.display());
                }
                Err(e) => {
                    log::warn!("Could not read directory '{}': {}", path.display(), e);
                }
            }
        } else {
            report_one(&mut stdout, path);
        }
    }
}

fn report_one<W: Write>(writer: &mut W, path: &std::path::Path) {
    if let Err(e) = write_report(writer, path) {
        log::error!("Failed to write report for '{}': {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_paths() {
        let args = vec![
            "vidinfo", // Program name
            "tests/data/input/Many.mp4",
            "tests/data/output/Many_output.mp4",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.paths.len(), 2);
        assert_eq!(cli.paths[0], PathBuf::from("tests/data/input/Many.mp4"));
        assert_eq!(
            cli.paths[1],
            PathBuf::from("tests/data/output/Many_output.mp4")
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::parse_from(vec!["vidinfo", "--verbose", "clip.mkv"]);
        assert!(cli.verbose);
        assert_eq!(cli.paths, vec![PathBuf::from("clip.mkv")]);
    }

    #[test]
    fn test_paths_are_required() {
        let result = Cli::try_parse_from(vec!["vidinfo"]);
        assert!(result.is_err());
    }
}
