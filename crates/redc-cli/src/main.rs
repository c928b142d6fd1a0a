use clap::{Parser, Subcommand};

mod classes;
mod replay;
mod seed;
mod speed;

/// Driver for the Montgomery reduction differential harness.
#[derive(Parser)]
#[command(name = "redc")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-run the differential check on saved fuzz inputs.
    Replay {
        /// Input files (raw fuzz inputs or crash artifacts).
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Write well-formed corpus seeds.
    Seed {
        /// Modulus size in words (4, 6, 8, 16, 24, 32) or "all".
        #[arg(short, long, default_value = "all")]
        words: String,
        /// Seeds per size class.
        #[arg(short, long, default_value = "1")]
        count: usize,
        /// Output directory.
        #[arg(short, long)]
        output: String,
    },
    /// Throughput of the specialized and generic kernels.
    Speed {
        /// Modulus size in words (4, 6, 8, 16, 24, 32) or "all".
        #[arg(short, long, default_value = "all")]
        words: String,
        /// Seconds per kernel.
        #[arg(short, long, default_value = "1")]
        seconds: u64,
    },
    /// List supported size classes and their input lengths.
    Classes,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Replay { files } => replay::run(files),
        Commands::Seed {
            words,
            count,
            output,
        } => seed::run(words, *count, output),
        Commands::Speed { words, seconds } => speed::run(words, *seconds),
        Commands::Classes => classes::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Parse a `--words` argument into the classes it selects.
pub(crate) fn parse_classes(
    words: &str,
) -> Result<Vec<redc_types::SizeClass>, Box<dyn std::error::Error>> {
    if words.eq_ignore_ascii_case("all") {
        return Ok(redc_types::SizeClass::ALL.to_vec());
    }
    Ok(vec![words.parse()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use redc_types::SizeClass;

    #[test]
    fn test_parse_classes() {
        assert_eq!(parse_classes("all").unwrap().len(), 6);
        assert_eq!(parse_classes("8").unwrap(), vec![SizeClass::W8]);
        assert!(parse_classes("12").is_err());
    }

    #[test]
    fn test_cli_parses_replay() {
        let cli = Cli::try_parse_from(["redc", "replay", "a.bin", "b.bin"]).unwrap();
        assert!(matches!(cli.command, Commands::Replay { ref files } if files.len() == 2));
        assert!(Cli::try_parse_from(["redc", "replay"]).is_err());
    }
}
