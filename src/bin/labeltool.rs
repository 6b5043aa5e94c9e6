//! Batch transliteration driver: one candidate per output line, tab-separated
//! from the input name, ready for a downstream label pipeline.

use std::io::{self, BufRead};
use std::process;

use clap::{Parser, ValueEnum};

use yashiro::{transliterate, EntityKind, Options, SuffixTable, Target};

#[derive(Parser)]
#[command(name = "labeltool", about = "Transliterate Japanese names into target orthographies")]
struct Cli {
    /// Names to transliterate; reads one name per stdin line when empty
    names: Vec<String>,

    /// Target orthography
    #[arg(short, long, value_enum, default_value_t = TargetArg::Minimal)]
    target: TargetArg,

    /// Entity classification; selects the suffix the featural target appends
    #[arg(long, value_enum)]
    entity: Option<EntityArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    /// Strict-CV minimal phonology
    Minimal,
    /// Voicing-preserving featural alphabet
    Featural,
    /// Logographic substitution
    Logographic,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Target {
        match arg {
            TargetArg::Minimal => Target::MinimalPhonology,
            TargetArg::Featural => Target::FeaturalVoicingPreserving,
            TargetArg::Logographic => Target::LogographicSubstitution,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EntityArg {
    Shrine,
    GrandShrine,
    Temple,
    GrandTemple,
}

impl From<EntityArg> for EntityKind {
    fn from(arg: EntityArg) -> EntityKind {
        match arg {
            EntityArg::Shrine => EntityKind::Shrine,
            EntityArg::GrandShrine => EntityKind::GrandShrine,
            EntityArg::Temple => EntityKind::Temple,
            EntityArg::GrandTemple => EntityKind::GrandTemple,
        }
    }
}

/// Suffixes used by the label pipeline this tool feeds. The engine itself
/// carries no suffixes; they are caller configuration.
fn default_suffixes() -> SuffixTable {
    [
        (EntityKind::Shrine, "신사".to_string()),
        (EntityKind::GrandShrine, "신궁".to_string()),
        (EntityKind::Temple, "사원".to_string()),
        (EntityKind::GrandTemple, "대사원".to_string()),
    ]
    .into_iter()
    .collect()
}

fn main() {
    let cli = Cli::parse();

    let names: Vec<String> = if cli.names.is_empty() {
        match io::stdin().lock().lines().collect() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("labeltool: failed to read stdin: {e}");
                process::exit(1);
            }
        }
    } else {
        cli.names
    };

    let suffixes = default_suffixes();
    let opts = Options {
        entity: cli.entity.map(EntityKind::from),
        suffixes: Some(&suffixes),
        ..Options::default()
    };

    let mut failed = false;
    for name in names.iter().filter(|n| !n.trim().is_empty()) {
        match transliterate(name, cli.target.into(), &opts) {
            Ok(candidates) => {
                for candidate in candidates {
                    println!("{name}\t{candidate}");
                }
            }
            Err(e) => {
                // Skip the name but keep the batch going; the exit code
                // tells the pipeline something needs manual review.
                eprintln!("labeltool: {name}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
