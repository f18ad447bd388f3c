use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use genmdm::codec::midi_cc;
use genmdm::{Format, Parameter, Patch, ValidationMode};

/// Convert GenMDM FM instrument patches between GenMDM text, TFI, DMP, Y12 and JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the instruments in a patch file
    List {
        /// Patch file (.genm, .txt, .tfi, .dmp, .y12 or .json)
        file: PathBuf,

        /// Clamp out-of-range values instead of failing
        #[arg(long)]
        clamp: bool,
    },
    /// Convert a patch file, the output format is chosen by extension
    Convert {
        /// Patch file to read
        input: PathBuf,

        /// Patch file to write
        output: PathBuf,

        /// Only convert this instrument (0-indexed)
        #[arg(long)]
        patch: Option<usize>,

        /// Clamp out-of-range values instead of failing
        #[arg(long)]
        clamp: bool,
    },
    /// Print the GenMDM MIDI CC messages for each instrument
    Cc {
        /// Patch file to read
        file: PathBuf,

        /// MIDI channel (0-15)
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..16))]
        channel: u8,

        /// Clamp out-of-range values instead of failing
        #[arg(long)]
        clamp: bool,
    },
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List { file, clamp } => {
            for (i, patch) in read_patches(&file, mode(clamp))?.iter().enumerate() {
                let index = patch.instrument_index().map_or(i, usize::from);
                println!("{}: {}", index, patch.name());
            }
        }
        Commands::Convert {
            input,
            output,
            patch,
            clamp,
        } => {
            let output_format = format_for(&output)?;
            let mut patches = read_patches(&input, mode(clamp))?;

            if let Some(patch_number) = patch {
                if patch_number >= patches.len() {
                    return Err(anyhow!(
                        "patch {} is out of range ({} has {} patches)",
                        patch_number,
                        input.display(),
                        patches.len()
                    ));
                }
                patches = vec![patches.swap_remove(patch_number)];
            }

            let data = output_format.generate(&patches)?;
            std::fs::write(&output, data)
                .with_context(|| format!("Error writing patch file '{}'", output.display()))?;

            log::info!(
                "wrote {} patches to {}",
                if output_format.is_multi_patch() { patches.len() } else { 1 },
                output.display()
            );
        }
        Commands::Cc {
            file,
            channel,
            clamp,
        } => {
            for patch in read_patches(&file, mode(clamp))? {
                let cc_map = midi_cc::generate_to_cc(&patch)?;

                println!("{}:", patch.name());
                for message in midi_cc::to_messages(&cc_map, channel) {
                    println!("  {:02X} {:02X} {:02X}", message[0], message[1], message[2]);
                }
            }
        }
    }

    Ok(())
}

fn mode(clamp: bool) -> ValidationMode {
    if clamp {
        ValidationMode::Clamp
    } else {
        ValidationMode::Strict
    }
}

fn format_for(path: &Path) -> Result<Format> {
    Format::from_path(path)
        .ok_or_else(|| anyhow!("unrecognised patch file extension: '{}'", path.display()))
}

/// Reads every patch in `path` and completes what the format leaves out, so
/// any patch can be written to any format.
fn read_patches(path: &Path, mode: ValidationMode) -> Result<Vec<Patch>> {
    let format = format_for(path)?;

    let data = std::fs::read(path)
        .with_context(|| format!("Error reading patch file '{}'", path.display()))?;

    let mut patches = format
        .parse(&data, mode)
        .with_context(|| format!("Error parsing patch file '{}'", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    for (i, patch) in patches.iter_mut().enumerate() {
        if patch.name().is_empty() {
            patch.set_name(file_name.clone());
        }
        if patch.instrument_index().is_none() {
            patch.set(Parameter::InstrumentIndex, i.min(127) as i32)?;
        }
        patch.fill_unset();
    }

    log::debug!("read {} patches from {}", patches.len(), path.display());

    Ok(patches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genmdm::codec::y12;

    fn write_temp(name: &str, data: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("genmdm-{}-{}", std::process::id(), name));
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_nameless_patches_take_file_name() {
        let mut patch = Patch::new();
        patch.fill_unset();
        let path = write_temp("unnamed.y12", &y12::generate(&patch).unwrap());

        let patches = read_patches(&path, ValidationMode::Strict).unwrap();
        std::fs::remove_file(&path).unwrap();

        let expected = path.file_name().unwrap().to_string_lossy();
        assert_eq!(patches[0].name(), expected);
    }

    #[test]
    fn test_named_patches_keep_name() {
        let mut patch = Patch::new();
        patch.fill_unset();
        patch.set_name("organ");
        let path = write_temp("named.y12", &y12::generate(&patch).unwrap());

        let patches = read_patches(&path, ValidationMode::Strict).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(patches[0].name(), "organ");
        assert!(patches[0].is_complete());
    }
}
