//! Disk chopper to OFF converter
//!
//! Reads the JSON rendition of a NeXus file and writes one OFF mesh per
//! `NXdisk_chopper` group of the chosen entry.
//!
//! # Usage
//!
//! ```bash
//! # Print every chopper mesh to stdout
//! chopper-off instrument.json
//!
//! # Closed solid sectors, one file per chopper
//! chopper-off --faces --out-dir meshes instrument.json
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`), written to stderr.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use chop_core::{ChopError, Result};
use chop_mesh::FacePolicy;
use chop_nexus::{ChopperMesh, ChopperRecipe, GeneratorConfig, NexusFile, RecipeOutcome};

fn print_usage() {
    eprintln!(
        r#"Disk chopper to OFF converter

USAGE:
    chopper-off [OPTIONS] <input.json>

ARGS:
    <input.json>        NeXus file in JSON form

OPTIONS:
    --entry <NAME>      Entry group holding the instrument (default: entry)
    --config <FILE>     JSON generator config (half_depth, face_policy)
    --half-depth <Z>    Front/back plane offset, overrides the config
    --faces             Emit closed solid sectors instead of vertices only
    --out-dir <DIR>     Write <DIR>/<chopper>.off instead of printing; repeated
                        chopper names get a _1, _2, ... suffix
    --help              Show this help message
"#
    );
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    input: PathBuf,
    entry: String,
    config: Option<PathBuf>,
    half_depth: Option<f64>,
    faces: bool,
    out_dir: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Run(Options),
}

fn parse_args(args: &[String]) -> std::result::Result<Command, String> {
    let mut input = None;
    let mut entry = "entry".to_string();
    let mut config = None;
    let mut half_depth = None;
    let mut faces = false;
    let mut out_dir = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--faces" => faces = true,
            "--entry" => entry = value_of(&mut iter, arg)?.to_string(),
            "--config" => config = Some(PathBuf::from(value_of(&mut iter, arg)?)),
            "--out-dir" => out_dir = Some(PathBuf::from(value_of(&mut iter, arg)?)),
            "--half-depth" => {
                let text = value_of(&mut iter, arg)?;
                let z = text
                    .parse::<f64>()
                    .map_err(|_| format!("--half-depth expects a number, got '{}'", text))?;
                half_depth = Some(z);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path => {
                if input.is_some() {
                    return Err(format!("unexpected extra argument '{}'", path));
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    let input = input.ok_or_else(|| "missing required argument <input.json>".to_string())?;
    Ok(Command::Run(Options {
        input,
        entry,
        config,
        half_depth,
        faces,
        out_dir,
    }))
}

fn value_of<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> std::result::Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn generator_config(options: &Options) -> Result<GeneratorConfig> {
    let mut config = match &options.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(z) = options.half_depth {
        config.half_depth = z;
    }
    if options.faces {
        config.face_policy = FacePolicy::SolidSectors;
    }
    Ok(config)
}

/// Output file stem for each chopper, unique within one run.
///
/// Group names come from the input file, so anything that could leave the
/// output directory is refused before a single file is written.
fn file_stems(meshes: &[ChopperMesh]) -> Result<Vec<String>> {
    let mut taken = HashSet::new();
    let mut stems = Vec::with_capacity(meshes.len());
    for chopper in meshes {
        let name = chopper.name.as_str();
        if name.is_empty() || name == "." || name.contains("..") || name.contains(['/', '\\', '\0']) {
            return Err(ChopError::InvalidName(name.to_string()));
        }

        let mut stem = name.to_string();
        let mut suffix = 1;
        while !taken.insert(stem.clone()) {
            stem = format!("{}_{}", name, suffix);
            suffix += 1;
        }
        if stem != name {
            tracing::warn!(chopper = name, file = %stem, "chopper name repeated, renaming output");
        }
        stems.push(stem);
    }
    Ok(stems)
}

fn write_meshes(meshes: &[ChopperMesh], out_dir: Option<&Path>) -> Result<()> {
    match out_dir {
        Some(dir) => {
            let stems = file_stems(meshes)?;
            std::fs::create_dir_all(dir)?;
            for (chopper, stem) in meshes.iter().zip(&stems) {
                let path = dir.join(format!("{}.off", stem));
                chopper.mesh.save(&path)?;
                tracing::info!(path = %path.display(), "wrote OFF file");
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for chopper in meshes {
                chopper.mesh.write_off(&mut out)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}

fn run(options: &Options) -> Result<()> {
    let config = generator_config(options)?;
    let file = NexusFile::load(&options.input)?;
    let recipe = ChopperRecipe::new(&file, options.entry.as_str(), config);
    tracing::info!(input = %options.input.display(), "{}", recipe.title());

    match recipe.process()? {
        RecipeOutcome::NotFound(message) => {
            eprintln!("{}", message);
            Ok(())
        }
        RecipeOutcome::Meshes(meshes) => {
            for chopper in &meshes {
                if let Some(bb) = chopper.mesh.bounding_box() {
                    tracing::debug!(chopper = %chopper.name, bounds = %bb, "mesh bounds");
                }
            }
            write_meshes(&meshes, options.out_dir.as_deref())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Run(options)) => options,
        Err(message) => {
            eprintln!("Error: {}\n", message);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
