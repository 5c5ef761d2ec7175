//! Tatari Atlas CLI
//!
//! Generate the Tatari Tree texture atlas from its source tiles.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tatari_atlas::atlas::build_tatari_tree_atlas_with_progress;
use tatari_atlas::layout::{layout_json, TATARI_TREE_LAYOUT};
use tatari_atlas::model::{box_uv_rect, EntityPart};
use tatari_atlas::{
    tatari_tree_model, AtlasError, Face, SourceSet, OUTPUT_FILE_NAME, RESOURCE_DESTINATION,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tatari-atlas")]
#[command(author, version, about = "Generate the Tatari Tree texture atlas", long_about = None)]
struct Cli {
    /// Log library diagnostics (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the atlas from the six source textures (default)
    Generate {
        /// Directory containing the source textures
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = OUTPUT_FILE_NAME)]
        output: PathBuf,
    },

    /// Show where each source tile is placed
    Layout {
        /// Print the placement table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => generate(Path::new("."), Path::new(OUTPUT_FILE_NAME))?,
        Some(Commands::Generate { input_dir, output }) => generate(&input_dir, &output)?,
        Some(Commands::Layout { json }) => show_layout(json)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "tatari_atlas=warn",
        1 => "tatari_atlas=info",
        _ => "tatari_atlas=debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn generate(input_dir: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating Tatari Tree texture atlas...");
    println!();

    let sources = match SourceSet::load(input_dir) {
        Ok(sources) => sources,
        Err(AtlasError::MissingSource(path)) => {
            eprintln!("Error: source texture not found: {}", path.display());
            eprintln!("Failed to generate texture atlas");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    println!("Loaded source textures from {:?}", input_dir);

    let atlas = build_tatari_tree_atlas_with_progress(&sources, |part| {
        println!("Placing {} textures...", part);
    })?;

    atlas.save(output)?;

    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());

    println!();
    println!("✓ Generated texture atlas: {}", output.display());
    println!("  Size: {}x{} pixels", atlas.width(), atlas.height());
    println!();
    println!("Next steps:");
    println!("  Copy {} into:", file_name);
    println!("  {}", RESOURCE_DESTINATION);

    Ok(())
}

fn show_layout(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", layout_json(&TATARI_TREE_LAYOUT)?);
        return Ok(());
    }

    println!("Atlas placements:");
    for placement in &TATARI_TREE_LAYOUT {
        let repeat = if placement.repeat > 1 {
            format!(" x{}", placement.repeat)
        } else {
            String::new()
        };
        println!(
            "  {:<8} {:<6} {:<28} {:>2}x{:<2} at ({}, {}){}",
            placement.part.to_string(),
            placement.face.to_string(),
            placement.source.file_name(),
            placement.size[0],
            placement.size[1],
            placement.origin[0],
            placement.origin[1],
            repeat
        );
    }

    let model = tatari_tree_model();
    println!(
        "\nModel parts ({}, {}x{}, {} cubes):",
        model.texture_path,
        model.texture_size[0],
        model.texture_size[1],
        model.cube_count()
    );
    for part in &model.parts {
        print_part(part, 1);
    }

    Ok(())
}

fn print_part(part: &EntityPart, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{}", indent, part.name);
    for cube in &part.cubes {
        let front = Face::Front.direction();
        let [l, t, r, b] = box_uv_rect(cube.tex_offset, cube.dimensions, front);
        println!(
            "{}  cube {}x{}x{} tex ({}, {}), {} face ({}, {})-({}, {})",
            indent,
            cube.dimensions[0],
            cube.dimensions[1],
            cube.dimensions[2],
            cube.tex_offset[0],
            cube.tex_offset[1],
            front,
            l,
            t,
            r,
            b
        );
    }
    for child in &part.children {
        print_part(child, depth + 1);
    }
}
