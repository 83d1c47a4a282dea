//! Export a generated sample cloud as an ASCII PLY file
//!
//! Demonstrates the exporter contract end to end: directory pre-check,
//! activation gating, the color length-mismatch advisory, and the
//! last-written-path output.

use anyhow::{bail, Result};
use clap::Parser;
use plycloud_core::{Point3f, PointCloud, Rgb8};
use plycloud_io::{ColorEncoding, ExportStatus, PlyExporter, PlyWriteOptions};
use std::path::Path;

#[derive(Parser)]
#[command(about = "Save a sample point cloud as an ASCII PLY file")]
struct Args {
    /// Directory to save to
    #[arg(long)]
    dir: String,

    /// Filename to be written
    #[arg(long, default_value = "cloud.ply")]
    filename: String,

    /// Set to actually write; without it the demo only reports state
    #[arg(long)]
    active: bool,

    /// Save colors as uchar 0-255 instead of float32 0.0-1.0
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    colors_as_int: bool,
}

/// Unit cube corners, each colored by its own coordinates
fn sample_cloud() -> PointCloud {
    let mut cloud = PointCloud::with_capacity(8);
    for i in 0..8u8 {
        let x = f32::from(i & 1);
        let y = f32::from((i >> 1) & 1);
        let z = f32::from((i >> 2) & 1);
        cloud.push_colored(
            Point3f::new(x, y, z),
            Rgb8::new((x * 255.0) as u8, (y * 255.0) as u8, (z * 255.0) as u8),
        );
    }
    cloud
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The writer treats any open failure as an unavailable sink; checking
    // the directory up front gives the clearer message.
    if !Path::new(&args.dir).is_dir() {
        bail!("directory does not exist: {}", args.dir);
    }

    let encoding = if args.colors_as_int {
        ColorEncoding::IntegerChannel
    } else {
        ColorEncoding::FloatChannel
    };
    let options = PlyWriteOptions::default().with_encoding(encoding);

    let cloud = sample_cloud();
    let target = Path::new(&args.dir).join(&args.filename);

    let mut exporter = PlyExporter::new();
    let status = match exporter.export(&target, &cloud, &options, args.active) {
        Ok(status) => status,
        Err(err) => {
            // The recorded path survives a failed write, so still report it
            eprintln!("error: failed to write {}: {}", target.display(), err);
            println!("last written path: {:?}", exporter.last_written_path());
            std::process::exit(1);
        }
    };

    match status {
        ExportStatus::Skipped => println!("inactive, last written path: {:?}", exporter.last_written_path()),
        ExportStatus::Written { colors_written } => {
            if status.color_advisory(&cloud) {
                eprintln!("remark: point/color length mismatch, colors were not written");
            }
            println!(
                "wrote {} points{} to {}",
                cloud.len(),
                if colors_written { " with colors" } else { "" },
                exporter.last_written_path()
            );
        }
    }

    Ok(())
}
