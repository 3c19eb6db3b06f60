// main.rs
//
// `hsphere` command-line tool: build a homogeneous sphere and write it out as a
// wireframe file.

use clap::{Parser, ValueEnum};
use hsphere::{
    float_types::Real,
    sphere::{DEFAULT_RADIUS, DEFAULT_SEGMENTS, HomogeneousSphere},
};
use nalgebra::Point3;
use std::{error::Error, fs, io::Write, path::PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Obj,
    #[cfg(feature = "dxf-io")]
    Dxf,
}

impl Format {
    /// Binary formats are never dumped on a terminal.
    const fn writes_to_stdout(self) -> bool {
        match self {
            Format::Obj => true,
            #[cfg(feature = "dxf-io")]
            Format::Dxf => false,
        }
    }
}

#[derive(Parser)]
#[command(name = "hsphere")]
#[command(version, about = "Sphere wireframes with homogeneous vertex density")]
struct Cli {
    /// Number of segments around the equator (at least 3).
    #[arg(short, long, default_value_t = DEFAULT_SEGMENTS)]
    segments: usize,

    /// Sphere radius.
    #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    radius: Real,

    /// Center of the sphere as "x,y,z".
    #[arg(short, long, value_parser = parse_location, default_value = "0,0,0")]
    location: Point3<Real>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Obj)]
    format: Format,

    /// Output file; OBJ goes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Object name written into the file.
    #[arg(short, long, default_value = "HSphere")]
    name: String,
}

fn parse_location(text: &str) -> Result<Point3<Real>, String> {
    let coords = text
        .split(',')
        .map(|c| c.trim().parse::<Real>().map_err(|e| format!("'{c}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match coords.as_slice() {
        &[x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(format!("expected three comma-separated numbers, got '{text}'")),
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.output.is_none() && !cli.format.writes_to_stdout() {
        return Err(format!("{:?} output needs --output", cli.format).into());
    }

    let sphere = HomogeneousSphere::new(cli.segments, cli.radius)?;
    let wireframe = sphere.build().translated(cli.location.coords);

    match wireframe.edge_length_stats() {
        Some(stats) => log::info!(
            "{} vertices, {} edges, {} rings; edge length {:.4}..{:.4} (mean {:.4})",
            wireframe.vertex_count(),
            wireframe.edge_count(),
            sphere.rings().len(),
            stats.min,
            stats.max,
            stats.mean,
        ),
        None => log::info!(
            "{} vertices, no edges",
            wireframe.vertex_count()
        ),
    }

    let bytes = match cli.format {
        Format::Obj => wireframe.to_obj(&cli.name).into_bytes(),
        #[cfg(feature = "dxf-io")]
        Format::Dxf => wireframe.to_dxf()?,
    };

    match &cli.output {
        Some(path) => fs::write(path, bytes)?,
        None => std::io::stdout().write_all(&bytes)?,
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_parsing() {
        assert_eq!(parse_location("1, -2.5,3").unwrap(), Point3::new(1.0, -2.5, 3.0));
        assert!(parse_location("1,2").is_err());
        assert!(parse_location("a,b,c").is_err());
    }

    fn scratch_path(file: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hsphere-{}-{file}", std::process::id()))
    }

    #[test]
    fn writes_placed_obj_file() {
        let path = scratch_path("placed.obj");
        let cli = Cli::try_parse_from([
            "hsphere",
            "-s",
            "4",
            "-l",
            "0,0,5",
            "-n",
            "ball",
            "-o",
            path.to_str().unwrap(),
        ])
        .unwrap();
        run(&cli).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "o ball");
        assert_eq!(lines[1], "v 0.000000 0.000000 4.000000");
        assert_eq!(lines[6], "v 0.000000 0.000000 6.000000");
        assert_eq!(lines.iter().filter(|l| l.starts_with("l ")).count(), 4);
    }

    #[test]
    fn invalid_segments_fail() {
        let cli = Cli::try_parse_from(["hsphere", "-s", "2", "-o", "unused.obj"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("segments"), "{err}");
    }

    #[cfg(feature = "dxf-io")]
    #[test]
    fn dxf_needs_an_output_path() {
        assert!(!Format::Dxf.writes_to_stdout());
        let cli = Cli::try_parse_from(["hsphere", "-f", "dxf"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("--output"), "{err}");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
