mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use geoviz::dataset::rand::{Domain, GeneratorCfg, PointSetGenerator, SamplerKind};
use geoviz::dataset::{flip_orientation, parse_count, read_dataset, read_segments, write_dataset};
use geoviz::parse::{parse_dcel, parse_hull, parse_triangulation};
use geoviz::render::{draw_dcel, draw_hull, draw_triangulation, Figure, RenderCfg};
use geoviz::{cfg, Polygon};
use input::Source;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "geoviz")]
#[command(about = "Plot computational-geometry results and generate point datasets")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct ViewArgs {
    /// Algorithm output to read. If provided, -o is ignored
    output_file: Option<PathBuf>,
    /// Original input to overlay (dataset file, or segment dump for dcel)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Algorithm output to read; stdin when neither this nor OUTPUT_FILE is given
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Where to write the rendered figure [default: <command>.svg]
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Seed for face/triangle colours
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DomainArg {
    Integer,
    Fractional,
}

#[derive(Clone, Copy, ValueEnum)]
enum SamplerArg {
    Uniform,
    Normal,
}

#[derive(Subcommand)]
enum Action {
    /// Plot a convex hull, optionally over the original point set
    Hull(ViewArgs),
    /// Plot DCEL faces, optionally with the original segments dashed on top
    Dcel(ViewArgs),
    /// Plot a triangulation, optionally with the original polygon outline
    Triangulation(ViewArgs),
    /// Write N unique random points to <dir>/<N>.txt
    Generate {
        /// Number of points; prompted on stdin when absent
        #[arg(long)]
        count: Option<String>,
        #[arg(long, value_enum, default_value_t = DomainArg::Integer)]
        domain: DomainArg,
        /// Sampler used to redraw a coordinate already taken on its axis
        #[arg(long, value_enum, default_value_t = SamplerArg::Normal)]
        sampler: SamplerArg,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = cfg::DATASET_DIR)]
        dir: PathBuf,
        /// Also write <N>.provenance.json next to the dataset
        #[arg(long)]
        provenance: bool,
    },
    /// Reverse the vertex order of a polygon dataset file in place (CCW <-> CW)
    Flip {
        /// Polygon file; prompted on stdin when absent
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Hull(args) => hull(args),
        Action::Dcel(args) => dcel(args),
        Action::Triangulation(args) => triangulation(args),
        Action::Generate {
            count,
            domain,
            sampler,
            seed,
            dir,
            provenance,
        } => generate(count, domain, sampler, seed, dir, provenance),
        Action::Flip { path } => flip(path),
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn figure(args: &ViewArgs) -> Figure {
    let fig = Figure::new("");
    match args.seed {
        Some(seed) => fig.with_seed(seed),
        None => fig,
    }
}

fn save(fig: &Figure, args: &ViewArgs, default_name: &str) -> Result<()> {
    let out = args
        .svg
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{default_name}.svg")));
    fig.save_svg(&out, &RenderCfg::default())?;
    tracing::info!(out = %out.display(), "figure written");
    Ok(())
}

fn hull(args: ViewArgs) -> Result<()> {
    let src = Source::resolve(args.output_file.clone(), args.output.clone())?;
    let overlay = input::overlay(args.input.as_deref())?;
    let hull = parse_hull(src.open()?).with_context(|| format!("parsing hull from {src:?}"))?;
    let cloud = overlay
        .map(read_dataset)
        .transpose()
        .context("reading original point set")?;
    if hull.len() < 3 {
        tracing::warn!(vertices = hull.len(), "hull has fewer than 3 vertices");
    }
    tracing::info!(
        vertices = hull.len(),
        points = ?cloud.as_ref().map(Vec::len),
        "hull parsed"
    );
    let mut fig = figure(&args);
    draw_hull(&mut fig, &hull, cloud.as_deref());
    save(&fig, &args, "hull")
}

fn dcel(args: ViewArgs) -> Result<()> {
    let src = Source::resolve(args.output_file.clone(), args.output.clone())?;
    let overlay = input::overlay(args.input.as_deref())?;
    let faces = parse_dcel(src.open()?).with_context(|| format!("parsing DCEL from {src:?}"))?;
    let segments = overlay
        .map(read_segments)
        .transpose()
        .context("reading original segments")?;
    if let Some(path) = &args.input {
        tracing::info!(file = %path.display(), "segment overlay");
    }
    tracing::info!(
        faces = faces.len(),
        segments = ?segments.as_ref().map(Vec::len),
        "dcel parsed"
    );
    let mut fig = figure(&args);
    draw_dcel(&mut fig, &faces, segments.as_deref());
    save(&fig, &args, "dcel")
}

fn triangulation(args: ViewArgs) -> Result<()> {
    let src = Source::resolve(args.output_file.clone(), args.output.clone())?;
    let overlay = input::overlay(args.input.as_deref())?;
    let triangles = parse_triangulation(src.open()?)
        .with_context(|| format!("parsing triangulation from {src:?}"))?;
    let outline = overlay
        .map(read_dataset)
        .transpose()
        .context("reading original polygon")?
        .map(Polygon::new);
    tracing::info!(
        triangles = triangles.len(),
        outline = ?outline.as_ref().map(Polygon::len),
        "triangulation parsed"
    );
    let mut fig = figure(&args);
    draw_triangulation(&mut fig, &triangles, outline.as_ref());
    save(&fig, &args, "triangulation")
}

fn generate(
    count: Option<String>,
    domain: DomainArg,
    sampler: SamplerArg,
    seed: Option<u64>,
    dir: PathBuf,
    provenance: bool,
) -> Result<()> {
    let text = match count {
        Some(c) => c,
        None => {
            println!(
                "File will be stored in {} directory with filename as (no-of-points).txt",
                dir.display()
            );
            prompt("Enter no of points to generate: ")?
        }
    };
    let n = parse_count(&text)?;
    let cfg = GeneratorCfg {
        domain: match domain {
            DomainArg::Integer => Domain::INTEGER,
            DomainArg::Fractional => Domain::FRACTIONAL,
        },
        sampler: match sampler {
            SamplerArg::Uniform => SamplerKind::Uniform,
            SamplerArg::Normal => SamplerKind::default(),
        },
        seed,
        max_attempts: None,
    };
    let set = PointSetGenerator::new(cfg)?.generate(n)?;
    let path = write_dataset(&dir, &set)?;
    if provenance {
        let params = serde_json::json!({ "count": n, "generator": cfg });
        let prov = provenance::write_sidecar(&path, params)?;
        tracing::info!(provenance = %prov.display(), "provenance written");
    }
    Ok(())
}

fn flip(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => PathBuf::from(prompt(
            "Enter path to file which is ccw, to be converted to cw: ",
        )?),
    };
    flip_orientation(&path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    fn view_args(output: PathBuf, input: Option<PathBuf>, svg: PathBuf) -> ViewArgs {
        ViewArgs {
            output_file: Some(output),
            input,
            output: None,
            svg: Some(svg),
            seed: Some(1),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn view_flags_parse() {
        let cmd = Cmd::try_parse_from(["geoviz", "-v", "hull", "out.txt", "-i", "in.txt"]).unwrap();
        assert_eq!(cmd.verbose, 1);
        match cmd.action {
            Action::Hull(args) => {
                assert_eq!(args.output_file, Some(PathBuf::from("out.txt")));
                assert_eq!(args.input, Some(PathBuf::from("in.txt")));
                assert!(args.output.is_none());
            }
            _ => panic!("expected hull"),
        }
    }

    #[test]
    fn hull_command_writes_svg_with_overlay() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("hull_out.txt");
        let cloud = dir.path().join("4.txt");
        let svg = dir.path().join("hull.svg");
        fs::write(&out, "Hull:\n(0, 0)\n(2, 0)\n(1, 2)\nTime taken: 3\n").unwrap();
        fs::write(&cloud, "4\n0 0\n2 0\n1 2\n1 1\n").unwrap();
        hull(view_args(out, Some(cloud), svg.clone())).unwrap();
        let text = fs::read_to_string(svg).unwrap();
        assert_eq!(text.matches("<circle").count(), 4);
        assert!(text.contains("Computed Convex Hull"));
    }

    #[test]
    fn dcel_command_rejects_malformed_record() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dcel_out.txt");
        let svg = dir.path().join("dcel.svg");
        fs::write(&out, "HEdge: (0, 0) -> (1, zero)\n").unwrap();
        assert!(dcel(view_args(out, None, svg.clone())).is_err());
        assert!(!svg.exists());
    }

    #[test]
    fn triangulation_command_fails_on_missing_overlay() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tri_out.txt");
        let svg = dir.path().join("tri.svg");
        fs::write(&out, "(0,0) (1,0) (0,1)\n").unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(triangulation(view_args(out, Some(missing), svg.clone())).is_err());
        assert!(!svg.exists());
    }

    #[test]
    fn generate_command_writes_dataset_and_sidecar() {
        let dir = tempdir().unwrap();
        generate(
            Some("25".into()),
            DomainArg::Integer,
            SamplerArg::Uniform,
            Some(3),
            dir.path().to_path_buf(),
            true,
        )
        .unwrap();
        let pts = read_dataset(io::BufReader::new(
            fs::File::open(dir.path().join("25.txt")).unwrap(),
        ))
        .unwrap();
        assert_eq!(pts.len(), 25);
        assert!(dir.path().join("25.provenance.json").exists());
    }

    #[test]
    fn generate_command_rejects_bad_count() {
        let dir = tempdir().unwrap();
        let err = generate(
            Some("zero".into()),
            DomainArg::Integer,
            SamplerArg::Normal,
            None,
            dir.path().to_path_buf(),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }
}
