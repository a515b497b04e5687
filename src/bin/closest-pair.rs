use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use closest_pair::input::{random_points, read_points, write_points};
use closest_pair::report::{write_records, DistanceRecord};
use closest_pair::{ClosestPair, Distance, Method, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "closest-pair")]
#[command(about = "Closest pair of points by divide and conquer")]
struct Cmd {
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write random point files
    Generate(GenerateArgs),
    /// Solve a single point file
    Solve {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t)]
        method: Method,
    },
    /// Solve every .txt point file in a directory
    Run {
        dir: PathBuf,
        /// Also write the results as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t)]
        method: Method,
    },
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value = "inputs_closest")]
    dir: PathBuf,
    #[arg(long, default_value_t = 10)]
    count: usize,
    #[arg(long, default_value_t = 100)]
    min_points: usize,
    #[arg(long, default_value_t = 300)]
    max_points: usize,
    #[arg(long, default_value_t = 10_000)]
    max_coord: i64,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cmd.action {
        Action::Generate(args) => {
            let files = generate(&args)?;
            println!("Generated {} input files in {}", files.len(), args.dir.display());
        }
        Action::Solve { file, method } => {
            let d = solve_file(&file, method)?;
            println!("Closest distance = {d:.4}");
        }
        Action::Run { dir, json, method } => {
            let records = run(&dir, method)?;
            for record in &records {
                println!("{} -> Closest Distance = {:.4}", record.file, record.closest_distance);
            }
            if let Some(json) = json {
                save(&json, &records)?;
                println!("Results saved to {}", json.display());
            }
        }
    }

    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<Vec<PathBuf>> {
    ensure!(args.min_points <= args.max_points, "--min-points is larger than --max-points");
    ensure!(args.max_coord >= 0, "--max-coord must not be negative");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    fs::create_dir_all(&args.dir).with_context(|| format!("creating {}", args.dir.display()))?;

    let mut files = Vec::with_capacity(args.count);
    for i in 1..=args.count {
        let n = rng.random_range(args.min_points..=args.max_points);
        let points = random_points(&mut rng, n, args.max_coord);

        let path = args.dir.join(format!("closest_points_{i}.txt"));
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_points(BufWriter::new(file), &points)
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::debug!(path = %path.display(), points = n, "generated");
        files.push(path);
    }

    Ok(files)
}

fn solve_file(path: &Path, method: Method) -> Result<f64> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let points: Vec<Point<f64>> =
        read_points(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))?;

    let d = ClosestPair::new()
        .method(method)
        .solve(&points)
        .with_context(|| format!("solving {}", path.display()))?;

    tracing::info!(file = %path.display(), points = points.len(), distance = d.value(), "solved");
    Ok(d.value())
}

fn run(dir: &Path, method: Method) -> Result<Vec<DistanceRecord>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            Ok(DistanceRecord::new(name, solve_file(path, method)?))
        })
        .collect()
}

fn save(path: &Path, records: &[DistanceRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_records(BufWriter::new(file), records)
        .with_context(|| format!("writing {}", path.display()))
}
