use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use skillmap::{
    assign, render, CameraFrame, CameraPath, ClusterResult, Config, Dataset, Initialization,
    Manifest,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

/// Cluster a skill dataset and render it as an animated 3D plot page
#[derive(Parser)]
#[command(name = "skillmap")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the HTML page
    Render {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        animation: AnimationArgs,

        /// Output HTML file
        #[arg(short, long, default_value = "skillmap.html")]
        output: PathBuf,

        /// Also write a JSON manifest to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Print the cluster assignment
    Cluster {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the camera path
    Path {
        #[command(flatten)]
        animation: AnimationArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON dataset file (defaults to the built-in skills)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Draw initial centroids with this seed instead of using the first points
    #[arg(long)]
    seed: Option<u64>,

    /// Iteration cap for k-means
    #[arg(long)]
    max_iters: Option<usize>,
}

#[derive(Args)]
struct AnimationArgs {
    /// Frames per revolution
    #[arg(long)]
    steps: Option<usize>,

    /// Fraction of the orbit radius removed half-way
    #[arg(long)]
    zoom: Option<f64>,
}

impl InputArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.cluster.init = Initialization::Seeded { seed };
        }
        if let Some(max_iters) = self.max_iters {
            config.cluster.max_iters = max_iters;
        }
    }

    fn load_dataset(&self) -> Result<Dataset> {
        match &self.dataset {
            Some(path) => Dataset::from_json_file(path),
            None => Ok(Dataset::builtin()),
        }
    }
}

impl AnimationArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(steps) = self.steps {
            config.animation.steps = steps;
        }
        if let Some(zoom) = self.zoom {
            config.animation.zoom_factor = zoom;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            input,
            animation,
            output,
            manifest,
        } => {
            input.apply(&mut config);
            animation.apply(&mut config);
            run_render(&config, &input, &output, manifest.as_deref())
        }
        Commands::Cluster { input, json } => {
            input.apply(&mut config);
            let dataset = input.load_dataset()?;
            let result = assign(dataset.points(), &config.cluster)?;
            print_clusters(&dataset, &result, json)
        }
        Commands::Path { animation, json } => {
            animation.apply(&mut config);
            let path = camera_path(&config)?;
            print_path(&path, json)
        }
    }
}

fn camera_path(config: &Config) -> Result<CameraPath> {
    let animation = &config.animation;
    CameraPath::generate(animation.eye, animation.steps, animation.zoom_factor)
        .context("Invalid animation settings")
}

fn run_render(
    config: &Config,
    input: &InputArgs,
    output: &Path,
    manifest_path: Option<&Path>,
) -> Result<()> {
    let start_time = Instant::now();
    println!("=== skillmap ===\n");

    // Step 1: Load dataset
    let step_start = Instant::now();
    println!("Step 1: Loading skills...");
    let dataset = input.load_dataset()?;
    println!(
        "✓ Loaded {} skills [{:.2}s]\n",
        dataset.len(),
        step_start.elapsed().as_secs_f64()
    );

    // Step 2: Cluster
    let step_start = Instant::now();
    println!("Step 2: Running k-means with k={}...", config.cluster.k);
    let result = assign(dataset.points(), &config.cluster).context("Clustering failed")?;
    if !result.converged {
        tracing::warn!(
            iterations = result.iterations,
            "k-means hit the iteration cap before converging"
        );
    }
    for cluster in &result.clusters {
        println!(
            "  Cluster {} ({}): {} skills",
            cluster.id,
            cluster.role,
            cluster.members.len()
        );
    }
    println!(
        "✓ Clustered in {} iterations [{:.2}s]\n",
        result.iterations,
        step_start.elapsed().as_secs_f64()
    );

    // Step 3: Camera path
    let step_start = Instant::now();
    println!("Step 3: Generating camera path...");
    let path = camera_path(config)?;
    println!(
        "✓ {} frames [{:.2}s]\n",
        path.len(),
        step_start.elapsed().as_secs_f64()
    );

    // Step 4: Render
    let step_start = Instant::now();
    println!("Step 4: Rendering page...");
    let html = render(&dataset, &result, &path, config).context("Failed to render page")?;
    std::fs::write(output, &html)
        .with_context(|| format!("Failed to write page: {}", output.display()))?;
    println!(
        "✓ Wrote {} ({} bytes) [{:.2}s]\n",
        output.display(),
        html.len(),
        step_start.elapsed().as_secs_f64()
    );

    if let Some(manifest_path) = manifest_path {
        Manifest::new(&dataset, &result, &path, &html).write_to_file(manifest_path)?;
        println!("✓ Manifest: {}\n", manifest_path.display());
    }

    println!("Total execution: {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

fn print_clusters(dataset: &Dataset, result: &ClusterResult, json: bool) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "assignments": result.assignments,
            "clusters": result.clusters,
            "iterations": result.iterations,
            "converged": result.converged,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for cluster in &result.clusters {
        let [x, y, z] = cluster.centroid;
        println!(
            "Cluster {} [{}] centroid ({:.2}, {:.2}, {:.2})",
            cluster.id, cluster.role, x, y, z
        );
        for &i in &cluster.members {
            println!("  {}", dataset.points()[i].label);
        }
    }
    println!(
        "\n{} iterations, converged: {}",
        result.iterations, result.converged
    );
    Ok(())
}

fn print_path(path: &CameraPath, json: bool) -> Result<()> {
    if json {
        let frames: Vec<CameraFrame> = path.to_vec();
        println!("{}", serde_json::to_string_pretty(&frames)?);
        return Ok(());
    }

    for (s, frame) in path.iter().enumerate() {
        println!("{:>5}  {:>9.5} {:>9.5} {:>9.5}", s, frame.x, frame.y, frame.z);
    }
    Ok(())
}
