use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "logoreveal", version)]
struct Cli {
    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a full reveal plan from a shapes file.
    Plan(PlanArgs),
    /// Print the category of every shape.
    Classify(ClassifyArgs),
    /// Print entrance windows for N shapes.
    Schedule(ScheduleArgs),
    /// Write the default configuration.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input shapes JSON (`{"shapes": [...]}`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Configuration JSON; defaults are used for anything missing.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output plan JSON.
    #[arg(long)]
    out: PathBuf,

    /// Also write the host operations the plan expands to.
    #[arg(long)]
    ops: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Number of shapes.
    #[arg(long)]
    count: usize,

    /// Frame by which every shape has arrived.
    #[arg(long, default_value_t = 200)]
    convergence: u64,

    /// Travel time per shape, in frames.
    #[arg(long, default_value_t = 30)]
    duration: u64,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Plan(args) => {
            let cfg = read_config(args.config.as_deref())?;
            install_logging(&cfg.logging, cli.log_json);
            cmd_plan(args, &cfg)
        }
        Command::Classify(args) => {
            let cfg = read_config(args.config.as_deref())?;
            install_logging(&cfg.logging, cli.log_json);
            cmd_classify(args, &cfg)
        }
        Command::Schedule(args) => {
            install_logging(&logoreveal::LoggingConfig::default(), cli.log_json);
            cmd_schedule(args)
        }
        Command::Config(args) => {
            install_logging(&logoreveal::LoggingConfig::default(), cli.log_json);
            cmd_config(args)
        }
    }
}

/// `--log-json` turns on JSON output on top of whatever the config asks for.
fn install_logging(config: &logoreveal::LoggingConfig, force_json: bool) {
    let logging = logoreveal::LoggingConfig {
        json: config.json || force_json,
        ..config.clone()
    };
    logoreveal::init_logging(&logging);
}

fn read_shapes(path: &Path) -> anyhow::Result<logoreveal::ShapeSet> {
    let f = File::open(path).with_context(|| format!("open shapes '{}'", path.display()))?;
    let set: logoreveal::ShapeSet =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse shapes JSON")?;
    Ok(set)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<logoreveal::RevealConfig> {
    let cfg = match path {
        Some(p) => logoreveal::RevealConfig::load(p)?,
        None => logoreveal::RevealConfig::default(),
    };
    Ok(cfg)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, value)
        .with_context(|| format!("write json '{}'", path.display()))?;
    w.flush()?;
    Ok(())
}

fn cmd_plan(args: PlanArgs, cfg: &logoreveal::RevealConfig) -> anyhow::Result<()> {
    let set = read_shapes(&args.in_path)?;

    let plan = logoreveal::plan_reveal(&set.shapes, cfg)?;
    write_json(&args.out, &plan)?;
    eprintln!("wrote {}", args.out.display());

    if let Some(ops_path) = args.ops {
        let mut host = logoreveal::RecordingHost::new();
        logoreveal::apply_plan(&plan, &mut host)?;
        write_json(&ops_path, &host.ops)?;
        eprintln!("wrote {}", ops_path.display());
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs, cfg: &logoreveal::RevealConfig) -> anyhow::Result<()> {
    let set = read_shapes(&args.in_path)?;
    cfg.thresholds.validate()?;

    let shapes =
        logoreveal::classify_all(&set.shapes, &cfg.thresholds, &cfg.arrivals, cfg.reference);
    for s in &shapes {
        println!("{}\t{}", s.id, s.category);
    }
    Ok(())
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let ids: Vec<String> = (0..args.count).map(|i| format!("shape_{i:02}")).collect();
    let cfg = logoreveal::ScheduleConfig {
        convergence_frame: args.convergence,
        travel_duration: args.duration,
    };
    let sched = logoreveal::schedule(&ids, cfg)?;

    println!("gap\t{:.2}", sched.gap);
    for e in &sched.entries {
        println!("{}\t{}\t{}", e.shape_id, e.start.0, e.end.0);
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    write_json(&args.out, &logoreveal::RevealConfig::default())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
