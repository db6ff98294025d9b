mod render;

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use mst_graph::GraphError;
use mst_prim::PrimStepper;
use mst_project::{ProjectError, build_graph, samples};

#[derive(Parser)]
#[command(name = "mst-cli")]
#[command(about = "Step through Prim's minimum spanning tree algorithm", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a graph definition file
    Validate {
        /// Path to the graph YAML/JSON file
        graph_path: PathBuf,
    },
    /// List every edge of a graph
    Edges {
        /// Path to the graph YAML/JSON file
        graph_path: PathBuf,
    },
    /// Run Prim's algorithm one step at a time
    Step {
        /// Path to the graph YAML/JSON file
        graph_path: PathBuf,
        /// Start node (defaults to the file's `start`, then its first node)
        #[arg(short, long)]
        start: Option<String>,
        /// Wait for Enter before each step
        #[arg(short, long)]
        interactive: bool,
    },
    /// Write the five-node sample graph
    Init {
        /// Output path (.json for JSON, YAML otherwise)
        graph_path: PathBuf,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("graph has no nodes to start from")]
    NoStart,
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
        Commands::Edges { graph_path } => cmd_edges(&graph_path),
        Commands::Step {
            graph_path,
            start,
            interactive,
        } => cmd_step(&graph_path, start.as_deref(), interactive),
        Commands::Init { graph_path } => cmd_init(&graph_path),
    }
}

fn cmd_validate(graph_path: &Path) -> CliResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let def = mst_project::load(graph_path)?;
    let graph = build_graph(&def)?;
    println!(
        "✓ Graph '{}' is valid ({} nodes, {} edges)",
        def.name,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

fn cmd_edges(graph_path: &Path) -> CliResult<()> {
    let def = mst_project::load(graph_path)?;
    let graph = build_graph(&def)?;
    if graph.edge_count() == 0 {
        println!("No edges in graph '{}'", def.name);
    } else {
        println!("Edges in graph '{}':", def.name);
        print!("{}", render::edges(&graph, None));
    }
    Ok(())
}

fn cmd_step(graph_path: &Path, start: Option<&str>, interactive: bool) -> CliResult<()> {
    let def = mst_project::load(graph_path)?;
    let graph = build_graph(&def)?;
    let start = start.or(def.start_or_first()).ok_or(CliError::NoStart)?;
    let mut stepper = PrimStepper::new(&graph, start)?;

    println!("{}", stepper.description());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        if interactive {
            print!("[Enter] next step ");
            io::stdout().flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
        }

        let result = stepper.step();
        let completed = result.is_completed();
        let report = result.into_report();
        println!("{}", report.description);
        if completed {
            break;
        }
        if interactive {
            println!("  {}", render::state(&stepper));
        }
    }

    if stepper.is_finished() {
        println!("The spanning tree has been fully generated.");
    }
    println!("{}", render::state(&stepper));
    print!("{}", render::edges(&graph, Some(&stepper)));
    Ok(())
}

fn cmd_init(graph_path: &Path) -> CliResult<()> {
    let def = samples::five_nodes();
    let is_json = graph_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        mst_project::save_json(graph_path, &def)?;
    } else {
        mst_project::save_yaml(graph_path, &def)?;
    }
    println!("✓ Wrote '{}' to {}", def.name, graph_path.display());
    Ok(())
}
