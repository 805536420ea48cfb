use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;

mod maze;
mod solver;

use maze::generate_grid_maze;
use solver::result::SearchStatistics;
use solver::{run_parallel_search, Algorithm, SequentialSolver, SolverConfig};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "amaze")]
#[command(about = "amaze - Parallel Maze Solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Single-threaded depth-first search
    Sequential,
    /// Fork/join parallel depth-first search
    Parallel,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Sequential => Algorithm::Sequential,
            CliAlgorithm::Parallel => Algorithm::Parallel,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and search it for a path from start to goal
    Solve {
        /// Maze width in cells
        #[arg(long, default_value_t = 15)]
        width: usize,
        /// Maze height in cells
        #[arg(long, default_value_t = 15)]
        height: usize,
        /// Seed for maze generation (drawn from the OS if not specified)
        #[arg(long)]
        seed: Option<u64>,

        // --- Algorithm selection ---
        /// Search algorithm
        #[arg(long, value_enum, default_value = "parallel")]
        algorithm: CliAlgorithm,
        /// Exploration steps between allowed forks; a value <= 0 disables
        /// forking entirely
        #[arg(long, default_value_t = 8, allow_hyphen_values = true)]
        fork_after: i64,
        /// Fork only at nodes with strictly more than this many neighbors
        #[arg(long, default_value_t = 2)]
        fork_degree: usize,

        // --- Output ---
        /// Print the maze with the solved path overlaid
        #[arg(long)]
        show: bool,
        /// Print per-task statistics
        #[arg(long)]
        verbose: bool,
    },
    /// Generate a maze and print it without solving
    Generate {
        /// Maze width in cells
        #[arg(long, default_value_t = 15)]
        width: usize,
        /// Maze height in cells
        #[arg(long, default_value_t = 15)]
        height: usize,
        /// Seed for maze generation (drawn from the OS if not specified)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for a solve run
struct SolveOptions {
    algorithm: Algorithm,
    fork_after: i64,
    fork_degree: usize,
    show: bool,
    verbose: bool,
}

// --- Solve Function ---

fn solve_maze(
    width: usize,
    height: usize,
    seed: Option<u64>,
    options: &SolveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let maze = Arc::new(generate_grid_maze(width, height, seed)?);
    println!(
        "Generated {}x{} maze ({} cells)",
        width,
        height,
        maze.num_nodes()
    );
    if let Some(seed) = seed {
        println!("Seed: {}", seed);
    }
    println!("Algorithm: {}", options.algorithm);

    let outcome = match options.algorithm {
        Algorithm::Sequential => SequentialSolver::new().solve(maze.as_ref()),
        Algorithm::Parallel => {
            println!("Fork after: {}", options.fork_after);
            println!("Fork degree: {}", options.fork_degree);
            let config = SolverConfig::default()
                .with_algorithm(Algorithm::Parallel)
                .with_fork_after(options.fork_after)
                .with_fork_degree(options.fork_degree);
            run_parallel_search(Arc::clone(&maze), &config)
        }
    };

    if options.show {
        print!("{}", maze.render(outcome.path.as_deref()));
    }
    print_search_statistics(&outcome.statistics, options.verbose);
    print!("{}", outcome);
    Ok(())
}

/// Print search statistics
fn print_search_statistics(stats: &SearchStatistics, verbose: bool) {
    println!("\nSearch Statistics:");
    println!("  Algorithm: {}", stats.algorithm);
    println!("  Elapsed time: {:?}", stats.elapsed_time);
    println!("  Nodes expanded: {}", stats.nodes_expanded);
    println!("  Tasks spawned: {}", stats.tasks_spawned);

    if verbose {
        for task in &stats.task_statistics {
            println!(
                "  Task {}: start node {}, {} nodes expanded{}",
                task.task_id,
                task.start_node,
                task.nodes_expanded,
                if task.found_goal { ", reached goal" } else { "" }
            );
        }
    }
    println!();
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Solve {
            width,
            height,
            seed,
            algorithm,
            fork_after,
            fork_degree,
            show,
            verbose,
        } => {
            let options = SolveOptions {
                algorithm: algorithm.into(),
                fork_after,
                fork_degree,
                show,
                verbose,
            };
            if let Err(e) = solve_maze(width, height, seed, &options) {
                eprintln!("Error solving maze: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Generate {
            width,
            height,
            seed,
        } => match generate_grid_maze(width, height, seed) {
            Ok(maze) => print!("{}", maze.render(None)),
            Err(e) => {
                eprintln!("Error generating maze: {}", e);
                std::process::exit(1);
            }
        },
    }
}
