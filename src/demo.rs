use clap::Parser;
use ordered_tree::{Traversal, Tree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ordered-tree-demo")]
#[command(about = "Builds a tree from random values, skews it, and rebalances it")]
struct Args {
    /// How many random values to build the tree from
    #[arg(long, default_value = "10")]
    count: usize,

    /// Random values are drawn from `0..max`
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
    max: u32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Values inserted to unbalance the tree
    #[arg(long, value_delimiter = ',', default_value = "110,120,130")]
    skew: Vec<u32>,

    /// Verbosity, repeat for more (-d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let values: Vec<u32> = (0..args.count)
        .map(|_| rng.random_range(0..args.max))
        .collect();

    let mut tree = Tree::new(values);
    report("Built", &tree);

    for value in &args.skew {
        tree.insert(*value);
    }
    report("Skewed", &tree);

    tree.rebalance();
    report("Rebalanced", &tree);
}

fn report(stage: &str, tree: &Tree<u32>) {
    println!("{stage}: balanced = {}, height = {}", tree.is_balanced(), tree.height());
    print!("{tree}");
    for order in [
        Traversal::LevelOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::InOrder,
    ] {
        match tree.values(order) {
            Ok(values) => {
                let values: Vec<String> = values.iter().map(u32::to_string).collect();
                println!("{order:?}: {}", values.join(", "));
            }
            Err(e) => println!("{order:?}: {e}"),
        }
    }
    println!();
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();
}
