use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ordered_tree::comments::Comment;
use ordered_tree::script::{parse_script, Command};
use ordered_tree::tree::OrderedTree;

/// Keys inserted by `demo`.
const DEMO_KEYS: [i64; 9] = [10, 13, 14, 12, 5, 3, 2, 4, 1];

#[derive(Parser, Debug)]
#[command(name = "ordered-tree", version, about = "Play with an unbalanced binary search tree")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the sample tree and print its extremes, pre-order traversal and sum.
    Demo,
    /// Run commands against an empty tree of integers, in order.
    Run {
        /// Any of `insert=K`, `remove=K`, `search=K`, `min`, `max`, `preorder`, `inorder`, `sum`.
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Build and print the sample comment thread.
    Thread,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Run { commands } => run_script(&commands)?,
        Commands::Thread => run_thread(),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() {
    let mut commands: Vec<Command<i64>> = DEMO_KEYS.into_iter().map(Command::Insert).collect();
    commands.extend([Command::Min, Command::Max, Command::PreOrder, Command::Sum]);
    execute(commands);
}

fn run_script(tokens: &[String]) -> Result<()> {
    let commands =
        parse_script::<i64, _>(tokens).context("failed to parse the command list")?;
    debug!(count = commands.len(), "parsed commands");
    execute(commands);
    Ok(())
}

fn execute(commands: Vec<Command<i64>>) {
    let mut tree = OrderedTree::new();
    for command in commands {
        debug!(?command, "running");
        let report = command.run(&mut tree);
        println!("{report}");
    }
    info!(len = tree.len(), height = tree.height(), "finished");
}

fn run_thread() {
    let mut root = Comment::new("What a wonderful book!", "John");
    let jane = root.add_reply(Comment::new("The book was a disappointment :(", "Jane"));
    jane.add_reply(Comment::new("It was a waste of paper...", "Bill"));
    jane.remove();
    root.add_reply(Comment::new("What's so wonderful about it?", "Mary"));

    info!(replies = root.replies().len(), "built thread");
    print!("{root}");
}
