use clap::Parser;
use log::{debug, info};
use persistent_avl::{Nullable, Tree};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "demo")]
#[command(about = "Walks through the operations of a persistent AVL tree")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Value of the starting single-element tree
    #[arg(long, default_value_t = 5)]
    initial: i32,

    /// Values inserted one after another
    #[arg(long, value_delimiter = ',', default_values_t = [4, 7, 10, 0])]
    insert: Vec<i32>,

    /// Values each removed from the same fully built tree
    #[arg(long, value_delimiter = ',', default_values_t = [5, 7, 0, 3])]
    remove: Vec<i32>,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Prints the values of a tree in order, one per line.
fn print_tree(tree: &Nullable<Tree<i32>>) {
    for value in tree {
        println!("{}", value);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        level(args.verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let tree = Tree::new(args.initial);
    println!("tree size (should be 1): {}", tree.size());

    let mut built = Nullable::new(tree.clone());
    for value in &args.insert {
        debug!("inserting {}", value);
        built = Nullable::new(built.insert(*value));
    }
    info!("built a tree of {} values", built.size());

    println!("tree:");
    print_tree(&built);

    let root = built.get()?;
    println!();
    println!("STATS:");
    println!("size: {} height: {}", root.size(), root.height());
    println!("min: {}", root.min());
    println!("max: {}", root.max());
    println!("balanced: {}", root.is_balanced());
    println!();

    for value in &args.remove {
        let note = if root.contains(value) { "" } else { ": non-elem" };
        println!("removed ({}{}):", value, note);
        print_tree(&built.remove(value));
    }

    println!("same?");
    print_tree(&built);

    for value in &args.remove {
        println!("tree contains {}? {}", value, root.contains(value));
    }

    println!("original tree is same?");
    print_tree(&Nullable::new(tree));

    Ok(())
}
