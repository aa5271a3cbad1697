//! Routes a handful of items through a sorter surrounded by in-memory pipes.
//!
//! ```text
//! cargo run --example sorter_demo -- --default-direction back --pipes top,left
//! RUST_LOG=item_sorter=debug cargo run --example sorter_demo -- --config sorter.toml
//! ```

use std::path::PathBuf;

use clap::Parser;
use item_sorter::logistics::mock::{MockItemHost, MockNetwork, MockRegistry};
use item_sorter::logistics::{ItemArrival, Sorter, SorterContext};
use item_sorter::{Direction, ItemId, Position, SorterConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Drive an item sorter through a scripted set of arrivals")]
struct Args {
    /// TOML file with the sorter configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured default side (top, left, right, front, back, bottom)
    #[arg(long)]
    default_direction: Option<Direction>,

    /// Sides that have a pipe attached
    #[arg(long, value_delimiter = ',', default_value = "top,left,right")]
    pipes: Vec<Direction>,

    /// Seed for path selection
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("item_sorter=info")),
        )
        .compact()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SorterConfig::from_file(path)?,
        None => SorterConfig::default(),
    };
    if let Some(direction) = args.default_direction {
        config.default_direction = direction;
    }

    let names = [
        "core:stone",
        "core:dirt",
        "core:ironIngot",
        "core:coal",
        "core:glass",
        "core:apple",
    ];
    let mut registry = MockRegistry::new();
    for (i, name) in names.iter().enumerate() {
        // filter copies live at 100+, loose items at 0+
        registry.add_item(ItemId(100 + i as u64), *name);
        registry.add_item(ItemId(i as u64), *name);
    }

    // the first four sides each filter one kind; glass and apples fall through to the default
    let mut slots = vec![None; config.slot_count()];
    for i in 0..4 {
        slots[i * config.slots_per_direction] = Some(ItemId(100 + i as u64));
    }

    let origin = Position::new(0, 64, 0);
    let mut sorter = Sorter::new(origin, config)?;
    sorter.on_configuration_changed(&registry, &slots)?;

    let mut network = MockNetwork::new();
    for &direction in &args.pipes {
        network.add_pipe(
            origin.neighbor(direction),
            direction.reverse(),
            ["straight", "corner"],
        );
    }

    let mut items = MockItemHost::new();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut ctx = SorterContext {
        registry: &registry,
        network: &mut network,
        items: &mut items,
        rng: &mut rng,
    };

    for (i, name) in names.iter().enumerate() {
        let mut arrival = ItemArrival::new(ItemId(i as u64));
        let outcome = sorter.on_item_arrival(&mut ctx, &mut arrival)?;
        println!("{:<16} -> {:?}", name, outcome);
    }

    println!(
        "delivered {}, dropped {}",
        network.insertions().len(),
        items.dropped().len()
    );
    Ok(())
}
