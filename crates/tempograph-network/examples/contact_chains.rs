//! Contact Chain Example
//!
//! Demonstrates:
//! - Recording a day of face-to-face contacts as an undirected network
//! - Finding every chain along which something could spread from one person to another
//! - Picking the shortest, fastest and foremost chains
//! - Restricting the search to part of the day
//! - Running the all-pairs search across worker threads
//!
//! Timestamps are minutes since midnight; each contact lasts one snapshot.

use std::collections::HashMap;
use tempograph::{PathKind, PathSearch, annotate_paths};
use tempograph_network::DynamicNetwork;
use uuid::Uuid;

#[derive(Debug)]
struct Person {
    id: Uuid,
    name: String,
}

impl Person {
    fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Contact Chain Example ===\n");

    let ana = Person::new("ana");
    let ben = Person::new("ben");
    let cleo = Person::new("cleo");
    let dev = Person::new("dev");
    let eli = Person::new("eli");

    let people = [&ana, &ben, &cleo, &dev, &eli];
    let names: HashMap<Uuid, &str> = people.iter().map(|p| (p.id, p.name.as_str())).collect();

    let mut network = DynamicNetwork::undirected();
    for person in &people {
        network.add_node(person.id);
    }
    let added = network.add_interactions_batch([
        (ana.id, ben.id, 540u32),
        (ben.id, cleo.id, 600),
        (ana.id, dev.id, 600),
        (dev.id, cleo.id, 660),
        (cleo.id, eli.id, 720),
        (ana.id, cleo.id, 780),
        (ben.id, eli.id, 780),
    ]);
    println!(
        "Recorded {added} contacts over {} snapshots between {} people\n",
        network.snapshot_count(),
        network.node_count()
    );

    let describe = |path: &tempograph::Path<Uuid, u32>| {
        path.iter()
            .map(|hop| format!("{} -> {} @ {}", names[&hop.source], names[&hop.target], hop.time))
            .collect::<Vec<_>>()
            .join(", ")
    };

    // Every chain from ana to eli
    let search = PathSearch::new();
    let paths = search.paths(&network, &ana.id, &eli.id)?;
    println!("Chains from ana to eli: {}", paths.len());
    for path in &paths {
        println!("  [{}]", describe(path));
    }

    let annotation = annotate_paths(&paths)?;
    println!();
    for kind in PathKind::ALL {
        println!("{}:", kind.name());
        for path in annotation.get(kind) {
            println!(
                "  [{}] ({} hops, {} minutes, arrives {})",
                describe(path),
                path.len(),
                path.duration(),
                path.arrival()
            );
        }
    }

    // Only the morning
    let morning = PathSearch::new().window(540, 660);
    let morning_paths = morning.paths(&network, &ana.id, &cleo.id)?;
    println!("\nChains from ana to cleo before 11:00: {}", morning_paths.len());
    for path in &morning_paths {
        println!("  [{}]", describe(path));
    }

    // Everyone, spread over a few threads
    let everything = PathSearch::new().workers(4).all_pairs(&network)?;
    println!("\nConnected ordered pairs: {}", everything.len());
    for ((from, to), chains) in &everything {
        println!("  {} -> {}: {} chains", names[from], names[to], chains.len());
    }

    Ok(())
}
