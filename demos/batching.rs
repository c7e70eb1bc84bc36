//! Example: grouping print jobs into capacity-bounded batches.
//!
//! Run with:
//! `cargo run --example batching`

use rod_cut::batching::{optimize_batches, PrintJob, PrinterConstraints};

fn main() {
    let constraints = PrinterConstraints {
        max_volume: 300.0,
        max_items: 2,
    };
    let jobs = vec![
        PrintJob::new("M1", 100.0, 2, 120),
        PrintJob::new("M2", 150.0, 1, 90),
        PrintJob::new("M3", 120.0, 3, 150),
    ];

    match optimize_batches(&jobs, constraints) {
        Ok(plan) => {
            for (idx, batch) in plan.batches.iter().enumerate() {
                println!(
                    "Batch {}: {:?} (volume {}, {} min)",
                    idx + 1,
                    batch.job_ids,
                    batch.volume,
                    batch.duration
                );
            }
            println!("Print order: {:?}", plan.print_order);
            println!("Total time: {} minutes", plan.total_time);
        }
        Err(err) => eprintln!("cannot plan batches: {err}"),
    }
}
