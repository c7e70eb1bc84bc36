//! Greedy grouping of print jobs into concurrent batches.
//!
//! Jobs are taken in ascending priority (stable, so equal priorities keep
//! their input order) and appended to the open batch until either the
//! printer's volume or item limit would be exceeded; the batch is then closed
//! and a new one opened with the current job. A batch takes as long as its
//! slowest job. Jobs that alone exceed the volume limit are skipped.

use crate::error::BatchError;

/// A single item to print.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub id: String,
    pub volume: f64,
    /// Lower values print first.
    pub priority: u32,
    pub print_time: u64,
}

impl PrintJob {
    pub fn new(id: impl Into<String>, volume: f64, priority: u32, print_time: u64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }
}

/// Capacity of one concurrent print run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterConstraints {
    pub max_volume: f64,
    pub max_items: usize,
}

/// Jobs printed together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Batch {
    pub job_ids: Vec<String>,
    pub volume: f64,
    /// Longest print time among the members.
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchPlan {
    pub batches: Vec<Batch>,
    /// Job ids in the order they are printed.
    pub print_order: Vec<String>,
    /// Sum of batch durations.
    pub total_time: u64,
}

impl BatchPlan {
    fn close(&mut self, batch: Batch) {
        if batch.job_ids.is_empty() {
            return;
        }
        self.print_order.extend(batch.job_ids.iter().cloned());
        self.total_time += batch.duration;
        self.batches.push(batch);
    }
}

/// Plan batches for `jobs` under `constraints`.
///
/// Every job must have a positive volume; NaN, zero or negative volumes are
/// rejected before planning.
pub fn optimize_batches(
    jobs: &[PrintJob],
    constraints: PrinterConstraints,
) -> Result<BatchPlan, BatchError> {
    if constraints.max_items == 0 {
        return Err(BatchError::ZeroCapacity);
    }
    if !(constraints.max_volume > 0.0) {
        return Err(BatchError::NonPositiveVolume(constraints.max_volume));
    }
    if let Some(job) = jobs.iter().find(|job| !(job.volume > 0.0)) {
        return Err(BatchError::NonPositiveJobVolume { id: job.id.clone() });
    }

    let mut ordered: Vec<&PrintJob> = jobs.iter().collect();
    ordered.sort_by_key(|job| job.priority);

    let mut plan = BatchPlan::default();
    let mut open = Batch::default();

    for job in ordered {
        if job.volume > constraints.max_volume {
            #[cfg(feature = "tracing")]
            tracing::debug!(id = %job.id, volume = job.volume, "job exceeds printer volume, skipped");
            continue;
        }
        let overflows = open.volume + job.volume > constraints.max_volume
            || open.job_ids.len() + 1 > constraints.max_items;
        if overflows {
            plan.close(std::mem::take(&mut open));
        }
        open.job_ids.push(job.id.clone());
        open.volume += job.volume;
        open.duration = open.duration.max(job.print_time);
    }
    plan.close(open);

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints() -> PrinterConstraints {
        PrinterConstraints {
            max_volume: 300.0,
            max_items: 2,
        }
    }

    #[test]
    fn equal_priorities_keep_input_order() {
        let jobs = vec![
            PrintJob::new("M1", 100.0, 1, 120),
            PrintJob::new("M2", 150.0, 1, 90),
            PrintJob::new("M3", 120.0, 1, 150),
        ];
        let plan = optimize_batches(&jobs, constraints()).unwrap();
        assert_eq!(plan.print_order, vec!["M1", "M2", "M3"]);
        assert_eq!(plan.batches.len(), 2);
        assert_eq!(plan.total_time, 270);
    }

    #[test]
    fn priorities_reorder_jobs() {
        let jobs = vec![
            PrintJob::new("M1", 100.0, 2, 120),
            PrintJob::new("M2", 150.0, 1, 90),
            PrintJob::new("M3", 120.0, 3, 150),
        ];
        let plan = optimize_batches(&jobs, constraints()).unwrap();
        assert_eq!(plan.print_order, vec!["M2", "M1", "M3"]);
        assert_eq!(plan.total_time, 270);
    }

    #[test]
    fn volume_limit_splits_batches() {
        let jobs = vec![
            PrintJob::new("M1", 250.0, 1, 180),
            PrintJob::new("M2", 200.0, 1, 150),
            PrintJob::new("M3", 180.0, 2, 120),
        ];
        let plan = optimize_batches(&jobs, constraints()).unwrap();
        assert_eq!(plan.batches.len(), 3);
        assert_eq!(plan.total_time, 450);
    }

    #[test]
    fn oversized_jobs_are_skipped() {
        let jobs = vec![
            PrintJob::new("big", 400.0, 1, 999),
            PrintJob::new("ok", 50.0, 2, 30),
        ];
        let plan = optimize_batches(&jobs, constraints()).unwrap();
        assert_eq!(plan.print_order, vec!["ok"]);
        assert_eq!(plan.total_time, 30);
    }

    #[test]
    fn no_jobs_yield_empty_plan() {
        let plan = optimize_batches(&[], constraints()).unwrap();
        assert_eq!(plan, BatchPlan::default());
    }

    #[test]
    fn rejects_non_positive_job_volume() {
        for bad in [f64::NAN, 0.0, -20.0] {
            let jobs = vec![
                PrintJob::new("ok", 50.0, 1, 30),
                PrintJob::new("bad", bad, 2, 40),
            ];
            assert_eq!(
                optimize_batches(&jobs, constraints()),
                Err(BatchError::NonPositiveJobVolume { id: "bad".into() })
            );
        }
    }

    #[test]
    fn rejects_degenerate_printer() {
        let zero_items = PrinterConstraints {
            max_volume: 10.0,
            max_items: 0,
        };
        assert_eq!(
            optimize_batches(&[], zero_items),
            Err(BatchError::ZeroCapacity)
        );
        let zero_volume = PrinterConstraints {
            max_volume: 0.0,
            max_items: 1,
        };
        assert_eq!(
            optimize_batches(&[], zero_volume),
            Err(BatchError::NonPositiveVolume(0.0))
        );
    }
}
