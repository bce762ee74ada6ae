use crate::chunk::{self, ChunkRange};
use crate::error::Result;
use crate::merge::merge_tables;
use crate::report;
use crate::source::Source;
use crate::stats::Table;
use crate::worker::process_chunk;
use crossbeam_channel as channel;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the whole pipeline over the file at `path` and returns the formatted
/// report. Any planning, parse, or I/O failure aborts the run with no output.
pub fn run(path: &Path, workers: usize) -> Result<String> {
    let started = Instant::now();
    let source = Source::open(path)?;
    let ranges = chunk::plan(source.bytes(), workers)?;
    info!(
        file = %path.display(),
        bytes = source.len(),
        chunks = ranges.len(),
        workers,
        "planned chunk ranges"
    );

    let table = aggregate(source.bytes(), &ranges, workers)?;
    let report = report::render(&table);
    info!(
        stations = table.len(),
        wall_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(report)
}

/// Fans the planned ranges out over a fixed-size pool and reduces the
/// per-chunk tables as they arrive.
///
/// Each worker sends exactly one message, its completed table or its error,
/// and the channel capacity matches the chunk count so a sender never blocks.
/// The pool scope is the join barrier; only this thread ever touches the
/// global table. On a worker error the remaining chunks still run to
/// completion, but the run fails with the first error received and any
/// partially merged results are discarded.
fn aggregate(data: &[u8], ranges: &[ChunkRange], workers: usize) -> Result<Table> {
    if ranges.is_empty() {
        return Ok(Table::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1).min(ranges.len()))
        .build()?;

    let (tx, rx) = channel::bounded(ranges.len());
    pool.scope(|scope| {
        for &range in ranges {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = process_chunk(&data[range.start..range.end], range.start)
                    .map(|table| (range, table));
                let _ = tx.send(result);
            });
        }
    });
    drop(tx);

    let mut global = Table::new();
    let mut first_error = None;
    for result in rx {
        match result {
            Ok((range, local)) => {
                debug!(
                    start = range.start,
                    end = range.end,
                    stations = local.len(),
                    "chunk complete"
                );
                if first_error.is_none() {
                    merge_tables(&mut global, local);
                }
            }
            Err(error) if first_error.is_none() => first_error = Some(error),
            Err(_) => {}
        }
    }
    match first_error {
        Some(error) => Err(error),
        None => Ok(global),
    }
}
