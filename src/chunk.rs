use crate::error::{Error, Result};
use memchr::memrchr;

/// Bytes read at each boundary candidate while hunting for a line terminator.
pub const PROBE_WINDOW: usize = 4 * 1024;

/// Half-open byte span `[start, end)` of the input assigned to one worker.
///
/// A plan's ranges are pairwise disjoint, contiguous, cover the whole file,
/// and start and end on line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `data` into up to `workers` line-aligned ranges.
///
/// Each boundary candidate `i * (len / workers)` is moved forward to sit just
/// after the last terminator inside a probe window starting there. A probe
/// with no terminator means a single record exceeds the window, which fails
/// the whole plan. Candidates at or past end-of-file, or not past the
/// previous boundary, are skipped instead of producing empty ranges.
pub fn plan(data: &[u8], workers: usize) -> Result<Vec<ChunkRange>> {
    let len = data.len();
    if len == 0 {
        return Ok(Vec::new());
    }
    let workers = workers.max(1);
    let nominal = (len / workers).max(1);

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 1..workers {
        let candidate = i * nominal;
        if candidate >= len || candidate <= start {
            continue;
        }
        let probe = &data[candidate..len.min(candidate + PROBE_WINDOW)];
        let last = memrchr(b'\n', probe).ok_or(Error::UnterminatedRecord {
            offset: candidate,
            window: probe.len(),
        })?;
        let boundary = candidate + last + 1;
        ranges.push(ChunkRange { start, end: boundary });
        start = boundary;
    }
    // The last chunk absorbs the remainder, including an unterminated tail.
    if start < len {
        ranges.push(ChunkRange { start, end: len });
    }
    Ok(ranges)
}
