//! Segment chaining
//!
//! Merges runs of segments where the end of one equals the start of the next
//! into a single multi-point path, so the line feature needs fewer MoveTo
//! commands.
//!
//! Segments are sorted by (start, end). Each unconsumed segment, in sorted
//! order, starts a path; the path is then extended by any unconsumed segment
//! starting at its current end until none is left. Lookups go through a
//! start-point index and consumed segments are tombstoned, so each segment is
//! visited a constant number of times.

use std::collections::HashMap;

use glam::IVec2;
use tracing::debug;

use crate::types::Segment;

/// A polyline of at least two grid points
pub type Path = Vec<IVec2>;

/// Treat every segment as its own two-point path, in insertion order
pub fn unchained_paths(segments: &[Segment]) -> Vec<Path> {
    segments.iter().map(|s| vec![s.start, s.end]).collect()
}

/// Sort segments and merge connected ones into paths
pub fn chain_segments(mut segments: Vec<Segment>) -> Vec<Path> {
    segments.sort_unstable_by_key(Segment::sort_key);

    // Start point -> segment indices, largest index first so `pop` yields the
    // lowest sorted candidate.
    let mut by_start: HashMap<IVec2, Vec<usize>> = HashMap::with_capacity(segments.len());
    for (idx, segment) in segments.iter().enumerate().rev() {
        by_start.entry(segment.start).or_default().push(idx);
    }

    let mut consumed = vec![false; segments.len()];
    let mut paths = Vec::new();

    for head in 0..segments.len() {
        if consumed[head] {
            continue;
        }
        consumed[head] = true;

        let mut tail = segments[head].end;
        let mut path = vec![segments[head].start, tail];

        while let Some(next) = take_next(&mut by_start, &consumed, tail) {
            consumed[next] = true;
            tail = segments[next].end;
            path.push(tail);
        }

        paths.push(path);
    }

    debug!(
        "chain_segments: {} segments -> {} paths",
        segments.len(),
        paths.len()
    );

    paths
}

/// Pop the lowest unconsumed segment starting at `point`
fn take_next(
    by_start: &mut HashMap<IVec2, Vec<usize>>,
    consumed: &[bool],
    point: IVec2,
) -> Option<usize> {
    let candidates = by_start.get_mut(&point)?;
    while let Some(idx) = candidates.pop() {
        if !consumed[idx] {
            return Some(idx);
        }
    }
    None
}
