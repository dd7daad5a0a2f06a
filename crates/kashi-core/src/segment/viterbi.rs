use tracing::{debug, debug_span};

use super::lattice::{Lattice, LatticeNode};
use super::Morpheme;
use crate::settings::settings;

/// Cost of taking `node` as one segment. The per-segment penalty makes the
/// search prefer fewer, longer lexicon words over chains of short ones.
fn word_cost(node: &LatticeNode) -> i64 {
    node.cost + settings().segmenter.segment_penalty
}

/// Run 1-best Viterbi over the lattice and return the cheapest path as morphemes.
///
/// Ties keep the first node reached, so lexicon order is stable across runs.
/// Returns an empty vec for an empty lattice.
pub(crate) fn viterbi_best(lattice: &Lattice) -> Vec<Morpheme> {
    let char_count = lattice.char_count;
    let _span = debug_span!("viterbi_best", char_count).entered();
    if char_count == 0 {
        return Vec::new();
    }

    let num_nodes = lattice.nodes.len();
    // best[node_idx] = (accumulated cost, previous node index)
    let mut best: Vec<Option<(i64, Option<usize>)>> = vec![None; num_nodes];

    for &idx in &lattice.nodes_by_start[0] {
        best[idx] = Some((word_cost(&lattice.nodes[idx]), None));
    }

    for pos in 1..char_count {
        for &next_idx in &lattice.nodes_by_start[pos] {
            let word = word_cost(&lattice.nodes[next_idx]);
            for &prev_idx in &lattice.nodes_by_end[pos] {
                let Some((prev_cost, _)) = best[prev_idx] else {
                    continue;
                };
                let total = prev_cost + word;
                if best[next_idx].map_or(true, |(cost, _)| total < cost) {
                    best[next_idx] = Some((total, Some(prev_idx)));
                }
            }
        }
    }

    // EOS: cheapest node ending at the last position
    let mut end: Option<(i64, usize)> = None;
    for &idx in &lattice.nodes_by_end[char_count] {
        if let Some((cost, _)) = best[idx] {
            if end.map_or(true, |(best_cost, _)| cost < best_cost) {
                end = Some((cost, idx));
            }
        }
    }

    let Some((total_cost, last)) = end else {
        debug!("no complete path");
        return Vec::new();
    };

    let mut path = Vec::new();
    let mut cur = Some(last);
    while let Some(idx) = cur {
        let node = &lattice.nodes[idx];
        path.push(Morpheme {
            surface: node.surface.clone(),
            reading: node.reading.clone(),
        });
        cur = best[idx].and_then(|(_, prev)| prev);
    }
    path.reverse();

    debug!(total_cost, segments = path.len());
    path
}
