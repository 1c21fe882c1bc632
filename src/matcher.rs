// Copyright 2020 The Jujutsu Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Matching-block decomposition of two token sequences.
//!
//! This is the classical "longest common subsequence as maximal matching
//! blocks" view of a two-way diff, used rather than a general edit-script
//! diff because the sync-region finder only cares about runs that are
//! identical on both sides.

use std::collections::HashMap;

use bstr::BStr;

/// A maximal run of equal tokens between two sequences: `x[x_off..x_off+len]
/// == y[y_off..y_off+len]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingBlock {
    pub x_off: usize,
    pub y_off: usize,
    pub len: usize,
}

/// Returns the matching blocks between `x` and `y`, ascending by `x_off`,
/// non-overlapping, terminated by a zero-length sentinel at
/// `(x.len(), y.len(), 0)`.
///
/// Deterministic: the same `(x, y)` always yields the same sequence, chosen
/// by always picking the first-starting (then longest) run at each
/// recursion step, matching the usual "patience"-free Ratcliff/Obershelp
/// strategy.
pub fn matching_blocks<'a>(x: &[&'a BStr], y: &[&'a BStr]) -> Vec<MatchingBlock> {
    let y_positions = index_positions(y);
    let mut blocks = Vec::new();
    find_matching_blocks(x, y, &y_positions, 0, x.len(), 0, y.len(), &mut blocks);
    blocks.sort_by_key(|b| b.x_off);
    blocks.push(MatchingBlock {
        x_off: x.len(),
        y_off: y.len(),
        len: 0,
    });
    blocks
}

/// Maps each distinct token to the ascending list of positions it occurs at
/// in `y`, so the longest-match search below can look up candidate starting
/// points in roughly linear time instead of scanning all of `y` per `x`
/// position.
fn index_positions<'a>(y: &[&'a BStr]) -> HashMap<&'a BStr, Vec<usize>> {
    let mut positions: HashMap<&'a BStr, Vec<usize>> = HashMap::new();
    for (i, tok) in y.iter().enumerate() {
        positions.entry(tok).or_default().push(i);
    }
    positions
}

/// Finds the longest run common to `x[xlo..xhi]` and `y[ylo..yhi]`, then
/// recurses on the unmatched regions to either side.
fn find_matching_blocks(
    x: &[&BStr],
    y: &[&BStr],
    y_positions: &HashMap<&BStr, Vec<usize>>,
    xlo: usize,
    xhi: usize,
    ylo: usize,
    yhi: usize,
    out: &mut Vec<MatchingBlock>,
) {
    if let Some(best) = longest_match(x, y, y_positions, xlo, xhi, ylo, yhi) {
        if best.x_off > xlo && best.y_off > ylo {
            find_matching_blocks(x, y, y_positions, xlo, best.x_off, ylo, best.y_off, out);
        }
        out.push(best);
        let x_end = best.x_off + best.len;
        let y_end = best.y_off + best.len;
        if x_end < xhi && y_end < yhi {
            find_matching_blocks(x, y, y_positions, x_end, xhi, y_end, yhi, out);
        }
    }
}

/// Finds the longest run of equal tokens within the given sub-rectangle,
/// preferring the one that starts earliest in `x`, then earliest in `y`.
fn longest_match(
    x: &[&BStr],
    y: &[&BStr],
    y_positions: &HashMap<&BStr, Vec<usize>>,
    xlo: usize,
    xhi: usize,
    ylo: usize,
    yhi: usize,
) -> Option<MatchingBlock> {
    // best_at_y[j] holds the length of the best run ending at y-position j-1
    // (0 meaning "no run"), reused across the sweep over x the way the
    // standard Ratcliff/Obershelp "junk-free" algorithm does.
    let mut best_at_y: HashMap<usize, usize> = HashMap::new();
    let mut best = MatchingBlock {
        x_off: xlo,
        y_off: ylo,
        len: 0,
    };
    for i in xlo..xhi {
        let mut new_best_at_y: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = y_positions.get(x[i]) {
            for &j in positions {
                if j < ylo || j >= yhi {
                    continue;
                }
                let run = best_at_y.get(&j.wrapping_sub(1)).copied().unwrap_or(0) + 1;
                new_best_at_y.insert(j, run);
                if run > best.len {
                    best = MatchingBlock {
                        x_off: i + 1 - run,
                        y_off: j + 1 - run,
                        len: run,
                    };
                }
            }
        }
        best_at_y = new_best_at_y;
    }
    (best.len > 0).then_some(best)
}
