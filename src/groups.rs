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

//! Two supplemental read-only views onto a merge, independent of rendering:
//! the grouped-lines view and the unconflicted-base-ranges view.

use bstr::BStr;

use crate::classify::TaggedRegion;
use crate::classify::classify;
use crate::error::MergeResult;
use crate::matcher::matching_blocks;
use crate::range::Range;
use crate::range::intersect;
use crate::sync::find_sync_regions;

/// One group of a merge, carrying the actual token slices rather than index
/// ranges. A caller that wants to walk the merge result without rendering
/// conflict markers (e.g. to build its own conflict UI) uses this instead of
/// [`crate::merge`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeGroup<'a> {
    Unchanged(Vec<&'a BStr>),
    Same(Vec<&'a BStr>),
    A(Vec<&'a BStr>),
    B(Vec<&'a BStr>),
    Conflict {
        base: Vec<&'a BStr>,
        a: Vec<&'a BStr>,
        b: Vec<&'a BStr>,
    },
}

/// Computes the tagged-region stream for `(base, a, b)` and converts it into
/// the [`MergeGroup`] sequence, resolving each region's indices back into
/// token slices.
pub fn merge_groups<'a>(
    base: &[&'a BStr],
    a: &[&'a BStr],
    b: &[&'a BStr],
) -> MergeResult<Vec<MergeGroup<'a>>> {
    let a_blocks = matching_blocks(base, a);
    let b_blocks = matching_blocks(base, b);
    let sync_regions = find_sync_regions(base, a, b, &a_blocks, &b_blocks)?;
    let regions = classify(base, a, b, &sync_regions)?;

    Ok(regions
        .into_iter()
        .map(|region| match region {
            TaggedRegion::Unchanged { z1, z2 } => MergeGroup::Unchanged(base[z1..z2].to_vec()),
            TaggedRegion::Same { a1, a2 } => MergeGroup::Same(a[a1..a2].to_vec()),
            TaggedRegion::A { a1, a2 } => MergeGroup::A(a[a1..a2].to_vec()),
            TaggedRegion::B { b1, b2 } => MergeGroup::B(b[b1..b2].to_vec()),
            TaggedRegion::Conflict { z1, z2, a1, a2, b1, b2 } => MergeGroup::Conflict {
                base: base[z1..z2].to_vec(),
                a: a[a1..a2].to_vec(),
                b: b[b1..b2].to_vec(),
            },
        })
        .collect())
}

/// Returns the ranges of `base` that are untouched by conflict: runs where
/// `base`'s matches against `a` and against `b` overlap.
///
/// This is coarser than [`classify`]: it only looks at the two two-way
/// matching-block lists and doesn't distinguish `Same` from `Unchanged`, so
/// it's cheaper when a caller only wants to know which parts of `base`
/// survive untouched by either side, not how the rest resolves.
pub fn find_unconflicted(base: &[&BStr], a: &[&BStr], b: &[&BStr]) -> Vec<Range> {
    let a_blocks = matching_blocks(base, a);
    let b_blocks = matching_blocks(base, b);

    let mut unconflicted = Vec::new();
    let mut ia = 0;
    let mut ib = 0;
    while ia < a_blocks.len() && ib < b_blocks.len() {
        let ablock = a_blocks[ia];
        let bblock = b_blocks[ib];
        let a_range = (ablock.x_off, ablock.x_off + ablock.len);
        let b_range = (bblock.x_off, bblock.x_off + bblock.len);
        if let Some(overlap) = intersect(a_range, b_range) {
            unconflicted.push(overlap);
        }
        if a_range.1 < b_range.1 {
            ia += 1;
        } else {
            ib += 1;
        }
    }
    unconflicted
}
