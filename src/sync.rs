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

//! Combining two matching-block lists into triple-aligned sync regions.

use bstr::BStr;

use crate::error::MergeError;
use crate::error::MergeResult;
use crate::matcher::MatchingBlock;
use crate::range::intersect;

/// A triple-aligned run where `base[z1..z2] == a[a1..a2] == b[b1..b2]`.
///
/// The last sync region returned by [`find_sync_regions`] is always the
/// zero-length region at the end of all three sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncRegion {
    pub z1: usize,
    pub z2: usize,
    pub a1: usize,
    pub a2: usize,
    pub b1: usize,
    pub b2: usize,
}

/// Finds the sync regions given the matching blocks of (base, a) and
/// (base, b).
///
/// Walks both block lists with a cursor each, intersecting their base-side
/// extents; whichever block ends earlier in base is advanced (ties advance
/// `b`'s cursor). Every emitted region is checked against the actual token
/// sequences before being returned, since a broken [`Matcher`] reporting a
/// block that doesn't really match would otherwise corrupt the merge
/// silently.
///
/// [`Matcher`]: crate::matcher
pub fn find_sync_regions(
    base: &[&BStr],
    a: &[&BStr],
    b: &[&BStr],
    a_blocks: &[MatchingBlock],
    b_blocks: &[MatchingBlock],
) -> MergeResult<Vec<SyncRegion>> {
    let mut regions = Vec::new();
    let mut ia = 0;
    let mut ib = 0;
    while ia < a_blocks.len() && ib < b_blocks.len() {
        let ablock = a_blocks[ia];
        let bblock = b_blocks[ib];
        let a_range = (ablock.x_off, ablock.x_off + ablock.len);
        let b_range = (bblock.x_off, bblock.x_off + bblock.len);
        if let Some((intbase, intend)) = intersect(a_range, b_range) {
            let intlen = intend - intbase;
            let asub = ablock.y_off + (intbase - ablock.x_off);
            let bsub = bblock.y_off + (intbase - bblock.x_off);
            let region = SyncRegion {
                z1: intbase,
                z2: intend,
                a1: asub,
                a2: asub + intlen,
                b1: bsub,
                b2: bsub + intlen,
            };
            check_region(base, a, b, region)?;
            regions.push(region);
        }
        if a_range.1 < b_range.1 {
            ia += 1;
        } else {
            ib += 1;
        }
    }
    regions.push(SyncRegion {
        z1: base.len(),
        z2: base.len(),
        a1: a.len(),
        a2: a.len(),
        b1: b.len(),
        b2: b.len(),
    });
    Ok(regions)
}

fn check_region(
    base: &[&BStr],
    a: &[&BStr],
    b: &[&BStr],
    region: SyncRegion,
) -> MergeResult<()> {
    let base_slice = &base[region.z1..region.z2];
    if base_slice != &a[region.a1..region.a2] || base_slice != &b[region.b1..region.b2] {
        return Err(MergeError::SyncInvariantViolation {
            detail: "matching block reported by the Matcher does not match the base token range",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::matching_blocks;
    use crate::token::split_lines;

    fn region(base: &'static str, a: &'static str, b: &'static str) -> Vec<SyncRegion> {
        let base_tok = split_lines(base.as_bytes());
        let a_tok = split_lines(a.as_bytes());
        let b_tok = split_lines(b.as_bytes());
        let a_blocks = matching_blocks(&base_tok, &a_tok);
        let b_blocks = matching_blocks(&base_tok, &b_tok);
        find_sync_regions(&base_tok, &a_tok, &b_tok, &a_blocks, &b_blocks).unwrap()
    }

    #[test]
    fn test_ends_with_zero_length_sentinel() {
        let regions = region("a\nb\nc\n", "a\nb\nc\n", "a\nb\nc\n");
        let last = *regions.last().unwrap();
        assert_eq!(last.z1, last.z2);
        assert_eq!(last.a1, last.a2);
        assert_eq!(last.b1, last.b2);
    }

    #[test]
    fn test_non_overlapping_changes() {
        let regions = region("a\nb\nc\n", "A\nb\nc\n", "a\nb\nC\n");
        // base[0:1] ("a\n") is not in any sync region (changed on a's side);
        // base[1:2] ("b\n") is a sync region; base[2:3] ("c\n") is changed on
        // b's side so also excluded.
        assert!(regions.iter().any(|r| r.z1 == 1 && r.z2 == 2));
    }
}
