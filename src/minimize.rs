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

//! Trimming the matching prefix/suffix out of conflict regions.

use bstr::BStr;

use crate::classify::TaggedRegion;

/// Trims shared prefixes/suffixes out of every `Conflict` region.
///
/// Identical edits at the very start or end of a conflict aren't actually
/// conflicting, so they're split off into `Same` regions, narrowing (and
/// sometimes emptying) the interior conflict. Non-conflict regions pass
/// through unchanged.
pub fn minimize(a: &[&BStr], b: &[&BStr], regions: Vec<TaggedRegion>) -> Vec<TaggedRegion> {
    let mut out = Vec::with_capacity(regions.len());
    for region in regions {
        let TaggedRegion::Conflict { z1, z2, a1, a2, b1, b2 } = region else {
            out.push(region);
            continue;
        };
        let alen = a2 - a1;
        let blen = b2 - b1;
        let max_match = alen.min(blen);

        // `startmatches` and `endmatches` are bounded only by `max_match`,
        // independently of each other, matching the reference algorithm. On
        // pathological inputs the two can overlap; the renderer treats any
        // resulting `a1 >= a2` / `b1 >= b2` range as empty rather than
        // panicking, mirroring how the original's slice-based rendering
        // silently yields nothing for an inverted range.
        let startmatches = (0..max_match)
            .take_while(|&i| a[a1 + i] == b[b1 + i])
            .count();
        let endmatches = (0..max_match)
            .take_while(|&i| a[a2 - i - 1] == b[b2 - i - 1])
            .count();

        if startmatches > 0 {
            out.push(TaggedRegion::Same { a1, a2: a1 + startmatches });
        }
        out.push(TaggedRegion::Conflict {
            z1,
            z2,
            a1: a1 + startmatches,
            a2: a2 - endmatches,
            b1: b1 + startmatches,
            b2: b2 - endmatches,
        });
        if endmatches > 0 {
            out.push(TaggedRegion::Same { a1: a2 - endmatches, a2 });
        }
    }
    out
}
