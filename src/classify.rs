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

//! Turning a sync-region stream into the four-way tagged-region taxonomy.

use bstr::BStr;

use crate::error::MergeError;
use crate::error::MergeResult;
use crate::range::compare_range;
use crate::sync::SyncRegion;

/// One classified stretch of the merge, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaggedRegion {
    /// Unchanged on both sides: take `base[z1..z2]`.
    Unchanged { z1: usize, z2: usize },
    /// Both sides diverged from base identically: take `a[a1..a2]` (equal
    /// to the corresponding range of `b`).
    Same { a1: usize, a2: usize },
    /// `b` is unchanged from base here; take `a[a1..a2]`.
    A { a1: usize, a2: usize },
    /// `a` is unchanged from base here; take `b[b1..b2]`.
    B { b1: usize, b2: usize },
    /// Both sides changed, differently.
    Conflict {
        z1: usize,
        z2: usize,
        a1: usize,
        a2: usize,
        b1: usize,
        b2: usize,
    },
}

/// Walks the sync regions and yields the tagged-region stream.
///
/// `sync_regions` must end with the zero-length sentinel produced by
/// [`find_sync_regions`](crate::sync::find_sync_regions).
pub fn classify(
    base: &[&BStr],
    a: &[&BStr],
    b: &[&BStr],
    sync_regions: &[SyncRegion],
) -> MergeResult<Vec<TaggedRegion>> {
    let mut out = Vec::new();
    let mut iz = 0;
    let mut ia = 0;
    let mut ib = 0;
    for sync in sync_regions {
        let SyncRegion { z1: zm, z2: ze, a1: am, a2: ae, b1: bm, b2: be } = *sync;
        if am > ia || bm > ib {
            let equal_a = compare_range(a, ia, am, base, iz, zm);
            let equal_b = compare_range(b, ib, bm, base, iz, zm);
            let same = compare_range(a, ia, am, b, ib, bm);
            out.push(if same {
                TaggedRegion::Same { a1: ia, a2: am }
            } else if equal_a && !equal_b {
                TaggedRegion::B { b1: ib, b2: bm }
            } else if equal_b && !equal_a {
                TaggedRegion::A { a1: ia, a2: am }
            } else if !equal_a && !equal_b {
                TaggedRegion::Conflict {
                    z1: iz,
                    z2: zm,
                    a1: ia,
                    a2: am,
                    b1: ib,
                    b2: bm,
                }
            } else {
                return Err(MergeError::SyncInvariantViolation {
                    detail: "a and b both equal base but differ from each other",
                });
            });
            ia = am;
            ib = bm;
        }
        iz = zm;
        if ze > zm {
            out.push(TaggedRegion::Unchanged { z1: zm, z2: ze });
            iz = ze;
            ia = ae;
            ib = be;
        }
    }
    Ok(out)
}
