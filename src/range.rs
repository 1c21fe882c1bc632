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

//! Half-open integer ranges and their intersection.

/// A half-open range `[lo, hi)` over token indices.
pub type Range = (usize, usize);

/// Returns the overlap of two half-open ranges, or `None` if they don't
/// overlap.
///
/// ```text
/// intersect((0, 10), (0, 6)) == Some((0, 6))
/// intersect((0, 10), (5, 15)) == Some((5, 10))
/// intersect((0, 10), (10, 15)) == None
/// intersect((0, 9), (7, 15)) == Some((7, 9))
/// ```
///
/// Both ranges must already satisfy `lo <= hi`; this is a precondition, not
/// something this function checks.
pub fn intersect(ra: Range, rb: Range) -> Option<Range> {
    debug_assert!(ra.0 <= ra.1);
    debug_assert!(rb.0 <= rb.1);
    let lo = ra.0.max(rb.0);
    let hi = ra.1.min(rb.1);
    (lo < hi).then_some((lo, hi))
}

/// Compares `a[astart..aend]` to `b[bstart..bend]` without slicing.
///
/// Mismatched lengths short-circuit to `false` before any element is
/// examined.
pub fn compare_range<T: PartialEq>(
    a: &[T],
    astart: usize,
    aend: usize,
    b: &[T],
    bstart: usize,
    bend: usize,
) -> bool {
    if aend - astart != bend - bstart {
        return false;
    }
    a[astart..aend] == b[bstart..bend]
}
