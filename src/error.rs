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

use thiserror::Error;

/// Something the merge pipeline couldn't complete.
///
/// `SyncInvariantViolation` indicates a bug in the [`Matcher`](crate::matcher)
/// implementation (a matching block that doesn't actually match) and isn't
/// expected to occur in practice; it exists so an embedder can turn a
/// corrupted merge into a bug report instead of a silent wrong answer.
/// `CantShowWordConflicts` is ordinary, expected control flow for a direct
/// `Enforced`-mode call that hits a real conflict — see its own docs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeError {
    /// A sync region was emitted whose three slices were not byte-equal, or
    /// the region classifier reached the supposedly unreachable
    /// `equal_a && equal_b && !same` case.
    #[error("sync region invariant violated: base/a/b slices disagree ({detail})")]
    SyncInvariantViolation { detail: &'static str },
    /// [`WordMergeMode::Enforced`](crate::options::WordMergeMode::Enforced)
    /// was selected and a region could not be rendered without a conflict
    /// marker. This is not a bug: `Enforced` mode has no way to represent a
    /// conflict. The [`OnDemand`](crate::options::WordMergeMode::OnDemand)
    /// retry calls into the same pipeline internally and intercepts this
    /// case before it becomes visible, so callers doing ordinary merges
    /// never see this variant.
    #[error("word-level merge could not resolve a conflict in enforced mode")]
    CantShowWordConflicts,
}

pub type MergeResult<T> = Result<T, MergeError>;
