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

//! A three-way textual merge engine.
//!
//! Given a common ancestor (`base`) and two descendants (`a` and `b`), this
//! crate computes a merged byte buffer, inserting conflict markers where the
//! two sides changed the same part of the file in different ways.
//!
//! The pipeline, in order:
//!
//! 1. [`token`] splits each buffer into lines (or, for word-granularity
//!    merges, folded words).
//! 2. [`matcher`] finds the matching blocks between `base` and each side.
//! 3. [`sync`] combines the two matching-block lists into triple-aligned
//!    sync regions.
//! 4. [`classify`] walks the sync regions into the tagged-region taxonomy:
//!    unchanged, same, side-only, and conflicting stretches.
//! 5. [`minimize`] optionally trims identical prefixes/suffixes out of
//!    conflict regions.
//! 6. [`render`] turns the tagged-region stream into merged bytes, falling
//!    back to a recursive word-level merge for conflicts when asked.
//!
//! [`merge`] drives the whole pipeline; [`groups::merge_groups`] and
//! [`groups::find_unconflicted`] expose two coarser, rendering-independent
//! views for callers that want to build their own conflict presentation.

mod classify;
mod error;
mod groups;
mod matcher;
mod minimize;
mod options;
mod range;
mod render;
mod sync;
mod token;

pub use classify::TaggedRegion;
pub use error::MergeError;
pub use error::MergeResult;
pub use groups::MergeGroup;
pub use groups::find_unconflicted;
pub use groups::merge_groups;
pub use matcher::MatchingBlock;
pub use matcher::matching_blocks;
pub use options::ForceSide;
pub use options::MarkerSet;
pub use options::MergeOptions;
pub use options::WordMergeMode;
pub use range::Range;
pub use render::MergeOutput;
pub use render::merge;
pub use render::try_word_merge;
pub use sync::SyncRegion;
pub use sync::find_sync_regions;
pub use token::TokenSeq;
pub use token::split_lines;
pub use token::split_words_folded;
