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

//! The configuration record accepted by [`crate::merge`].

use bstr::BString;

/// Whether and how the word-level retry in [`crate::merge`] is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordMergeMode {
    /// Never attempt a word-level merge; line conflicts are rendered as-is.
    #[default]
    Disabled,
    /// Try the line-level merge first; only fall back to a word-level merge
    /// for regions that would otherwise conflict.
    OnDemand,
    /// Force word-level tokenization for this merge. Conflicts are not
    /// representable in this mode; encountering one fails the merge. Used
    /// internally by the `OnDemand` retry and not ordinarily selected by
    /// callers directly.
    Enforced,
}

/// Which side to prefer when a conflict can't otherwise be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceSide {
    /// Resolve every conflict in favor of `a` ("local").
    Local,
    /// Resolve every conflict in favor of `b` ("other").
    Other,
}

/// The four independently-optional conflict marker lines.
///
/// `None` suppresses emission of that marker entirely, which is how a
/// "union" merge (see [`MergeOptions::union`]) produces marker-free output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSet {
    pub start: Option<BString>,
    pub mid: Option<BString>,
    pub end: Option<BString>,
    pub base: Option<BString>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            start: Some(BString::from(b"<<<<<<<".to_vec())),
            mid: Some(BString::from(b"=======".to_vec())),
            end: Some(BString::from(b">>>>>>>".to_vec())),
            base: None,
        }
    }
}

impl MarkerSet {
    /// All four markers suppressed.
    pub fn none() -> Self {
        Self {
            start: None,
            mid: None,
            end: None,
            base: None,
        }
    }

    /// The default three markers, plus a `|||||||` base marker, matching
    /// the conventional "show me the ancestor too" diff3 style.
    pub fn with_base_marker() -> Self {
        Self {
            base: Some(BString::from(b"|||||||".to_vec())),
            ..Self::default()
        }
    }
}

/// Configuration for a single call to [`crate::merge`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub word_merge_mode: WordMergeMode,
    pub name_a: Option<BString>,
    pub name_b: Option<BString>,
    pub name_base: Option<BString>,
    pub markers: MarkerSet,
    pub force_side: Option<ForceSide>,
    pub minimize: bool,
}

impl MergeOptions {
    /// A marker-free merge that concatenates both sides of every conflict
    /// region instead of annotating it, for "keep everything, let the user
    /// sort it out" workflows.
    pub fn union() -> Self {
        Self {
            markers: MarkerSet::none(),
            ..Self::default()
        }
    }
}
