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

//! The renderer: turns a tagged-region stream into merged bytes, and the
//! word-merge fallback it calls into for on-demand conflict resolution.

use bstr::BStr;
use bstr::BString;
use bstr::ByteSlice as _;

use crate::classify::TaggedRegion;
use crate::classify::classify;
use crate::error::MergeError;
use crate::error::MergeResult;
use crate::matcher::matching_blocks;
use crate::minimize::minimize;
use crate::options::ForceSide;
use crate::options::MergeOptions;
use crate::options::WordMergeMode;
use crate::sync::find_sync_regions;
use crate::token::TokenSeq;
use crate::token::join;
use crate::token::split_lines;
use crate::token::split_words_folded;

/// The result of a successful call to [`merge`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutput {
    /// The merged bytes, including any conflict markers.
    pub text: BString,
    /// How many conflict regions were rendered with markers. Zero means the
    /// merge resolved cleanly (modulo any `force_side` or word-merge
    /// substitutions, which don't count as conflicts).
    pub conflicts_count: usize,
}

impl MergeOutput {
    /// Whether any conflict marker was emitted.
    pub fn has_conflicts(&self) -> bool {
        self.conflicts_count > 0
    }
}

/// Performs a three-way merge of `base`, `a`, and `b`.
///
/// This is the single entry point for the whole pipeline: splitter, matcher,
/// sync-region finder, classifier, optional minimizer, and renderer. See the
/// crate documentation for the algorithm.
#[tracing::instrument(level = "debug", skip_all, fields(
    base_len = base.len(), a_len = a.len(), b_len = b.len(),
    mode = ?options.word_merge_mode,
))]
pub fn merge(base: &[u8], a: &[u8], b: &[u8], options: &MergeOptions) -> MergeResult<MergeOutput> {
    let base_tok = tokenize(base, options.word_merge_mode);
    let a_tok = tokenize(a, options.word_merge_mode);
    let b_tok = tokenize(b, options.word_merge_mode);

    let a_blocks = matching_blocks(&base_tok, &a_tok);
    let b_blocks = matching_blocks(&base_tok, &b_tok);
    let sync_regions = find_sync_regions(&base_tok, &a_tok, &b_tok, &a_blocks, &b_blocks)?;
    let mut regions = classify(&base_tok, &a_tok, &b_tok, &sync_regions)?;
    if options.minimize {
        regions = minimize(&a_tok, &b_tok, regions);
    }

    render(&base_tok, &a_tok, &b_tok, &regions, options)
}

/// Tries to resolve a single conflict region at word granularity.
///
/// Re-runs the whole pipeline on `base`/`a`/`b` with word-with-folded-
/// newlines tokenization and [`WordMergeMode::Enforced`]. Returns the
/// merged bytes if that inner merge resolved every region without a
/// conflict, or `None` if it couldn't. The recursion is bounded to one
/// level: the inner call uses `Enforced` mode, which never retries further.
pub fn try_word_merge(base: &[u8], a: &[u8], b: &[u8]) -> MergeResult<Option<BString>> {
    let options = MergeOptions {
        word_merge_mode: WordMergeMode::Enforced,
        ..MergeOptions::default()
    };
    match merge(base, a, b, &options) {
        Ok(output) => Ok(Some(output.text)),
        Err(MergeError::CantShowWordConflicts) => Ok(None),
        Err(err) => Err(err),
    }
}

fn tokenize(buf: &[u8], mode: WordMergeMode) -> TokenSeq<'_> {
    if mode == WordMergeMode::Enforced {
        split_words_folded(buf)
    } else {
        split_lines(buf)
    }
}

fn render(
    base_tok: &[&BStr],
    a_tok: &[&BStr],
    b_tok: &[&BStr],
    regions: &[TaggedRegion],
    options: &MergeOptions,
) -> MergeResult<MergeOutput> {
    let newline = sniff_newline(a_tok);
    let start_marker = compose_marker(options.markers.start.as_deref(), options.name_a.as_deref());
    let base_marker = compose_marker(options.markers.base.as_deref(), options.name_base.as_deref());
    let mid_marker = options.markers.mid.clone();
    let end_marker = compose_marker(options.markers.end.as_deref(), options.name_b.as_deref());

    let mut out: Vec<u8> = Vec::new();
    let mut conflicts_count = 0;

    for region in regions {
        match *region {
            TaggedRegion::Unchanged { z1, z2 } => emit_range(&mut out, base_tok, z1, z2),
            TaggedRegion::Same { a1, a2 } | TaggedRegion::A { a1, a2 } => {
                emit_range(&mut out, a_tok, a1, a2);
            }
            TaggedRegion::B { b1, b2 } => emit_range(&mut out, b_tok, b1, b2),
            TaggedRegion::Conflict { z1, z2, a1, a2, b1, b2 } => {
                if let Some(side) = options.force_side {
                    match side {
                        ForceSide::Local => emit_range(&mut out, a_tok, a1, a2),
                        ForceSide::Other => emit_range(&mut out, b_tok, b1, b2),
                    }
                    continue;
                }

                if options.word_merge_mode == WordMergeMode::Enforced {
                    return Err(MergeError::CantShowWordConflicts);
                }

                if options.word_merge_mode == WordMergeMode::OnDemand {
                    let sub_base = join_range(base_tok, z1, z2);
                    let sub_a = join_range(a_tok, a1, a2);
                    let sub_b = join_range(b_tok, b1, b2);
                    if let Some(text) = try_word_merge(&sub_base, &sub_a, &sub_b)? {
                        out.extend_from_slice(&text);
                        continue;
                    }
                }

                conflicts_count += 1;
                if let Some(marker) = &start_marker {
                    out.extend_from_slice(marker);
                    out.extend_from_slice(newline);
                }
                emit_range(&mut out, a_tok, a1, a2);
                if let Some(marker) = &base_marker {
                    out.extend_from_slice(marker);
                    out.extend_from_slice(newline);
                    emit_range(&mut out, base_tok, z1, z2);
                }
                if let Some(marker) = &mid_marker {
                    out.extend_from_slice(marker);
                    out.extend_from_slice(newline);
                }
                emit_range(&mut out, b_tok, b1, b2);
                if let Some(marker) = &end_marker {
                    out.extend_from_slice(marker);
                    out.extend_from_slice(newline);
                }
            }
        }
    }

    Ok(MergeOutput {
        text: BString::from(out),
        conflicts_count,
    })
}

/// Picks the conflict-marker line terminator from `a`'s first token:
/// `\r\n`, then `\r`, else `\n`.
fn sniff_newline(a_tok: &[&BStr]) -> &'static [u8] {
    match a_tok.first() {
        Some(first) if first.ends_with(b"\r\n") => b"\r\n",
        Some(first) if first.ends_with(b"\r") => b"\r",
        _ => b"\n",
    }
}

fn compose_marker(marker: Option<&BStr>, name: Option<&BStr>) -> Option<BString> {
    let marker = marker?;
    let mut out = BString::from(marker.to_vec());
    if let Some(name) = name {
        out.push(b' ');
        out.extend_from_slice(name);
    }
    Some(out)
}

/// Appends `tokens[lo..hi]` to `out`. Any range with `hi <= lo` (including
/// the degenerate overlapping ranges [`minimize`](crate::minimize::minimize)
/// can produce on pathological inputs) is treated as empty rather than
/// panicking.
fn emit_range(out: &mut Vec<u8>, tokens: &[&BStr], lo: usize, hi: usize) {
    if hi <= lo {
        return;
    }
    for tok in &tokens[lo..hi] {
        out.extend_from_slice(tok);
    }
}

/// Like [`emit_range`], but returns the joined bytes instead of appending to
/// an output buffer. Used to carve a conflict region's three sub-buffers out
/// for the word-merge retry.
fn join_range(tokens: &[&BStr], lo: usize, hi: usize) -> Vec<u8> {
    if hi <= lo {
        return Vec::new();
    }
    join(&tokens[lo..hi])
}
