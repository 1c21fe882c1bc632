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

//! Splitting byte buffers into the token sequences the rest of the merge
//! pipeline aligns.

use bstr::BStr;
use bstr::ByteSlice as _;
use itertools::Itertools as _;

/// An ordered sequence of byte slices carved out of one input buffer.
///
/// Concatenating every token reconstitutes the original buffer exactly;
/// neither [`split_lines`] nor [`split_words_folded`] drop or duplicate a
/// byte.
pub type TokenSeq<'a> = Vec<&'a BStr>;

/// Splits `buf` into lines, each line keeping its terminator.
///
/// A boundary falls after every `\n`, after every `\r` not immediately
/// followed by `\n`, and at the end of the buffer. The final token may lack
/// a terminator if the buffer doesn't end with one. Mixed line endings are
/// preserved token-by-token rather than normalized.
pub fn split_lines(buf: &[u8]) -> TokenSeq<'_> {
    let buf = buf.as_bstr();
    let mut tokens = Vec::new();
    let mut start = 0;
    let bytes = buf.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                tokens.push(buf[start..=i].as_bstr());
                i += 1;
                start = i;
            }
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    tokens.push(buf[start..=i + 1].as_bstr());
                    i += 2;
                } else {
                    tokens.push(buf[start..=i].as_bstr());
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        tokens.push(buf[start..].as_bstr());
    }
    tokens
}

/// Splits `buf` into "words" (maximal runs of whitespace or non-whitespace
/// bytes), then folds any standalone `"\n"` token into the token before it.
///
/// The fold avoids a lone newline becoming its own word-level change,
/// which would make near-every line boundary look conflicted at word
/// granularity. After folding, no returned token equals exactly `b"\n"`.
pub fn split_words_folded(buf: &[u8]) -> TokenSeq<'_> {
    let folded = word_bounds(buf).into_iter().coalesce(|prev, cur| {
        let (start, end) = cur;
        if end - start == 1 && buf[start] == b'\n' {
            Ok((prev.0, end))
        } else {
            Err((prev, cur))
        }
    });
    let buf = buf.as_bstr();
    folded.map(|(start, end)| buf[start..end].as_bstr()).collect()
}

/// Returns the `[start, end)` byte bounds of each "word": a maximal run of
/// whitespace or non-whitespace bytes, with each `\n` always its own word.
fn word_bounds(buf: &[u8]) -> Vec<(usize, usize)> {
    let mut bounds = Vec::new();
    let mut i = 0;
    while i < buf.len() {
        if buf[i] == b'\n' {
            bounds.push((i, i + 1));
            i += 1;
            continue;
        }
        let is_space = buf[i].is_ascii_whitespace();
        let start = i;
        while i < buf.len() && buf[i] != b'\n' && buf[i].is_ascii_whitespace() == is_space {
            i += 1;
        }
        bounds.push((start, i));
    }
    bounds
}

/// Concatenates a token sequence back into an owned buffer. Mostly useful
/// for tests and for feeding a token range back into the matcher as a
/// synthetic buffer.
pub fn join(tokens: &[&BStr]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tokens.iter().map(|t| t.len()).sum());
    for t in tokens {
        out.extend_from_slice(t);
    }
    out
}
