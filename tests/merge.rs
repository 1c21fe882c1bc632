use bstr::BString;
use bstr::ByteSlice as _;
use merge3::ForceSide;
use merge3::MergeOptions;
use merge3::WordMergeMode;
use merge3::merge;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn merge_str(base: &str, a: &str, b: &str, options: &MergeOptions) -> (String, usize) {
    let output = merge(base.as_bytes(), a.as_bytes(), b.as_bytes(), options).unwrap();
    (output.text.to_string(), output.conflicts_count)
}

#[test]
fn scenario_1_non_overlapping_changes() {
    let (text, count) = merge_str("a\nb\nc\n", "A\nb\nc\n", "a\nb\nC\n", &MergeOptions::default());
    assert_eq!(text, "A\nb\nC\n");
    assert_eq!(count, 0);
}

#[test]
fn scenario_2_identical_change_both_sides() {
    let (text, count) = merge_str("x\n", "y\n", "y\n", &MergeOptions::default());
    assert_eq!(text, "y\n");
    assert_eq!(count, 0);
}

#[test]
fn scenario_3_conflicting_change() {
    let (text, count) = merge_str("one\n", "two\n", "three\n", &MergeOptions::default());
    assert!(text.starts_with("<<<<<<<\n"));
    assert!(text.contains("two\n"));
    assert!(text.contains("=======\n"));
    assert!(text.contains("three\n"));
    assert!(text.ends_with(">>>>>>>\n"));
    assert_eq!(count, 1);
}

#[test]
fn scenario_4_minimize_trims_shared_prefix() {
    let options = MergeOptions {
        minimize: true,
        ..MergeOptions::default()
    };
    let (text, count) = merge_str("X\n", "P\nX\nA\n", "P\nX\nB\n", &options);
    assert_eq!(text, "P\nX\n<<<<<<<\nA\n=======\nB\n>>>>>>>\n");
    assert_eq!(count, 1);
}

#[test]
fn scenario_5_word_merge_rescues_line_conflict() {
    let options = MergeOptions {
        word_merge_mode: WordMergeMode::OnDemand,
        ..MergeOptions::default()
    };
    let output = merge(
        b"the quick brown fox\n",
        b"the quick RED fox\n",
        b"the FAST brown fox\n",
        &options,
    )
    .unwrap();
    assert_eq!(output.conflicts_count, 0);
    assert!(!output.text.contains_str("<<<<<<<"));
    // "quick" and "brown" are each replaced outright (by "RED" and "FAST"
    // respectively), so they don't survive into the word-merged result.
    assert_eq!(output.text, "the FAST RED fox\n");
}

#[test]
fn scenario_6_force_local_on_conflict() {
    let options = MergeOptions {
        force_side: Some(ForceSide::Local),
        ..MergeOptions::default()
    };
    let (text, count) = merge_str("one\n", "two\n", "three\n", &options);
    assert_eq!(text, "two\n");
    assert_eq!(count, 0);
    assert!(!text.contains("<<<<<<<"));
}

#[test]
fn invariant_a_equals_base_yields_b() {
    let (text, count) = merge_str("same\n", "same\n", "other\n", &MergeOptions::default());
    assert_eq!(text, "other\n");
    assert_eq!(count, 0);
}

#[test]
fn invariant_b_equals_base_yields_a() {
    let (text, count) = merge_str("same\n", "other\n", "same\n", &MergeOptions::default());
    assert_eq!(text, "other\n");
    assert_eq!(count, 0);
}

#[test]
fn invariant_a_equals_b_yields_a() {
    let (text, count) = merge_str("base\n", "changed\n", "changed\n", &MergeOptions::default());
    assert_eq!(text, "changed\n");
    assert_eq!(count, 0);
}

#[test]
fn invariant_determinism() {
    let options = MergeOptions::default();
    let first = merge_str("one\ntwo\nthree\n", "one\nTWO\nthree\n", "one\ntwo\nTHREE\n", &options);
    let second = merge_str("one\ntwo\nthree\n", "one\nTWO\nthree\n", "one\ntwo\nTHREE\n", &options);
    assert_eq!(first, second);
}

#[test]
fn invariant_force_side_matches_requested_side_exactly() {
    let local = MergeOptions {
        force_side: Some(ForceSide::Local),
        ..MergeOptions::default()
    };
    let other = MergeOptions {
        force_side: Some(ForceSide::Other),
        ..MergeOptions::default()
    };
    let (local_text, local_count) = merge_str("one\n", "two\n", "three\n", &local);
    let (other_text, other_count) = merge_str("one\n", "two\n", "three\n", &other);
    assert_eq!(local_text, "two\n");
    assert_eq!(local_count, 0);
    assert_eq!(other_text, "three\n");
    assert_eq!(other_count, 0);
}

#[test]
fn invariant_union_mode_has_no_markers_but_keeps_both_sides() {
    let (text, count) = merge_str("one\n", "two\n", "three\n", &MergeOptions::union());
    assert!(!text.contains("<<<<<<<"));
    assert!(text.contains("two\n"));
    assert!(text.contains("three\n"));
    assert_eq!(count, 1);
}

#[test]
fn invariant_mixed_line_endings_round_trip_through_unchanged_regions() {
    let (text, count) = merge_str("a\r\nb\r\n", "a\r\nB\r\n", "a\r\nb\r\n", &MergeOptions::default());
    assert_eq!(text, "a\r\nB\r\n");
    assert_eq!(count, 0);
}

#[test]
fn enforced_mode_on_a_genuine_conflict_surfaces_the_error() {
    let options = MergeOptions {
        word_merge_mode: WordMergeMode::Enforced,
        ..MergeOptions::default()
    };
    let result = merge(b"one\n", b"two\n", b"three\n", &options);
    assert!(result.is_err());
}

#[test_case("a\n", "a\n", "a\n", "a\n" ; "untouched line stays untouched")]
#[test_case("a\n", "A\n", "a\n", "A\n" ; "local-only edit wins with no conflict")]
#[test_case("a\n", "a\n", "B\n", "B\n" ; "other-only edit wins with no conflict")]
#[test_case("a\n", "X\n", "X\n", "X\n" ; "identical edit on both sides wins with no conflict")]
fn clean_merges_produce_the_expected_text(base: &str, a: &str, b: &str, expected: &str) {
    let (text, count) = merge_str(base, a, b, &MergeOptions::default());
    assert_eq!(text, expected);
    assert_eq!(count, 0);
}

#[test]
fn custom_markers_and_labels_are_composed() {
    let options = MergeOptions {
        name_a: Some(BString::from(b"mine".to_vec())),
        name_b: Some(BString::from(b"theirs".to_vec())),
        ..MergeOptions::default()
    };
    let (text, _) = merge_str("one\n", "two\n", "three\n", &options);
    assert!(text.starts_with("<<<<<<< mine\n"));
    assert!(text.ends_with(">>>>>>> theirs\n"));
}
