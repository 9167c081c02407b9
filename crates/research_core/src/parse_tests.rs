use super::*;

#[test]
fn generation_splits_hypothesis_and_rationale() {
    let reply = "HYPOTHESIS: Mitochondrial uncoupling slows senescence.\n\nRATIONALE:\n- prior mouse data\n- cheap assay";
    let (hypothesis, rationale) = parse_generation(reply);
    assert_eq!(hypothesis, "Mitochondrial uncoupling slows senescence.");
    assert_eq!(rationale, "- prior mouse data\n- cheap assay");
}

#[test]
fn generation_without_marker_uses_whole_text_for_both() {
    let (hypothesis, rationale) = parse_generation("  Just a statement.  ");
    assert_eq!(hypothesis, "Just a statement.");
    assert_eq!(rationale, "Just a statement.");
}

#[test]
fn generation_takes_rationale_after_last_marker() {
    let (hypothesis, rationale) = parse_generation("H RATIONALE: first RATIONALE: second");
    assert_eq!(hypothesis, "H");
    assert_eq!(rationale, "second");
}

#[test]
fn section_items_are_stripped_and_stop_at_blank_line() {
    let reply = "STRENGTHS:\n- novel\n• testable\n\nWEAKNESSES:\n- vague dose\n\nRISKS:\n- toxicity";
    assert_eq!(parse_section(reply, STRENGTHS), vec!["novel", "testable"]);
    assert_eq!(parse_section(reply, WEAKNESSES), vec!["vague dose"]);
    assert_eq!(parse_section(reply, RISKS), vec!["toxicity"]);
}

#[test]
fn section_lookup_is_case_insensitive() {
    let reply = "Proposed Tests:\n- knockout line\n- dose sweep";
    assert_eq!(
        parse_section(reply, PROPOSED_TESTS),
        vec!["knockout line", "dose sweep"]
    );
}

#[test]
fn missing_section_is_empty() {
    assert!(parse_section("nothing labeled here", RISKS).is_empty());
}

#[test]
fn verdict_reads_winner_and_reasoning() {
    let verdict = parse_verdict("WINNER: B\nREASONING: A lacks controls.");
    assert_eq!(verdict.winner, Side::B);
    assert_eq!(verdict.reasoning, "A lacks controls.");
}

#[test]
fn verdict_without_marker_defaults_to_a() {
    let verdict = parse_verdict("Both are fine, hard to say.");
    assert_eq!(verdict.winner, Side::A);
    assert_eq!(verdict.reasoning, "Both are fine, hard to say.");
}

#[test]
fn verdict_prefers_a_when_both_markers_appear() {
    assert_eq!(parse_verdict("WINNER: B ... actually WINNER: A").winner, Side::A);
}

#[test]
fn proximity_takes_first_number_and_clamps() {
    assert_eq!(parse_proximity("Score: 82 - close match, 90 otherwise"), 82);
    assert_eq!(parse_proximity("999 out of 100"), 100);
    assert_eq!(parse_proximity("1234"), 100);
    assert_eq!(parse_proximity("0"), 0);
}

#[test]
fn proximity_without_number_defaults() {
    assert_eq!(parse_proximity("no idea"), DEFAULT_PROXIMITY);
}

#[test]
fn variants_keep_at_most_two_lines() {
    let reply = "- variant one\n\n- variant two\n- variant three";
    assert_eq!(parse_variants(reply), vec!["variant one", "variant two"]);
    assert!(parse_variants("\n  \n").is_empty());
}

#[test]
fn search_results_are_parsed_from_wrapped_json() {
    let reply = r#"Here you go:
[{"title": "Paper", "url": "https://a.example", "snippet": "abc"},
 {"title": "Other", "url": "https://b.example"},
 {"title": "Third", "url": "https://c.example", "snippet": "xyz"}]
Hope it helps."#;
    let results = parse_search_results(reply, 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Paper");
    assert_eq!(results[0].content, "abc");
    assert_eq!(results[1].content, "");
}

#[test]
fn malformed_search_results_degrade_to_empty() {
    assert!(parse_search_results("no array", 5).is_empty());
    assert!(parse_search_results("] backwards [", 5).is_empty());
    assert!(parse_search_results("[not json]", 5).is_empty());
}
