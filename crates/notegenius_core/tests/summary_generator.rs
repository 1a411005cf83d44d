use notegenius_core::summary::analysis::split_sentences;
use notegenius_core::{analyze, generate, LengthBracket, Outlook};

const VOCAB: &[&str] = &[
    "rust",
    "memory",
    "safety",
    "challenge",
    "benefit",
    "compiler",
    "ownership",
    "performance",
    "systems",
];

/// `word_count` words cycling through `vocab`, a period after every tenth.
fn note_of(word_count: usize, vocab: &[&str]) -> String {
    (0..word_count)
        .map(|idx| {
            let word = vocab[idx % vocab.len()];
            if idx % 10 == 9 {
                format!("{word}.")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn assert_single_trailing_period(summary: &str) {
    assert!(!summary.is_empty());
    assert!(summary.ends_with('.'), "missing period: {summary}");
    assert!(!summary.ends_with(".."), "doubled period: {summary}");
}

#[test]
fn brief_note_renders_expected_paragraph() {
    let summary = generate(
        "Rust makes systems programming safe. Rust ownership prevents memory bugs early.",
    );
    assert_eq!(
        summary,
        "This note explores rust and makes as key topics. \
         The primary insight is that rust makes systems programming safe. \
         The discussion emphasizes programming and safe."
    );
}

#[test]
fn output_always_ends_with_exactly_one_period() {
    let medium = note_of(150, VOCAB);
    let long = note_of(500, VOCAB);
    let inputs: [&str; 8] = [
        "",
        "   ",
        "12345",
        "Wow!!! That was really something else entirely...",
        "Short. Lines. Only.",
        "keywords ending with dots. dots. dots. dots.",
        medium.as_str(),
        long.as_str(),
    ];
    for input in inputs {
        assert_single_trailing_period(&generate(input));
    }
}

#[test]
fn generate_is_deterministic() {
    let content = note_of(420, VOCAB);
    assert_eq!(generate(&content), generate(&content));
    assert_eq!(generate("tiny"), generate("tiny"));
}

#[test]
fn bracket_boundaries_pick_template_shape() {
    let cases = [
        (99, LengthBracket::Brief, "This note explores"),
        (100, LengthBracket::Medium, "This note examines"),
        (399, LengthBracket::Medium, "This note examines"),
        (400, LengthBracket::Comprehensive, "This comprehensive note"),
    ];
    for (word_count, bracket, prefix) in cases {
        let content = note_of(word_count, VOCAB);
        let analysis = analyze(&content);
        assert_eq!(analysis.word_count, word_count);
        assert_eq!(analysis.bracket, bracket);

        let summary = generate(&content);
        assert!(
            summary.starts_with(prefix),
            "{word_count} words should start with `{prefix}`: {summary}"
        );
    }
}

#[test]
fn stop_words_and_numbers_only_degrade_to_empty_segments() {
    let analysis = analyze("the a an is 123 456");
    assert!(analysis.key_words.is_empty());
    assert!(analysis.main_themes.is_empty());
    assert!(analysis.supporting_concepts.is_empty());

    assert_eq!(
        generate("the a an is 123 456"),
        "This note explores as the main focus."
    );
}

#[test]
fn empty_content_still_summarizes() {
    let analysis = analyze("");
    assert!(analysis.sentences.is_empty());
    assert!(analysis.ranked_sentences.is_empty());
    assert_eq!(generate(""), "This note explores as the main focus.");
}

#[test]
fn short_leading_fragment_is_dropped() {
    let sentences = split_sentences("Hi. This is a longer sentence that should be kept.");
    assert_eq!(sentences.len(), 1);
    assert_eq!(
        sentences[0].trim(),
        "This is a longer sentence that should be kept"
    );
}

#[test]
fn conclusion_marker_counts_only_near_the_end() {
    let early = analyze(
        "Therefore the plan moves ahead today. The second sentence adds detail. \
         The third sentence adds more detail. The fourth sentence closes things.",
    );
    assert!(early.conclusion_sentences.is_empty());

    let late = analyze(
        "The first sentence sets the scene. The second sentence adds detail. \
         The third sentence adds more detail. THEREFORE the plan moves ahead today.",
    );
    assert_eq!(late.conclusion_sentences.len(), 1);
    assert_eq!(
        late.conclusion_sentences[0].trim(),
        "THEREFORE the plan moves ahead today"
    );
}

#[test]
fn medium_note_uses_conclusion_as_takeaway() {
    let filler = "The compiler checks ownership rules before the program runs.";
    let mut sentences = vec![filler; 12];
    sentences.push("Therefore the team adopted rust for every new service.");
    let content = sentences.join(" ");

    let analysis = analyze(&content);
    assert_eq!(analysis.word_count, 117);
    assert_eq!(analysis.bracket, LengthBracket::Medium);

    let summary = generate(&content);
    assert!(summary.starts_with("This note examines "));
    assert!(summary.contains("The central argument suggests that "));
    assert!(summary.contains("Supporting this, the note highlights how "));
    assert!(summary.ends_with(
        "The key takeaway emphasizes therefore the team adopted rust for every new service."
    ));
}

#[test]
fn long_note_with_challenges_and_benefits_is_balanced() {
    let content = note_of(450, VOCAB);
    let analysis = analyze(&content);
    assert_eq!(analysis.outlook, Outlook::Balanced);

    let summary = generate(&content);
    assert!(summary.starts_with("This comprehensive note provides an in-depth analysis of "));
    assert!(
        summary.contains("balances discussion of both opportunities and challenges"),
        "{summary}"
    );
}

#[test]
fn long_note_outlook_branches() {
    let challenges = generate(&note_of(
        420,
        &["rust", "memory", "problem", "compiler", "systems"],
    ));
    assert!(challenges.contains("Key challenges and concerns regarding rust are thoroughly addressed,"));

    let benefits = generate(&note_of(
        420,
        &["rust", "memory", "advantage", "compiler", "systems"],
    ));
    assert!(benefits.contains("The potential benefits and advantages of rust are carefully examined,"));

    let neutral = generate(&note_of(
        420,
        &["rust", "memory", "compiler", "systems", "threads"],
    ));
    assert!(!neutral.contains("challenges"));
    assert!(!neutral.contains("benefits"));
    assert!(neutral.contains("with particular emphasis on"));
}

#[test]
fn keywords_are_ranked_by_frequency() {
    let analysis = analyze("beta alpha alpha gamma alpha beta delta epsilon zeta theta iota kappa lambda");
    assert_eq!(analysis.key_words[0], "alpha");
    assert_eq!(analysis.key_words[1], "beta");
    assert_eq!(analysis.key_words.len(), 8);
    assert_eq!(analysis.main_themes, vec!["alpha", "beta", "gamma"]);
    assert_eq!(analysis.supporting_concepts, vec!["delta", "epsilon", "zeta"]);
}
