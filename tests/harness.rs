use std::{path::PathBuf, thread};

use addrcheck::{
    corpus::{Corpus, Entry, Label},
    harness::{Accuracy, Report},
    Error, Grammar, Harness,
};
use pretty_assertions::assert_eq;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_email.txt")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn small_corpus_end_to_end() {
    let harness = Harness::for_grammar(Grammar::default()).unwrap();
    let corpus = Corpus::parse("a@b.co,valid\nbad,invalid\nx@y,invalid\n");
    let with_noise = Corpus::parse("a@b.co,valid\nno-comma-here\nbad,invalid\nx@y,invalid\n");

    let report = harness.run(&corpus);
    assert_eq!(report.total(), 3);
    assert_eq!(report.pattern_correct(), 3);
    assert_eq!(report.dfa_correct(), 3);
    assert_eq!(report.skipped(), 0);

    let noisy = harness.run(&with_noise);
    assert_eq!(noisy.total(), 3);
    assert_eq!(noisy.skipped(), 1);
    assert_eq!(noisy.cases(), report.cases());
}

#[test]
fn unknown_labels_count_as_invalid_entries() {
    let harness = Harness::for_grammar(Grammar::PERMISSIVE).unwrap();
    let report = harness.run(&Corpus::parse("a@b.co,maybe\nx@y.co, valid\nq@r.st,\n"));

    assert_eq!(report.total(), 3);
    assert_eq!(report.skipped(), 0);
    assert!(report.cases().iter().all(|case| case.expected == Label::Invalid));
    // all three are accepted by both recognizers, so both are wrong every time
    assert_eq!(report.dfa_correct(), 0);
    assert_eq!(report.pattern_correct(), 0);
}

#[test]
fn multi_label_domain_is_reported_as_disagreement() {
    let harness = Harness::for_grammar(Grammar::PERMISSIVE).unwrap();
    let entries = vec![
        Entry::new("a@b.co", Label::Valid),
        Entry::new("user@mail.example.com", Label::Valid),
    ];
    let report = harness.run_corpus(&entries);

    let disagreements: Vec<_> = report.disagreements().collect();
    assert_eq!(disagreements.len(), 1);
    assert_eq!(disagreements[0].email, "user@mail.example.com");
    assert!(disagreements[0].verdicts.pattern);
    assert!(!disagreements[0].verdicts.dfa);
}

#[test]
fn sample_file() {
    init_tracing();

    let corpus = Corpus::load(sample_path()).unwrap();
    assert_eq!(corpus.len(), 19);
    assert_eq!(
        corpus
            .skipped()
            .iter()
            .map(|skipped| skipped.content.as_str())
            .collect::<Vec<_>>(),
        vec!["no-comma-here", "a,b@c.de,valid"]
    );

    let report = Harness::for_grammar(Grammar::PERMISSIVE)
        .unwrap()
        .run(&corpus);
    assert_eq!(report.total(), 19);
    assert_eq!(report.skipped(), 2);
    // the automaton misses the multi-label address and the well-formed one
    // labeled `maybe`, which counts as expected-invalid
    assert_eq!(report.dfa_correct(), 17);
    // the pattern lets through a leading dot, a double dot, a leading hyphen,
    // a digit in the TLD and the `maybe` address
    assert_eq!(report.pattern_correct(), 14);
    assert_eq!(
        report
            .disagreements()
            .map(|case| case.email.as_str())
            .collect::<Vec<_>>(),
        vec![
            "user@mail.example.com",
            ".leading@example.com",
            "a@b..co",
            "user@-host.com",
            "user@host.c0m",
        ]
    );
}

#[test]
fn missing_corpus_is_distinct_from_empty() {
    let missing = sample_path().with_file_name("does_not_exist.txt");
    assert!(matches!(
        Corpus::load(&missing),
        Err(Error::CorpusNotFound(path)) if path == missing
    ));

    let empty = Harness::for_grammar(Grammar::PERMISSIVE)
        .unwrap()
        .run(&Corpus::parse(""));
    assert_eq!(empty.total(), 0);
    assert_eq!(empty.pattern_accuracy(), Accuracy::NoData);
    assert!(empty.to_string().contains("Pattern method accuracy: no data"));
}

#[test]
fn parallel_run_reduces_to_sequential() {
    let corpus = Corpus::load(sample_path()).unwrap();
    let harness = Harness::for_grammar(Grammar::PERMISSIVE).unwrap();

    let shared = &harness;
    let parallel = thread::scope(|scope| {
        let handles: Vec<_> = corpus
            .entries()
            .chunks(4)
            .map(|chunk| scope.spawn(move || shared.run_corpus(chunk)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .fold(Report::default(), Report::merge)
    });

    assert_eq!(parallel, harness.run_corpus(&corpus));
}

#[test]
fn variants_score_differently() {
    let corpus = Corpus::load(sample_path()).unwrap();
    let plain = Harness::for_grammar(Grammar::PLAIN).unwrap().run(&corpus);
    let loose = Harness::for_grammar(Grammar::LOOSE_TLD).unwrap().run(&corpus);

    // same automaton, different patterns
    assert_eq!(plain.dfa_correct(), loose.dfa_correct());
    assert_eq!(plain.disagreements().count(), 2);
    assert_eq!(loose.disagreements().count(), 4);
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes() {
    let harness = Harness::for_grammar(Grammar::PERMISSIVE).unwrap();
    let report = harness.run(&Corpus::parse("a@b.co,valid\n"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["cases"][0]["expected"], "valid");
    assert_eq!(json["cases"][0]["verdicts"]["dfa"], true);

    let back: Report = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
