use addrcheck::{
    automaton::{Dfa, Outcome},
    grammar::State,
    pattern::Pattern,
    recognize, recognize_pattern, Grammar,
};
use pretty_assertions::assert_eq;

#[test]
fn empty_input_is_rejected_by_both() {
    assert!(!recognize(""));
    assert!(!recognize_pattern(""));
}

#[test]
fn accepts_grammar_examples() {
    assert!(recognize("a@b.co"));
    assert!(recognize("a.b+c-d@sub-domain.org"));
    assert!(recognize_pattern("a@b.co"));
    assert!(recognize_pattern("a.b+c-d@sub-domain.org"));
}

#[test]
fn rejects_grammar_counter_examples() {
    for input in ["a@b", "@b.co", "a@b..co", "a@@b.co", "a@b.co@c.de", "a b@c.de"] {
        assert!(!recognize(input), "{input}");
    }
}

#[test]
fn multi_label_domain_is_a_known_limitation() {
    assert!(!recognize("a@mail.example.com"));
    assert!(recognize_pattern("a@mail.example.com"));
}

#[test]
fn tld_reentry_lifts_the_limitation() {
    let grammar = Grammar::PERMISSIVE.with_tld_reentry(true);
    let dfa = Dfa::new(grammar).unwrap();
    assert!(dfa.recognize("a@mail.example.com"));
    assert!(Pattern::equivalent(&grammar)
        .unwrap()
        .is_match("a@mail.example.com"));
}

#[test]
fn recognize_is_deterministic() {
    for input in ["a@b.co", "a@b", "", "é@x.yz", "a@b.co\u{0}"] {
        let first = recognize(input);
        for _ in 0..8 {
            assert_eq!(recognize(input), first, "{input:?}");
        }
    }
}

#[test]
fn never_panics_on_arbitrary_code_points() {
    let dfa = Dfa::default();
    let samples = (0u32..0x3000)
        .step_by(7)
        .chain([0xD7FF, 0xE000, 0xFFFD, 0x1F600, 0x10FFFF])
        .filter_map(char::from_u32);
    for c in samples {
        let input = format!("a{c}@b{c}.c{c}");
        let _ = dfa.run(&input);
        let _ = recognize_pattern(&input);
    }
}

#[test]
fn rejection_reports_position() {
    assert_eq!(
        Dfa::default().run("abc@de.f9"),
        Outcome::Rejected {
            state: State::Tld,
            offset: 8,
            found: '9',
        }
    );
}

#[test]
fn equivalent_pattern_matches_dfa_for_every_variant() {
    let alphabet = ['a', 'Z', '5', '@', '.', '-', '_', '+', '!', 'é'];
    for grammar in Grammar::VARIANTS {
        let dfa = Dfa::new(grammar).unwrap();
        let pattern = Pattern::equivalent(&grammar).unwrap();

        // every string over the alphabet up to length 4, alone and next to a valid half
        let mut inputs = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..4 {
            frontier = frontier
                .iter()
                .flat_map(|s| alphabet.iter().map(move |c| format!("{s}{c}")))
                .collect();
            inputs.extend(frontier.iter().cloned());
        }
        for input in &inputs {
            for candidate in [input.clone(), format!("ab@cd.{input}"), format!("{input}@x.yz")] {
                assert_eq!(
                    pattern.is_match(&candidate),
                    dfa.recognize(&candidate),
                    "{grammar} on {candidate:?}"
                );
            }
        }
    }
}
