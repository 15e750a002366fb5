//! Property tests for extraction on arbitrary input

use proptest::prelude::*;
use stepforge_gherkin::{extract, extract_script};

fn step_line() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("Given"), Just("When"), Just("Then"), Just("And"), Just("But"), Just("*")],
        "[a-z][a-z \"]{0,30}[a-z]",
    )
        .prop_map(|(keyword, text)| format!("  {keyword} {text}"))
}

fn noise_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("# comment".to_string()),
        Just("@tag".to_string()),
        Just("Scenario: s".to_string()),
        Just("Background:".to_string()),
        Just("  some description".to_string()),
        Just("  | a | b |".to_string()),
    ]
}

proptest! {
    #[test]
    fn never_panics(script in any::<String>()) {
        let _ = extract_script(&script);
    }

    /// One extracted step per step line, whatever surrounds them.
    #[test]
    fn step_count_matches_step_lines(
        lines in prop::collection::vec(prop_oneof![step_line().prop_map(Some), noise_line().prop_map(|_| None)], 0..40),
        noise in prop::collection::vec(noise_line(), 40),
    ) {
        let mut expected = 0;
        let mut script = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            match line {
                Some(step) => {
                    expected += 1;
                    script.push(step.clone());
                }
                None => script.push(noise[i].clone()),
            }
        }
        prop_assert_eq!(extract(&script.join("\n")).len(), expected);
    }

    #[test]
    fn text_is_trimmed_and_non_empty(script in any::<String>()) {
        for step in extract(&script) {
            prop_assert!(!step.text.is_empty());
            prop_assert_eq!(step.text.trim(), step.text.as_str());
        }
    }
}
