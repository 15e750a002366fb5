//! Integration tests for doc strings and data tables

use stepforge_gherkin::extract;

#[test]
fn data_table_attaches_to_step() {
    let steps = extract(
        "Given these users:\n  | email   | role  |\n  | a@b.com | admin |\nWhen I log out\n",
    );
    let table = steps[0].data_table.as_ref().unwrap();
    assert_eq!(table.header().unwrap(), ["email", "role"]);
    assert_eq!(table.len(), 2);
    assert!(steps[1].data_table.is_none());
}

#[test]
fn escaped_pipe_in_cell() {
    let steps = extract("Given a table:\n  | a \\| b | c |\n");
    let table = steps[0].data_table.as_ref().unwrap();
    assert_eq!(table.rows[0], vec!["a | b", "c"]);
}

#[test]
fn doc_string_keeps_content_and_media_type() {
    let steps = extract(
        "Given the payload:\n    \"\"\"json\n    {\n      \"ok\": true\n    }\n    \"\"\"\nThen done\n",
    );
    let doc = steps[0].doc_string.as_ref().unwrap();
    assert_eq!(doc.media_type.as_deref(), Some("json"));
    assert_eq!(doc.content, "{\n  \"ok\": true\n}");
    assert_eq!(steps.len(), 2);
}

#[test]
fn step_lines_inside_doc_string_are_not_steps() {
    let steps = extract("Given a note:\n  ```\n  Then this is text\n  ```\n");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].doc_string.as_ref().unwrap().content, "Then this is text");
}

#[test]
fn unclosed_doc_string_does_not_swallow_steps() {
    let steps = extract("Given a note:\n  \"\"\"\n  When I go back\n  Then I should be logged in\n");
    let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["a note:", "I go back", "I should be logged in"]);
    assert!(steps[0].doc_string.is_none());
}
