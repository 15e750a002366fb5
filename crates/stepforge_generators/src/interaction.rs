//! User interaction steps.
//!
//! # Patterns
//!
//! - `click-button` - Click a button by accessible name
//! - `click-link` - Click a link by accessible name
//! - `click-element` - Click anything by selector or test id
//! - `fill-field` / `fill-field-with` - Type a value into a labelled field
//! - `select-option` - Choose an option from a select
//! - `toggle-checkbox` - Check or uncheck a labelled checkbox
//! - `press-key` - Press a keyboard key
//! - `hover` - Hover over an element
//! - `see-text` - Text is (or is not) on screen
//! - `element-visible` - An element is (or is not) visible
//! - `field-value` - A field holds a value
//! - `button-state` - A button is enabled or disabled
//!
//! The specific button and link clicks are registered ahead of the generic
//! element click so they win when a sentence matches both.

use stepforge_foundation::escape::js_string;
use stepforge_foundation::{ExecutionTarget, GenerationOptions, Result};
use stepforge_registry::{Captures, PatternDescriptor, PatternRegistry};

use crate::support::{by_label, by_role, by_selector, by_text};

/// Registers the interaction patterns in priority order.
///
/// # Errors
///
/// Returns the first registration defect.
pub fn register_steps(registry: &mut PatternRegistry) -> Result<()> {
    registry.register(
        "interaction/click-button",
        PatternDescriptor::action(r#"I click (?:on )?the "([^"]*)" button"#, click_button)
            .with_arity(1)
            .with_tags(["interaction", "click", "button"])
            .with_description("Click a button by its accessible name")
            .with_example(r#"I click the "Submit" button"#),
    )?;

    registry.register(
        "interaction/click-link",
        PatternDescriptor::action(r#"I click (?:on )?the "([^"]*)" link"#, click_link)
            .with_arity(1)
            .with_tags(["interaction", "click", "link"])
            .with_description("Click a link by its accessible name")
            .with_example(r#"I click the "Home" link"#),
    )?;

    registry.register(
        "interaction/click-element",
        PatternDescriptor::action(r#"I click (?:on )?(?:the )?"([^"]*)"(?: element)?"#, click_element)
            .with_arity(1)
            .with_tags(["interaction", "click", "element"])
            .with_description("Click an element by selector or test id")
            .with_example(r#"I click on "menu-toggle""#),
    )?;

    registry.register(
        "interaction/fill-field",
        PatternDescriptor::action(
            r#"I (?:fill in|fill|enter|type) "([^"]*)" (?:in|into|for) (?:the )?"([^"]*)"(?: field)?"#,
            fill_field,
        )
        .with_arity(2)
        .with_tags(["interaction", "form", "input"])
        .with_description("Type a value into a labelled form field")
        .with_example(r#"I enter "a@b.com" into the "Email" field"#),
    )?;

    registry.register(
        "interaction/fill-field-with",
        PatternDescriptor::action(
            r#"I fill in (?:the )?"([^"]*)"(?: field)? with "([^"]*)""#,
            fill_field_with,
        )
        .with_arity(2)
        .with_tags(["interaction", "form", "input"])
        .with_description("Fill a labelled form field with a value")
        .with_example(r#"I fill in the "Email" field with "a@b.com""#),
    )?;

    registry.register(
        "interaction/select-option",
        PatternDescriptor::action(
            r#"I select "([^"]*)" from (?:the )?"([^"]*)"(?: dropdown| select)?"#,
            select_option,
        )
        .with_arity(2)
        .with_tags(["interaction", "form", "select"])
        .with_description("Choose an option from a labelled select")
        .with_example(r#"I select "Canada" from the "Country" dropdown"#),
    )?;

    registry.register(
        "interaction/toggle-checkbox",
        PatternDescriptor::action(r#"I (check|uncheck) (?:the )?"([^"]*)"(?: checkbox)?"#, toggle_checkbox)
            .with_arity(2)
            .with_tags(["interaction", "form", "checkbox"])
            .with_description("Check or uncheck a labelled checkbox")
            .with_example(r#"I check the "Remember me" checkbox"#),
    )?;

    registry.register(
        "interaction/press-key",
        PatternDescriptor::action(r#"I press (?:the )?"([^"]*)" key"#, press_key)
            .with_arity(1)
            .with_tags(["interaction", "keyboard"])
            .with_description("Press a keyboard key")
            .with_example(r#"I press the "Enter" key"#),
    )?;

    registry.register(
        "interaction/hover",
        PatternDescriptor::action(r#"I hover over (?:the )?"([^"]*)""#, hover)
            .with_arity(1)
            .with_tags(["interaction", "mouse"])
            .with_description("Hover over an element by visible text")
            .with_example(r#"I hover over the "Account" menu"#),
    )?;

    registry.register(
        "interaction/see-text",
        PatternDescriptor::assertion(r#"I should (not )?see "([^"]*)""#, see_text)
            .with_arity(2)
            .with_tags(["interaction", "text", "visibility"])
            .with_description("Assert that text is or is not on screen")
            .with_example(r#"I should see "Welcome back""#),
    )?;

    registry.register(
        "interaction/element-visible",
        PatternDescriptor::assertion(
            r#"the "([^"]*)" (?:element )?should (not )?be visible"#,
            element_visible,
        )
        .with_arity(2)
        .with_tags(["interaction", "element", "visibility"])
        .with_description("Assert that an element is or is not visible")
        .with_example(r#"the "spinner" element should not be visible"#),
    )?;

    registry.register(
        "interaction/field-value",
        PatternDescriptor::assertion(
            r#"the "([^"]*)" field should (?:contain|have value) "([^"]*)""#,
            field_value,
        )
        .with_arity(2)
        .with_tags(["interaction", "form", "input"])
        .with_description("Assert the value of a labelled form field")
        .with_example(r#"the "Email" field should contain "a@b.com""#),
    )?;

    registry.register(
        "interaction/button-state",
        PatternDescriptor::assertion(
            r#"the "([^"]*)" button should be (enabled|disabled)"#,
            button_state,
        )
        .with_arity(2)
        .with_tags(["interaction", "button", "state"])
        .with_description("Assert that a button is enabled or disabled")
        .with_example(r#"the "Save" button should be disabled"#),
    )?;

    Ok(())
}

// =============================================================================
// Generators
// =============================================================================

fn click(locator: &str, target: ExecutionTarget) -> String {
    match target {
        ExecutionTarget::Playwright => format!("await {locator}.click();"),
        ExecutionTarget::ComponentMount => format!("await fireEvent.click({locator});"),
    }
}

fn click_button(c: &Captures, o: &GenerationOptions) -> String {
    click(&by_role("button", c.arg(0), o.execution_target), o.execution_target)
}

fn click_link(c: &Captures, o: &GenerationOptions) -> String {
    click(&by_role("link", c.arg(0), o.execution_target), o.execution_target)
}

fn click_element(c: &Captures, o: &GenerationOptions) -> String {
    click(&by_selector(c.arg(0), o.execution_target), o.execution_target)
}

fn fill(field: &str, value: &str, target: ExecutionTarget) -> String {
    let field = by_label(field, target);
    match target {
        ExecutionTarget::Playwright => format!("await {field}.fill({});", js_string(value)),
        ExecutionTarget::ComponentMount => format!(
            "await fireEvent.update({field}, {});",
            js_string(value)
        ),
    }
}

fn fill_field(c: &Captures, o: &GenerationOptions) -> String {
    fill(c.arg(1), c.arg(0), o.execution_target)
}

fn fill_field_with(c: &Captures, o: &GenerationOptions) -> String {
    fill(c.arg(0), c.arg(1), o.execution_target)
}

fn select_option(c: &Captures, o: &GenerationOptions) -> String {
    let field = by_label(c.arg(1), o.execution_target);
    let option = js_string(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await {field}.selectOption({option});"),
        ExecutionTarget::ComponentMount => format!("await fireEvent.update({field}, {option});"),
    }
}

fn toggle_checkbox(c: &Captures, o: &GenerationOptions) -> String {
    let checked = !c.arg(0).eq_ignore_ascii_case("uncheck");
    let field = by_label(c.arg(1), o.execution_target);
    match o.execution_target {
        ExecutionTarget::Playwright => {
            let method = if checked { "check" } else { "uncheck" };
            format!("await {field}.{method}();")
        }
        ExecutionTarget::ComponentMount => format!(
            "const checkbox = {field};\nif (checkbox.checked !== {checked}) {{\n  await fireEvent.click(checkbox);\n}}"
        ),
    }
}

fn press_key(c: &Captures, o: &GenerationOptions) -> String {
    let key = js_string(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await page.keyboard.press({key});"),
        ExecutionTarget::ComponentMount => {
            format!("await fireEvent.keyDown(document.activeElement ?? document.body, {{ key: {key} }});")
        }
    }
}

fn hover(c: &Captures, o: &GenerationOptions) -> String {
    let locator = by_text(c.arg(0), o.execution_target);
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await {locator}.hover();"),
        ExecutionTarget::ComponentMount => format!("await fireEvent.mouseOver({locator});"),
    }
}

fn see_text(c: &Captures, o: &GenerationOptions) -> String {
    let negated = c.present(0);
    let text = js_string(c.arg(1));
    match (o.execution_target, negated) {
        (ExecutionTarget::Playwright, false) => {
            format!("await expect(page.getByText({text})).toBeVisible();")
        }
        (ExecutionTarget::Playwright, true) => {
            format!("await expect(page.getByText({text})).toHaveCount(0);")
        }
        (ExecutionTarget::ComponentMount, false) => {
            format!("expect(screen.getByText({text})).toBeTruthy();")
        }
        (ExecutionTarget::ComponentMount, true) => {
            format!("expect(screen.queryByText({text})).toBeNull();")
        }
    }
}

fn element_visible(c: &Captures, o: &GenerationOptions) -> String {
    let negated = c.present(1);
    let selector = js_string(c.arg(0));
    match (o.execution_target, negated) {
        (ExecutionTarget::Playwright, false) => {
            format!("await expect(page.locator({selector})).toBeVisible();")
        }
        (ExecutionTarget::Playwright, true) => {
            format!("await expect(page.locator({selector})).toBeHidden();")
        }
        (ExecutionTarget::ComponentMount, false) => {
            format!("expect(screen.getByTestId({selector})).toBeTruthy();")
        }
        (ExecutionTarget::ComponentMount, true) => {
            format!("expect(screen.queryByTestId({selector})).toBeNull();")
        }
    }
}

fn field_value(c: &Captures, o: &GenerationOptions) -> String {
    let field = by_label(c.arg(0), o.execution_target);
    let value = js_string(c.arg(1));
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await expect({field}).toHaveValue({value});"),
        ExecutionTarget::ComponentMount => format!("expect({field}.value).toBe({value});"),
    }
}

fn button_state(c: &Captures, o: &GenerationOptions) -> String {
    let button = by_role("button", c.arg(0), o.execution_target);
    let disabled = c.arg(1).eq_ignore_ascii_case("disabled");
    match o.execution_target {
        ExecutionTarget::Playwright => {
            let matcher = if disabled { "toBeDisabled" } else { "toBeEnabled" };
            format!("await expect({button}).{matcher}();")
        }
        ExecutionTarget::ComponentMount => format!("expect({button}.disabled).toBe({disabled});"),
    }
}
