//! Reactive store steps.
//!
//! Mounted components share the application `store` directly. In the
//! browser the same store is reached through `window.__store__`, which the
//! app exposes in test builds.

use stepforge_foundation::escape::js_string;
use stepforge_foundation::{ExecutionTarget, GenerationOptions, Result};
use stepforge_registry::{Captures, PatternDescriptor, PatternRegistry};

use crate::support::{bracket_path, js_value};

/// Registers the store patterns in priority order.
///
/// # Errors
///
/// Returns the first registration defect.
pub fn register_steps(registry: &mut PatternRegistry) -> Result<()> {
    registry.register(
        "store/set-state",
        PatternDescriptor::setup(r#"the store state "([^"]*)" is "([^"]*)""#, set_state)
            .with_arity(2)
            .with_tags(["store", "state", "fixture"])
            .with_description("Seed a value at a dotted store path")
            .with_example(r#"the store state "cart.items" is "3""#),
    )?;

    registry.register(
        "store/dispatch",
        PatternDescriptor::action(
            r#"I dispatch (?:the )?"([^"]*)" action(?: with "([^"]*)")?"#,
            dispatch,
        )
        .with_arity(2)
        .with_tags(["store", "action"])
        .with_description("Dispatch a store action with an optional payload")
        .with_example(r#"I dispatch the "cart/addItem" action with "42""#),
    )?;

    registry.register(
        "store/commit",
        PatternDescriptor::action(
            r#"I commit (?:the )?"([^"]*)" mutation(?: with "([^"]*)")?"#,
            commit,
        )
        .with_arity(2)
        .with_tags(["store", "mutation"])
        .with_description("Commit a store mutation with an optional payload")
        .with_example(r#"I commit the "cart/clear" mutation"#),
    )?;

    registry.register(
        "store/state-equals",
        PatternDescriptor::assertion(
            r#"the store state "([^"]*)" should (?:be|equal) "([^"]*)""#,
            state_equals,
        )
        .with_arity(2)
        .with_tags(["store", "state"])
        .with_description("Assert the value at a dotted store path")
        .with_example(r#"the store state "cart.items" should be "0""#),
    )?;

    registry.register(
        "store/getter-equals",
        PatternDescriptor::assertion(
            r#"the "([^"]*)" getter should (?:return|be|equal) "([^"]*)""#,
            getter_equals,
        )
        .with_arity(2)
        .with_tags(["store", "getter"])
        .with_description("Assert the value of a store getter")
        .with_example(r#"the "cart/total" getter should return "30""#),
    )?;

    Ok(())
}

fn optional_payload(c: &Captures, index: usize) -> String {
    c.get(index).map_or_else(|| "undefined".to_string(), js_value)
}

fn set_state(c: &Captures, o: &GenerationOptions) -> String {
    let value = js_value(c.arg(1));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.evaluate(([path, value]) => {{\n  const keys = path.split('.');\n  const last = keys.pop();\n  keys.reduce((state, key) => state[key], window.__store__.state)[last] = value;\n}}, [{}, {value}]);",
            js_string(c.arg(0))
        ),
        ExecutionTarget::ComponentMount => {
            format!("store.state{} = {value};", bracket_path(c.arg(0)))
        }
    }
}

fn dispatch(c: &Captures, o: &GenerationOptions) -> String {
    let action = js_string(c.arg(0));
    let payload = optional_payload(c, 1);
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.evaluate(([type, payload]) => window.__store__.dispatch(type, payload), [{action}, {payload}]);"
        ),
        ExecutionTarget::ComponentMount => format!("await store.dispatch({action}, {payload});"),
    }
}

fn commit(c: &Captures, o: &GenerationOptions) -> String {
    let mutation = js_string(c.arg(0));
    let payload = optional_payload(c, 1);
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.evaluate(([type, payload]) => window.__store__.commit(type, payload), [{mutation}, {payload}]);"
        ),
        ExecutionTarget::ComponentMount => format!("store.commit({mutation}, {payload});"),
    }
}

fn state_equals(c: &Captures, o: &GenerationOptions) -> String {
    let expected = js_value(c.arg(1));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "expect(await page.evaluate((path) => path.split('.').reduce((state, key) => state[key], window.__store__.state), {})).toEqual({expected});",
            js_string(c.arg(0))
        ),
        ExecutionTarget::ComponentMount => format!(
            "expect(store.state{}).toEqual({expected});",
            bracket_path(c.arg(0))
        ),
    }
}

fn getter_equals(c: &Captures, o: &GenerationOptions) -> String {
    let getter = js_string(c.arg(0));
    let expected = js_value(c.arg(1));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "expect(await page.evaluate((name) => window.__store__.getters[name], {getter})).toEqual({expected});"
        ),
        ExecutionTarget::ComponentMount => {
            format!("expect(store.getters[{getter}]).toEqual({expected});")
        }
    }
}
