//! Authentication and session steps.
//!
//! In the browser, sessions are established through the real login form
//! and test users through the test API. When mounted, the session lives in
//! the `session` store module.

use std::fmt::Write;

use stepforge_foundation::escape::js_string;
use stepforge_foundation::{ExecutionTarget, GenerationOptions, Result};
use stepforge_registry::{Captures, PatternDescriptor, PatternRegistry};

use crate::support::by_role;

/// Password used when a step names a user but not a password.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Registers the authentication patterns in priority order.
///
/// # Errors
///
/// Returns the first registration defect.
pub fn register_steps(registry: &mut PatternRegistry) -> Result<()> {
    registry.register(
        "auth/user-exists",
        PatternDescriptor::setup(
            r#"an? (?:user|account) exists with email "([^"]*)"(?: and password "([^"]*)")?"#,
            user_exists,
        )
        .with_arity(2)
        .with_tags(["auth", "user", "fixture"])
        .with_description("Create a user account")
        .with_example(r#"a user exists with email "a@b.com""#),
    )?;

    registry.register(
        "auth/logged-in-as",
        PatternDescriptor::setup(r#"I am logged in as (?:an? |the )?"([^"]*)"(?: user)?"#, logged_in_as)
            .with_arity(1)
            .with_tags(["auth", "session", "role"])
            .with_description("Start with a session for a role")
            .with_example(r#"I am logged in as an "admin" user"#),
    )?;

    registry.register(
        "auth/not-logged-in",
        PatternDescriptor::setup("I am not logged in", not_logged_in)
            .with_tags(["auth", "session"])
            .with_description("Start without a session")
            .with_example("I am not logged in"),
    )?;

    registry.register(
        "auth/log-in-with",
        PatternDescriptor::action(
            r#"I (?:log|sign) in with email "([^"]*)" and password "([^"]*)""#,
            log_in_with,
        )
        .with_arity(2)
        .with_tags(["auth", "login", "form"])
        .with_description("Log in through the login form")
        .with_example(r#"I log in with email "a@b.com" and password "secret""#),
    )?;

    registry.register(
        "auth/log-out",
        PatternDescriptor::action("I (?:log|sign) out", log_out)
            .with_tags(["auth", "logout", "session"])
            .with_description("End the current session")
            .with_example("I log out"),
    )?;

    registry.register(
        "auth/should-be-logged-in",
        PatternDescriptor::assertion("I should (not )?be logged in", should_be_logged_in)
            .with_arity(1)
            .with_tags(["auth", "session"])
            .with_description("Assert whether a session is active")
            .with_example("I should be logged in"),
    )?;

    registry.register(
        "auth/access-denied",
        PatternDescriptor::assertion(
            "I should see an? (?:access denied|forbidden|unauthorized) (?:message|error|page)",
            access_denied,
        )
        .with_tags(["auth", "access-control", "error"])
        .with_description("Assert that access was refused")
        .with_example("I should see an access denied message"),
    )?;

    Ok(())
}

/// The conventional address for a role's test account.
fn role_email(role: &str) -> String {
    let slug: String = role
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '.' })
        .collect();
    format!("{slug}@example.com")
}

fn login_form(email: &str, password: &str) -> String {
    let mut out = String::from("await page.goto('/login');\n");
    let _ = writeln!(out, "await page.getByLabel('Email').fill({});", js_string(email));
    let _ = writeln!(out, "await page.getByLabel('Password').fill({});", js_string(password));
    let _ = write!(
        out,
        "await {}.click();",
        by_role("button", "Log in", ExecutionTarget::Playwright)
    );
    out
}

fn user_exists(c: &Captures, o: &GenerationOptions) -> String {
    let email = js_string(c.arg(0));
    let password = js_string(c.get(1).unwrap_or(DEFAULT_PASSWORD));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.request.post('/api/test/users', {{ data: {{ email: {email}, password: {password} }} }});"
        ),
        ExecutionTarget::ComponentMount => format!(
            "store.commit('users/add', {{ email: {email}, password: {password} }});"
        ),
    }
}

fn logged_in_as(c: &Captures, o: &GenerationOptions) -> String {
    let role = c.arg(0);
    let email = role_email(role);
    match o.execution_target {
        ExecutionTarget::Playwright => login_form(&email, DEFAULT_PASSWORD),
        ExecutionTarget::ComponentMount => format!(
            "store.commit('session/login', {{ email: {}, role: {} }});",
            js_string(&email),
            js_string(role)
        ),
    }
}

fn not_logged_in(_: &Captures, o: &GenerationOptions) -> String {
    match o.execution_target {
        ExecutionTarget::Playwright => "await page.context().clearCookies();".to_string(),
        ExecutionTarget::ComponentMount => "store.commit('session/logout');".to_string(),
    }
}

fn log_in_with(c: &Captures, o: &GenerationOptions) -> String {
    match o.execution_target {
        ExecutionTarget::Playwright => login_form(c.arg(0), c.arg(1)),
        ExecutionTarget::ComponentMount => format!(
            "await store.dispatch('session/login', {{ email: {}, password: {} }});",
            js_string(c.arg(0)),
            js_string(c.arg(1))
        ),
    }
}

fn log_out(_: &Captures, o: &GenerationOptions) -> String {
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await {}.click();",
            by_role("button", "Log out", ExecutionTarget::Playwright)
        ),
        ExecutionTarget::ComponentMount => "await store.dispatch('session/logout');".to_string(),
    }
}

fn should_be_logged_in(c: &Captures, o: &GenerationOptions) -> String {
    let expected = !c.present(0);
    match o.execution_target {
        ExecutionTarget::Playwright => {
            let logout = by_role("button", "Log out", ExecutionTarget::Playwright);
            if expected {
                format!("await expect({logout}).toBeVisible();")
            } else {
                format!("await expect({logout}).toHaveCount(0);")
            }
        }
        ExecutionTarget::ComponentMount => {
            format!("expect(store.getters['session/isAuthenticated']).toBe({expected});")
        }
    }
}

fn access_denied(_: &Captures, o: &GenerationOptions) -> String {
    let text = "/access denied|forbidden|unauthorized/i";
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await expect(page.getByText({text})).toBeVisible();"),
        ExecutionTarget::ComponentMount => format!("expect(screen.getByText({text})).toBeTruthy();"),
    }
}
