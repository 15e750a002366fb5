//! Navigation and routing steps.
//!
//! Page names become route paths through [`page_path`]: `"login"` is
//! `/login`, `"Order History"` is `/order-history`, and `"home"` is `/`.
//! Under component mounting, navigation goes through the mounted router.

use stepforge_foundation::escape::js_string;
use stepforge_foundation::{ExecutionTarget, GenerationOptions, Result};
use stepforge_registry::{Captures, PatternDescriptor, PatternRegistry};

use crate::support::page_path;

/// Registers the navigation patterns in priority order.
///
/// # Errors
///
/// Returns the first registration defect.
pub fn register_steps(registry: &mut PatternRegistry) -> Result<()> {
    // Literal paths and URLs first, so "I visit "/x"" never reads as a page name
    registry.register(
        "navigation/visit-url",
        PatternDescriptor::action(
            r#"I (?:navigate to|visit|go to|open) (?:the )?(?:url )?"(/[^"]*|https?://[^"]*)""#,
            visit,
        )
        .with_arity(1)
        .with_tags(["navigation", "url"])
        .with_description("Navigate to a literal path or URL")
        .with_example(r#"I navigate to "/dashboard""#),
    )?;

    registry.register(
        "navigation/visit-page",
        PatternDescriptor::action(
            r#"I (?:visit|go to|am on|open|navigate to) the "([^"]*)" page"#,
            visit,
        )
        .with_arity(1)
        .with_tags(["navigation", "page", "routing"])
        .with_description("Navigate to a named page")
        .with_example(r#"I visit the "login" page"#),
    )?;

    registry.register(
        "navigation/go-back",
        PatternDescriptor::action("I go back", go_back)
            .with_tags(["navigation", "history"])
            .with_description("Go back one entry in history")
            .with_example("I go back"),
    )?;

    registry.register(
        "navigation/reload",
        PatternDescriptor::action("I (?:reload|refresh) the page", reload)
            .with_tags(["navigation", "page"])
            .with_description("Reload the current page")
            .with_example("I reload the page"),
    )?;

    registry.register(
        "navigation/on-page",
        PatternDescriptor::assertion(r#"I should be on the "([^"]*)" page"#, on_page)
            .with_arity(1)
            .with_tags(["navigation", "page", "routing"])
            .with_description("Assert the current route is a named page")
            .with_example(r#"I should be on the "dashboard" page"#),
    )?;

    registry.register(
        "navigation/redirected",
        PatternDescriptor::assertion(r#"I should be redirected to the "([^"]*)" page"#, redirected)
            .with_arity(1)
            .with_tags(["navigation", "redirect", "routing"])
            .with_description("Wait for a redirect to a named page")
            .with_example(r#"I should be redirected to the "login" page"#),
    )?;

    registry.register(
        "navigation/url-contains",
        PatternDescriptor::assertion(r#"the url should contain "([^"]*)""#, url_contains)
            .with_arity(1)
            .with_tags(["navigation", "url"])
            .with_description("Assert the current URL contains text")
            .with_example(r#"the URL should contain "page=2""#),
    )?;

    registry.register(
        "navigation/page-title",
        PatternDescriptor::assertion(r#"the page title should be "([^"]*)""#, page_title)
            .with_arity(1)
            .with_tags(["navigation", "page", "title"])
            .with_description("Assert the document title")
            .with_example(r#"the page title should be "Dashboard""#),
    )?;

    Ok(())
}

fn visit(c: &Captures, o: &GenerationOptions) -> String {
    let path = js_string(&page_path(c.arg(0)));
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await page.goto({path});"),
        ExecutionTarget::ComponentMount => format!("await router.push({path});\nawait router.isReady();"),
    }
}

fn go_back(_: &Captures, o: &GenerationOptions) -> String {
    match o.execution_target {
        ExecutionTarget::Playwright => "await page.goBack();".to_string(),
        ExecutionTarget::ComponentMount => "router.back();".to_string(),
    }
}

fn reload(_: &Captures, o: &GenerationOptions) -> String {
    match o.execution_target {
        ExecutionTarget::Playwright => "await page.reload();".to_string(),
        ExecutionTarget::ComponentMount => {
            "await router.replace(router.currentRoute.value.fullPath);".to_string()
        }
    }
}

fn on_page(c: &Captures, o: &GenerationOptions) -> String {
    let path = page_path(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "expect(new URL(page.url()).pathname).toBe({});",
            js_string(&path)
        ),
        ExecutionTarget::ComponentMount => format!(
            "expect(router.currentRoute.value.path).toBe({});",
            js_string(&path)
        ),
    }
}

fn redirected(c: &Captures, o: &GenerationOptions) -> String {
    let path = page_path(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.waitForURL((url) => url.pathname === {});",
            js_string(&path)
        ),
        ExecutionTarget::ComponentMount => format!(
            "await waitFor(() => expect(router.currentRoute.value.path).toBe({}));",
            js_string(&path)
        ),
    }
}

fn url_contains(c: &Captures, o: &GenerationOptions) -> String {
    let fragment = js_string(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => format!("expect(page.url()).toContain({fragment});"),
        ExecutionTarget::ComponentMount => {
            format!("expect(router.currentRoute.value.fullPath).toContain({fragment});")
        }
    }
}

fn page_title(c: &Captures, o: &GenerationOptions) -> String {
    let title = js_string(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => format!("await expect(page).toHaveTitle({title});"),
        ExecutionTarget::ComponentMount => format!("expect(document.title).toBe({title});"),
    }
}
