//! Locator and literal helpers shared by the generator modules.

use stepforge_foundation::ExecutionTarget;
use stepforge_foundation::escape::js_string;

/// A role-based query, e.g. a button by accessible name.
pub fn by_role(role: &str, name: &str, target: ExecutionTarget) -> String {
    let (root, query) = match target {
        ExecutionTarget::Playwright => ("page", "getByRole"),
        ExecutionTarget::ComponentMount => ("screen", "getByRole"),
    };
    format!("{root}.{query}({}, {{ name: {} }})", js_string(role), js_string(name))
}

/// A form control by its label.
pub fn by_label(label: &str, target: ExecutionTarget) -> String {
    match target {
        ExecutionTarget::Playwright => format!("page.getByLabel({})", js_string(label)),
        ExecutionTarget::ComponentMount => format!("screen.getByLabelText({})", js_string(label)),
    }
}

/// An element by visible text.
pub fn by_text(text: &str, target: ExecutionTarget) -> String {
    match target {
        ExecutionTarget::Playwright => format!("page.getByText({})", js_string(text)),
        ExecutionTarget::ComponentMount => format!("screen.getByText({})", js_string(text)),
    }
}

/// An element by CSS selector in the browser, by test id when mounted.
pub fn by_selector(selector: &str, target: ExecutionTarget) -> String {
    match target {
        ExecutionTarget::Playwright => format!("page.locator({})", js_string(selector)),
        ExecutionTarget::ComponentMount => format!("screen.getByTestId({})", js_string(selector)),
    }
}

/// Renders a captured value as a JavaScript literal.
///
/// Numbers, booleans, and `null` stay bare; everything else is a string.
pub fn js_value(text: &str) -> String {
    let trimmed = text.trim();
    if matches!(trimmed, "true" | "false" | "null") || trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
        trimmed.to_string()
    } else {
        js_string(text)
    }
}

/// Maps a page name to a route path.
///
/// Paths and absolute URLs pass through; `home` is the root.
pub fn page_path(name: &str) -> String {
    let name = name.trim();
    if name.starts_with('/') || name.starts_with("http://") || name.starts_with("https://") {
        return name.to_string();
    }
    let slug = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() || slug == "home" {
        "/".to_string()
    } else {
        format!("/{slug}")
    }
}

/// Bracket-notation property access for a dotted path.
pub fn bracket_path(path: &str) -> String {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("[{}]", js_string(segment)))
        .collect()
}
