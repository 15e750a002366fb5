//! Network and API steps.
//!
//! Browser runs intercept requests with `page.route`. Mounted components
//! run against a spied `fetch`.

use stepforge_foundation::escape::js_string;
use stepforge_foundation::{ExecutionTarget, GenerationOptions, Result};
use stepforge_registry::{Captures, PatternDescriptor, PatternRegistry};

/// Registers the network patterns in priority order.
///
/// # Errors
///
/// Returns the first registration defect.
pub fn register_steps(registry: &mut PatternRegistry) -> Result<()> {
    registry.register(
        "network/mock-response",
        PatternDescriptor::setup(
            r#"the API (?:endpoint )?"([^"]*)" (?:returns|responds with) (?:status )?(\d{3})(?: with "([^"]*)")?"#,
            mock_response,
        )
        .with_arity(3)
        .with_tags(["network", "api", "mock"])
        .with_description("Stub an endpoint with a status and optional body")
        .with_example(r#"the API "/api/users" returns status 200 with "[]""#),
    )?;

    registry.register(
        "network/mock-failure",
        PatternDescriptor::setup(
            r#"the API (?:endpoint )?"([^"]*)" (?:fails|is unavailable)"#,
            mock_failure,
        )
        .with_arity(1)
        .with_tags(["network", "api", "mock", "error"])
        .with_description("Make requests to an endpoint fail at the network level")
        .with_example(r#"the API "/api/users" is unavailable"#),
    )?;

    registry.register(
        "network/request-made",
        PatternDescriptor::assertion(
            r#"an? (GET|POST|PUT|PATCH|DELETE) request should (?:have been|be) (?:made|sent) to "([^"]*)""#,
            request_made,
        )
        .with_arity(2)
        .with_tags(["network", "api", "request"])
        .with_description("Assert that a request was sent to an endpoint")
        .with_example(r#"a POST request should have been made to "/api/login""#),
    )?;

    registry.register(
        "network/no-request",
        PatternDescriptor::assertion(
            r#"no (?:(GET|POST|PUT|PATCH|DELETE) )?requests? should (?:have been|be) (?:made|sent) to "([^"]*)""#,
            no_request,
        )
        .with_arity(2)
        .with_tags(["network", "api", "request"])
        .with_description("Assert that no request was sent to an endpoint")
        .with_example(r#"no request should have been made to "/api/analytics""#),
    )?;

    registry.register(
        "network/response-status",
        PatternDescriptor::assertion(r"the response status should be (\d{3})", response_status)
            .with_arity(1)
            .with_tags(["network", "api", "response"])
            .with_description("Assert the status of the most recent response")
            .with_example("the response status should be 201"),
    )?;

    Ok(())
}

fn mock_response(c: &Captures, o: &GenerationOptions) -> String {
    let url = js_string(c.arg(0));
    let status = c.arg(1);
    let body = c.get(2).map_or_else(|| "''".to_string(), js_string);
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.route(`**${{{url}}}`, (route) =>\n  route.fulfill({{ status: {status}, contentType: 'application/json', body: {body} }}),\n);"
        ),
        ExecutionTarget::ComponentMount => format!(
            "vi.spyOn(globalThis, 'fetch').mockImplementation(async (input) =>\n  String(input).includes({url})\n    ? new Response({body}, {{ status: {status}, headers: {{ 'Content-Type': 'application/json' }} }})\n    : new Response(null, {{ status: 404 }}),\n);"
        ),
    }
}

fn mock_failure(c: &Captures, o: &GenerationOptions) -> String {
    let url = js_string(c.arg(0));
    match o.execution_target {
        ExecutionTarget::Playwright => {
            format!("await page.route(`**${{{url}}}`, (route) => route.abort('failed'));")
        }
        ExecutionTarget::ComponentMount => format!(
            "vi.spyOn(globalThis, 'fetch').mockImplementation(async (input) => {{\n  if (String(input).includes({url})) {{\n    throw new TypeError('Failed to fetch');\n  }}\n  return new Response(null, {{ status: 404 }});\n}});"
        ),
    }
}

fn request_made(c: &Captures, o: &GenerationOptions) -> String {
    let method = js_string(&c.arg(0).to_uppercase());
    let url = js_string(c.arg(1));
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "await page.waitForRequest((request) => request.method() === {method} && request.url().includes({url}));"
        ),
        ExecutionTarget::ComponentMount => format!(
            "expect(\n  vi.mocked(fetch).mock.calls.some(\n    ([input, init]) => String(input).includes({url}) && (init?.method ?? 'GET') === {method},\n  ),\n).toBe(true);"
        ),
    }
}

fn no_request(c: &Captures, o: &GenerationOptions) -> String {
    let url = js_string(c.arg(1));
    let method = c.get(0).map(|m| js_string(&m.to_uppercase()));
    match o.execution_target {
        ExecutionTarget::Playwright => {
            let filter = match &method {
                Some(method) => format!("request.method() === {method} && request.url().includes({url})"),
                None => format!("request.url().includes({url})"),
            };
            format!(
                "const unexpected = [];\npage.on('request', (request) => {{\n  if ({filter}) unexpected.push(request.url());\n}});\nawait page.waitForLoadState('networkidle');\nexpect(unexpected).toEqual([]);"
            )
        }
        ExecutionTarget::ComponentMount => {
            let filter = match &method {
                Some(method) => format!(
                    "String(input).includes({url}) && (init?.method ?? 'GET') === {method}"
                ),
                None => format!("String(input).includes({url})"),
            };
            format!(
                "expect(vi.mocked(fetch).mock.calls.some(([input, init]) => {filter})).toBe(false);"
            )
        }
    }
}

fn response_status(c: &Captures, o: &GenerationOptions) -> String {
    let status = c.arg(0);
    match o.execution_target {
        ExecutionTarget::Playwright => format!(
            "const response = await page.waitForResponse((response) => response.request().resourceType() === 'fetch');\nexpect(response.status()).toBe({status});"
        ),
        ExecutionTarget::ComponentMount => format!(
            "const response = await vi.mocked(fetch).mock.results.at(-1)?.value;\nexpect(response?.status).toBe({status});"
        ),
    }
}
