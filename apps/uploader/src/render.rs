use askama::Template;

use crate::error::RenderError;
use crate::response::Outcome;

#[derive(Template)]
#[template(path = "summary.html")]
struct SummaryTemplate<'a> {
    summary: &'a str,
}

#[derive(Template)]
#[template(path = "failure.html")]
struct FailureTemplate<'a> {
    message: &'a str,
}

/// Renders an outcome into the markup that replaces the output container.
/// Interpolated text is HTML-escaped; failures are shown in red.
pub fn render(outcome: &Outcome) -> Result<String, RenderError> {
    let markup = match outcome {
        Outcome::Summary(summary) => SummaryTemplate { summary }.render()?,
        Outcome::Failure(message) => FailureTemplate { message }.render()?,
    };
    Ok(markup.trim_end().to_string())
}
