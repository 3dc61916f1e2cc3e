// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Appended to every system prompt: the reply is shown to users verbatim.
pub const PLAIN_TEXT_ONLY: &str = "Respond with plain prose only. \
    Do NOT use markdown, headings, bullet points, or code fences. \
    Do NOT include preambles such as 'Here is a summary'.";

/// Keeps the model from embellishing candidate history.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only state facts present in the provided text. \
    Do NOT infer, interpolate, or invent employers, titles, dates, or metrics. \
    If the text does not support a claim, omit it entirely.";
