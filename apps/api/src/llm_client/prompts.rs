// Cross-cutting prompt fragments. Prompts for a specific feature live in a
// prompts.rs next to that feature.

/// System prompt for every resume-writing call. Output goes straight into a
/// form field, so it must be bare text.
pub const RESUME_WRITER_SYSTEM: &str = "You are an experienced resume writer. \
    Respond with the requested resume text only. \
    Do NOT add a preamble, headings, or closing remarks. \
    Do NOT use markdown formatting. \
    When asked for bullet points, put each bullet on its own line.";
