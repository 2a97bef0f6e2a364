/// Characters of content interpolated into either prompt.
pub const MAX_PROMPT_CONTENT_CHARS: usize = 10_000;
pub const TRUNCATION_NOTICE: &str = "... (content truncated due to length)";

pub const SUMMARY_TEMPERATURE: f32 = 0.5;
pub const QUIZ_TEMPERATURE: f32 = 0.7;

const SUMMARY_PROMPT_TEMPLATE: &str = "You are an educational content analyzer. Your task is to create a detailed, well-structured summary of the following {type} content from {source}.
Focus on key concepts, important points, and main ideas. Format your summary with clear headings, bullet points, and markdown formatting for readability.

Content: {content}";

const QUIZ_PROMPT_TEMPLATE: &str = r#"You are an educational content analyzer. Based on the following {type} content from {source}, generate a 5-question multiple-choice quiz to test comprehension.
For each question, provide 4 options with exactly one correct answer. Format your response as a JSON array where each element is an object with the structure:
{
    "question": "Question text",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "answer": 0 // Index of the correct answer (0-3)
}

Content: {content}"#;

/// First `MAX_PROMPT_CONTENT_CHARS` characters of `content`, with a notice when cut.
pub fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(MAX_PROMPT_CONTENT_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], TRUNCATION_NOTICE),
        None => content.to_string(),
    }
}

pub fn summary_prompt(content_type: &str, source: &str, content: &str) -> String {
    fill_template(SUMMARY_PROMPT_TEMPLATE, content_type, source, content)
}

pub fn quiz_prompt(content_type: &str, source: &str, content: &str) -> String {
    fill_template(QUIZ_PROMPT_TEMPLATE, content_type, source, content)
}

// Content goes in last so placeholder-looking text inside it is left alone.
fn fill_template(template: &str, content_type: &str, source: &str, content: &str) -> String {
    template
        .replace("{type}", content_type)
        .replace("{source}", source)
        .replace("{content}", &truncate_content(content))
}
