//! Prompt template for command interpretation

/// System prompt for command interpretation via an LLM.
///
/// Instructs the model to answer with a single JSON intent object.
pub const SYSTEM_PROMPT: &str = "\
You translate short commands about a sprint issue tracker into a JSON intent.

Issues have identifiers like SF-001. Statuses: To Do, In Progress, In Review, \
Done, Blocked. Priorities: Low, Medium, High, Critical.

Answer with exactly one JSON object and nothing else:
{\"kind\": \"...\", \"targetId\": \"...\", \"title\": \"...\", \"description\": \"...\", \
\"assignee\": \"...\", \"status\": \"...\", \"priority\": \"...\"}

Rules:
- kind is one of: create, assign, update-status, update-priority, update-title, \
update-description. Use another short verb if none fits.
- For create, title is the quoted text in the command, without the quotes.
- targetId is an identifier written in the command. If there is none, use the \
context identifier unless it is N/A. Omit targetId when neither exists.
- To unassign an issue, set assignee to \"unassigned\".
- Omit every field the command does not mention.
- Do NOT include any explanation or markdown";

/// Build the user turn: the command plus the issue currently in focus.
pub fn build_user_message(command: &str, context_id: &str) -> String {
    format!("Context identifier: {}\nCommand: {}", context_id, command)
}

/// Build the messages array for an OpenAI-compatible chat completions request.
pub fn build_messages(command: &str, context_id: &str) -> serde_json::Value {
    serde_json::json!([
        {"role": "system", "content": SYSTEM_PROMPT},
        {"role": "user", "content": build_user_message(command, context_id)}
    ])
}
