// Prompt for the follow-up email draft call.

/// Label substituted when a card carries no job title.
pub const DEFAULT_JOB_TITLE: &str = "a professional";

/// Follow-up email prompt template.
/// Replace: `{name}`, `{job_title}`, `{company}` before sending.
pub const FOLLOW_UP_PROMPT_TEMPLATE: &str = r#"You are a professional about to send a follow-up email. Your goal is to strengthen the connection and open up future opportunities.

**Task:**
Write a draft email to {name}, who works as {job_title} at {company}.

**Context (assume):**
- You just met them at an event (for example a seminar, trade show, or business meeting).
- The conversation went well and you want to continue the professional relationship.

**Email instructions:**
1. **Subject line:** Short, personal, and clear, for example: "Great Meeting You at [Event Name]" or "Continuing Our Conversation".
2. **Opening paragraph:** Greet {name} personally and mention where and when you met to refresh their memory.
3. **Body paragraph:**
    - Mention one specific interesting point from your conversation with them. This shows you were really listening. (Example: "I was very interested in your perspective on...")
    - State your goal clearly: you want to stay connected to explore potential collaboration or simply grow your professional network.
4. **Closing paragraph (call to action):**
    - Suggest a concrete but low-pressure next step. Example: "Perhaps we could continue this discussion over coffee sometime?" or "I'd be glad to connect on LinkedIn."
    - Close with a professional signoff such as "Best regards," or "Thank you,".

**Constraints:**
- Tone: professional, sincere, and to the point.
- Length: keep the email short, ideally under 120 words."#;

pub fn follow_up_prompt(name: &str, job_title: Option<&str>, company: &str) -> String {
    FOLLOW_UP_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{job_title}", job_title.unwrap_or(DEFAULT_JOB_TITLE))
        .replace("{company}", company)
}
