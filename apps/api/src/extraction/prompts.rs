// Prompt for the business-card extraction call.

/// Extraction prompt template. Replace `{text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"You are an expert business-card parser. Extract the name, job title, company, phone number, and email address from the text below. Reply with ONLY a valid JSON object with exactly these keys: "name", "jobTitle", "company", "phoneNumber", "email". Use an empty string for any field that is not found. Text:

{text}"#;

pub fn extraction_prompt(raw_text: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{text}", raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_raw_text_verbatim() {
        let prompt = extraction_prompt("Jane Doe\nCTO @ Acme");
        assert!(prompt.ends_with("Jane Doe\nCTO @ Acme"));
        assert!(prompt.contains("\"jobTitle\""));
        assert!(prompt.contains("empty string"));
    }
}
