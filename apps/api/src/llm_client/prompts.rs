// Shared prompt fragments. Each capability owns its own templates in ai_tools::prompts.

/// Appended to every system instruction so replies stay machine-parseable.
pub const JSON_ONLY_SUFFIX: &str = " \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Builds a system instruction from a role description plus the JSON-only rule.
pub fn json_only_system(role: &str) -> String {
    format!("{}{}", role.trim_end(), JSON_ONLY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_only_system_appends_rule() {
        let system = json_only_system("You plan projects. ");
        assert!(system.starts_with("You plan projects. You MUST respond with valid JSON only."));
        assert!(system.ends_with("markdown code fences."));
    }
}
