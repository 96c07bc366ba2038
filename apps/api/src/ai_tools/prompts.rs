// AI tools prompt templates. Placeholders in `{braces}` are filled by `fill_template`.

pub const RECOMMENDATIONS_ROLE: &str = "\
You are a helpful AI assistant that recommends personalized coding projects. \
Based on a developer's skills, interests, and completed projects, suggest 3 new projects \
that would help them grow their skills while aligning with their interests. \
Include appropriate technologies, difficulty level, time estimates, and learning goals.";

pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"Please recommend 3 projects for me based on the following information:

Skills: {skills}
Interests: {interests}
Completed Projects: {completed_projects}

Provide the recommendations in JSON format with the following structure:
{
  "recommendations": [
    {
      "title": "Project Name",
      "description": "Brief description of the project",
      "technologies": ["Tech1", "Tech2", "Tech3"],
      "difficulty": "beginner|intermediate|advanced",
      "timeEstimate": "X hours/days/weeks",
      "skills": ["skill1", "skill2"],
      "learningGoals": ["goal1", "goal2"]
    }
  ]
}"#;

pub const TIMELINE_ROLE: &str = "\
You are a helpful AI assistant that creates project timelines. \
For a given project and its technologies, create a realistic timeline with key milestones.";

pub const TIMELINE_PROMPT_TEMPLATE: &str = r#"Create a development timeline for the following project:

Project: {project_title}
Technologies: {technologies}

Provide 5-8 key milestones in the project's development journey in JSON format:
{
  "milestones": [
    "Milestone 1: description",
    "Milestone 2: description"
  ]
}"#;

pub const LEARNING_PATH_ROLE: &str = "\
You are a helpful AI assistant that creates personalized learning paths. \
For a given skill and current proficiency level, create a step-by-step path to mastery.";

pub const LEARNING_PATH_PROMPT_TEMPLATE: &str = r#"Create a learning path for:

Skill: {skill}
Current Level: {current_level}

Provide steps and recommended learning resources in JSON format:
{
  "steps": ["Step 1: description", "Step 2: description"],
  "resources": ["Resource 1: name and link", "Resource 2: name and link"]
}"#;

/// Joins list fields the way the templates expect; an empty list reads as "none".
pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Substitutes `{key}` placeholders in one pass. Substituted text is never rescanned,
/// and braces that do not name a key are copied through.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = values
            .iter()
            .find(|(key, _)| after.starts_with(key) && after[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template("a={a} b={b}", &[("a", "{b}"), ("b", "2")]);
        assert_eq!(filled, "a={b} b=2");
    }

    #[test]
    fn test_fill_template_keeps_json_braces() {
        let filled = fill_template("{\n  \"x\": \"{x}\", \"y\": {unknown}\n}", &[("x", "1")]);
        assert_eq!(filled, "{\n  \"x\": \"1\", \"y\": {unknown}\n}");
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "none");
        assert_eq!(join_or_none(&["a".into(), "b".into()]), "a, b");
    }
}
