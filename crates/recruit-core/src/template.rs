use std::collections::BTreeMap;

use anyhow::Context;
use regex::{Captures, Regex};
use tracing::warn;

fn placeholder_pattern() -> anyhow::Result<Regex> {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").context("placeholder pattern")
}

/// Placeholder names in order of first appearance, deduplicated.
pub fn template_variables(text: &str) -> anyhow::Result<Vec<String>> {
    let pattern = placeholder_pattern()?;

    let mut names = Vec::new();
    for caps in pattern.captures_iter(text) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    Ok(names)
}

/// Substitutes `{{name}}` placeholders from `vars`. A placeholder with no
/// value is left verbatim; rendering itself never fails.
pub fn render_template(text: &str, vars: &BTreeMap<String, String>) -> anyhow::Result<String> {
    let pattern = placeholder_pattern()?;

    let rendered = pattern.replace_all(text, |caps: &Captures| match vars.get(&caps[1]) {
        Some(value) => value.clone(),
        None => {
            warn!(placeholder = &caps[1], "no value for placeholder, leaving it in place");
            caps[0].to_string()
        }
    });

    Ok(rendered.into_owned())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{render_template, template_variables};

    #[test]
    fn substitutes_known_placeholders() {
        let mut vars = BTreeMap::new();
        vars.insert("candidateName".to_string(), "John Smith".to_string());
        vars.insert("position".to_string(), "Senior Frontend Developer".to_string());

        let out = render_template("Dear {{candidateName}}, re: {{position}}.", &vars)
            .expect("render");
        assert_eq!(out, "Dear John Smith, re: Senior Frontend Developer.");
    }

    #[test]
    fn unknown_placeholders_survive_verbatim() {
        let vars = BTreeMap::new();
        let out = render_template("Round {{round}} at {{time}}", &vars).expect("render");
        assert_eq!(out, "Round {{round}} at {{time}}");
    }

    #[test]
    fn extracts_variables_in_first_appearance_order() {
        let vars = template_variables("{{b}} {{a}} {{b}} {{ c }}").expect("extract");
        assert_eq!(vars, vec!["b", "a", "c"]);
    }
}
