//! Template variable handling
//!
//! Provides variable substitution using {{PLACEHOLDER}} syntax.
//! The module identifier is inserted verbatim: no normalization or escaping.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::module::ModuleId;

/// Placeholder key for the Go module identifier
pub const MODULE: &str = "MODULE";

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Z_][A-Z0-9_]*)\}\}").expect("valid placeholder pattern"))
}

/// Template variables container
#[derive(Debug, Clone)]
pub struct Variables {
    /// Variable name -> value mapping
    vars: HashMap<String, String>,
}

impl Variables {
    /// Create a container with the module identifier bound to {{MODULE}}
    pub fn new(module: &ModuleId) -> Self {
        let mut vars = HashMap::new();
        vars.insert(MODULE.to_string(), module.as_str().to_string());
        Self { vars }
    }

    /// Replace all {{PLACEHOLDER}} patterns in a string
    pub fn substitute(&self, content: &str) -> String {
        placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let key = &caps[1];
                self.vars
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", key))
            })
            .into_owned()
    }

    /// Find all variables used in a string
    pub fn find_used_variables(content: &str) -> Vec<String> {
        let mut vars: Vec<String> = placeholder()
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect();

        vars.sort();
        vars.dedup();
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(raw: &str) -> ModuleId {
        ModuleId::parse(raw).unwrap()
    }

    #[test]
    fn test_substitute_module() {
        let vars = Variables::new(&module("github.com/acme/shop"));
        let output = vars.substitute("import \"{{MODULE}}/router\"\nimport \"{{MODULE}}/controller\"");
        assert_eq!(
            output,
            "import \"github.com/acme/shop/router\"\nimport \"github.com/acme/shop/controller\""
        );
    }

    #[test]
    fn test_substitute_is_verbatim() {
        // Regex replacement syntax in the value must not be interpreted
        let vars = Variables::new(&module("example.com/$1/${x}"));
        assert_eq!(vars.substitute("{{MODULE}}/router"), "example.com/$1/${x}/router");
    }

    #[test]
    fn test_substitute_missing_var() {
        let vars = Variables::new(&module("m"));

        // Unknown variables should be left as-is
        assert_eq!(vars.substitute("Value: {{UNKNOWN}}"), "Value: {{UNKNOWN}}");
    }

    #[test]
    fn test_go_braces_untouched() {
        let vars = Variables::new(&module("m"));
        let go = "c.JSON(http.StatusOK, gin.H{\"message\": \"hi\"})";
        assert_eq!(vars.substitute(go), go);
    }

    #[test]
    fn test_find_used_variables() {
        let content = "{{MODULE}}/a {{OTHER}} {{MODULE}}/b";
        assert_eq!(
            Variables::find_used_variables(content),
            vec!["MODULE".to_string(), "OTHER".to_string()]
        );
    }
}
