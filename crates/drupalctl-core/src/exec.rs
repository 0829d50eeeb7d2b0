//! Executable command builder
//!
//! An [`ExecCommand`] is an in-memory, render-once description of one
//! program invocation: the program name, ordered positional arguments,
//! and `--name[=value]` style options. Command providers create these,
//! the resolver merges environment defaults into them and renders each
//! to a literal command-line string.

/// Ordered option pairs, `None` marking a bare `--name` flag.
pub type CommandOptions = Vec<(String, Option<String>)>;

/// A single program invocation under construction.
///
/// Options keep their insertion order; a later write to an existing
/// option name overwrites the value in place. Rendering is
/// deterministic: the same state always produces the same string. No
/// shell escaping is applied - callers own whatever quoting the
/// destination shell requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCommand {
    program: String,
    arguments: Vec<String>,
    options: CommandOptions,
}

impl ExecCommand {
    /// Create a command for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            arguments: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Append one positional argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.arguments.push(value.into());
        self
    }

    /// Append a sequence of positional arguments, preserving order.
    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(values.into_iter().map(Into::into));
        self
    }

    /// Set or overwrite a valued option.
    pub fn option(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), Some(value.into()))
    }

    /// Set or overwrite a boolean flag option, rendered without a value.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.set(name.into(), None)
    }

    /// Merge a set of options, later entries overwriting earlier ones
    /// with the same name.
    pub fn options<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        for (name, value) in pairs {
            self = self.set(name, value);
        }
        self
    }

    /// Merge environment-supplied defaults at lower precedence: an
    /// option that was already set keeps its value.
    pub fn config_options<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        for (name, value) in pairs {
            if !self.has_option(&name) {
                self.options.push((name, value));
            }
        }
        self
    }

    /// Check whether an option name has been set.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|(n, _)| n == name)
    }

    fn set(mut self, name: String, value: Option<String>) -> Self {
        if let Some(entry) = self.options.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.options.push((name, value));
        }
        self
    }

    /// Render to a literal command-line string:
    /// `program [options...] [arguments...]`.
    ///
    /// Each option renders as `--name` (flag) or `--name=value`;
    /// arguments follow verbatim in insertion order.
    pub fn build(&self) -> String {
        let mut tokens = Vec::with_capacity(1 + self.options.len() + self.arguments.len());
        tokens.push(self.program.clone());

        for (name, value) in &self.options {
            match value {
                Some(value) => tokens.push(format!("--{}={}", name, value)),
                None => tokens.push(format!("--{}", name)),
            }
        }
        tokens.extend(self.arguments.iter().cloned());

        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_program_only() {
        let cmd = ExecCommand::new("drush");
        assert_eq!(cmd.build(), "drush");
    }

    #[test]
    fn test_build_options_before_arguments() {
        let cmd = ExecCommand::new("drush")
            .option("root", "/var/www/html")
            .arg("cr");
        assert_eq!(cmd.build(), "drush --root=/var/www/html cr");
    }

    #[test]
    fn test_flag_renders_without_value() {
        let cmd = ExecCommand::new("drush").flag("yes").arg("en").arg("views");
        assert_eq!(cmd.build(), "drush --yes en views");
    }

    #[test]
    fn test_arguments_preserve_order() {
        let cmd = ExecCommand::new("drush")
            .arg("en")
            .args(vec!["views", "token", "pathauto"]);
        assert_eq!(cmd.build(), "drush en views token pathauto");
    }

    #[test]
    fn test_option_overwrites_in_place() {
        let cmd = ExecCommand::new("drush")
            .option("uri", "http://a.example.com")
            .flag("yes")
            .option("uri", "http://b.example.com");
        assert_eq!(cmd.build(), "drush --uri=http://b.example.com --yes");
    }

    #[test]
    fn test_options_merge_later_wins() {
        let cmd = ExecCommand::new("drush").options(vec![
            ("mail".to_string(), Some("a@example.com".to_string())),
            ("mail".to_string(), Some("b@example.com".to_string())),
        ]);
        assert_eq!(cmd.build(), "drush --mail=b@example.com");
    }

    #[test]
    fn test_config_options_never_overwrite() {
        let cmd = ExecCommand::new("drush")
            .option("uri", "http://site.example.com")
            .config_options(vec![
                ("uri".to_string(), Some("http://default".to_string())),
                ("no-interaction".to_string(), None),
            ]);
        assert_eq!(
            cmd.build(),
            "drush --uri=http://site.example.com --no-interaction"
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let cmd = ExecCommand::new("drush")
            .option("root", "web")
            .flag("yes")
            .args(vec!["en", "views"]);
        assert_eq!(cmd.build(), cmd.build());
    }
}
