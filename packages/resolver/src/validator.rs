/// Development mode validation for likely configuration mistakes
use crate::config::StyleConfig;
use std::collections::HashSet;

/// Validation warning level
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    /// Warning that should be addressed
    Warning,
    /// Error that will cause issues
    Error,
}

/// Validation warning
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
    pub axis: Option<String>,
}

impl ValidationWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            message: message.into(),
            axis: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            axis: None,
        }
    }

    pub fn with_axis(mut self, axis: impl Into<String>) -> Self {
        self.axis = Some(axis.into());
        self
    }
}

/// Validator for style configurations.
///
/// The engine itself degrades silently on all of these (an unresolvable
/// default simply contributes nothing), so validation is advisory and meant
/// for development builds and tests.
pub struct Validator {
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Validate a style configuration
    pub fn validate(&mut self, config: &StyleConfig) -> Vec<ValidationWarning> {
        self.warnings.clear();

        let axis_names: HashSet<&str> = config
            .variants
            .iter()
            .map(|axis| axis.name.as_str())
            .collect();

        self.check_empty_axes(config);
        self.check_defaults(config);
        self.check_compound_rules(config, &axis_names);

        self.warnings.clone()
    }

    fn check_empty_axes(&mut self, config: &StyleConfig) {
        for axis in &config.variants {
            if axis.classes.is_empty() {
                self.warnings.push(
                    ValidationWarning::warning(format!(
                        "Variant axis '{}' declares no value tags and can never contribute",
                        axis.name
                    ))
                    .with_axis(&axis.name),
                );
            }
        }
    }

    fn check_defaults(&mut self, config: &StyleConfig) {
        for (axis_name, value) in &config.default_variants {
            let Some(axis) = config
                .variants
                .iter()
                .find(|axis| &axis.name == axis_name)
            else {
                // An undeclared axis can never resolve; the default is dead.
                self.warnings.push(
                    ValidationWarning::error(format!(
                        "Default variant '{}' does not match any declared axis",
                        axis_name
                    ))
                    .with_axis(axis_name),
                );
                continue;
            };

            let tag = if axis.is_boolean_style() {
                value.as_prop().is_truthy().to_string()
            } else {
                value.as_prop().tag()
            };
            if !axis.classes.contains_key(&tag) {
                self.warnings.push(
                    ValidationWarning::warning(format!(
                        "Default value '{}' for axis '{}' has no class entry",
                        tag, axis_name
                    ))
                    .with_axis(axis_name),
                );
            }
        }
    }

    fn check_compound_rules(&mut self, config: &StyleConfig, axis_names: &HashSet<&str>) {
        for (index, rule) in config.compound_variants.iter().enumerate() {
            if rule.when.is_empty() {
                self.warnings.push(ValidationWarning::warning(format!(
                    "Compound variant #{} has no requirements and never matches",
                    index
                )));
            }

            for (axis_name, _) in &rule.when {
                if !axis_names.contains(axis_name.as_str()) {
                    self.warnings.push(
                        ValidationWarning::warning(format!(
                            "Compound variant #{} requires undeclared axis '{}'",
                            index, axis_name
                        ))
                        .with_axis(axis_name),
                    );
                }
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
