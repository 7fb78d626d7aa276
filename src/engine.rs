//! Rule activation and per-node dispatch
//!
//! The host owns the traversal. For every expression node it visits it calls
//! [`Linter::check_node`], which hands the node to each active rule.

use crate::ast::Expression;
use crate::config::{normalize_rule_id, Config, ConfigError};
use crate::diagnostic::{Diagnostic, Severity};
use crate::rule::{Rule, RuleContext, RuleMeta};
use crate::rules::{self, ArrowBodyRule, SideEffectRule};
use crate::source::SourceText;

/// A rule bound to the severity it reports with
struct ActiveRule {
    rule: Box<dyn Rule>,
    id: &'static str,
    severity: Severity,
}

/// Set of activated rules
#[derive(Default)]
pub struct Linter {
    rules: Vec<ActiveRule>,
}

impl Linter {
    /// A linter with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Both rules as errors with default options
    pub fn recommended() -> Self {
        Self::new()
            .with_rule(Box::new(SideEffectRule::default()), Severity::Error)
            .with_rule(Box::new(ArrowBodyRule::default()), Severity::Error)
    }

    /// Activate every enabled rule of `config`, parsing its options once
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut linter = Self::new();
        for (key, entry) in &config.rules {
            let id = normalize_rule_id(key);
            let Some(severity) = entry.level.severity() else {
                log::debug!("Rule '{}' is off", id);
                continue;
            };

            let rule = rules::create_rule(id, entry.options.as_ref())
                .map_err(|source| ConfigError::InvalidOptions {
                    rule: id.to_string(),
                    source,
                })?
                .ok_or_else(|| ConfigError::UnknownRule(id.to_string()))?;

            log::debug!("Activated rule '{}' at {}", id, severity);
            linter = linter.with_rule(rule, severity);
        }

        Ok(linter)
    }

    /// Add an already configured rule
    pub fn with_rule(mut self, rule: Box<dyn Rule>, severity: Severity) -> Self {
        let id = rule.meta().id;
        self.rules.push(ActiveRule { rule, id, severity });
        self
    }

    /// Metadata of the active rules
    pub fn rules(&self) -> Vec<RuleMeta> {
        self.rules.iter().map(|active| active.rule.meta()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every active rule on one node; children are not visited
    pub fn check_node(&self, node: &Expression, source: &SourceText<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for active in &self.rules {
            let mut ctx = RuleContext::new(active.id, active.severity, source);
            active.rule.check(node, &mut ctx);
            diagnostics.extend(ctx.into_diagnostics());
        }
        diagnostics
    }

    /// Run every active rule on each node, in order
    pub fn check_nodes<'n>(
        &self,
        nodes: impl IntoIterator<Item = &'n Expression>,
        source: &SourceText<'_>,
    ) -> Vec<Diagnostic> {
        nodes
            .into_iter()
            .flat_map(|node| self.check_node(node, source))
            .collect()
    }
}
