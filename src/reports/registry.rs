use crate::core::{Record, RenderFn, Result};
use crate::reports::payout_report;
use std::collections::HashMap;

/// Name to renderer table for report dispatch.
///
/// Keys are lowercased on both registration and lookup, so names are
/// case-insensitive. Registering an existing name overwrites it, built-ins
/// included.
pub struct ReportRegistry {
    renderers: HashMap<String, RenderFn>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// The process-start state: one built-in entry, the flat payout listing.
    pub fn with_builtin_reports() -> Self {
        let mut registry = Self::new();
        registry.register("payout", payout_report::render_payout_report);
        registry
    }

    pub fn register<F>(&mut self, name: &str, renderer: F)
    where
        F: Fn(&[Record]) -> Result<String> + Send + Sync + 'static,
    {
        self.renderers.insert(name.to_lowercase(), Box::new(renderer));
    }

    pub fn lookup(&self, name: &str) -> Option<&RenderFn> {
        self.renderers.get(&name.to_lowercase())
    }

    /// Registered names, sorted so diagnostics are stable.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::new()
    }
}
