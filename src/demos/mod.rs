// src/demos/mod.rs — Demo trait and registry

pub mod asynchrony;
pub mod functions;
pub mod generics;
pub mod iteration;
pub mod ownership;

use std::io::Write;

use async_trait::async_trait;
use serde::Serialize;

use crate::infra::config::Config;
use crate::infra::errors::PraktikumError;

/// One independent console demonstration unit.
///
/// A demo writes only through the sink it is handed, never to stdout
/// directly, so tests capture its transcript exactly.
#[async_trait]
pub trait Demo: Send + Sync {
    /// Stable identifier used on the command line (e.g. "iterasi").
    fn id(&self) -> &'static str;

    /// Title line printed at the top of the transcript.
    fn title(&self) -> &'static str;

    /// One-line description shown by `praktikum list`.
    fn summary(&self) -> &'static str;

    /// Render the full transcript into the sink.
    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<(), PraktikumError>;
}

/// Catalog entry for `praktikum list`.
#[derive(Debug, Clone, Serialize)]
pub struct DemoInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

/// Ordered registry of demos.
///
/// Registration order is the curriculum order, which `--all` and `list`
/// both follow.
pub struct DemoRegistry {
    demos: Vec<Box<dyn Demo>>,
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoRegistry {
    pub fn new() -> Self {
        Self { demos: Vec::new() }
    }

    /// Registry with every built-in demo, in curriculum order.
    pub fn with_builtins(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(iteration::IterationDemo::new(
            config.iteration.clone(),
        )));
        registry.register(Box::new(functions::FunctionsDemo));
        registry.register(Box::new(ownership::OwnershipDemo));
        registry.register(Box::new(asynchrony::AsynchronyDemo));
        registry.register(Box::new(generics::GenericsDemo));
        registry
    }

    /// Register a demo.
    pub fn register(&mut self, demo: Box<dyn Demo>) {
        self.demos.push(demo);
    }

    /// Get a demo by ID.
    pub fn get(&self, id: &str) -> Option<&dyn Demo> {
        self.demos
            .iter()
            .find(|d| d.id() == id)
            .map(|b| b.as_ref())
    }

    /// All registered demo IDs, in curriculum order.
    pub fn ids(&self) -> Vec<String> {
        self.demos.iter().map(|d| d.id().to_string()).collect()
    }

    /// Catalog entries, in curriculum order.
    pub fn list(&self) -> Vec<DemoInfo> {
        self.demos
            .iter()
            .map(|d| DemoInfo {
                id: d.id(),
                title: d.title(),
                summary: d.summary(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_in_curriculum_order() {
        let registry = DemoRegistry::with_builtins(&Config::default());
        assert_eq!(
            registry.ids(),
            vec!["iterasi", "fungsi", "kepemilikan", "asinkron", "generik"]
        );
    }

    #[test]
    fn test_get_by_id() {
        let registry = DemoRegistry::with_builtins(&Config::default());
        assert_eq!(registry.get("iterasi").map(|d| d.id()), Some("iterasi"));
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_list_matches_ids() {
        let registry = DemoRegistry::with_builtins(&Config::default());
        let listed: Vec<_> = registry.list().iter().map(|i| i.id.to_string()).collect();
        assert_eq!(listed, registry.ids());
    }
}
