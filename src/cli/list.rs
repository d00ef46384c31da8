// src/cli/list.rs — Demo catalog listing

use crate::demos::DemoRegistry;

/// Print the demo catalog in the requested format.
pub fn run_list(registry: &DemoRegistry, format: &str) -> anyhow::Result<()> {
    match format {
        "text" => {
            for info in registry.list() {
                println!("{:<12} {}", info.id, info.summary);
            }
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&registry.list())?);
        }
        other => {
            anyhow::bail!("Unsupported format '{}'. Options: text, json", other);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::Config;

    #[test]
    fn test_catalog_serializes_to_json() {
        let registry = DemoRegistry::with_builtins(&Config::default());
        let json = serde_json::to_string_pretty(&registry.list()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0]["id"], "iterasi");
        assert_eq!(entries[0]["title"], "Praktikum Rust: Iterasi");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let registry = DemoRegistry::with_builtins(&Config::default());
        let err = run_list(&registry, "yaml").unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
