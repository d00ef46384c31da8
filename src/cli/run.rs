// src/cli/run.rs — Demo runner

use std::io::Write;

use crate::demos::DemoRegistry;
use crate::infra::errors::PraktikumError;

/// Run the named demos in order, writing their transcripts into the sink.
///
/// Consecutive demos are separated by a single blank line. An unknown id
/// aborts before any further demo runs.
pub async fn run_demos(
    registry: &DemoRegistry,
    ids: &[String],
    out: &mut (dyn Write + Send),
) -> Result<(), PraktikumError> {
    for (idx, id) in ids.iter().enumerate() {
        let demo = registry
            .get(id)
            .ok_or_else(|| PraktikumError::DemoNotFound { id: id.clone() })?;
        if idx > 0 {
            writeln!(out)?;
        }
        tracing::debug!("running demo '{}'", demo.id());
        demo.run(out).await?;
    }
    Ok(())
}
