// src/demos/asynchrony.rs — Task scheduling, concurrent awaiting, fallible calls

use std::io::Write;

use async_trait::async_trait;
use thiserror::Error;

use crate::demos::Demo;
use crate::infra::errors::PraktikumError;

/// Asynchrony demo: spawn/await ordering, sequential vs concurrent fetches
/// against a simulated user service, and Result-based error handling.
///
/// Every block serializes its output through await points, so the
/// transcript is identical on every run even on a multi-threaded runtime.
pub struct AsynchronyDemo;

#[async_trait]
impl Demo for AsynchronyDemo {
    fn id(&self) -> &'static str {
        "asinkron"
    }

    fn title(&self) -> &'static str {
        "Praktikum Rust: Asinkron"
    }

    fn summary(&self) -> &'static str {
        "Spawned tasks, sequential vs concurrent awaits, and fallible async calls"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
        writeln!(out, "{}", self.title())?;
        writeln!(out)?;
        scheduling_order(out).await?;
        writeln!(out)?;
        sequential_and_concurrent(out).await?;
        writeln!(out)?;
        fallible_fetch(out).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct RemoteUser {
    id: u32,
    name: String,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("pengguna {0} tidak ditemukan")]
    NotFound(u32),
}

impl From<FetchError> for PraktikumError {
    fn from(err: FetchError) -> Self {
        Self::Other(anyhow::Error::new(err))
    }
}

/// Simulated remote lookup. Yields to the scheduler the way a real call
/// would, without sleeps or wall-clock reads.
async fn fetch_user(id: u32) -> Result<RemoteUser, FetchError> {
    tokio::task::yield_now().await;
    if id > 100 {
        return Err(FetchError::NotFound(id));
    }
    Ok(RemoteUser {
        id,
        name: format!("User {id}"),
    })
}

/// The spawned task runs in the background; its line appears last because
/// the demo only prints it after awaiting the handle.
async fn scheduling_order(out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
    writeln!(out, "1. Sinkron sebelum spawn")?;
    let handle = tokio::spawn(async { "3. Tugas latar selesai" });
    writeln!(out, "2. Sinkron sesudah spawn")?;
    writeln!(out, "{}", handle.await?)?;
    Ok(())
}

async fn sequential_and_concurrent(out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
    // Sequential: each fetch completes before the next starts.
    let first = fetch_user(1).await?;
    writeln!(out, "Pengguna {} diambil: {}", first.id, first.name)?;
    let second = fetch_user(2).await?;
    writeln!(out, "Pengguna {} diambil: {}", second.id, second.name)?;

    // Concurrent: both fetches in flight at once.
    let (a, b) = tokio::join!(fetch_user(1), fetch_user(2));
    writeln!(out, "Bersamaan: {}, {}", a?.name, b?.name)?;

    // Fan-out over a batch.
    let mut names = Vec::new();
    for result in futures::future::join_all((1..=3).map(fetch_user)).await {
        names.push(result?.name);
    }
    writeln!(out, "Kelompok: {}", names.join(", "))?;
    Ok(())
}

/// The error case is handled where it surfaces; nothing panics.
async fn fallible_fetch(out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
    match fetch_user(999).await {
        Ok(user) => writeln!(out, "Pengguna {} diambil: {}", user.id, user.name)?,
        Err(e) => writeln!(out, "Gagal mengambil: {e}")?,
    }
    Ok(())
}
