// src/demos/generics.rs — Generic functions, trait bounds, and a generic repository

use std::collections::HashMap;
use std::io::Write;

use async_trait::async_trait;

use crate::demos::Demo;
use crate::infra::errors::PraktikumError;

/// Generics demo: a generic identity function, a bound requiring ordering,
/// and a repository trait generic over its stored item type.
pub struct GenericsDemo;

#[async_trait]
impl Demo for GenericsDemo {
    fn id(&self) -> &'static str {
        "generik"
    }

    fn title(&self) -> &'static str {
        "Praktikum Rust: Generik"
    }

    fn summary(&self) -> &'static str {
        "Generic functions, trait bounds, and a generic in-memory repository"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
        writeln!(out, "{}", self.title())?;
        writeln!(out)?;

        writeln!(out, "identity(\"halo\") = {}", identity("halo"))?;
        writeln!(out, "identity(42) = {}", identity(42))?;
        if let Some(max) = largest(&[3, 7, 2]) {
            writeln!(out, "Terbesar dari [3, 7, 2]: {max}")?;
        }
        writeln!(out)?;

        let mut repo: MemoryRepository<Member> = MemoryRepository::new();
        repo.create("m-1", Member { name: "Ani".into() });
        match repo.find("m-1") {
            Some(member) => writeln!(out, "Pengguna ditemukan: {}", member.name)?,
            None => writeln!(out, "Pengguna ditemukan: tidak ada")?,
        }
        writeln!(out, "Pengguna dihapus: {}", repo.delete("m-1"))?;
        match repo.find("m-1") {
            Some(member) => writeln!(out, "Pengguna ditemukan: {}", member.name)?,
            None => writeln!(out, "Pengguna ditemukan: tidak ada")?,
        }

        Ok(())
    }
}

/// The same value comes back, whatever its type.
fn identity<T>(value: T) -> T {
    value
}

/// Any ordered, copyable element type works; empty input has no largest.
fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T> {
    let mut iter = items.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, x| if x > acc { x } else { acc }))
}

struct Member {
    name: String,
}

/// Storage seam generic over the stored item type.
trait Repository<T> {
    fn create(&mut self, id: &str, item: T);
    fn find(&self, id: &str) -> Option<&T>;
    fn delete(&mut self, id: &str) -> bool;
}

struct MemoryRepository<T> {
    items: HashMap<String, T>,
}

impl<T> MemoryRepository<T> {
    fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T> Repository<T> for MemoryRepository<T> {
    fn create(&mut self, id: &str, item: T) {
        self.items.insert(id.to_string(), item);
    }

    fn find(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    fn delete(&mut self, id: &str) -> bool {
        self.items.remove(id).is_some()
    }
}
