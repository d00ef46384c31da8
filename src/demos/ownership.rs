// src/demos/ownership.rs — Ownership, shared references, and scope-driven release

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::{Rc, Weak};

use async_trait::async_trait;

use crate::demos::Demo;
use crate::infra::errors::PraktikumError;

/// Ownership demo: stack vs heap values, reference-counted sharing with a
/// weak parent link, and resources released by scope exit.
pub struct OwnershipDemo;

#[async_trait]
impl Demo for OwnershipDemo {
    fn id(&self) -> &'static str {
        "kepemilikan"
    }

    fn title(&self) -> &'static str {
        "Praktikum Rust: Kepemilikan"
    }

    fn summary(&self) -> &'static str {
        "Stack vs heap, Rc/Weak reference counts, and Drop on scope exit"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
        writeln!(out, "{}", self.title())?;
        writeln!(out)?;
        stack_and_heap(out)?;
        writeln!(out)?;
        shared_ownership(out)?;
        writeln!(out)?;
        scoped_release(out)?;
        Ok(())
    }
}

#[derive(Debug)]
struct User {
    name: String,
    age: u32,
}

/// Plain copy values live on the stack; owned containers put their payload
/// on the heap while the handle stays on the stack.
fn stack_and_heap(out: &mut dyn Write) -> io::Result<()> {
    let a = 10;
    let b = "halo";
    let c = true;
    writeln!(out, "Nilai di stack: a={a}, b={b}, c={c}")?;

    let user = Box::new(User {
        name: "John".into(),
        age: 25,
    });
    let vec = vec![1, 2, 3, 4, 5];
    writeln!(out, "Nilai di heap: user={user:?}, vec={vec:?}")?;
    Ok(())
}

struct Node {
    name: &'static str,
    parent: RefCell<Weak<Node>>,
}

/// A child holds its parent through `Weak`, so parent and child can refer
/// to each other without keeping each other alive.
fn shared_ownership(out: &mut dyn Write) -> io::Result<()> {
    let parent = Rc::new(Node {
        name: "induk",
        parent: RefCell::new(Weak::new()),
    });
    let child = Rc::new(Node {
        name: "anak",
        parent: RefCell::new(Weak::new()),
    });
    *child.parent.borrow_mut() = Rc::downgrade(&parent);

    let handle = Rc::clone(&child);
    writeln!(
        out,
        "Referensi kuat '{}': {}, referensi lemah '{}': {}",
        child.name,
        Rc::strong_count(&child),
        parent.name,
        Rc::weak_count(&parent)
    )?;
    drop(handle);

    writeln!(
        out,
        "Tautan ke '{}' dipegang lemah, referensi kuat tetap {}",
        parent.name,
        Rc::strong_count(&parent)
    )?;
    Ok(())
}

/// A resource that records its release instead of printing, so the lines
/// can be replayed through the demo sink after the scope closes.
struct Resource {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Resource {
    fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { name, log }
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        self.log
            .borrow_mut()
            .push(format!("Sumber daya '{}' dilepas", self.name));
    }
}

/// Resources are released when their scope ends, in reverse declaration
/// order; no explicit cleanup call exists.
fn scoped_release(out: &mut dyn Write) -> io::Result<()> {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let _timer = Resource::new("pewaktu", Rc::clone(&log));
        let _file = Resource::new("berkas", Rc::clone(&log));
        log.borrow_mut()
            .push("Akhir cakupan, sumber daya dilepas otomatis".to_string());
    }
    for line in log.borrow().iter() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> Vec<String> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_stack_and_heap_lines() {
        let lines = render(|buf| stack_and_heap(buf));
        assert_eq!(lines[0], "Nilai di stack: a=10, b=halo, c=true");
        assert_eq!(
            lines[1],
            "Nilai di heap: user=User { name: \"John\", age: 25 }, vec=[1, 2, 3, 4, 5]"
        );
    }

    #[test]
    fn test_shared_ownership_counts() {
        let lines = render(|buf| shared_ownership(buf));
        assert_eq!(
            lines,
            vec![
                "Referensi kuat 'anak': 2, referensi lemah 'induk': 1",
                "Tautan ke 'induk' dipegang lemah, referensi kuat tetap 1",
            ]
        );
    }

    #[test]
    fn test_release_runs_in_reverse_declaration_order() {
        let lines = render(|buf| scoped_release(buf));
        assert_eq!(
            lines,
            vec![
                "Akhir cakupan, sumber daya dilepas otomatis",
                "Sumber daya 'berkas' dilepas",
                "Sumber daya 'pewaktu' dilepas",
            ]
        );
    }

    #[tokio::test]
    async fn test_transcript_is_deterministic() {
        let mut first: Vec<u8> = Vec::new();
        OwnershipDemo.run(&mut first).await.unwrap();
        let mut second: Vec<u8> = Vec::new();
        OwnershipDemo.run(&mut second).await.unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
