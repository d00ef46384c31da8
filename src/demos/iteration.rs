// src/demos/iteration.rs — The four basic loop forms

use std::io::{self, Write};

use async_trait::async_trait;

use crate::demos::Demo;
use crate::infra::config::IterationConfig;
use crate::infra::errors::PraktikumError;

/// Iteration demo: counted, pre-condition, and post-condition counter
/// loops, then element-wise iteration over a fixed collection.
///
/// With the default config this prints the canonical transcript: a title,
/// three identical five-line counter blocks, and a header followed by the
/// five collection elements, with a blank line between blocks.
pub struct IterationDemo {
    cfg: IterationConfig,
}

impl IterationDemo {
    pub fn new(cfg: IterationConfig) -> Self {
        Self { cfg }
    }
}

#[async_trait]
impl Demo for IterationDemo {
    fn id(&self) -> &'static str {
        "iterasi"
    }

    fn title(&self) -> &'static str {
        "Praktikum Rust: Iterasi"
    }

    fn summary(&self) -> &'static str {
        "Four basic loop forms: for over a range, while, loop/break, for over a collection"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
        writeln!(out, "{}", self.title())?;
        writeln!(out)?;
        counted(out, self.cfg.bound)?;
        writeln!(out)?;
        pre_condition(out, self.cfg.bound)?;
        writeln!(out)?;
        post_condition(out, self.cfg.bound)?;
        writeln!(out)?;
        collection(out, &self.cfg.collection)?;
        Ok(())
    }
}

/// Counted loop: initialization, bound, and step declared in one place.
pub fn counted(out: &mut dyn Write, bound: i64) -> io::Result<()> {
    for i in 0..bound {
        writeln!(out, "Perulangan ke-{i}")?;
    }
    Ok(())
}

/// Pre-condition loop: the bound is checked before every pass, including
/// the first, so a zero or negative bound prints nothing.
pub fn pre_condition(out: &mut dyn Write, bound: i64) -> io::Result<()> {
    let mut i = 0;
    while i < bound {
        writeln!(out, "Perulangan ke-{i}")?;
        i += 1;
    }
    Ok(())
}

/// Post-condition loop: the body runs once before the bound is first
/// checked. With a zero or negative bound this still prints a single line,
/// unlike the two forms above.
pub fn post_condition(out: &mut dyn Write, bound: i64) -> io::Result<()> {
    let mut i = 0;
    loop {
        writeln!(out, "Perulangan ke-{i}")?;
        i += 1;
        if i >= bound {
            break;
        }
    }
    Ok(())
}

/// Collection iteration: binds each element in turn, printing the element
/// value rather than a positional index. No manual counter.
pub fn collection(out: &mut dyn Write, elements: &[i64]) -> io::Result<()> {
    writeln!(out, "Iterasi menggunakan for-in:")?;
    for element in elements {
        writeln!(out, "Perulangan ke-{element}")?;
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

    fn expected_counter_lines() -> Vec<String> {
        (0..5).map(|i| format!("Perulangan ke-{i}")).collect()
    }

    #[test]
    fn test_counted_five_lines_in_order() {
        let lines = render(|buf| counted(buf, 5));
        assert_eq!(lines, expected_counter_lines());
    }

    #[test]
    fn test_pre_condition_matches_counted() {
        let lines = render(|buf| pre_condition(buf, 5));
        assert_eq!(lines, expected_counter_lines());
    }

    #[test]
    fn test_post_condition_matches_counted_for_positive_bound() {
        let lines = render(|buf| post_condition(buf, 5));
        assert_eq!(lines, expected_counter_lines());
    }

    #[test]
    fn test_zero_bound_skips_check_first_forms() {
        assert!(render(|buf| counted(buf, 0)).is_empty());
        assert!(render(|buf| pre_condition(buf, 0)).is_empty());
    }

    #[test]
    fn test_zero_bound_still_runs_post_condition_body_once() {
        let lines = render(|buf| post_condition(buf, 0));
        assert_eq!(lines, vec!["Perulangan ke-0"]);
    }

    #[test]
    fn test_negative_bound_behaves_like_zero() {
        assert!(render(|buf| counted(buf, -3)).is_empty());
        assert!(render(|buf| pre_condition(buf, -3)).is_empty());
        assert_eq!(
            render(|buf| post_condition(buf, -3)),
            vec!["Perulangan ke-0"]
        );
    }

    #[test]
    fn test_collection_prints_header_then_values() {
        let lines = render(|buf| collection(buf, &[1, 2, 3, 4, 5]));
        assert_eq!(lines[0], "Iterasi menggunakan for-in:");
        assert_eq!(lines.len(), 6);
        for (idx, value) in (1..=5).enumerate() {
            assert_eq!(lines[idx + 1], format!("Perulangan ke-{value}"));
        }
    }

    #[test]
    fn test_collection_prints_values_not_indices() {
        let lines = render(|buf| collection(buf, &[10, 20]));
        assert_eq!(
            lines,
            vec![
                "Iterasi menggunakan for-in:",
                "Perulangan ke-10",
                "Perulangan ke-20"
            ]
        );
    }

    #[tokio::test]
    async fn test_demo_transcript_has_21_demo_lines() {
        let demo = IterationDemo::new(IterationConfig::default());
        let mut buf: Vec<u8> = Vec::new();
        demo.run(&mut buf).await.unwrap();
        let text = String::from_utf8(buf).unwrap();

        // 26 physical lines: title + 4 blanks + 21 demonstration lines.
        let physical: Vec<&str> = text.lines().collect();
        assert_eq!(physical.len(), 26);
        assert_eq!(physical[0], "Praktikum Rust: Iterasi");

        let demo_lines: Vec<&str> = physical[1..]
            .iter()
            .copied()
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(demo_lines.len(), 21);
        assert_eq!(demo_lines[15], "Iterasi menggunakan for-in:");
    }
}
