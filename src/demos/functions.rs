// src/demos/functions.rs — Function forms

use std::io::Write;

use async_trait::async_trait;

use crate::demos::Demo;
use crate::infra::errors::PraktikumError;

/// Functions demo: a named function, a closure, a function nested inside
/// its caller, and a function passed as a value to a higher-order helper.
pub struct FunctionsDemo;

#[async_trait]
impl Demo for FunctionsDemo {
    fn id(&self) -> &'static str {
        "fungsi"
    }

    fn title(&self) -> &'static str {
        "Praktikum Rust: Fungsi"
    }

    fn summary(&self) -> &'static str {
        "Function forms: named, closure, nested, and higher-order"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<(), PraktikumError> {
        writeln!(out, "{}", self.title())?;
        writeln!(out)?;

        writeln!(out, "{}", multiply(5, 6))?;

        // Closures capture nothing here; the form is the point.
        let multiply_closure = |a: i64, b: i64| a * b;
        writeln!(out, "{}", multiply_closure(10, 5))?;

        writeln!(out, "{}", multiply_nested(2, 5))?;

        writeln!(
            out,
            "Hari ini sangat panas suhunya {} derajat celcius",
            apply(multiply, 30, 2)
        )?;

        Ok(())
    }
}

fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// A function visible only inside its caller.
fn multiply_nested(a: i64, b: i64) -> i64 {
    fn inner(a: i64, b: i64) -> i64 {
        a * b
    }
    inner(a, b)
}

/// Applies any binary operation; named functions and closures both fit.
fn apply(op: impl Fn(i64, i64) -> i64, a: i64, b: i64) -> i64 {
    op(a, b)
}
