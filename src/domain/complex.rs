use std::fmt;
use std::io::{self, Write};

/// A real/imaginary pair of single-precision floats.
///
/// The fields are private to this module. Nothing outside it can read them;
/// the only inspectors are [`print`] and [`print_to`] below. There are no
/// arithmetic operations, no comparisons and no setters, so a value never
/// changes after construction and cannot be inspected from outside.
#[derive(Clone, Copy, Default)]
pub struct Complex {
    real: f32,
    imag: f32,
}

impl Complex {
    pub fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    /// One-argument form, imaginary part is zero.
    pub fn from_real(real: f32) -> Self {
        Self::new(real, 0.0)
    }
}

impl From<f32> for Complex {
    fn from(real: f32) -> Self {
        Self::from_real(real)
    }
}

impl From<(f32, f32)> for Complex {
    fn from(value: (f32, f32)) -> Self {
        Self::new(value.0, value.1)
    }
}

// Opaque so that `{:?}` does not leak the fields.
impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Complex").finish_non_exhaustive()
    }
}

/// Writes `[Real]: <real>` and `[Imag]: <imag>`, one per line.
pub fn print_to<W: Write>(value: &Complex, out: &mut W) -> io::Result<()> {
    writeln!(out, "[Real]: {}", value.real)?;
    writeln!(out, "[Imag]: {}", value.imag)?;
    Ok(())
}

/// Prints `value` to stdout. A failing stdout is logged and otherwise ignored.
pub fn print(value: &Complex) {
    tracing::debug!("printing complex value");
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = print_to(value, &mut lock).and_then(|_| lock.flush()) {
        tracing::warn!("failed to write to stdout: {}", e);
    }
}

pub fn nothing_to<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Nothing.")
}

/// Prints `Nothing.` to stdout. Never looks at a value.
pub fn nothing() {
    tracing::debug!("printing nothing");
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = nothing_to(&mut lock).and_then(|_| lock.flush()) {
        tracing::warn!("failed to write to stdout: {}", e);
    }
}
