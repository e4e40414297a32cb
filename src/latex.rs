//! LaTeX environments for the typeset output.

use rust_decimal::Decimal;
use std::fmt;

/// Total width of a `tabularx` table in centimetres
pub const TABLE_WIDTH: u32 = 15;

/// `\begin{name}{arg}...` ... `\end{name}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    args: Vec<String>,
    content: Vec<String>,
}

impl Environment {
    pub fn new(name: &str) -> Self {
        Environment {
            name: name.to_string(),
            args: Vec::new(),
            content: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn append(&mut self, content: impl Into<String>) {
        self.content.push(content.into())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\begin{{{}}}", self.name)?;
        for arg in &self.args {
            write!(f, "{{{}}}", arg)?;
        }
        write!(f, "\n{}\n\\end{{{}}}", self.content.concat(), self.name)
    }
}

/// `enumerate` environment, one `\item` per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerate(Environment);

impl Enumerate {
    pub fn new() -> Self {
        Enumerate(Environment::new("enumerate"))
    }

    pub fn item(&mut self, content: &str) {
        self.0.append(format!("\n\n\\item {}", content))
    }
}

impl Default for Enumerate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Enumerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Fixed width `tabularx` table with columns sized by weight.
///
/// Row arity is not checked against the number of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabular(Environment);

impl Tabular {
    pub fn new(weights: &[u32]) -> Self {
        let total: u32 = weights.iter().sum();
        let columns = weights
            .iter()
            .map(|weight| format!("p{{{}cm}}", column_width(*weight, total)))
            .collect::<Vec<_>>()
            .join("|");
        Tabular(
            Environment::new("tabularx")
                .arg(format!("{}cm", TABLE_WIDTH))
                .arg(columns),
        )
    }

    pub fn add_row(&mut self, cells: &[&str]) {
        self.0.append(format!("{} \\\\\n", cells.join(" & ")))
    }
}

impl fmt::Display for Tabular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn column_width(weight: u32, total: u32) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(TABLE_WIDTH) * Decimal::from(weight) / Decimal::from(total))
        .round_dp(4)
        .normalize()
}
