//! Calculation commands - one breakdown per contract type

use crate::latex::{Enumerate, Tabular};
use crate::tax::{calculate, Breakdown, Contract, InputKind, Regime};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalcCommand {
    /// Amount in litas, as a whole number
    #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
    amount: Decimal,

    /// Whether the amount is the declared gross or the amount in hand
    #[arg(value_enum)]
    kind: KindArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Latex)]
    format: Format,

    /// LaTeX environment to lay the steps out in
    #[arg(short, long, value_enum, default_value_t = Layout::Tabular)]
    layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Declared gross ("ant popieriaus")
    #[value(alias = "popierius")]
    Paper,
    /// Amount in hand
    #[value(alias = "rankos")]
    Net,
}

impl From<KindArg> for InputKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Paper => InputKind::Paper,
            KindArg::Net => InputKind::Net,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Latex,
    /// Terminal preview
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    #[default]
    Tabular,
    Enumerate,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount '{0}': expected a whole number")]
    NotWholeNumber(String),
}

pub fn parse_amount(s: &str) -> Result<Decimal, AmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map(Decimal::from)
        .map_err(|_| AmountError::NotWholeNumber(s.to_string()))
}

/// Row for the table and CSV outputs
#[derive(Debug, Clone, Tabled, Serialize)]
struct StepRow {
    #[tabled(rename = "Step")]
    label: String,
    #[tabled(rename = "Amount")]
    value: String,
}

impl CalcCommand {
    pub fn exec(&self, contract: Contract) -> anyhow::Result<()> {
        log::info!(
            "Calculating {:?} from {} ({:?})",
            contract,
            self.amount,
            self.kind
        );
        let breakdown = calculate(contract, self.amount, self.kind.into(), &Regime::LT_2009);
        log::info!(
            "On paper {}, to hands {}, cost {}",
            breakdown.totals.on_paper,
            breakdown.totals.to_hands,
            breakdown.totals.cost
        );

        match self.format {
            Format::Latex => println!("{}", render_latex(&breakdown, self.layout)),
            Format::Table => println!("{}", render_table(&breakdown)),
            Format::Csv => write_csv(&breakdown, io::stdout())?,
            Format::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        }
        Ok(())
    }
}

pub fn render_latex(breakdown: &Breakdown, layout: Layout) -> String {
    match layout {
        Layout::Tabular => {
            let mut table = Tabular::new(&[1, 1]);
            for step in &breakdown.steps {
                let value = step.formula.to_latex();
                table.add_row(&[step.label, value.as_str()]);
            }
            table.to_string()
        }
        Layout::Enumerate => {
            let mut list = Enumerate::new();
            for step in &breakdown.steps {
                list.item(&format!("{} {}", step.label, step.formula.to_latex()));
            }
            list.to_string()
        }
    }
}

fn step_rows(breakdown: &Breakdown) -> Vec<StepRow> {
    breakdown
        .steps
        .iter()
        .map(|step| StepRow {
            label: step.label.trim_end_matches(':').to_string(),
            value: step.formula.to_string(),
        })
        .collect()
}

fn render_table(breakdown: &Breakdown) -> String {
    Table::new(step_rows(breakdown))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

fn write_csv<W: io::Write>(breakdown: &Breakdown, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in step_rows(breakdown) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn breakdown(contract: Contract, amount: Decimal, kind: InputKind) -> Breakdown {
        calculate(contract, amount, kind, &Regime::LT_2009)
    }

    #[test]
    fn parse_whole_amounts() {
        assert_eq!(parse_amount("1000"), Ok(dec!(1000)));
        assert_eq!(parse_amount(" 42 "), Ok(dec!(42)));
        assert_eq!(parse_amount("-5"), Ok(dec!(-5)));
    }

    #[test]
    fn reject_non_integer_amounts() {
        assert_eq!(
            parse_amount("12.5"),
            Err(AmountError::NotWholeNumber("12.5".to_string()))
        );
        assert_eq!(
            parse_amount("abc"),
            Err(AmountError::NotWholeNumber("abc".to_string()))
        );
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
    }

    #[test]
    fn royalty_with_employment_latex_table() {
        let latex = render_latex(
            &breakdown(Contract::RoyaltyWithEmployment, dec!(1000), InputKind::Paper),
            Layout::Tabular,
        );
        let expected = "\\begin{tabularx}{15cm}{p{7.5cm}|p{7.5cm}}\n\
Ant popieriaus: & $1000,00Lt$ \\\\\n\
GPM: & $1000,00 \\cdot 15\\% = 150,00Lt$ \\\\\n\
PSDF: & $1000,00 \\cdot 9\\% = 90,00Lt$ \\\\\n\
Į rankas: & $760,00Lt$ \\\\\n\
Darbuotojas sumoka: & $1000,00 - 760,00 = 240,00Lt$ \\\\\n\
VSDF: & $1000,00 \\cdot 30,98\\% = 309,80Lt$ \\\\\n\
Darbo vietos kaina: & $1309,80Lt$ \\\\\n\
\n\\end{tabularx}";
        assert_eq!(latex, expected);
    }

    #[test]
    fn royalty_without_employment_from_net() {
        let latex = render_latex(
            &breakdown(Contract::RoyaltyWithoutEmployment, dec!(805), InputKind::Net),
            Layout::Tabular,
        );
        assert!(latex.contains("Į rankas: & $805,00Lt$ \\\\\nAnt popieriaus: & $1000,00Lt$"));
        assert!(latex.contains("PSDF: & $1000,00 \\cdot \\frac{9\\%}{2} = 45,00Lt$"));
        assert!(latex.contains("VSDF: & $1000,00 \\cdot \\frac{29,7\\%}{2} = 148,50Lt$"));
        assert!(latex.contains("Darbo vietos kaina: & $1148,50Lt$"));
    }

    #[test]
    fn employment_latex_rows() {
        let latex = render_latex(
            &breakdown(Contract::Employment, dec!(700), InputKind::Paper),
            Layout::Tabular,
        );
        assert!(latex.contains("NPD: & $470,00Lt$"));
        assert!(latex.contains("GPM: & $230,00 \\cdot 15\\% = 34,50Lt$"));
        assert!(latex.contains("PSDF: & $700,00 \\cdot 9\\% = 63,00Lt$"));
        assert!(latex.contains("GF: & $700,00 \\cdot 0,2\\% = 1,40Lt$"));
    }

    #[test]
    fn enumerate_layout() {
        let latex = render_latex(
            &breakdown(Contract::RoyaltyWithEmployment, dec!(1000), InputKind::Paper),
            Layout::Enumerate,
        );
        assert!(latex.starts_with("\\begin{enumerate}\n\n\n\\item Ant popieriaus: $1000,00Lt$"));
        assert!(latex.ends_with("\\item Darbo vietos kaina: $1309,80Lt$\n\\end{enumerate}"));
    }

    #[test]
    fn csv_rows() {
        let mut out = Vec::new();
        write_csv(
            &breakdown(Contract::RoyaltyWithEmployment, dec!(1000), InputKind::Paper),
            &mut out,
        )
        .unwrap();
        let csv = String::from_utf8(out).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("label,value"));
        assert_eq!(lines.next(), Some("Ant popieriaus,1000.00 Lt"));
        assert_eq!(lines.next(), Some("GPM,1000.00 × 15% = 150.00 Lt"));
    }

    #[test]
    fn table_preview_has_plain_formulas() {
        let table = render_table(&breakdown(
            Contract::Employment,
            dec!(1000),
            InputKind::Paper,
        ));
        assert!(table.contains("Step"));
        assert!(table.contains("570.00 × 15% = 85.50 Lt"));
        assert!(table.contains("1311.80 Lt"));
    }
}
