use crate::money::Formula;
use crate::tax::regime::ExemptionBracket;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    /// Royalty contracts: every contribution is charged on the declared amount
    Base,
    /// Employment contracts: income tax is charged on `gross - exempt`, all
    /// other contributions on `gross`
    Employment { gross: Decimal, exempt: Decimal },
}

/// Running totals of a salary or fee as deductions are applied.
///
/// `to_hands` only decreases and `cost` only increases, so after any sequence
/// of non-negative rates `to_hands <= on_paper <= cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    kind: LedgerKind,
    /// Base for employee side income tax
    taxable: Decimal,
    to_hands: Decimal,
    cost: Decimal,
}

impl Ledger {
    pub fn new(on_paper: Decimal) -> Self {
        Ledger {
            kind: LedgerKind::Base,
            taxable: on_paper,
            to_hands: on_paper,
            cost: on_paper,
        }
    }

    /// Employment contract ledger. The exemption never exceeds the gross, so
    /// the taxable base stays non-negative.
    pub fn employment(gross: Decimal, bracket: &ExemptionBracket) -> Self {
        let exempt = bracket.exempt_amount(gross).min(gross.max(Decimal::ZERO));
        log::debug!("Gross {}, exempt {}, taxable {}", gross, exempt, gross - exempt);
        Ledger {
            kind: LedgerKind::Employment { gross, exempt },
            taxable: gross - exempt,
            to_hands: gross,
            cost: gross,
        }
    }

    /// Declared gross. For employment this is the original amount, not the
    /// exemption-reduced base.
    pub fn on_paper(&self) -> Decimal {
        match self.kind {
            LedgerKind::Base => self.taxable,
            LedgerKind::Employment { gross, .. } => gross,
        }
    }

    pub fn taxable(&self) -> Decimal {
        self.taxable
    }

    pub fn exempt(&self) -> Option<Decimal> {
        match self.kind {
            LedgerKind::Base => None,
            LedgerKind::Employment { exempt, .. } => Some(exempt),
        }
    }

    pub fn to_hands(&self) -> Decimal {
        self.to_hands
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn employee_tax(&mut self, percent: Decimal) -> Formula {
        self.deduct(self.taxable, percent, false)
    }

    pub fn employee_tax_half(&mut self, percent: Decimal) -> Formula {
        self.deduct(self.taxable, percent, true)
    }

    /// Employee deduction charged on the declared gross regardless of any
    /// exemption.
    pub fn employee_tax_on_gross(&mut self, percent: Decimal) -> Formula {
        self.deduct(self.on_paper(), percent, false)
    }

    pub fn employer_tax(&mut self, percent: Decimal) -> Formula {
        self.contribute(self.on_paper(), percent, false)
    }

    pub fn employer_tax_half(&mut self, percent: Decimal) -> Formula {
        self.contribute(self.on_paper(), percent, true)
    }

    fn deduct(&mut self, base: Decimal, rate: Decimal, halved: bool) -> Formula {
        let formula = percentage(base, rate, halved);
        self.to_hands -= formula.result();
        log::debug!("Employee {}, to hands: {}", formula, self.to_hands);
        formula
    }

    fn contribute(&mut self, base: Decimal, rate: Decimal, halved: bool) -> Formula {
        let formula = percentage(base, rate, halved);
        self.cost += formula.result();
        log::debug!("Employer {}, cost: {}", formula, self.cost);
        formula
    }
}

fn percentage(base: Decimal, rate: Decimal, halved: bool) -> Formula {
    let divisor = if halved { dec!(200) } else { dec!(100) };
    Formula::Percentage {
        base,
        rate,
        halved,
        result: base * rate / divisor,
    }
}

/// `a - b` as a displayed step; touches no ledger.
pub fn subtract(a: Decimal, b: Decimal) -> Formula {
    Formula::Difference {
        minuend: a,
        subtrahend: b,
        result: a - b,
    }
}
