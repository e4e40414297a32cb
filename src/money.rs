//! Money formatting for the typeset breakdown.
//!
//! Amounts are printed with two decimal digits, a decimal comma and the `Lt`
//! suffix, inside LaTeX math mode.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

pub const CURRENCY: &str = "Lt";

/// Round to cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn cents(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}

/// Wrap `content` in math mode, swapping decimal points for commas.
pub fn math(content: &str) -> String {
    format!("${}$", content).replace('.', ",")
}

/// `$1234,50Lt$`
pub fn format_money(value: Decimal) -> String {
    math(&format!("{}{}", cents(value), CURRENCY))
}

/// Infix expression `lhs op rhs = result` with the result in currency.
pub fn format_formula(lhs: &str, operator: &str, rhs: &str, result: Decimal) -> String {
    math(&format!("{} {} {} = {}{}", lhs, operator, rhs, cents(result), CURRENCY))
}

/// One displayed arithmetic step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Formula {
    Amount {
        value: Decimal,
    },
    /// `base * rate%`, or `base * rate% / 2` when `halved`.
    Percentage {
        base: Decimal,
        rate: Decimal,
        halved: bool,
        result: Decimal,
    },
    Difference {
        minuend: Decimal,
        subtrahend: Decimal,
        result: Decimal,
    },
}

impl Formula {
    pub fn amount(value: Decimal) -> Self {
        Formula::Amount { value }
    }

    /// The value this step evaluates to.
    pub fn result(&self) -> Decimal {
        match self {
            Formula::Amount { value } => *value,
            Formula::Percentage { result, .. } | Formula::Difference { result, .. } => *result,
        }
    }

    pub fn to_latex(&self) -> String {
        match self {
            Formula::Amount { value } => format_money(*value),
            Formula::Percentage {
                base,
                rate,
                halved: false,
                result,
            } => format_formula(&cents(*base), "\\cdot", &format!("{}\\%", rate.normalize()), *result),
            Formula::Percentage {
                base,
                rate,
                halved: true,
                result,
            } => format_formula(
                &cents(*base),
                "\\cdot",
                &format!("\\frac{{{}\\%}}{{2}}", rate.normalize()),
                *result,
            ),
            Formula::Difference {
                minuend,
                subtrahend,
                result,
            } => format_formula(&cents(*minuend), "-", &cents(*subtrahend), *result),
        }
    }
}

/// Plain text rendering for terminal and CSV output.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Amount { value } => write!(f, "{} {}", cents(*value), CURRENCY),
            Formula::Percentage {
                base,
                rate,
                halved,
                result,
            } => {
                let half = if *halved { "/2" } else { "" };
                write!(
                    f,
                    "{} × {}%{} = {} {}",
                    cents(*base),
                    rate.normalize(),
                    half,
                    cents(*result),
                    CURRENCY
                )
            }
            Formula::Difference {
                minuend,
                subtrahend,
                result,
            } => write!(
                f,
                "{} - {} = {} {}",
                cents(*minuend),
                cents(*subtrahend),
                cents(*result),
                CURRENCY
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_uses_decimal_comma() {
        assert_eq!(format_money(dec!(1000)), "$1000,00Lt$");
        assert_eq!(format_money(dec!(1242.236024844720)), "$1242,24Lt$");
    }

    #[test]
    fn cents_round_half_away_from_zero() {
        assert_eq!(format_money(dec!(0.125)), "$0,13Lt$");
        assert_eq!(format_money(dec!(0.124)), "$0,12Lt$");
    }

    #[test]
    fn percentage_latex() {
        let formula = Formula::Percentage {
            base: dec!(1000),
            rate: dec!(30.98),
            halved: false,
            result: dec!(309.8),
        };
        assert_eq!(formula.to_latex(), "$1000,00 \\cdot 30,98\\% = 309,80Lt$");
    }

    #[test]
    fn half_percentage_latex() {
        let formula = Formula::Percentage {
            base: dec!(1000),
            rate: dec!(9),
            halved: true,
            result: dec!(45),
        };
        assert_eq!(formula.to_latex(), "$1000,00 \\cdot \\frac{9\\%}{2} = 45,00Lt$");
    }

    #[test]
    fn difference_latex() {
        let formula = Formula::Difference {
            minuend: dec!(1000),
            subtrahend: dec!(760),
            result: dec!(240),
        };
        assert_eq!(formula.to_latex(), "$1000,00 - 760,00 = 240,00Lt$");
    }

    #[test]
    fn plain_display() {
        let formula = Formula::Percentage {
            base: dec!(1000),
            rate: dec!(29.7),
            halved: true,
            result: dec!(148.5),
        };
        assert_eq!(formula.to_string(), "1000.00 × 29.7%/2 = 148.50 Lt");
        assert_eq!(Formula::amount(dec!(5)).to_string(), "5.00 Lt");
    }
}
