use crate::money::Formula;
use crate::tax::ledger::{subtract, Ledger};
use crate::tax::regime::Regime;
use rust_decimal::Decimal;
use serde::Serialize;

/// Contract types with their own contribution sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Contract {
    /// Royalty contract without an employment relationship
    RoyaltyWithoutEmployment,
    /// Royalty contract alongside employment with the same payer
    RoyaltyWithEmployment,
    Employment,
}

/// Whether the input amount is the declared gross or the amount in hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Paper,
    Net,
}

/// A labelled row of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub label: &'static str,
    pub formula: Formula,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub on_paper: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt: Option<Decimal>,
    pub taxable: Decimal,
    pub to_hands: Decimal,
    pub cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub contract: Contract,
    pub input_kind: InputKind,
    pub input: Decimal,
    pub steps: Vec<Step>,
    pub totals: Totals,
}

pub const TO_HANDS: &str = "Į rankas:";
pub const ON_PAPER: &str = "Ant popieriaus:";
pub const EXEMPT: &str = "NPD:";
pub const INCOME_TAX: &str = "GPM:";
pub const HEALTH: &str = "PSDF:";
pub const SOCIAL: &str = "VSDF:";
pub const GUARANTEE_FUND: &str = "GF:";
pub const EMPLOYEE_PAYS: &str = "Darbuotojas sumoka:";
pub const COST: &str = "Darbo vietos kaina:";

impl Contract {
    /// Gross amount that yields `net` in hand
    pub fn gross_from_net(&self, net: Decimal, regime: &Regime) -> Decimal {
        let reverse = &regime.reverse;
        match self {
            Contract::RoyaltyWithoutEmployment => reverse.royalty_without_employment_gross(net),
            Contract::RoyaltyWithEmployment => reverse.royalty_with_employment_gross(net),
            Contract::Employment => reverse.employment_gross(net),
        }
    }

    fn ledger(&self, gross: Decimal, regime: &Regime) -> Ledger {
        match self {
            Contract::Employment => Ledger::employment(gross, &regime.exemption),
            Contract::RoyaltyWithoutEmployment | Contract::RoyaltyWithEmployment => {
                Ledger::new(gross)
            }
        }
    }
}

/// Calculate every step for `contract` from an input amount.
pub fn calculate(
    contract: Contract,
    input: Decimal,
    input_kind: InputKind,
    regime: &Regime,
) -> Breakdown {
    let mut steps = Vec::new();
    let gross = match input_kind {
        InputKind::Paper => input,
        InputKind::Net => {
            steps.push(step(TO_HANDS, Formula::amount(input)));
            let gross = contract.gross_from_net(input, regime);
            log::debug!("Net {} derived gross {}", input, gross);
            gross
        }
    };

    let mut ledger = contract.ledger(gross, regime);
    steps.push(step(ON_PAPER, Formula::amount(ledger.on_paper())));

    match contract {
        Contract::RoyaltyWithoutEmployment => {
            steps.push(step(INCOME_TAX, ledger.employee_tax(regime.income_tax)));
            steps.push(step(HEALTH, ledger.employee_tax_half(regime.health_insurance)));
            push_employee_totals(&mut steps, &ledger);
            steps.push(step(
                SOCIAL,
                ledger.employer_tax_half(regime.royalty_social_insurance),
            ));
        }
        Contract::RoyaltyWithEmployment => {
            steps.push(step(INCOME_TAX, ledger.employee_tax(regime.income_tax)));
            steps.push(step(HEALTH, ledger.employee_tax(regime.health_insurance)));
            push_employee_totals(&mut steps, &ledger);
            steps.push(step(SOCIAL, ledger.employer_tax(regime.social_insurance)));
        }
        Contract::Employment => {
            let exempt = ledger.exempt().unwrap_or_default();
            steps.push(step(EXEMPT, Formula::amount(exempt)));
            steps.push(step(INCOME_TAX, ledger.employee_tax(regime.income_tax)));
            steps.push(step(
                HEALTH,
                ledger.employee_tax_on_gross(regime.health_insurance),
            ));
            push_employee_totals(&mut steps, &ledger);
            steps.push(step(SOCIAL, ledger.employer_tax(regime.social_insurance)));
            steps.push(step(GUARANTEE_FUND, ledger.employer_tax(regime.guarantee_fund)));
        }
    }
    steps.push(step(COST, Formula::amount(ledger.cost())));

    Breakdown {
        contract,
        input_kind,
        input,
        steps,
        totals: Totals {
            on_paper: ledger.on_paper(),
            exempt: ledger.exempt(),
            taxable: ledger.taxable(),
            to_hands: ledger.to_hands(),
            cost: ledger.cost(),
        },
    }
}

fn step(label: &'static str, formula: Formula) -> Step {
    Step { label, formula }
}

fn push_employee_totals(steps: &mut Vec<Step>, ledger: &Ledger) {
    steps.push(step(TO_HANDS, Formula::amount(ledger.to_hands())));
    steps.push(step(
        EMPLOYEE_PAYS,
        subtract(ledger.on_paper(), ledger.to_hands()),
    ));
}
