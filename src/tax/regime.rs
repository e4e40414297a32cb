use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rates and constants of one fixed tax regime, in percent where applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regime {
    /// Personal income tax (GPM)
    pub income_tax: Decimal,
    /// Employee health insurance (PSDF)
    pub health_insurance: Decimal,
    /// Employer social insurance (VSDF) for royalties without employment,
    /// charged at half rate
    pub royalty_social_insurance: Decimal,
    /// Employer social insurance (VSDF)
    pub social_insurance: Decimal,
    /// Employer guarantee fund contribution (GF)
    pub guarantee_fund: Decimal,
    pub exemption: ExemptionBracket,
    pub reverse: ReverseConstants,
}

/// Tax-exempt amount (NPD) for employment contracts: `max` up to `lower`,
/// tapering by `taper` per unit of gross above `lower`, and zero from `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExemptionBracket {
    pub max: Decimal,
    pub lower: Decimal,
    pub upper: Decimal,
    pub taper: Decimal,
}

/// Net to gross divisors and offsets. These are published figures for the
/// regime and are not derived from the rates above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseConstants {
    pub royalty_without_employment: Decimal,
    pub royalty_with_employment: Decimal,
    /// Net thresholds for the employment pieces
    pub employment_low_net: Decimal,
    pub employment_high_net: Decimal,
    pub employment_low_offset: Decimal,
    pub employment_mid_offset: Decimal,
    pub employment_low_divisor: Decimal,
    pub employment_mid_divisor: Decimal,
    pub employment_high_divisor: Decimal,
}

impl Regime {
    pub const LT_2009: Regime = Regime {
        income_tax: dec!(15),
        health_insurance: dec!(9),
        royalty_social_insurance: dec!(29.7),
        social_insurance: dec!(30.98),
        guarantee_fund: dec!(0.2),
        exemption: ExemptionBracket {
            max: dec!(470),
            lower: dec!(800),
            upper: dec!(3150),
            taper: dec!(0.2),
        },
        reverse: ReverseConstants {
            royalty_without_employment: dec!(0.805),
            royalty_with_employment: dec!(0.76),
            employment_low_net: dec!(750.5),
            employment_high_net: dec!(2394.0),
            employment_low_offset: dec!(70.5),
            employment_mid_offset: dec!(94.5),
            employment_low_divisor: dec!(0.76),
            employment_mid_divisor: dec!(0.73),
            employment_high_divisor: dec!(0.76),
        },
    };
}

impl Default for Regime {
    fn default() -> Self {
        Regime::LT_2009
    }
}

impl ExemptionBracket {
    /// Exempt amount for a gross monthly salary
    pub fn exempt_amount(&self, gross: Decimal) -> Decimal {
        if gross <= self.lower {
            self.max
        } else if gross >= self.upper {
            Decimal::ZERO
        } else {
            self.max - self.taper * (gross - self.lower)
        }
    }
}

impl ReverseConstants {
    pub fn royalty_without_employment_gross(&self, net: Decimal) -> Decimal {
        net / self.royalty_without_employment
    }

    pub fn royalty_with_employment_gross(&self, net: Decimal) -> Decimal {
        net / self.royalty_with_employment
    }

    pub fn employment_gross(&self, net: Decimal) -> Decimal {
        if net <= self.employment_low_net {
            (net - self.employment_low_offset) / self.employment_low_divisor
        } else if net >= self.employment_high_net {
            net / self.employment_high_divisor
        } else {
            (net - self.employment_mid_offset) / self.employment_mid_divisor
        }
    }
}
