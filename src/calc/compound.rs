//! Lump-sum compound interest projection

use super::frequency::CompoundingFrequency;
use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Inputs for a compound interest projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInputs {
    /// Lump-sum principal invested at year 0
    pub principal: f64,

    /// Annual interest rate in percent (signed; negative rates are allowed)
    pub annual_rate: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Compounding frequency
    pub frequency: CompoundingFrequency,
}

impl CompoundInterestInputs {
    pub fn new(
        principal: f64,
        annual_rate: f64,
        years: u32,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            frequency,
        }
    }
}

/// One year of projected growth for charting.
///
/// `principal` is the constant lump sum, not a cumulative contribution;
/// the chart stacks it under the accrued interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub principal: f64,
    pub interest: f64,
    pub total: f64,
}

/// Complete compound interest result: scalar summary plus per-year series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Principal plus accrued interest at the end of the horizon
    pub total_amount: f64,

    /// Interest accrued over the full horizon (total_amount - principal)
    pub interest_earned: f64,

    /// Year-by-year growth, one entry per year 0..=years
    pub growth_data: Vec<GrowthPoint>,
}

/// Amount accrued after `years_elapsed` whole years.
///
/// Both the summary scalar and every series entry go through this function,
/// so the last chart point and the headline figure share one floating
/// computation path.
fn amount_at_year(principal: f64, annual_rate: f64, n: u32, years_elapsed: u32) -> f64 {
    let rate = annual_rate / 100.0;
    let n = n as f64;
    principal * (1.0 + rate / n).powf(n * years_elapsed as f64)
}

/// Project compound growth of a lump sum.
///
/// Negative principal or rate are not rejected; the result simply carries
/// negative interest. Non-finite inputs fail with `InvalidArgument`, and a
/// horizon large enough to push the total past f64 range fails with
/// `Overflow` instead of returning infinity.
pub fn compound_interest(inputs: &CompoundInterestInputs) -> CalcResult<CompoundInterestResult> {
    if !inputs.principal.is_finite() {
        return Err(CalcError::invalid_argument("principal must be finite"));
    }
    if !inputs.annual_rate.is_finite() {
        return Err(CalcError::invalid_argument("annual rate must be finite"));
    }

    let n = inputs.frequency.periods_per_year();

    let mut growth_data = Vec::with_capacity(inputs.years as usize + 1);
    for year in 0..=inputs.years {
        let total = amount_at_year(inputs.principal, inputs.annual_rate, n, year);
        if !total.is_finite() {
            return Err(CalcError::overflow(format!("total at year {}", year)));
        }
        growth_data.push(GrowthPoint {
            year,
            principal: inputs.principal,
            interest: total - inputs.principal,
            total,
        });
    }

    // growth_data always has a year-0 entry, so last() cannot fail
    let last = growth_data.last().unwrap();
    let total_amount = last.total;
    let interest_earned = last.interest;

    Ok(CompoundInterestResult {
        total_amount,
        interest_earned,
        growth_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_figures() {
        // 10000 at 5% annually for 5 years = 10000 * 1.05^5
        let inputs = CompoundInterestInputs::new(10_000.0, 5.0, 5, CompoundingFrequency::Annually);
        let result = compound_interest(&inputs).unwrap();

        assert_relative_eq!(result.total_amount, 12_762.815625, max_relative = 1e-9);
        assert_relative_eq!(result.interest_earned, 2_762.815625, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_rate_leaves_principal_unchanged() {
        for freq in CompoundingFrequency::all() {
            for years in [0u32, 1, 7, 30] {
                let inputs = CompoundInterestInputs::new(10_000.0, 0.0, years, freq);
                let result = compound_interest(&inputs).unwrap();
                assert_eq!(
                    result.total_amount, 10_000.0,
                    "zero rate drifted for {} over {} years",
                    freq, years
                );
                assert_eq!(result.interest_earned, 0.0);
            }
        }
    }

    #[test]
    fn test_growth_series_shape() {
        let inputs = CompoundInterestInputs::new(5_000.0, 7.5, 10, CompoundingFrequency::Monthly);
        let result = compound_interest(&inputs).unwrap();

        assert_eq!(result.growth_data.len(), 11);
        for (i, point) in result.growth_data.iter().enumerate() {
            assert_eq!(point.year, i as u32);
            assert_eq!(point.principal, 5_000.0);
            assert_eq!(point.total - point.principal, point.interest);
        }

        // Last series entry and summary scalar must agree exactly
        let last = result.growth_data.last().unwrap();
        assert_eq!(last.total, result.total_amount);
        assert_eq!(last.interest, result.interest_earned);
    }

    #[test]
    fn test_zero_year_horizon() {
        let inputs = CompoundInterestInputs::new(2_500.0, 8.0, 0, CompoundingFrequency::Quarterly);
        let result = compound_interest(&inputs).unwrap();

        assert_eq!(result.growth_data.len(), 1);
        assert_eq!(result.growth_data[0].year, 0);
        assert_eq!(result.total_amount, 2_500.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_negative_rate_yields_negative_interest() {
        let inputs = CompoundInterestInputs::new(10_000.0, -3.0, 5, CompoundingFrequency::Annually);
        let result = compound_interest(&inputs).unwrap();

        assert!(result.total_amount < 10_000.0);
        assert!(result.interest_earned < 0.0);
        assert!(result.total_amount.is_finite());
    }

    #[test]
    fn test_higher_frequency_compounds_more() {
        let annually = compound_interest(&CompoundInterestInputs::new(
            10_000.0,
            6.0,
            10,
            CompoundingFrequency::Annually,
        ))
        .unwrap();
        let daily = compound_interest(&CompoundInterestInputs::new(
            10_000.0,
            6.0,
            10,
            CompoundingFrequency::Daily,
        ))
        .unwrap();

        assert!(daily.total_amount > annually.total_amount);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let inputs =
            CompoundInterestInputs::new(f64::NAN, 5.0, 5, CompoundingFrequency::Annually);
        assert!(matches!(
            compound_interest(&inputs),
            Err(CalcError::InvalidArgument { .. })
        ));

        let inputs =
            CompoundInterestInputs::new(1_000.0, f64::INFINITY, 5, CompoundingFrequency::Annually);
        assert!(matches!(
            compound_interest(&inputs),
            Err(CalcError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_overflow_reported_not_propagated() {
        // 1000% daily-compounded over a vast horizon blows past f64 range
        let inputs =
            CompoundInterestInputs::new(1e300, 1_000.0, 500, CompoundingFrequency::Daily);
        assert!(matches!(
            compound_interest(&inputs),
            Err(CalcError::Overflow { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let inputs = CompoundInterestInputs::new(12_345.67, 9.25, 20, CompoundingFrequency::Daily);
        let a = compound_interest(&inputs).unwrap();
        let b = compound_interest(&inputs).unwrap();

        assert_eq!(a.total_amount.to_bits(), b.total_amount.to_bits());
        for (pa, pb) in a.growth_data.iter().zip(&b.growth_data) {
            assert_eq!(pa.total.to_bits(), pb.total.to_bits());
        }
    }
}
