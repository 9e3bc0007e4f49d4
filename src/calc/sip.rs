//! Systematic investment plan (SIP) maturity projection

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Inputs for a SIP projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInputs {
    /// Fixed contribution invested every month
    pub monthly_investment: f64,

    /// Expected annual rate of return in percent
    pub annual_rate: f64,

    /// Investment horizon in whole years
    pub years: u32,
}

impl SipInputs {
    pub fn new(monthly_investment: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            monthly_investment,
            annual_rate,
            years,
        }
    }
}

/// One year of projected SIP growth for charting.
///
/// Unlike the compound interest series, `investment` here is cumulative:
/// the contributions made through the end of that year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipGrowthPoint {
    pub year: u32,
    pub investment: f64,
    pub returns: f64,
    pub total: f64,
}

/// Complete SIP result: scalar summary plus per-year series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipResult {
    /// Sum of all contributions (monthly_investment * years * 12)
    pub total_investment: f64,

    /// Accrued returns (maturity_value - total_investment)
    pub total_returns: f64,

    /// Value of the plan at the end of the horizon
    pub maturity_value: f64,

    /// Year-by-year growth, one entry per year 0..=years
    pub growth_data: Vec<SipGrowthPoint>,
}

/// Future value of the monthly contributions after `months` deposits.
///
/// M * ((1+m)^k - 1)/m * (1+m) for m != 0; the zero-rate limit is plain
/// accumulation M * k. Shared by the summary scalar and every series entry
/// so the chart's last point and the headline figure cannot drift.
fn value_at_month(monthly_investment: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return monthly_investment * months as f64;
    }
    monthly_investment * ((1.0 + monthly_rate).powf(months as f64) - 1.0) / monthly_rate
        * (1.0 + monthly_rate)
}

/// Project the maturity value of a fixed monthly investment.
///
/// Each year's series entry is computed independently from its
/// months-to-date count; there is no recurrence between entries.
pub fn sip(inputs: &SipInputs) -> CalcResult<SipResult> {
    if !inputs.monthly_investment.is_finite() {
        return Err(CalcError::invalid_argument(
            "monthly investment must be finite",
        ));
    }
    if !inputs.annual_rate.is_finite() {
        return Err(CalcError::invalid_argument("annual rate must be finite"));
    }

    let monthly_rate = (inputs.annual_rate / 12.0) / 100.0;
    let months = inputs.years * 12;

    let mut growth_data = Vec::with_capacity(inputs.years as usize + 1);
    for year in 0..=inputs.years {
        let months_to_date = year * 12;
        let investment = inputs.monthly_investment * months_to_date as f64;
        let total = value_at_month(inputs.monthly_investment, monthly_rate, months_to_date);
        if !total.is_finite() {
            return Err(CalcError::overflow(format!("value at year {}", year)));
        }
        growth_data.push(SipGrowthPoint {
            year,
            investment,
            returns: total - investment,
            total,
        });
    }

    // growth_data always has a year-0 entry, so last() cannot fail
    let last = growth_data.last().unwrap();
    let total_investment = inputs.monthly_investment * months as f64;
    let maturity_value = last.total;
    let total_returns = maturity_value - total_investment;

    Ok(SipResult {
        total_investment,
        total_returns,
        maturity_value,
        growth_data,
    })
}
