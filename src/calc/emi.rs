//! Equated monthly installment (EMI) loan amortization

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Inputs for an EMI amortization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInputs {
    /// Loan principal disbursed at month 0
    pub loan_amount: f64,

    /// Annual interest rate in percent
    pub annual_rate: f64,

    /// Loan tenure in months (must be at least 1)
    pub tenure_months: u32,
}

impl EmiInputs {
    pub fn new(loan_amount: f64, annual_rate: f64, tenure_months: u32) -> Self {
        Self {
            loan_amount,
            annual_rate,
            tenure_months,
        }
    }
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Month number, 1..=tenure
    pub month: u32,

    /// The constant installment, repeated for display
    pub emi: f64,

    /// Portion of the installment that reduces the balance
    pub principal: f64,

    /// Portion of the installment paying interest on the open balance
    pub interest: f64,

    /// Remaining balance after this payment, floored at 0
    pub balance: f64,
}

/// Complete EMI result: scalar summary plus month-by-month schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiResult {
    /// Constant monthly installment
    pub monthly_emi: f64,

    /// Interest paid over the full tenure (total_amount - loan_amount)
    pub total_interest: f64,

    /// Total paid over the full tenure (monthly_emi * tenure)
    pub total_amount: f64,

    /// Schedule with exactly one entry per month 1..=tenure
    pub amortization_schedule: Vec<AmortizationEntry>,
}

/// Amortize a loan into equal monthly installments.
///
/// With monthly rate m = (rate/12)/100 the installment is the standard
/// annuity payment L*m*(1+m)^T / ((1+m)^T - 1). A zero rate makes that
/// expression 0/0; we take its limit, an interest-free loan repaid in
/// equal principal slices of L/T.
///
/// The schedule is a strict month-order fold over the running balance:
/// each month's interest is charged on the prior month's post-payment
/// balance, so the entries cannot be computed out of order.
pub fn emi(inputs: &EmiInputs) -> CalcResult<EmiResult> {
    if !inputs.loan_amount.is_finite() {
        return Err(CalcError::invalid_argument("loan amount must be finite"));
    }
    if !inputs.annual_rate.is_finite() {
        return Err(CalcError::invalid_argument("annual rate must be finite"));
    }
    if inputs.tenure_months == 0 {
        return Err(CalcError::invalid_argument(
            "tenure must be at least 1 month",
        ));
    }

    let tenure = inputs.tenure_months;
    let monthly_rate = (inputs.annual_rate / 12.0) / 100.0;

    let monthly_emi = if monthly_rate == 0.0 {
        inputs.loan_amount / tenure as f64
    } else {
        let growth = (1.0 + monthly_rate).powf(tenure as f64);
        inputs.loan_amount * monthly_rate * growth / (growth - 1.0)
    };
    if !monthly_emi.is_finite() {
        return Err(CalcError::overflow("monthly EMI"));
    }

    let total_amount = monthly_emi * tenure as f64;
    let total_interest = total_amount - inputs.loan_amount;

    let mut amortization_schedule = Vec::with_capacity(tenure as usize);
    let mut remaining_balance = inputs.loan_amount;

    for month in 1..=tenure {
        let interest = remaining_balance * monthly_rate;
        let principal = monthly_emi - interest;
        remaining_balance -= principal;

        amortization_schedule.push(AmortizationEntry {
            month,
            emi: monthly_emi,
            principal,
            interest,
            // Floating accumulation can leave the final balance a hair
            // below zero; report 0 instead.
            balance: remaining_balance.max(0.0),
        });
    }

    Ok(EmiResult {
        monthly_emi,
        total_interest,
        total_amount,
        amortization_schedule,
    })
}
