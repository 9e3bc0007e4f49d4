//! Run a single calculation from environment configuration
//!
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   CALCULATION (compound-interest | emi | sip)
//!   PRINCIPAL, ANNUAL_RATE, YEARS, FREQUENCY   (compound interest)
//!   LOAN_AMOUNT, ANNUAL_RATE, TENURE_MONTHS    (emi)
//!   MONTHLY_INVESTMENT, ANNUAL_RATE, YEARS     (sip)

use anyhow::{bail, Context};
use fincalc::format::format_inr;
use fincalc::{
    CalcRequest, CalcResponse, CompoundInterestInputs, CompoundingFrequency, EmiInputs, SipInputs,
};
use std::env;

fn env_f64(name: &str, default: f64) -> anyhow::Result<f64> {
    match env::var(name) {
        Ok(s) => s
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, s)),
        Err(_) => Ok(default),
    }
}

fn env_u32(name: &str, default: u32) -> anyhow::Result<u32> {
    match env::var(name) {
        Ok(s) => s
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got '{}'", name, s)),
        Err(_) => Ok(default),
    }
}

fn build_request() -> anyhow::Result<CalcRequest> {
    let calculation = env::var("CALCULATION").unwrap_or_else(|_| "compound-interest".to_string());

    match calculation.as_str() {
        "compound-interest" => {
            let frequency: CompoundingFrequency = env::var("FREQUENCY")
                .unwrap_or_else(|_| "annually".to_string())
                .parse()?;
            Ok(CalcRequest::CompoundInterest(CompoundInterestInputs::new(
                env_f64("PRINCIPAL", 100_000.0)?,
                env_f64("ANNUAL_RATE", 7.0)?,
                env_u32("YEARS", 10)?,
                frequency,
            )))
        }
        "emi" => Ok(CalcRequest::Emi(EmiInputs::new(
            env_f64("LOAN_AMOUNT", 1_000_000.0)?,
            env_f64("ANNUAL_RATE", 8.5)?,
            env_u32("TENURE_MONTHS", 120)?,
        ))),
        "sip" => Ok(CalcRequest::Sip(SipInputs::new(
            env_f64("MONTHLY_INVESTMENT", 10_000.0)?,
            env_f64("ANNUAL_RATE", 12.0)?,
            env_u32("YEARS", 10)?,
        ))),
        other => bail!(
            "unknown CALCULATION '{}' (expected compound-interest, emi, or sip)",
            other
        ),
    }
}

fn print_summary(response: &CalcResponse) {
    match response {
        CalcResponse::CompoundInterest(result) => {
            println!("Total Amount:    {}", format_inr(result.total_amount));
            println!("Interest Earned: {}", format_inr(result.interest_earned));
            println!("Growth points:   {}", result.growth_data.len());
        }
        CalcResponse::Emi(result) => {
            println!("Monthly EMI:    {}", format_inr(result.monthly_emi));
            println!("Total Interest: {}", format_inr(result.total_interest));
            println!("Total Amount:   {}", format_inr(result.total_amount));
            println!("Schedule rows:  {}", result.amortization_schedule.len());
        }
        CalcResponse::Sip(result) => {
            println!("Total Investment: {}", format_inr(result.total_investment));
            println!("Total Returns:    {}", format_inr(result.total_returns));
            println!("Maturity Value:   {}", format_inr(result.maturity_value));
            println!("Growth points:    {}", result.growth_data.len());
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");

    let request = build_request()?;
    log::info!("running {:?}", request);

    let response = request.run().context("calculation failed")?;

    if json_output {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        print_summary(&response);
    }

    Ok(())
}
