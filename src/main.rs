//! Fincalc CLI
//!
//! Runs the three calculators on representative inputs, prints formatted
//! summaries and series, and writes the full amortization schedule to CSV.

use fincalc::format::format_inr;
use fincalc::{
    compound_interest, emi, sip, CompoundInterestInputs, CompoundingFrequency, EmiInputs,
    SipInputs,
};
use std::fs::File;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Fincalc v0.1.0");
    println!("==============\n");

    // Compound interest: 10 lakh at 7.1% compounded quarterly for 15 years
    let ci_inputs = CompoundInterestInputs::new(1_000_000.0, 7.1, 15, CompoundingFrequency::Quarterly);
    let ci = compound_interest(&ci_inputs)?;

    println!("Compound Interest ({} @ {}%, {}, {} years)",
        format_inr(ci_inputs.principal),
        ci_inputs.annual_rate,
        ci_inputs.frequency,
        ci_inputs.years,
    );
    println!("  Total Amount:    {}", format_inr(ci.total_amount));
    println!("  Interest Earned: {}", format_inr(ci.interest_earned));
    println!("{:>6} {:>16} {:>16} {:>16}", "Year", "Principal", "Interest", "Total");
    for point in &ci.growth_data {
        println!("{:>6} {:>16} {:>16} {:>16}",
            point.year,
            format_inr(point.principal),
            format_inr(point.interest),
            format_inr(point.total),
        );
    }
    println!();

    // EMI: 25 lakh home loan at 8.5% over 20 years
    let emi_inputs = EmiInputs::new(2_500_000.0, 8.5, 240);
    let loan = emi(&emi_inputs)?;

    println!("EMI ({} @ {}%, {} months)",
        format_inr(emi_inputs.loan_amount),
        emi_inputs.annual_rate,
        emi_inputs.tenure_months,
    );
    println!("  Monthly EMI:    {}", format_inr(loan.monthly_emi));
    println!("  Total Interest: {}", format_inr(loan.total_interest));
    println!("  Total Amount:   {}", format_inr(loan.total_amount));

    // First year of the schedule on the console, full schedule to CSV
    println!("{:>6} {:>14} {:>14} {:>14} {:>16}", "Month", "EMI", "Principal", "Interest", "Balance");
    for entry in loan.amortization_schedule.iter().take(12) {
        println!("{:>6} {:>14} {:>14} {:>14} {:>16}",
            entry.month,
            format_inr(entry.emi),
            format_inr(entry.principal),
            format_inr(entry.interest),
            format_inr(entry.balance),
        );
    }
    if loan.amortization_schedule.len() > 12 {
        println!("... ({} more months)", loan.amortization_schedule.len() - 12);
    }

    let csv_path = "amortization_schedule.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "Month,EMI,Principal,Interest,Balance")?;
    for entry in &loan.amortization_schedule {
        writeln!(file, "{},{:.2},{:.2},{:.2},{:.2}",
            entry.month,
            entry.emi,
            entry.principal,
            entry.interest,
            entry.balance,
        )?;
    }
    println!("Full schedule written to: {}\n", csv_path);

    // SIP: 15k per month at 12% for 20 years
    let sip_inputs = SipInputs::new(15_000.0, 12.0, 20);
    let plan = sip(&sip_inputs)?;

    println!("SIP ({} monthly @ {}%, {} years)",
        format_inr(sip_inputs.monthly_investment),
        sip_inputs.annual_rate,
        sip_inputs.years,
    );
    println!("  Total Investment: {}", format_inr(plan.total_investment));
    println!("  Total Returns:    {}", format_inr(plan.total_returns));
    println!("  Maturity Value:   {}", format_inr(plan.maturity_value));
    println!("{:>6} {:>16} {:>16} {:>16}", "Year", "Investment", "Returns", "Total");
    for point in &plan.growth_data {
        println!("{:>6} {:>16} {:>16} {:>16}",
            point.year,
            format_inr(point.investment),
            format_inr(point.returns),
            format_inr(point.total),
        );
    }

    Ok(())
}
