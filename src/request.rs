//! JSON request/response envelope for driving the calculators
//!
//! Lets a JSON-speaking caller (the `calc_api` binary, a future HTTP front)
//! select a calculator and pass its inputs in one tagged payload.

use crate::calc::{
    compound_interest, emi, sip, CompoundInterestInputs, CompoundInterestResult, EmiInputs,
    EmiResult, SipInputs, SipResult,
};
use crate::error::CalcResult;
use serde::{Deserialize, Serialize};

/// A single calculation request, tagged by calculator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "calculation", rename_all = "kebab-case")]
pub enum CalcRequest {
    CompoundInterest(CompoundInterestInputs),
    Emi(EmiInputs),
    Sip(SipInputs),
}

/// The matching result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "kebab-case")]
pub enum CalcResponse {
    CompoundInterest(CompoundInterestResult),
    Emi(EmiResult),
    Sip(SipResult),
}

impl CalcRequest {
    /// Dispatch to the matching calculator.
    pub fn run(&self) -> CalcResult<CalcResponse> {
        match self {
            CalcRequest::CompoundInterest(inputs) => {
                log::debug!(
                    "compound interest: principal={} rate={}% years={} frequency={}",
                    inputs.principal,
                    inputs.annual_rate,
                    inputs.years,
                    inputs.frequency
                );
                compound_interest(inputs).map(CalcResponse::CompoundInterest)
            }
            CalcRequest::Emi(inputs) => {
                log::debug!(
                    "emi: loan={} rate={}% tenure={}m",
                    inputs.loan_amount,
                    inputs.annual_rate,
                    inputs.tenure_months
                );
                emi(inputs).map(CalcResponse::Emi)
            }
            CalcRequest::Sip(inputs) => {
                log::debug!(
                    "sip: monthly={} rate={}% years={}",
                    inputs.monthly_investment,
                    inputs.annual_rate,
                    inputs.years
                );
                sip(inputs).map(CalcResponse::Sip)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_compound_interest() {
        let request: CalcRequest = serde_json::from_str(
            r#"{
                "calculation": "compound-interest",
                "principal": 10000,
                "annual_rate": 5,
                "years": 5,
                "frequency": "annually"
            }"#,
        )
        .unwrap();

        let response = request.run().unwrap();
        match response {
            CalcResponse::CompoundInterest(result) => {
                assert!((result.total_amount - 12_762.815625).abs() < 1e-6);
            }
            other => panic!("wrong response variant: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_emi() {
        let request: CalcRequest = serde_json::from_str(
            r#"{
                "calculation": "emi",
                "loan_amount": 100000,
                "annual_rate": 8,
                "tenure_months": 60
            }"#,
        )
        .unwrap();

        let response = request.run().unwrap();
        match response {
            CalcResponse::Emi(result) => {
                assert_eq!(result.amortization_schedule.len(), 60);
            }
            other => panic!("wrong response variant: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_sip() {
        let request = CalcRequest::Sip(SipInputs::new(5_000.0, 12.0, 10));
        let response = request.run().unwrap();
        match response {
            CalcResponse::Sip(result) => {
                assert_eq!(result.total_investment, 600_000.0);
            }
            other => panic!("wrong response variant: {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_surface() {
        let request = CalcRequest::Emi(EmiInputs::new(100_000.0, 8.0, 0));
        assert!(request.run().is_err());
    }

    #[test]
    fn test_unknown_frequency_rejected_at_parse() {
        let parsed: Result<CalcRequest, _> = serde_json::from_str(
            r#"{
                "calculation": "compound-interest",
                "principal": 10000,
                "annual_rate": 5,
                "years": 5,
                "frequency": "weekly"
            }"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_serializes_with_tag() {
        let response = CalcRequest::Sip(SipInputs::new(1_000.0, 0.0, 1))
            .run()
            .unwrap();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"calculation\":\"sip\""));
        assert!(json.contains("\"maturity_value\""));
    }
}
