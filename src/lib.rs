//! Fincalc - Personal finance projection engine
//!
//! This library provides:
//! - Compound interest growth projections for lump-sum investments
//! - EMI loan amortization with a full month-by-month schedule
//! - SIP maturity projections with year-by-year growth data
//! - Indian-locale currency formatting for display
//! - A JSON request/response envelope for API-style callers

pub mod calc;
pub mod error;
pub mod format;
pub mod request;

// Re-export commonly used types
pub use calc::{
    compound_interest, emi, sip, AmortizationEntry, CompoundInterestInputs,
    CompoundInterestResult, CompoundingFrequency, EmiInputs, EmiResult, GrowthPoint,
    SipGrowthPoint, SipInputs, SipResult,
};
pub use error::{CalcError, CalcResult};
pub use request::{CalcRequest, CalcResponse};
