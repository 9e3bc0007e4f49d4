//! The three projection calculators

mod compound;
mod emi;
mod frequency;
mod sip;

pub use compound::{compound_interest, CompoundInterestInputs, CompoundInterestResult, GrowthPoint};
pub use emi::{emi, AmortizationEntry, EmiInputs, EmiResult};
pub use frequency::CompoundingFrequency;
pub use sip::{sip, SipGrowthPoint, SipInputs, SipResult};
