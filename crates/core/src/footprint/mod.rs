//! Footprint module - survey models, calculator, and submission flow.

mod footprint_calculator;
mod footprint_constants;
mod footprint_model;
mod footprint_service;
mod footprint_traits;

#[cfg(test)]
mod footprint_service_tests;

pub use footprint_calculator::calculate_footprint;
pub use footprint_constants::*;
pub use footprint_model::{
    EmissionBreakdown, FlightType, FootprintResult, FuelType, SubmissionOutcome, SurveyInput,
};
pub use footprint_service::FootprintService;
pub use footprint_traits::{FootprintServiceTrait, SurveyRepositoryTrait};
