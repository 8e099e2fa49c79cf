//! Survey and footprint domain models.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementRule;
use crate::errors::ValidationError;
use crate::scores::ScoreRecord;

use super::footprint_constants::*;

/// Fuel type of the household car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Petrol,
    Diesel,
    Lpg,
    Ev,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Lpg => "lpg",
            FuelType::Ev => "ev",
        }
    }

    /// Emission factor in kg CO2e per km.
    pub fn emission_factor(&self) -> Decimal {
        match self {
            FuelType::Petrol => CAR_PETROL_KG_PER_KM,
            FuelType::Diesel => CAR_DIESEL_KG_PER_KM,
            FuelType::Lpg => CAR_LPG_KG_PER_KM,
            FuelType::Ev => CAR_EV_KG_PER_KM,
        }
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "lpg" => Ok(FuelType::Lpg),
            "ev" => Ok(FuelType::Ev),
            _ => Err(format!("Unknown fuel type: {}", s)),
        }
    }
}

/// Haul class of a typical flight taken by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightType {
    Short,
    Medium,
    Long,
}

impl FlightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightType::Short => "short",
            FlightType::Medium => "medium",
            FlightType::Long => "long",
        }
    }

    /// Assumed leg distance in km.
    pub fn distance_km(&self) -> Decimal {
        match self {
            FlightType::Short => FLIGHT_SHORT_KM,
            FlightType::Medium => FLIGHT_MEDIUM_KM,
            FlightType::Long => FLIGHT_LONG_KM,
        }
    }

    /// Emission factor in kg CO2e per passenger-km.
    pub fn emission_factor(&self) -> Decimal {
        match self {
            FlightType::Short => FLIGHT_SHORT_KG_PER_KM,
            FlightType::Medium => FLIGHT_MEDIUM_KG_PER_KM,
            FlightType::Long => FLIGHT_LONG_KG_PER_KM,
        }
    }
}

impl FromStr for FlightType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "short" => Ok(FlightType::Short),
            "medium" => Ok(FlightType::Medium),
            "long" => Ok(FlightType::Long),
            _ => Err(format!("Unknown flight type: {}", s)),
        }
    }
}

/// One-shot lifestyle survey submitted from the footprint form.
///
/// Bills are monthly AUD amounts; distances are weekly km. Fuel and flight
/// types stay as raw strings so an unrecognized value degrades to a zero
/// contribution at calculation time instead of rejecting the whole survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyInput {
    pub electricity_bill_aud: Decimal,
    pub gas_bill_aud: Decimal,

    pub has_car: bool,
    #[serde(default)]
    pub car_weekly_km: Option<Decimal>,
    /// Expected values: petrol, diesel, lpg, ev.
    #[serde(default)]
    pub car_fuel_type: Option<String>,

    pub uses_public_transport: bool,
    #[serde(default)]
    pub public_transport_weekly_km: Option<Decimal>,

    pub takes_flights: bool,
    #[serde(default)]
    pub flights_per_year: Option<u32>,
    /// Expected values: short, medium, long.
    #[serde(default)]
    pub flight_type: Option<String>,

    pub red_meat_meals_per_week: Decimal,
    pub poultry_fish_meals_per_week: Decimal,
    pub dairy_portions_per_week: Decimal,

    #[serde(default)]
    pub clothes_per_year: Option<Decimal>,
    #[serde(default)]
    pub recycles: Option<bool>,
    #[serde(default)]
    pub composts: Option<bool>,

    pub household_size: u32,
}

impl SurveyInput {
    /// Validates the survey wholesale: required fields, conditional fields
    /// for each enabled transport section, and non-negative quantities.
    /// Any failure rejects the submission before calculation runs.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_non_negative("electricityBillAud", self.electricity_bill_aud)?;
        require_non_negative("gasBillAud", self.gas_bill_aud)?;
        require_non_negative("redMeatMealsPerWeek", self.red_meat_meals_per_week)?;
        require_non_negative("poultryFishMealsPerWeek", self.poultry_fish_meals_per_week)?;
        require_non_negative("dairyPortionsPerWeek", self.dairy_portions_per_week)?;

        if self.household_size < 1 {
            return Err(ValidationError::InvalidInput(
                "Household size must be at least 1".to_string(),
            ));
        }

        if self.has_car {
            let km = self
                .car_weekly_km
                .ok_or_else(|| ValidationError::MissingField("carWeeklyKm".to_string()))?;
            require_non_negative("carWeeklyKm", km)?;
            require_choice("carFuelType", self.car_fuel_type.as_deref())?;
        }

        if self.uses_public_transport {
            let km = self.public_transport_weekly_km.ok_or_else(|| {
                ValidationError::MissingField("publicTransportWeeklyKm".to_string())
            })?;
            require_non_negative("publicTransportWeeklyKm", km)?;
        }

        if self.takes_flights {
            if self.flights_per_year.is_none() {
                return Err(ValidationError::MissingField("flightsPerYear".to_string()));
            }
            require_choice("flightType", self.flight_type.as_deref())?;
        }

        if let Some(clothes) = self.clothes_per_year {
            require_non_negative("clothesPerYear", clothes)?;
        }

        Ok(())
    }
}

fn require_non_negative(field: &str, value: Decimal) -> std::result::Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "{} cannot be negative",
            field
        )));
    }
    Ok(())
}

fn require_choice(field: &str, value: Option<&str>) -> std::result::Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(field.to_string())),
    }
}

/// Weekly kg CO2e per category. `waste_reduction` is the subtractive credit
/// earned by recycling and composting; all other categories are additive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionBreakdown {
    pub electricity: Decimal,
    pub gas: Decimal,
    pub car: Decimal,
    pub public_transport: Decimal,
    pub flights: Decimal,
    pub red_meat: Decimal,
    pub poultry_fish: Decimal,
    pub dairy: Decimal,
    pub clothes: Decimal,
    pub waste_reduction: Decimal,
}

/// Result of a footprint calculation. The weekly estimate is the canonical
/// figure; monthly and yearly projections are always derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub weekly_kg_co2e: Decimal,
    pub breakdown: EmissionBreakdown,
}

impl FootprintResult {
    pub fn monthly_kg_co2e(&self) -> Decimal {
        self.weekly_kg_co2e * WEEKS_PER_MONTH
    }

    pub fn yearly_kg_co2e(&self) -> Decimal {
        self.weekly_kg_co2e * WEEKS_PER_YEAR
    }
}

/// Outcome of a survey submission: the calculation, the persisted record,
/// and any achievements the submission unlocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub result: FootprintResult,
    pub record: ScoreRecord,
    pub newly_unlocked: Vec<AchievementRule>,
}
