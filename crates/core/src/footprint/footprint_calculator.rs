//! Pure footprint calculation over a validated survey.

use log::warn;
use rust_decimal::Decimal;

use super::footprint_constants::*;
use super::footprint_model::{
    EmissionBreakdown, FlightType, FootprintResult, FuelType, SurveyInput,
};

/// Calculates the weekly carbon footprint for a survey.
///
/// Deterministic and free of I/O: the same input always produces the same
/// estimate. Unrecognized fuel or flight type values contribute zero instead
/// of failing, so a stale client cannot block calculation. The total is
/// floored at zero after waste-reduction credits are subtracted.
pub fn calculate_footprint(input: &SurveyInput) -> FootprintResult {
    let breakdown = EmissionBreakdown {
        electricity: electricity_emissions(input.electricity_bill_aud),
        gas: gas_emissions(input.gas_bill_aud),
        car: car_emissions(input),
        public_transport: public_transport_emissions(input),
        flights: flight_emissions(input),
        red_meat: input.red_meat_meals_per_week * MEAL_PORTION_KG * RED_MEAT_KG_CO2E_PER_KG,
        poultry_fish: input.poultry_fish_meals_per_week
            * MEAL_PORTION_KG
            * POULTRY_FISH_KG_CO2E_PER_KG,
        dairy: input.dairy_portions_per_week * MEAL_PORTION_KG * DAIRY_KG_CO2E_PER_KG,
        clothes: clothing_emissions(input),
        waste_reduction: waste_reduction_credit(input),
    };

    let gross = breakdown.electricity
        + breakdown.gas
        + breakdown.car
        + breakdown.public_transport
        + breakdown.flights
        + breakdown.red_meat
        + breakdown.poultry_fish
        + breakdown.dairy
        + breakdown.clothes;

    let weekly_kg_co2e = (gross - breakdown.waste_reduction).max(Decimal::ZERO);

    FootprintResult {
        weekly_kg_co2e,
        breakdown,
    }
}

/// Monthly bill -> inferred kWh -> weekly kg CO2e.
fn electricity_emissions(monthly_bill_aud: Decimal) -> Decimal {
    let kwh_per_month = monthly_bill_aud / ELECTRICITY_AUD_PER_KWH;
    let kwh_per_week = kwh_per_month * MONTHS_PER_YEAR / WEEKS_PER_YEAR;
    kwh_per_week * ELECTRICITY_KG_PER_KWH
}

/// Monthly bill -> inferred MJ -> weekly kg CO2e.
fn gas_emissions(monthly_bill_aud: Decimal) -> Decimal {
    let mj_per_month = monthly_bill_aud / GAS_AUD_PER_MJ;
    let mj_per_week = mj_per_month * MONTHS_PER_YEAR / WEEKS_PER_YEAR;
    mj_per_week * GAS_KG_PER_MJ
}

fn car_emissions(input: &SurveyInput) -> Decimal {
    if !input.has_car {
        return Decimal::ZERO;
    }
    let km = input.car_weekly_km.unwrap_or(Decimal::ZERO);
    match input
        .car_fuel_type
        .as_deref()
        .and_then(|raw| raw.parse::<FuelType>().ok())
    {
        Some(fuel) => km * fuel.emission_factor(),
        None => {
            if let Some(raw) = input.car_fuel_type.as_deref() {
                warn!("Unknown fuel type '{}', car contributes zero emissions", raw);
            }
            Decimal::ZERO
        }
    }
}

fn public_transport_emissions(input: &SurveyInput) -> Decimal {
    if !input.uses_public_transport {
        return Decimal::ZERO;
    }
    let km = input.public_transport_weekly_km.unwrap_or(Decimal::ZERO);
    km * PUBLIC_TRANSPORT_KG_PER_KM
}

/// Flights per year spread over 52 weeks at an assumed per-leg distance.
fn flight_emissions(input: &SurveyInput) -> Decimal {
    if !input.takes_flights {
        return Decimal::ZERO;
    }
    let count = Decimal::from(input.flights_per_year.unwrap_or(0));
    match input
        .flight_type
        .as_deref()
        .and_then(|raw| raw.parse::<FlightType>().ok())
    {
        Some(flight) => count * flight.distance_km() * flight.emission_factor() / WEEKS_PER_YEAR,
        None => {
            if let Some(raw) = input.flight_type.as_deref() {
                warn!(
                    "Unknown flight type '{}', flights contribute zero emissions",
                    raw
                );
            }
            Decimal::ZERO
        }
    }
}

fn clothing_emissions(input: &SurveyInput) -> Decimal {
    match input.clothes_per_year {
        Some(items) => items * CLOTHING_KG_PER_ITEM / WEEKS_PER_YEAR,
        None => Decimal::ZERO,
    }
}

fn waste_reduction_credit(input: &SurveyInput) -> Decimal {
    let mut credit = Decimal::ZERO;
    if input.recycles == Some(true) {
        credit += RECYCLING_WEEKLY_CREDIT;
    }
    if input.composts == Some(true) {
        credit += COMPOSTING_WEEKLY_CREDIT;
    }
    credit
}
