//! Emission coefficients and conversion factors for the footprint calculator.
//!
//! Coefficients are calibrated for Australian households: bills are monthly
//! AUD amounts, tariffs are national averages, and emission factors are
//! kg CO2e per unit. All outputs are weekly unless noted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Average electricity tariff (AUD per kWh) used to infer usage from bills.
pub const ELECTRICITY_AUD_PER_KWH: Decimal = dec!(0.30);
/// Emission factor for grid electricity (kg CO2e per kWh).
pub const ELECTRICITY_KG_PER_KWH: Decimal = dec!(0.86);

/// Average natural gas tariff (AUD per MJ).
pub const GAS_AUD_PER_MJ: Decimal = dec!(0.025);
/// Emission factor for natural gas (kg CO2e per MJ).
pub const GAS_KG_PER_MJ: Decimal = dec!(0.051);

/// Per-kilometre car emission factor for petrol (kg CO2e per km).
pub const CAR_PETROL_KG_PER_KM: Decimal = dec!(0.42);
/// Per-kilometre car emission factor for diesel (kg CO2e per km).
pub const CAR_DIESEL_KG_PER_KM: Decimal = dec!(0.45);
/// Per-kilometre car emission factor for LPG (kg CO2e per km).
pub const CAR_LPG_KG_PER_KM: Decimal = dec!(0.35);
/// Per-kilometre car emission factor for EVs on the average grid mix
/// (kg CO2e per km).
pub const CAR_EV_KG_PER_KM: Decimal = dec!(0.12);

/// Average public transport emission factor (kg CO2e per passenger-km).
pub const PUBLIC_TRANSPORT_KG_PER_KM: Decimal = dec!(0.102);

/// Assumed distance (km) of a short-haul flight leg.
pub const FLIGHT_SHORT_KM: Decimal = dec!(1000);
/// Assumed distance (km) of a medium-haul flight leg.
pub const FLIGHT_MEDIUM_KM: Decimal = dec!(2750);
/// Assumed distance (km) of a long-haul flight leg.
pub const FLIGHT_LONG_KM: Decimal = dec!(7000);

/// Short-haul flight emission factor (kg CO2e per passenger-km).
pub const FLIGHT_SHORT_KG_PER_KM: Decimal = dec!(0.15);
/// Medium-haul flight emission factor (kg CO2e per passenger-km).
pub const FLIGHT_MEDIUM_KG_PER_KM: Decimal = dec!(0.12);
/// Long-haul flight emission factor (kg CO2e per passenger-km).
pub const FLIGHT_LONG_KG_PER_KM: Decimal = dec!(0.11);

/// Assumed portion weight (kg) of a single meal or serving.
pub const MEAL_PORTION_KG: Decimal = dec!(0.15);
/// Emission factor for red meat (kg CO2e per kg).
pub const RED_MEAT_KG_CO2E_PER_KG: Decimal = dec!(27);
/// Emission factor for poultry and fish (kg CO2e per kg).
pub const POULTRY_FISH_KG_CO2E_PER_KG: Decimal = dec!(6);
/// Emission factor for dairy (kg CO2e per kg).
pub const DAIRY_KG_CO2E_PER_KG: Decimal = dec!(3);

/// Embodied emissions per new garment (kg CO2e), annualised over 52 weeks.
pub const CLOTHING_KG_PER_ITEM: Decimal = dec!(10);

/// Weekly credit for consistent recycling (kg CO2e).
pub const RECYCLING_WEEKLY_CREDIT: Decimal = dec!(1.5);
/// Weekly credit for composting organic waste (kg CO2e).
pub const COMPOSTING_WEEKLY_CREDIT: Decimal = dec!(3);

/// Billing periods per year, used to annualise monthly bills.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);
/// Weeks per year, used to split annual quantities into weekly ones.
pub const WEEKS_PER_YEAR: Decimal = dec!(52);
/// Average weeks per month, used for the monthly projection.
pub const WEEKS_PER_MONTH: Decimal = dec!(4.3);
