//! Flight schedule lookup
//!
//! Routes are directional. An unknown route is not an error: it degrades to a
//! generic quote marked with a note.

use std::sync::LazyLock;

use serde::Serialize;

use super::lookup::LookupTable;
use super::normalize::normalize_name;

const GENERIC_FLIGHT_HOURS: f64 = 6.0;
const GENERIC_PRICE_USD: f64 = 500.0;
const GENERIC_NOTE: &str = "Generic pricing - specific route not in database";

/// One direction of a round trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightLeg {
    pub flight_number: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_hours: f64,
    pub airline: String,
}

impl FlightLeg {
    fn new(flight_number: &str, departure_time: &str, arrival_time: &str, duration_hours: f64, airline: &str) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            departure_time: departure_time.to_string(),
            arrival_time: arrival_time.to_string(),
            duration_hours,
            airline: airline.to_string(),
        }
    }
}

/// A known round-trip itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub origin: String,
    pub destination: String,
    pub outbound_flight: FlightLeg,
    pub return_flight: FlightLeg,
    pub total_flight_time_hours: f64,
    pub price_usd: f64,
    pub currency: String,
}

/// Default quote for a route with no schedule data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericRoute {
    pub origin: String,
    pub destination: String,
    pub total_flight_time_hours: f64,
    pub price_usd: f64,
    pub currency: String,
    pub note: String,
}

/// Result of a schedule lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlightSchedule {
    Known(Itinerary),
    Generic(GenericRoute),
}

impl FlightSchedule {
    pub fn total_flight_time_hours(&self) -> f64 {
        match self {
            FlightSchedule::Known(i) => i.total_flight_time_hours,
            FlightSchedule::Generic(g) => g.total_flight_time_hours,
        }
    }

    pub fn price_usd(&self) -> f64 {
        match self {
            FlightSchedule::Known(i) => i.price_usd,
            FlightSchedule::Generic(g) => g.price_usd,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, FlightSchedule::Generic(_))
    }
}

static ROUTES: LazyLock<LookupTable<Itinerary>> = LazyLock::new(|| {
    let et901 = FlightLeg::new("ET901", "10:30 AM", "5:45 PM", 5.25, "Ethiopian Airlines");
    let et902 = FlightLeg::new("ET902", "7:00 PM", "12:15 AM+1", 5.25, "Ethiopian Airlines");

    let mut table = LookupTable::new(normalize_name);
    for (origin, destination, outbound, inbound) in [
        ("Lagos", "Nairobi", &et901, &et902),
        ("Nairobi", "Lagos", &et902, &et901),
    ] {
        table.insert(
            &[origin, destination],
            Itinerary {
                origin: origin.to_string(),
                destination: destination.to_string(),
                outbound_flight: outbound.clone(),
                return_flight: inbound.clone(),
                total_flight_time_hours: 10.5,
                price_usd: 450.0,
                currency: "USD".to_string(),
            },
        );
    }
    table
});

/// Look up the round-trip schedule between two cities
pub fn get_flight_schedule(origin: &str, destination: &str) -> FlightSchedule {
    match ROUTES.get(&[origin, destination]) {
        Some(itinerary) => FlightSchedule::Known(itinerary.clone()),
        None => {
            log::debug!("No schedule for {} -> {}, using generic pricing", origin, destination);
            FlightSchedule::Generic(GenericRoute {
                origin: normalize_name(origin),
                destination: normalize_name(destination),
                total_flight_time_hours: GENERIC_FLIGHT_HOURS,
                price_usd: GENERIC_PRICE_USD,
                currency: "USD".to_string(),
                note: GENERIC_NOTE.to_string(),
            })
        }
    }
}
