//! Hotel booking lookup

use std::sync::LazyLock;

use serde::Serialize;

use super::lookup::LookupTable;
use super::normalize::normalize_name;

const GENERIC_NIGHTLY_USD: f64 = 100.0;
const GENERIC_NOTE: &str = "Generic pricing - city not in database";

/// Static hotel reference record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    pub city: String,
    pub hotel_name: String,
    pub rating: f64,
    pub price_per_night_usd: f64,
    pub currency: String,
    pub amenities: Vec<String>,
}

/// A priced booking for a number of nights.
///
/// `num_nights` is `None` when the request could not be read as a number; it
/// serializes as `null` and leaves the total `null` as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelBooking {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub price_per_night_usd: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    pub num_nights: Option<i64>,
    pub total_price_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HotelBooking {
    pub fn is_generic(&self) -> bool {
        self.note.is_some()
    }
}

static HOTELS: LazyLock<LookupTable<Hotel>> = LazyLock::new(|| {
    let amenities = ["WiFi", "Breakfast", "Pool", "Conference Facilities"];
    let hotel = |city: &str, name: &str, nightly: f64| Hotel {
        city: city.to_string(),
        hotel_name: name.to_string(),
        rating: 4.5,
        price_per_night_usd: nightly,
        currency: "USD".to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    };

    LookupTable::from_entries(
        normalize_name,
        [
            ("Nairobi", hotel("Nairobi", "Nairobi Serena Hotel", 120.0)),
            ("Lagos", hotel("Lagos", "Eko Hotels & Suites", 150.0)),
        ],
    )
});

/// Price a stay of `num_nights` in `city`
pub fn get_hotel_booking(city: &str, num_nights: Option<i64>) -> HotelBooking {
    let total = |nightly: f64| num_nights.map(|n| nightly * n as f64);

    match HOTELS.get(&[city]) {
        Some(hotel) => {
            let hotel = hotel.clone();
            HotelBooking {
                total_price_usd: total(hotel.price_per_night_usd),
                city: hotel.city,
                hotel_name: Some(hotel.hotel_name),
                rating: Some(hotel.rating),
                price_per_night_usd: hotel.price_per_night_usd,
                currency: hotel.currency,
                amenities: Some(hotel.amenities),
                num_nights,
                note: None,
            }
        }
        None => {
            log::debug!("No hotel data for {}, using generic pricing", city);
            HotelBooking {
                city: normalize_name(city),
                hotel_name: None,
                rating: None,
                price_per_night_usd: GENERIC_NIGHTLY_USD,
                currency: "USD".to_string(),
                amenities: None,
                num_nights,
                total_price_usd: total(GENERIC_NIGHTLY_USD),
                note: Some(GENERIC_NOTE.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nairobi_three_nights() {
        let booking = get_hotel_booking("Nairobi", Some(3));
        assert_eq!(booking.hotel_name.as_deref(), Some("Nairobi Serena Hotel"));
        assert_eq!(booking.num_nights, Some(3));
        assert_eq!(booking.total_price_usd, Some(360.0));
        assert!(!booking.is_generic());
    }

    #[test]
    fn test_lagos_is_case_insensitive() {
        let booking = get_hotel_booking("  LAGOS ", Some(2));
        assert_eq!(booking.city, "Lagos");
        assert_eq!(booking.total_price_usd, Some(300.0));
    }

    #[test]
    fn test_unknown_city_generic_pricing() {
        let booking = get_hotel_booking("berlin", Some(2));
        assert_eq!(booking.city, "Berlin");
        assert_eq!(booking.price_per_night_usd, 100.0);
        assert_eq!(booking.total_price_usd, Some(200.0));
        assert_eq!(booking.note.as_deref(), Some(GENERIC_NOTE));
    }

    #[test]
    fn test_not_a_number_nights_propagates() {
        let booking = get_hotel_booking("Nairobi", None);
        assert_eq!(booking.num_nights, None);
        assert_eq!(booking.total_price_usd, None);

        let value = serde_json::to_value(&booking).unwrap();
        assert!(value["num_nights"].is_null());
        assert!(value["total_price_usd"].is_null());
    }

    #[test]
    fn test_static_record_is_not_mutated() {
        let _ = get_hotel_booking("Nairobi", Some(10));
        let again = get_hotel_booking("Nairobi", Some(1));
        assert_eq!(again.total_price_usd, Some(120.0));
        assert_eq!(HOTELS.get(&["Nairobi"]).unwrap().price_per_night_usd, 120.0);
    }

    #[test]
    fn test_serialized_known_booking() {
        let value = serde_json::to_value(get_hotel_booking("Nairobi", Some(3))).unwrap();
        assert_eq!(value["rating"], 4.5);
        assert_eq!(value["amenities"].as_array().unwrap().len(), 4);
        assert!(value.get("note").is_none());
    }
}
