//! Tool System - travel lookups, schemas, argument binding and dispatch
//!
//! Tools never fail toward the model: every outcome, including bad arguments
//! and unknown tool names, is a JSON record the model can read.

mod args;
mod currency;
mod flights;
mod hotels;
mod lookup;
mod normalize;
mod registry;
mod spec;
mod travel;

pub use args::{BoundArgs, ToolError, coerce_integer, coerce_number};
pub use currency::{Conversion, UnsupportedCurrency, convert_currency, round_to, supported_currencies};
pub use flights::{FlightLeg, FlightSchedule, GenericRoute, Itinerary, get_flight_schedule};
pub use hotels::{Hotel, HotelBooking, get_hotel_booking};
pub use lookup::LookupTable;
pub use normalize::{normalize_code, normalize_name};
pub use registry::ToolRegistry;
pub use spec::{ParamSpec, ParamType, ToolSpec};
pub use travel::TravelTool;

use serde::Serialize;
use serde_json::{Value, json};

/// Result from tool execution, ready to be sent back as a tool message
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub content: Value,
    pub is_error: bool,
}

impl ToolResult {
    /// Wrap a success record
    pub fn success(record: &impl Serialize) -> Self {
        match serde_json::to_value(record) {
            Ok(content) => Self {
                content,
                is_error: false,
            },
            Err(e) => Self::error(format!("Failed to serialize tool output: {}", e)),
        }
    }

    /// An error record with just a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: json!({ "error": message.into() }),
            is_error: true,
        }
    }

    /// An error record carrying extra context fields
    pub fn error_record(record: &impl Serialize) -> Self {
        match serde_json::to_value(record) {
            Ok(content) => Self {
                content,
                is_error: true,
            },
            Err(e) => Self::error(format!("Failed to serialize tool output: {}", e)),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.content.get("error").and_then(Value::as_str)
    }

    /// Serialized form used as tool message content
    pub fn to_message_content(&self) -> String {
        self.content.to_string()
    }
}
