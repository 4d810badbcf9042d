//! The travel tool set exposed to the model

use super::args::{BoundArgs, ToolError};
use super::currency::convert_currency;
use super::flights::get_flight_schedule;
use super::hotels::get_hotel_booking;
use super::spec::{ParamType, ToolSpec};
use super::ToolResult;

/// Closed set of tools this agent can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelTool {
    FlightSchedule,
    HotelBooking,
    ConvertCurrency,
}

impl TravelTool {
    pub const ALL: [TravelTool; 3] = [
        TravelTool::FlightSchedule,
        TravelTool::HotelBooking,
        TravelTool::ConvertCurrency,
    ];

    /// Name the model uses in tool calls
    pub fn name(&self) -> &'static str {
        match self {
            TravelTool::FlightSchedule => "get_flight_schedule",
            TravelTool::HotelBooking => "get_hotel_booking",
            TravelTool::ConvertCurrency => "convert_currency",
        }
    }

    pub fn spec(&self) -> ToolSpec {
        match self {
            TravelTool::FlightSchedule => ToolSpec::new(
                self.name(),
                "Get flight schedule and pricing between two cities. Returns flight details including total flight time and pricing in USD.",
            )
            .with_param("origin", ParamType::String, "Origin city name (e.g., 'Lagos', 'New York')")
            .with_param("destination", ParamType::String, "Destination city name (e.g., 'Nairobi', 'London')"),

            TravelTool::HotelBooking => ToolSpec::new(
                self.name(),
                "Get hotel booking information and pricing for a city. Returns hotel details with pricing in USD.",
            )
            .with_param("city", ParamType::String, "City name where hotel is needed (e.g., 'Nairobi', 'London')")
            .with_param("num_nights", ParamType::Integer, "Number of nights to stay"),

            TravelTool::ConvertCurrency => ToolSpec::new(
                self.name(),
                "Convert an amount from one currency to another. Supports USD, EUR, GBP, NGN (Nigerian Naira), KES (Kenyan Shilling), JPY, CAD, AUD.",
            )
            .with_param("amount", ParamType::Number, "Amount to convert")
            .with_param("from_currency", ParamType::String, "Source currency code (e.g., 'USD', 'EUR', 'NGN')")
            .with_param("to_currency", ParamType::String, "Target currency code (e.g., 'USD', 'EUR', 'KES')"),
        }
    }

    /// Run the tool against arguments already bound to its spec
    pub fn invoke(&self, args: &BoundArgs) -> Result<ToolResult, ToolError> {
        match self {
            TravelTool::FlightSchedule => {
                let schedule = get_flight_schedule(args.string("origin")?, args.string("destination")?);
                Ok(ToolResult::success(&schedule))
            }
            TravelTool::HotelBooking => {
                let booking = get_hotel_booking(args.string("city")?, args.integer("num_nights"));
                Ok(ToolResult::success(&booking))
            }
            TravelTool::ConvertCurrency => {
                let amount = args.number("amount");
                let from = args.string("from_currency")?;
                let to = args.string("to_currency")?;
                Ok(match convert_currency(amount, from, to) {
                    Ok(conversion) => ToolResult::success(&conversion),
                    Err(unsupported) => ToolResult::error_record(&unsupported),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(tool: TravelTool, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let bound = BoundArgs::parse(&tool.spec(), &args.to_string())?;
        tool.invoke(&bound)
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<&str> = TravelTool::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), TravelTool::ALL.len());
    }

    #[test]
    fn test_spec_parameter_order() {
        let spec = TravelTool::ConvertCurrency.spec();
        let names: Vec<&str> = spec.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["amount", "from_currency", "to_currency"]);
        assert!(spec.parameters.iter().all(|p| p.required));
        assert_eq!(spec.parameters[0].kind, ParamType::Number);
    }

    #[test]
    fn test_invoke_flight_schedule() {
        let result = run(
            TravelTool::FlightSchedule,
            json!({"origin": "lagos", "destination": "nairobi"}),
        )
        .unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content["total_flight_time_hours"], 10.5);
    }

    #[test]
    fn test_invoke_hotel_with_string_nights() {
        let result = run(TravelTool::HotelBooking, json!({"city": "Nairobi", "num_nights": "3"})).unwrap();
        assert_eq!(result.content["num_nights"], 3);
        assert_eq!(result.content["total_price_usd"], 360.0);
    }

    #[test]
    fn test_invoke_currency_unsupported_is_error_record() {
        let result = run(
            TravelTool::ConvertCurrency,
            json!({"amount": 100, "from_currency": "XYZ", "to_currency": "USD"}),
        )
        .unwrap();
        assert!(result.is_error);
        assert!(result.error_message().unwrap().starts_with("Currency not supported"));
        assert_eq!(result.content["original_amount"], 100.0);
    }

    #[test]
    fn test_invoke_wrong_type_is_tool_error() {
        let err = run(TravelTool::FlightSchedule, json!({"origin": 1, "destination": "Nairobi"})).unwrap_err();
        assert!(matches!(err, ToolError::WrongType { .. }));
    }
}
