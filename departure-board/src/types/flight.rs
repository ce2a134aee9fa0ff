use crate::types::airport::Airport;
use crate::types::board_error::BoardError;
use crate::types::flight_status::FlightStatus;
use chrono::NaiveDateTime;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    pub destination: Airport,
    pub airline: String,
    pub flight_number: String,
    pub departure_time: Option<NaiveDateTime>,
    pub terminal: Option<String>,
    pub status: FlightStatus,
}

impl Flight {
    pub fn new(
        destination: Airport,
        airline: String,
        flight_number: String,
        departure_time: Option<NaiveDateTime>,
        terminal: Option<String>,
        status: FlightStatus,
    ) -> Self {
        Flight {
            destination,
            airline,
            flight_number,
            departure_time,
            terminal,
            status,
        }
    }

    pub fn new_from_console(
        airports: &HashMap<String, Airport>,
        flight_number: &str,
        airline: &str,
        destination_code: &str,
        departure_time_str: &str,
        terminal_str: &str,
        status_str: &str,
    ) -> Result<Self, BoardError> {
        let destination = airports
            .get(destination_code)
            .ok_or_else(|| BoardError::AirportNotFound(destination_code.to_string()))?
            .clone();

        // A lone "-" means the value has not been set yet
        let departure_time = if departure_time_str == "-" {
            None
        } else {
            Some(parse_datetime(departure_time_str)?)
        };

        let terminal = if terminal_str == "-" {
            None
        } else {
            Some(terminal_str.to_string())
        };

        let status = FlightStatus::from_str(status_str)?;

        Ok(Flight {
            destination,
            airline: airline.to_string(),
            flight_number: flight_number.to_string(),
            departure_time,
            terminal,
            status,
        })
    }

    /// Departure time in short style ("5:30 PM"), or an empty string when unset.
    pub fn departure_time_text(&self) -> String {
        match self.departure_time {
            Some(time) => time.format("%-I:%M %p").to_string(),
            None => String::new(),
        }
    }

    /// The block shown for this flight on the departures listing.
    pub fn board_entry(&self) -> String {
        format!(
            "Destination: {}\nAirline: {}\nFlight: {}\nDeparture Time: {}\nTerminal: {}\nStatus: {}\n",
            self.destination.city,
            self.airline,
            self.flight_number,
            self.departure_time_text(),
            self.terminal.as_deref().unwrap_or(""),
            self.status.as_str()
        )
    }

    /// The message announced to passengers of this flight.
    ///
    /// Without an assigned terminal the passenger is sent to the information
    /// desk no matter the status. Unset departure times fall back to "TBD".
    pub fn alert_message(&self) -> String {
        let terminal = match &self.terminal {
            Some(terminal) => terminal,
            None => return "Please seek the nearest information desk for more details.".to_string(),
        };

        let departure_time = match self.departure_time {
            Some(time) => time.format("%-I:%M %p").to_string(),
            None => "TBD".to_string(),
        };

        match self.status {
            FlightStatus::Canceled => format!(
                "We're sorry your flight to {} was canceled, here is a $500 voucher.",
                self.destination.city
            ),
            FlightStatus::EnRoute => format!(
                "Your flight to {} is en route. Hope you're on it :)",
                self.destination.city
            ),
            FlightStatus::Scheduled => format!(
                "Your flight to {} is scheduled to depart at {} from terminal: {}.",
                self.destination.city, departure_time, terminal
            ),
            FlightStatus::Boarding => format!(
                "Your flight is boarding, please head to terminal: {} immediately. The doors are closing soon.",
                terminal
            ),
            FlightStatus::Delayed => format!(
                "We're sorry your flight to {} has been delayed, here is a open, half-full bag of pretzels.",
                self.destination.city
            ),
            FlightStatus::Landed => "Your flight has already landed".to_string(),
        }
    }
}

// Sample input format for dates: "DD/MM/YY-HH:MM:SS"
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, BoardError> {
    let format = "%d/%m/%y-%H:%M:%S";
    NaiveDateTime::parse_from_str(datetime_str, format)
        .map_err(|_| BoardError::InvalidDateFormat(datetime_str.to_string()))
}
