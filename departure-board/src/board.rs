use crate::types::{Airport, Flight};

/// In-memory departures board for a single airport.
pub struct DepartureBoard {
    departures: Vec<Flight>,
    pub current_airport: Airport,
}

impl DepartureBoard {
    pub fn new() -> Self {
        DepartureBoard {
            departures: Vec::new(),
            current_airport: Airport::new("New York City (JFK)".to_string()),
        }
    }

    pub fn with_airport(airport: Airport) -> Self {
        DepartureBoard {
            departures: Vec::new(),
            current_airport: airport,
        }
    }

    /// Adds a flight to the board.
    pub fn add_flight(&mut self, flight: Flight) {
        self.departures.push(flight);
    }

    pub fn set_airport(&mut self, airport: Airport) {
        self.current_airport = airport;
    }

    pub fn departures(&self) -> &[Flight] {
        &self.departures
    }

    /// Prints the departures listing for the current airport.
    pub fn print_departures(&self) {
        println!("Departures from {}\n", self.current_airport.city);

        if self.departures.is_empty() {
            println!("No flights available.");
            return;
        }

        for flight in &self.departures {
            println!("{}", flight.board_entry());
        }
    }

    /// Prints an alert message for the passengers of every flight on the board.
    pub fn alert_passengers(&self) {
        for flight in &self.departures {
            println!("{}", flight.alert_message());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::FlightStatus;

    #[test]
    fn new_board_defaults_to_jfk() {
        let board = DepartureBoard::new();
        assert_eq!(board.current_airport.city, "New York City (JFK)");
        assert!(board.departures().is_empty());
    }

    #[test]
    fn with_airport_uses_given_airport() {
        let board = DepartureBoard::with_airport(Airport::new("Tokyo (NRT)".to_string()));
        assert_eq!(board.current_airport.city, "Tokyo (NRT)");
    }

    #[test]
    fn add_flight_appends_to_departures() {
        let mut board = DepartureBoard::new();
        board.add_flight(Flight::new(
            Airport::new("Los Angeles (LAX)".to_string()),
            "Delta Air Lines".to_string(),
            "DL 423".to_string(),
            None,
            Some("4".to_string()),
            FlightStatus::Scheduled,
        ));
        board.add_flight(Flight::new(
            Airport::new("Tokyo (NRT)".to_string()),
            "United Airlines".to_string(),
            "UA 7998".to_string(),
            None,
            None,
            FlightStatus::Canceled,
        ));

        assert_eq!(board.departures().len(), 2);
        assert_eq!(board.departures()[0].flight_number, "DL 423");
        assert_eq!(board.departures()[1].flight_number, "UA 7998");
    }

    #[test]
    fn set_airport_replaces_current_airport() {
        let mut board = DepartureBoard::new();
        board.set_airport(Airport::new("Las Vegas (LAS)".to_string()));
        assert_eq!(board.current_airport.city, "Las Vegas (LAS)");
    }
}
