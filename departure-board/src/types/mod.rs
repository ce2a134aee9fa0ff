mod airport;
pub use airport::Airport;

mod board_error;
pub use board_error::BoardError;

mod flight;
pub use flight::Flight;

mod flight_status;
pub use flight_status::FlightStatus;
