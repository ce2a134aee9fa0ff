use super::board_error::BoardError;

#[derive(Debug, PartialEq, Clone)]
pub enum FlightStatus {
    EnRoute,
    Scheduled,
    Canceled,
    Delayed,
    Landed,
    Boarding,
}

impl FlightStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::EnRoute => "En Route",
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Canceled => "Canceled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Landed => "Landed",
            FlightStatus::Boarding => "Boarding",
        }
    }

    pub fn from_str(status: &str) -> Result<FlightStatus, BoardError> {
        match status.to_lowercase().as_str() {
            "en route" | "enroute" => Ok(FlightStatus::EnRoute),
            "scheduled" => Ok(FlightStatus::Scheduled),
            "canceled" => Ok(FlightStatus::Canceled),
            "delayed" => Ok(FlightStatus::Delayed),
            "landed" => Ok(FlightStatus::Landed),
            "boarding" => Ok(FlightStatus::Boarding),
            _ => Err(BoardError::InvalidStatus(status.to_string())),
        }
    }
}
