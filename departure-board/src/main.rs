mod board;
mod fares;
mod types;

use crate::board::DepartureBoard;
use crate::fares::{calculate_airfare, format_usd};
use crate::types::{Airport, BoardError, Flight};
use logger::Logger;
use std::collections::HashMap;
use std::io::{self, Write};

const LOG_FILE: &str = "departures.log";

// Limpiar pantalla (compatible con la mayoría de terminales)
fn clean_scr() {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush().unwrap();
}

fn print_help() {
    clean_scr();
    println!("Available commands:");
    println!("  add-airport <code> <city>");
    println!("    Register an airport under a short code.");
    println!("  set-airport <code>");
    println!("    Point the board at a registered airport.");
    println!("  add-flight <flight_number> <airline> <destination_code> <departure_time[DD/MM/YY-HH:MM:SS] or -> <terminal or -> <status>");
    println!("    Add a new flight to the board. Use '-' for a time or terminal not set yet.");
    println!("  list-departures");
    println!("    Shows the departures board.");
    println!("  alert-passengers");
    println!("    Prints the alert message for every flight.");
    println!("  airfare <checked_bags> <miles> <travelers>");
    println!("    Calculates the total airfare.");
    println!("  exit");
    println!("    Closes this application.");
    println!("  -h or help");
    println!("    Show this help message.");
}

fn main() -> Result<(), BoardError> {
    let mut board = DepartureBoard::new();
    let mut airports: HashMap<String, Airport> = HashMap::new();
    let mut logger =
        Logger::to_file(LOG_FILE).map_err(|_| BoardError::new("Could not open log file"))?;

    loop {
        println!("\nEnter command (type '-h' or 'help' for options): ");
        let mut command = String::new();
        io::stdin()
            .read_line(&mut command)
            .map_err(|_| BoardError::InvalidInput)?;
        let args: Vec<&str> = command.trim().split_whitespace().collect();

        if args.is_empty() {
            continue;
        }

        match args[0] {
            "add-airport" => {
                if args.len() < 3 {
                    eprintln!("Usage: add-airport <code> <city>");
                    continue;
                }

                let city = args[2..].join(" ");
                let airport = Airport::new(city);
                airports.insert(args[1].to_string(), airport);
                logger.info(&format!("Airport '{}' registered", args[1]));
            }

            "set-airport" => {
                if args.len() != 2 {
                    eprintln!("Usage: set-airport <code>");
                    continue;
                }

                match airports.get(args[1]) {
                    Some(airport) => {
                        board.set_airport(airport.clone());
                        logger.info(&format!("Board set to airport '{}'", args[1]));
                    }
                    None => {
                        eprintln!("{}", BoardError::AirportNotFound(args[1].to_string()));
                        logger.error(&format!("Airport '{}' not registered", args[1]));
                    }
                }
            }

            "add-flight" => {
                if args.len() != 7 {
                    eprintln!("Usage: add-flight <flight_number> <airline> <destination_code> <departure_time[DD/MM/YY-HH:MM:SS] or -> <terminal or -> <status>");
                    continue;
                }

                match Flight::new_from_console(
                    &airports, args[1], args[2], args[3], args[4], args[5], args[6],
                ) {
                    Ok(flight) => {
                        logger.info(&format!("Flight {} added to the board", args[1]));
                        board.add_flight(flight);
                        println!("Flight added.");
                    }
                    Err(e) => {
                        eprintln!("{}", e);
                        logger.error(&format!("Could not add flight {}: {}", args[1], e));
                    }
                }
            }

            "list-departures" => {
                clean_scr();
                board.print_departures();
            }

            "alert-passengers" => {
                board.alert_passengers();
            }

            "airfare" => {
                if args.len() != 4 {
                    eprintln!("Usage: airfare <checked_bags> <miles> <travelers>");
                    continue;
                }

                let parsed: Result<Vec<u32>, _> = args[1..].iter().map(|a| a.parse()).collect();
                match parsed {
                    Ok(values) => {
                        let total = calculate_airfare(values[0], values[1], values[2]);
                        println!("Total airfare: {}", format_usd(total));
                    }
                    Err(_) => eprintln!("{}", BoardError::InvalidInput),
                }
            }

            "-h" | "help" => {
                print_help();
            }

            "exit" => {
                break;
            }

            _ => {
                eprintln!("Invalid command. Use -h for help.");
            }
        }
    }

    Ok(())
}
