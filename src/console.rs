//! Line based front end for the booking service.
//!
//! Asks for a name, a vehicle type and a slot number, hands them to
//! [`BookingService::book_from_input`] and prints the outcome. Reads from any
//! `BufRead` and writes to any `Write`, so the whole dialogue can be driven
//! from tests.

use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::domain::booking_record::BookingRecord;
use crate::domain::booking_service::BookingService;
use crate::domain::slot::Slot;
use crate::error::{BookingError, ValidationError};

const SEPARATOR: &str = "--------------------------------";

/// Typed at the name prompt to print the slot board instead of booking.
pub const BOARD_COMMAND: &str = "board";

/// Typed at the name prompt to leave the dialogue.
pub const QUIT_COMMAND: &str = "quit";

pub struct Console<R, W> {
    input: R,
    output: W,
    service: BookingService,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, service: BookingService) -> Self {
        Self { input, output, service }
    }

    /// Runs booking dialogues until the input ends or `quit` is entered.
    ///
    /// # Returns
    /// The number of bookings that hold a slot, including ones the store failed to save.
    pub fn run(&mut self) -> io::Result<usize> {
        writeln!(self.output, "{}", "Parking Slot Booking System".bold())?;
        writeln!(self.output, "Type '{}' to list slots, '{}' to exit.", BOARD_COMMAND, QUIT_COMMAND)?;

        let mut booked = 0;
        loop {
            let Some(name) = self.prompt("User Name: ")? else { break };
            match name.trim() {
                QUIT_COMMAND => break,
                BOARD_COMMAND => {
                    let board = render_board(&self.service.registry().snapshot());
                    write!(self.output, "{}", board)?;
                    continue;
                }
                _ => {}
            }

            let Some(vehicle) = self.prompt("Vehicle Type (Car/Bike): ")? else { break };
            let Some(slot) = self.prompt("Slot Number (1-10): ")? else { break };

            let text = match self.service.book_from_input(&name, &vehicle, &slot) {
                Ok(record) => {
                    booked += 1;
                    render_confirmation(&record, &self.service.store().location())
                }
                Err(err) => {
                    if err.accepted_record().is_some() {
                        booked += 1;
                    }
                    render_failure(&err)
                }
            };
            writeln!(self.output, "{}", text)?;
        }

        log::info!("Console session ended after {} booking(s).", booked);
        Ok(booked)
    }

    /// Prints `label` and reads one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn details(record: &BookingRecord) -> String {
    format!(
        "User Name     : {}\nVehicle Type  : {}\n{}\n{}",
        record.name(),
        record.vehicle_category(),
        SEPARATOR,
        format!("Slot {} is BOOKED", record.slot_number()).green().bold()
    )
}

/// Booking details followed by the confirmation line.
pub fn render_confirmation(record: &BookingRecord, location: &str) -> String {
    format!(
        "{}\nSaved in database ({})\n\n{}",
        details(record),
        location,
        format!("Slot {} is booked and saved in database!", record.slot_number()).green()
    )
}

/// Message shown for a rejected booking, or for one that holds its slot but was not saved.
pub fn render_failure(err: &BookingError) -> String {
    if let BookingError::Persistence { record, source } = err {
        return format!("{}\n{}", details(record), format!("NOT saved in database ({})", source).yellow());
    }

    format!("{} {}", "Error:".red().bold(), user_message(err))
}

fn user_message(err: &BookingError) -> String {
    match err {
        BookingError::Validation(ValidationError::EmptyName) => "Name cannot be empty!".to_string(),
        BookingError::Validation(ValidationError::SlotOutOfRange) => "Enter a valid slot number between 1 and 10!".to_string(),
        BookingError::Validation(ValidationError::UnknownVehicle(vehicle)) => {
            format!("Vehicle type must be Car or Bike, got '{}'!", vehicle)
        }
        other => other.to_string(),
    }
}

/// One line per slot, e.g. `Slot  3  Car   free`.
pub fn render_board(slots: &[Slot]) -> String {
    let mut board = String::new();
    for slot in slots {
        let state = if slot.booked { "booked".red() } else { "free".green() };
        board.push_str(&format!("Slot {:>2}  {:<5} {}\n", slot.number.get(), slot.slot_type(), state));
    }
    board
}
