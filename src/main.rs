use anyhow::{Result, anyhow};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod ledger;
mod persistence;
mod reservation;
mod state;
mod train;
mod validation;

use persistence::{load_tickets, save_tickets};
use reservation::ReservationError;
use state::AppState;
use validation::{MAX_AGE, MIN_AGE, valid_age, valid_name};

#[derive(Parser)]
#[command(about = "Train seat reservation console")]
struct Args {
    /// Path of the ticket ledger file
    #[arg(long, default_value = "tickets.csv")]
    file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Initialize state with the fixed train catalog
    let mut state = AppState::new();

    // 2. Load persisted tickets and mark their seats
    match load_tickets(&args.file) {
        Ok(tickets) => state.restore_tickets(tickets),
        Err(e) => eprintln!("Warning: Failed to load previous tickets: {e:#}"),
    }

    // 3. Menu loop
    loop {
        println!("\n--- Railway Reservation System ---");
        println!("1. View Trains");
        println!("2. Book Ticket");
        println!("3. Cancel Ticket");
        println!("4. View Tickets");
        println!("5. Exit");

        match read_line("Choice: ")?.as_str() {
            "1" => view_trains(&state),
            "2" => book_ticket(&mut state, &args.file)?,
            "3" => cancel_ticket(&mut state, &args.file)?,
            "4" => view_tickets(&state),
            "5" => {
                if let Err(e) = save_tickets(&args.file, state.ledger.tickets()) {
                    eprintln!("Error saving tickets: {e:#}");
                }
                println!("Thank you!");
                return Ok(());
            }
            _ => println!("Invalid choice."),
        }
    }
}

fn view_trains(state: &AppState) {
    for train in &state.trains {
        println!("{train}");
    }
}

fn view_tickets(state: &AppState) {
    if state.ledger.is_empty() {
        println!("No tickets booked.");
    } else {
        for ticket in state.ledger.tickets() {
            println!("{ticket}");
        }
    }
}

fn book_ticket(state: &mut AppState, ticket_file: &Path) -> Result<()> {
    let name = prompt_name()?;
    let age = prompt_age()?;
    let train_no = prompt_train_no(state)?;

    match reservation::book(state, ticket_file, &name, age, train_no) {
        Ok(ticket) => println!("Ticket Booked! Ticket ID: {}", ticket.id),
        // UnknownTrain cannot surface here, the prompt resolved the train.
        Err(e) => println!("{}", message_for(&e)),
    }
    Ok(())
}

fn cancel_ticket(state: &mut AppState, ticket_file: &Path) -> Result<()> {
    let id = prompt_u32("Enter Ticket ID to cancel: ")?;
    match reservation::cancel(state, ticket_file, id) {
        Ok(_) => println!("Ticket cancelled successfully."),
        Err(e) => println!("{}", message_for(&e)),
    }
    Ok(())
}

fn message_for(e: &ReservationError) -> String {
    match e {
        ReservationError::NoSeatAvailable => {
            "No seat available as per your berth preference.".to_string()
        }
        ReservationError::TicketNotFound(_) => "Ticket not found.".to_string(),
        ReservationError::UnknownTrain(no) => format!("Train {no} not found."),
    }
}

// Prompt helpers. Each re-asks until the input validates, so bad input
// never leaves the interactive layer.

fn prompt_name() -> Result<String> {
    loop {
        let input = read_line("Enter Name: ")?;
        if valid_name(&input) {
            return Ok(input);
        }
        println!("Invalid name. Please enter only alphabets and spaces.");
    }
}

fn prompt_age() -> Result<u32> {
    loop {
        let input = read_line(&format!("Enter Age ({MIN_AGE}-{MAX_AGE}): "))?;
        match input.parse::<u32>() {
            Ok(age) if valid_age(age) => return Ok(age),
            Ok(_) => println!("Age must be between {MIN_AGE} and {MAX_AGE}."),
            Err(_) => println!("Invalid age. Please enter a valid number."),
        }
    }
}

fn prompt_train_no(state: &AppState) -> Result<u32> {
    loop {
        let input = read_line("Enter Train Number: ")?;
        match input.parse::<u32>() {
            Ok(no) if state.find_train(no).is_some() => return Ok(no),
            Ok(_) => println!("Train not found. Please enter a valid train number."),
            Err(_) => println!("Invalid input. Please enter a valid train number."),
        }
    }
}

fn prompt_u32(prompt: &str) -> Result<u32> {
    loop {
        let input = read_line(prompt)?;
        match input.parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(anyhow!("EOF"));
    }
    Ok(line.trim().to_string())
}
