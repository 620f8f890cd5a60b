//! Drive Cycle
//!
//! This example accelerates a regular five-gear transmission through every
//! gear, then brakes back to a standstill, shifting whenever the status
//! says a shift is possible.
//!
//! Key concepts:
//! - Pure operations return a new transmission
//! - Status advice drives the shift decisions
//! - `Drive` records the whole cycle
//!
//! Run with: cargo run --example drive_cycle

use gearbox::{Drive, Operation, Status, Transmission};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Drive Cycle ===\n");

    let transmission = match Transmission::new(&[0, 10, 5, 20, 15, 30, 25, 40, 35, 50]) {
        Ok(transmission) => transmission,
        Err(error) => {
            eprintln!("{error}");
            return;
        }
    };
    let mut drive = Drive::new(transmission);

    println!("Accelerating...");
    loop {
        match drive.apply(Operation::IncreaseSpeed) {
            Status::MayIncreaseGear => {
                drive.apply(Operation::IncreaseGear);
                report(&drive);
            }
            Status::MaximumSpeed => break,
            _ => {}
        }
    }
    report(&drive);

    println!("\nBraking...");
    loop {
        match drive.apply(Operation::DecreaseSpeed) {
            Status::DecreaseGearFirst => {
                drive.apply(Operation::DecreaseGear);
                report(&drive);
            }
            Status::MinimumSpeed => break,
            _ => {}
        }
    }
    report(&drive);

    let history = drive.history();
    println!("\n=== Summary ===");
    println!("Operations: {}", history.len());
    println!("Gear changes: {}", history.shift_count());
    println!("Refused: {}", history.rejections().count());
    println!("Gears: {:?}", history.gear_path());

    // Invalid tables are rejected with every reason at once.
    if let Err(error) = Transmission::new(&[5, 10, 12, 20, 15, 30, 25, 40, 35, 50]) {
        println!("\nRejected table: {error}");
    }
}

fn report(drive: &Drive) {
    let transmission = drive.transmission();
    println!(
        "  gear {} at speed {:>2}: {}",
        transmission.gear(),
        transmission.speed(),
        transmission.status_message()
    );
}
