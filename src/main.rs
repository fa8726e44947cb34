//! rideledger main entrypoint.

use rideledger::run;
use rideledger::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
