pub mod add;
pub mod aggregate;
pub mod config;
pub mod del;
pub mod derive;
pub mod edit;
pub mod ledger;
pub mod log;
