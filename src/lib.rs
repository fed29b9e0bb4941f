pub mod cli;
pub mod config;
pub mod customer;
pub mod logging;
pub mod ui;
