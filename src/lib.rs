pub mod args;
pub mod costs;
pub mod progress;
pub mod ruleset;
pub mod store;
pub mod techtree;
pub mod types;
pub mod ui;
