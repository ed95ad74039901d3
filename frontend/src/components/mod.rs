pub mod drivematch;
pub mod list_entry;
