pub mod attachments;
pub mod entries;
pub mod goals;
pub mod history;
pub mod migrate;
pub mod timezone;
