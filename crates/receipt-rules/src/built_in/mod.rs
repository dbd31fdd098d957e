//! Built-in rules provided by the engine, in scoring order.

// Retailer rules
pub mod retailer_name;

// Total amount rules
pub mod quarter_multiple;
pub mod round_dollar;

// Item rules
pub mod description_length;
pub mod item_pairs;

// Purchase date & time rules
pub mod afternoon_window;
pub mod odd_day;
