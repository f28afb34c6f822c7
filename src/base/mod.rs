mod activity;
mod barchart;
mod category;
mod cents;
mod charset;
mod config;
mod date;
mod datepart;
mod expense;
mod fs;
mod hours;
mod id;
mod interval;
mod table;

pub mod csvout;
pub mod report;
pub mod stats;
pub mod xlsx;

pub use activity::Activity;
pub use barchart::Config as BarchartConfig;
pub use barchart::Entry as BarchartEntry;
pub use category::Category;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use expense::Expense;
pub use fs::Fs;
pub use fs::Serde;
pub use hours::Hours;
pub use id::Id;
pub use interval::Interval;
pub use table::Record;
pub use table::Table;
