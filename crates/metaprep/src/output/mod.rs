//! Serialization of pipeline artifacts back to delimited files.

mod writer;

pub use writer::{
    table_to_csv_string, write_json, write_summary, write_table, write_token_frequency,
};
