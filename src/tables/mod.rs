mod extract;

#[cfg(test)]
mod tests;

pub use extract::{TableFragment, extract_tables};

/// Marker the parser prints before each HTML table segment
pub const TABLE_START: &str = "<<<TABLE_START>>>";

/// Marker the parser prints after each HTML table segment
pub const TABLE_END: &str = "<<<TABLE_END>>>";
