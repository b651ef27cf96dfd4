mod report;
mod summary;

pub use report::render_table;
pub use summary::write_summary;
