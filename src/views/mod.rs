pub mod detail_row;
pub mod remove_link;

pub use detail_row::{detail_row_id, render_detail_row};
pub use remove_link::render_remove_link;
