mod html;
mod notice;
mod views;

pub use html::escape;
pub use notice::Notice;
pub use views::{edit_page, index_page};
