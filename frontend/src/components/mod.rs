pub mod handlers;
pub mod header;
pub mod notifications;
pub mod preview_area;
pub mod results;
pub mod upload_form;
pub mod utils;
