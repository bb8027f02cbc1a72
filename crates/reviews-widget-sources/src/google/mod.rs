pub mod api;
pub mod client;

pub use api::{parse_place_details, review_page_url};
pub use client::GooglePlacesClient;
