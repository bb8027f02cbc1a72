pub mod traits;
pub mod error;
pub mod factory;
pub mod file;
pub mod google;

pub use traits::ReviewSource;
pub use error::{SourceError, FETCH_FAILED_MESSAGE, INVALID_RESPONSE_MESSAGE};
pub use factory::create_source;
pub use file::FileSource;
pub use google::{GooglePlacesClient, parse_place_details, review_page_url};
