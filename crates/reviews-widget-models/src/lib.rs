pub mod place;
pub mod record;
pub mod display;
pub mod slide;
pub mod summary;
pub mod widget;

pub use place::{PlaceDetails, PlaceDetailsResponse, RawReview};
pub use record::{ReviewRecord, DEFAULT_AUTHOR_NAME, PLACEHOLDER_PHOTO_URL};
pub use display::{DisplayReview, RelativeAge, StarGlyph, StarRow};
pub use slide::{Slide, SlideLayout, SlideSet};
pub use summary::Summary;
pub use widget::Widget;
