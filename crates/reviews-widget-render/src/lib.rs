pub mod escape;
pub mod markup;
pub mod template;
pub mod widget;

pub use widget::{render_failure, WidgetRenderer, STYLESHEET};
