use serde::Serialize;
use crate::slide::SlideSet;
use crate::summary::Summary;

/// Everything a renderer needs for one widget, fully resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Widget {
    pub summary: Summary,
    pub desktop: SlideSet,
    pub mobile: SlideSet,
}
