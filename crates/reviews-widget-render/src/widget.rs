use reviews_widget_config::{StyleMode, WidgetConfig};
use reviews_widget_models::Widget;
use reviews_widget_sources::{review_page_url, SourceError};
use std::collections::HashMap;
use tracing::debug;
use crate::escape::escape;
use crate::markup::{accordion_item, desktop_slide, star_row, Links};
use crate::template::fill;

const PAGE_TEMPLATE: &str = include_str!("templates/widget.html");

/// Stylesheet the page links to (external mode) or embeds (inline mode)
pub const STYLESHEET: &str = include_str!("templates/styles.css");

/// Turns a resolved [`Widget`] into a standalone HTML page.
///
/// Only markup and escaping happen here; every business rule has already
/// been applied by the pipeline.
pub struct WidgetRenderer {
    config: WidgetConfig,
    review_url: String,
}

impl WidgetRenderer {
    pub fn new(config: &WidgetConfig, place_id: Option<&str>) -> Self {
        Self {
            config: config.clone(),
            review_url: review_page_url(place_id.unwrap_or_default()),
        }
    }

    pub fn with_style(mut self, style: StyleMode) -> Self {
        self.config.style = style;
        self
    }

    pub fn style(&self) -> StyleMode {
        self.config.style
    }

    fn style_block(&self) -> String {
        match self.config.style {
            StyleMode::External => format!(
                r#"<link rel="stylesheet" href="{}">"#,
                escape(&self.config.stylesheet_href)
            ),
            StyleMode::Inline => format!("<style>\n{}</style>", STYLESHEET),
        }
    }

    pub fn render(&self, widget: &Widget) -> String {
        let review_url = escape(&self.review_url).into_owned();
        let badge_src = escape(&self.config.badge_src).into_owned();
        let links = Links {
            review_url: &review_url,
            badge_src: &badge_src,
        };

        let desktop_slides: String = widget
            .desktop
            .iter()
            .map(|slide| desktop_slide(slide, &links))
            .collect();

        let mobile_items: String = widget
            .mobile
            .iter()
            .flat_map(|slide| slide.reviews.iter())
            .map(|review| accordion_item(review, &links))
            .collect();

        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("STYLE", self.style_block());
        values.insert("HEADING", escape(&self.config.heading).into_owned());
        values.insert("LOGO_SRC", escape(&self.config.logo_src).into_owned());
        values.insert("SCORE", widget.summary.formatted_rating());
        values.insert("SUMMARY_STARS", star_row(&widget.summary.stars));
        values.insert("TOTAL_REVIEWS", widget.summary.total_review_count.to_string());
        values.insert("REVIEW_URL", review_url.clone());
        values.insert("SLIDE_COUNT", widget.desktop.len().max(1).to_string());
        values.insert("DESKTOP_SLIDES", desktop_slides);
        values.insert("MOBILE_ITEMS", mobile_items);

        let html = fill(PAGE_TEMPLATE, &values);
        debug!(
            operation = "render_widget",
            desktop_slides = widget.desktop.len(),
            mobile_slides = widget.mobile.len(),
            bytes = html.len(),
            "Rendered widget"
        );
        html
    }
}

/// Fixed paragraph served instead of the widget when fetching failed
pub fn render_failure(err: &SourceError) -> String {
    format!("<p>{}</p>", escape(err.user_message()))
}
