// HTML fragments for stars, cards and accordion entries

use reviews_widget_models::{DisplayReview, Slide, StarGlyph, StarRow};
use crate::escape::escape;

const FILLED_STAR: &str = r#"<i class="star filled">&#9733;</i>"#;
const EMPTY_STAR: &str = r#"<i class="star">&#9734;</i>"#;

/// Shared attribute values, already escaped
pub struct Links<'a> {
    pub review_url: &'a str,
    pub badge_src: &'a str,
}

pub fn star_row(stars: &StarRow) -> String {
    stars
        .iter()
        .map(|glyph| match glyph {
            StarGlyph::Filled => FILLED_STAR,
            StarGlyph::Empty => EMPTY_STAR,
        })
        .collect()
}

fn verified_badge(links: &Links<'_>) -> String {
    format!(
        r#"<a href="{url}" target="_blank"><img src="{badge}" alt="Verified Badge" class="verified-badge" title="Verified reviewer on Google"></a>"#,
        url = links.review_url,
        badge = links.badge_src,
    )
}

pub fn review_card(review: &DisplayReview, links: &Links<'_>) -> String {
    let age = review.relative_age.to_string();
    format!(
        r#"          <div class="review-card">
            <div class="review-author">
              <img src="{photo}" alt="Reviewer">
              <div>
                <h3 class="reviewer-name">
                  <a href="{url}" target="_blank">{name}</a>
                  {badge}
                </h3>
                <span class="review-time" title="Review posted {age}">{age}</span>
              </div>
            </div>
            <div class="review-rating">{stars}</div>
            <p class="review-text">{text}</p>
            <a class="read-more" href="{url}" target="_blank">Read more</a>
          </div>
"#,
        photo = escape(&review.record.photo_url),
        url = links.review_url,
        name = escape(&review.display_name),
        badge = verified_badge(links),
        age = escape(&age),
        stars = star_row(&review.stars),
        text = escape(&review.record.text),
    )
}

/// One desktop slide; an empty slide gets a placeholder card
pub fn desktop_slide(slide: &Slide, links: &Links<'_>) -> String {
    let mut html = format!(
        "        <div class=\"slide\" style=\"--reviews-per-slide: {};\">\n",
        slide.reviews.len().max(1)
    );

    if slide.is_empty() {
        html.push_str("          <div class=\"review-card\"><p>No review available.</p></div>\n");
    } else {
        for review in &slide.reviews {
            html.push_str(&review_card(review, links));
        }
    }

    html.push_str("        </div>\n");
    html
}

/// Accordion entry; shows the full author name rather than the truncated one
pub fn accordion_item(review: &DisplayReview, links: &Links<'_>) -> String {
    format!(
        r#"      <div class="accordion-item">
        <button class="accordion-toggle">
          <img src="{photo}" alt="Reviewer">
          <span>
            {name}
            {badge}
            <span class="stars-inline">{stars}</span>
          </span>
        </button>
        <div class="accordion-content">
          <p class="review-text">{text}</p>
          <div class="review-meta">
            <span>{age}</span> | <a href="{url}" target="_blank">Read more on Google</a>
          </div>
        </div>
      </div>
"#,
        photo = escape(&review.record.photo_url),
        name = escape(&review.record.author_name),
        badge = verified_badge(links),
        stars = star_row(&review.stars),
        text = escape(&review.record.text),
        age = escape(&review.relative_age.to_string()),
        url = links.review_url,
    )
}
