use super::{log_source_error, Workspace};
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use reviews_widget_core::{build_widget_now, PipelineOptions};
use reviews_widget_models::{StarGlyph, StarRow, Widget};
use reviews_widget_sources::create_source;
use std::path::PathBuf;

pub async fn run_reviews(workspace: &Workspace, input: Option<PathBuf>, output: &Output) -> Result<()> {
    let config = workspace.load_run_config()?;
    let credentials = workspace.load_credentials()?;
    let source = create_source(&config, &credentials, input).map_err(|e| {
        log_source_error("unconfigured", &e);
        eyre!("{}", e)
    })?;

    let details = source.fetch_place_details().await.map_err(|e| {
        log_source_error(source.source_name(), &e);
        output.error(e.user_message());
        eyre!("{}", e)
    })?;

    let options = PipelineOptions {
        name_max_length: config.widget.name_max_length,
    };
    let widget = build_widget_now(&details, options);

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            println!("{}", reviews_table(&widget));
            output.info(format!(
                "{} of 5 from {} reviews; {} shown",
                widget.summary.formatted_rating(),
                widget.summary.total_review_count,
                widget.mobile.len()
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let value = serde_json::to_value(&widget)
                .map_err(|e| eyre!("Failed to serialize reviews: {}", e))?;
            output.json(&value);
        }
    }
    Ok(())
}

fn star_text(stars: &StarRow) -> String {
    stars
        .iter()
        .map(|glyph| match glyph {
            StarGlyph::Filled => '★',
            StarGlyph::Empty => '☆',
        })
        .collect()
}

fn reviews_table(widget: &Widget) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Posted").add_attribute(Attribute::Bold),
        Cell::new("Review").add_attribute(Attribute::Bold),
    ]);

    // Every review sits in the single desktop slide, newest first
    for review in widget.desktop.iter().flat_map(|slide| slide.reviews.iter()) {
        table.add_row(vec![
            Cell::new(&review.display_name),
            Cell::new(star_text(&review.stars)).fg(Color::Yellow),
            Cell::new(review.relative_age.to_string()),
            Cell::new(&review.record.text),
        ]);
    }
    table
}
