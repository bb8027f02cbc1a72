use super::{failure_page, render_page, Page, Workspace};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reviews_widget_config::StyleMode;
use reviews_widget_render::STYLESHEET;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run_render(
    workspace: &Workspace,
    out: Option<PathBuf>,
    style: Option<StyleMode>,
    input: Option<PathBuf>,
    write_css: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let status = status_output(*output, out.is_none());
    let mut context = workspace.widget_context(input)?;
    if let Some(style) = style {
        context.renderer = context.renderer.with_style(style);
    }

    let page = match &context.source {
        Ok(source) => render_page(source.as_ref(), &context.renderer, context.options).await,
        Err(err) => failure_page("unconfigured", err),
    };

    match &out {
        Some(path) => {
            write_file(path, page.html())?;
            report(&page, path, &status);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.html().as_bytes())?;
            stdout.flush()?;
        }
    }

    if let Some(css_path) = write_css {
        write_file(&css_path, STYLESHEET)?;
        status.success(format!("Stylesheet written to {}", css_path.display()));
    }

    info!(
        operation = "render",
        failed = page.is_failure(),
        style = ?context.renderer.style(),
        bytes = page.html().len(),
        "Render finished"
    );
    Ok(())
}

/// Keep stdout for the HTML when it is streamed there
fn status_output(output: Output, html_on_stdout: bool) -> Output {
    if html_on_stdout {
        output.on_stderr()
    } else {
        output
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| eyre!("Failed to create {}: {}", parent.display(), e))?;
    }
    std::fs::write(path, contents).map_err(|e| eyre!("Failed to write {}: {}", path.display(), e))
}

fn report(page: &Page, path: &Path, output: &Output) {
    match page {
        Page::Widget(_) => output.success(format!("Widget written to {}", path.display())),
        Page::Failure(_) => output.warn(format!(
            "Could not fetch reviews; failure message written to {}",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::output::OutputFormat;

    fn quiet() -> Output {
        Output::new(OutputFormat::Human, true)
    }

    #[test]
    fn test_status_messages_leave_stdout_to_html() {
        let json = Output::new(OutputFormat::Json, false);
        assert!(!status_output(json, true).uses_stdout());
        assert!(status_output(json, false).uses_stdout());
    }

    #[tokio::test]
    async fn test_render_to_file_with_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let saved = saved_response(SAVED_RESPONSE);
        let workspace = Workspace::resolve(Some(dir.path().join("config.toml")));
        let out = dir.path().join("site/widget.html");
        let css = dir.path().join("site/assets/css/styles.css");

        run_render(
            &workspace,
            Some(out.clone()),
            None,
            Some(saved.path().to_path_buf()),
            Some(css.clone()),
            &quiet(),
        )
        .await
        .unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains(r#"href="assets/css/styles.css""#));
        assert!(html.contains("(87 reviews)"));
        assert_eq!(std::fs::read_to_string(&css).unwrap(), STYLESHEET);
    }

    #[tokio::test]
    async fn test_render_inline_style_override() {
        let dir = tempfile::tempdir().unwrap();
        let saved = saved_response(SAVED_RESPONSE);
        let workspace = Workspace::resolve(Some(dir.path().join("config.toml")));
        let out = dir.path().join("widget.html");

        run_render(
            &workspace,
            Some(out.clone()),
            Some(StyleMode::Inline),
            Some(saved.path().to_path_buf()),
            None,
            &quiet(),
        )
        .await
        .unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains("<style>"));
        assert!(!html.contains(r#"rel="stylesheet""#));
    }

    #[tokio::test]
    async fn test_render_failure_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let saved = saved_response("<html>not json</html>");
        let workspace = Workspace::resolve(Some(dir.path().join("config.toml")));
        let out = dir.path().join("widget.html");

        run_render(&workspace, Some(out.clone()), None, Some(saved.path().to_path_buf()), None, &quiet())
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "<p>Invalid response from Google. Check your Place ID or API key.</p>"
        );
    }
}
