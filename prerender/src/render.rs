use footer_ui::StaticFooter;
use yew::ServerRenderer;

use crate::args::PrerenderArgs;

/// Render the footer as configured by `args`.
pub async fn render(args: &PrerenderArgs) -> String {
    let fragment = ServerRenderer::<StaticFooter>::new()
        .hydratable(args.hydratable)
        .render()
        .await;
    tracing::debug!(bytes = fragment.len(), "rendered footer");

    if args.document {
        wrap_document(&fragment)
    } else {
        fragment
    }
}

fn wrap_document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Northwind Supply</title>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fragment_is_a_bare_footer() {
        let html = render(&PrerenderArgs::default()).await;
        assert!(html.starts_with("<footer"));
        assert!(html.ends_with("</footer>"));
        assert!(!html.contains("<!--"));
    }

    #[tokio::test]
    async fn document_wraps_fragment() {
        let args = PrerenderArgs {
            document: true,
            ..Default::default()
        };
        let html = render(&args).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<body>\n<footer"));
    }

    #[tokio::test]
    async fn hydratable_output_keeps_markers() {
        let args = PrerenderArgs {
            hydratable: true,
            ..Default::default()
        };
        assert!(render(&args).await.contains("<!--"));
    }
}
