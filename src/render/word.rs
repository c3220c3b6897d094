//! Standalone HTML document that word processors open as a `.doc` file.

use crate::model::Document;

use super::html::{container_style, HtmlRenderer};
use super::{escape_html, RenderOptions};

/// MIME type of the exported file.
pub const WORD_MIME_TYPE: &str = "application/msword";

/// Print margin applied by `@page`.
pub const PAGE_MARGIN: &str = "0.75in";

/// Paper size applied by `@page`.
pub const PAGE_SIZE: &str = "letter";

/// Office settings: open in print layout at 90% with revision marks hidden.
const WORD_SETTINGS: &str = "<!--[if gte mso 9]>
<xml>
<w:WordDocument>
<w:View>Print</w:View>
<w:Zoom>90</w:Zoom>
<w:DoNotPromptForConvert/>
<w:DoNotShowRevisions/>
<w:DoNotShowMarkup/>
<w:DoNotShowComments/>
</w:WordDocument>
</xml>
<![endif]-->
";

/// Wrap the rendered fragment in a complete document titled `title`.
pub fn to_standalone_document(doc: &Document, title: &str, options: &RenderOptions) -> String {
    let fragment = HtmlRenderer::new(options.clone()).render(doc);
    let mut output = String::with_capacity(fragment.len() + 1024);

    output.push_str("<!DOCTYPE html>\n");
    output.push_str(&format!(
        "<html lang=\"{}\" xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\">\n",
        doc.metadata.locale.lang()
    ));
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if let Some(ref author) = doc.metadata.author {
        output.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape_html(author)
        ));
    }
    output.push_str(WORD_SETTINGS);
    output.push_str("<style>\n");
    output.push_str(&format!(
        "@page {{ margin: {}; size: {}; }}\n",
        PAGE_MARGIN, PAGE_SIZE
    ));
    output.push_str(&format!(
        "body {{ {} margin: 0; }}\n",
        container_style(&options.page_style)
    ));
    output.push_str("h1, h2 { color: #000; page-break-after: avoid; }\n");
    output.push_str("p { margin: 0.1em 0; orphans: 2; widows: 2; }\n");
    output.push_str("</style>\n");
    output.push_str("</head>\n");
    output.push_str("<body>\n");
    output.push_str(&fragment);
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// Standalone document titled with the document's own title.
pub fn to_word_document(doc: &Document, options: &RenderOptions) -> String {
    to_standalone_document(doc, doc.title(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;

    fn doc() -> Document {
        let mut doc = Document::new();
        doc.metadata = Metadata {
            title: "CV - Ana & Co".into(),
            author: Some("Ana & Co".into()),
            ..Default::default()
        };
        doc.header = Some("Ana & Co".into());
        doc
    }

    #[test]
    fn test_word_document_metadata() {
        let out = to_word_document(&doc(), &RenderOptions::default());
        assert!(out.starts_with("<!DOCTYPE html>\n<html lang=\"en\""));
        assert!(out.contains("xmlns:w=\"urn:schemas-microsoft-com:office:word\""));
        assert!(out.contains("<title>CV - Ana &amp; Co</title>"));
        assert!(out.contains("<w:View>Print</w:View>"));
        assert!(out.contains("@page { margin: 0.75in; size: letter; }"));
        assert!(out.contains("page-break-after: avoid;"));
        assert!(out.contains("orphans: 2; widows: 2;"));
        assert!(out.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_word_document_embeds_fragment() {
        let options = RenderOptions::default();
        let fragment = HtmlRenderer::new(options.clone()).render(&doc());
        let out = to_word_document(&doc(), &options);
        assert!(out.contains(&fragment));
    }

    #[test]
    fn test_custom_title() {
        let out = to_standalone_document(&doc(), "Résumé <draft>", &RenderOptions::default());
        assert!(out.contains("<title>Résumé &lt;draft&gt;</title>"));
    }
}
