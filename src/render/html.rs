//! Embeddable HTML fragment for on-screen preview.

use crate::model::{ContactLine, Document, Footer, Line, LineRole, Locale, Section, SectionBody};

use super::{escape_html, PageStyle, RenderOptions};

const HEADING_STYLE: &str =
    "color: #000; font-size: 14pt; font-weight: bold; margin: 0 0 10px 0; \
     text-transform: uppercase; border-bottom: 1px solid #ccc; padding-bottom: 5px;";

/// Convert a document to an HTML fragment.
pub fn to_fragment(doc: &Document, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// HTML fragment renderer.
///
/// Every piece of user text goes through [`escape_html`]; only the fixed
/// template and the configured [`PageStyle`] are written raw.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to a fragment.
    pub fn render(&self, doc: &Document) -> String {
        let style = &self.options.page_style;
        let mut output = String::new();

        output.push_str(&format!(
            "<div style=\"max-width: {}; margin: 0 auto; padding: {}; font-family: {}; \
             font-size: {}; line-height: {}; color: {};\">\n",
            style.max_width,
            style.padding,
            style.font_family,
            style.font_size,
            style.line_height,
            style.color
        ));

        if let Some(ref name) = doc.header {
            self.render_header(&mut output, name);
        }
        if !doc.contact.is_empty() {
            self.render_contact(&mut output, &doc.contact);
        }
        for section in &doc.sections {
            self.render_section(&mut output, section);
        }
        if let Some(ref footer) = doc.footer {
            self.render_footer(&mut output, footer, doc);
        }

        output.push_str("</div>\n");
        output
    }

    fn render_header(&self, output: &mut String, name: &str) {
        let style = &self.options.page_style;
        output.push_str("<div style=\"text-align: center; margin-bottom: 30px;\">\n");
        output.push_str(&format!(
            "<h1 style=\"color: #000; font-size: 20pt; font-weight: bold; margin: 0; \
             font-family: {};\">{}</h1>\n",
            style.font_family,
            escape_html(name)
        ));
        output.push_str(
            "<hr style=\"border: none; height: 2px; background-color: #000; margin: 15px 0;\">\n",
        );
        output.push_str("</div>\n");
    }

    fn render_contact(&self, output: &mut String, contact: &[ContactLine]) {
        let size = &self.options.page_style.font_size;
        output.push_str(&format!(
            "<div style=\"text-align: center; margin-bottom: 30px; font-size: {};\">\n",
            size
        ));
        for line in contact {
            let inner = match line {
                ContactLine::Text { parts } => parts
                    .iter()
                    .map(|p| escape_html(p))
                    .collect::<Vec<_>>()
                    .join(" • "),
                ContactLine::Links { links } => links
                    .iter()
                    .map(|link| {
                        format!(
                            "<a href=\"{}\" target=\"_blank\" style=\"color: {}; \
                             text-decoration: underline;\">{}</a>",
                            escape_html(&link.url),
                            self.options.page_style.link_color,
                            escape_html(&link.label)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" • "),
            };
            output.push_str(&format!(
                "<p style=\"margin: 5px 0; font-size: {};\">{}</p>\n",
                size, inner
            ));
        }
        output.push_str("</div>\n");
    }

    fn render_section(&self, output: &mut String, section: &Section) {
        let style = &self.options.page_style;
        output.push_str("<div style=\"margin-bottom: 25px;\">\n");
        output.push_str(&format!(
            "<h2 style=\"{} font-family: {};\">{}</h2>\n",
            HEADING_STYLE,
            style.font_family,
            escape_html(&section.title)
        ));
        output.push_str(&format!(
            "<div style=\"margin-left: 10px; font-size: {};\">\n",
            style.font_size
        ));

        match &section.body {
            SectionBody::Paragraph(text) => {
                output.push_str(&format!(
                    "<p style=\"margin: 0; font-style: italic; text-align: justify;\">{}</p>\n",
                    escape_html(text)
                ));
            }
            SectionBody::Lines(lines) => {
                for line in lines {
                    render_line(output, line);
                }
            }
        }

        output.push_str("</div>\n</div>\n");
    }

    fn render_footer(&self, output: &mut String, footer: &Footer, doc: &Document) {
        let style = &self.options.page_style;
        let locale = doc.metadata.locale;
        output.push_str(&format!(
            "<div style=\"margin-top: 40px; border-top: 1px solid #ccc; padding-top: 10px; \
             text-align: center; font-size: 10pt; color: {}; font-family: {};\">\n",
            style.color, style.font_family
        ));
        output.push_str(&format!(
            "<p style=\"margin: 0;\">{} - Curriculum Vitae</p>\n",
            escape_html(&footer.name)
        ));
        if let Some(date) = footer.generated_on {
            let prefix = match locale {
                Locale::En => "Generated on",
                Locale::Es => "Generado el",
            };
            output.push_str(&format!(
                "<p style=\"margin: 0;\">{} {}</p>\n",
                prefix,
                escape_html(&locale.format_date(date))
            ));
        }
        output.push_str("</div>\n");
    }
}

fn render_line(output: &mut String, line: &Line) {
    let text = escape_html(&line.text);
    let html = match line.role {
        LineRole::Institution => {
            format!("<p style=\"margin: 3px 0; font-style: italic;\">{}</p>", text)
        }
        LineRole::DateRange => format!(
            "<p style=\"margin: 3px 0; font-style: italic; color: #000;\">{}</p>",
            text
        ),
        LineRole::BulletItem => format!("<p style=\"margin: 2px 0 2px 15px;\">• {}</p>", text),
        LineRole::CategoryContent => format!(
            "<p style=\"margin: 3px 0;\"><strong>{}:</strong> {}</p>",
            escape_html(line.category.as_deref().unwrap_or_default()),
            text
        ),
        LineRole::Heading => format!(
            "<p style=\"margin: 3px 0; font-weight: bold;\">{}</p>",
            text
        ),
        LineRole::Plain => format!("<p style=\"margin: 3px 0;\">{}</p>", text),
    };
    output.push_str(&html);
    output.push('\n');
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Container style string, exposed for callers that embed the fragment.
pub fn container_style(style: &PageStyle) -> String {
    format!(
        "font-family: {}; font-size: {}; line-height: {}; color: {};",
        style.font_family, style.font_size, style.line_height, style.color
    )
}
