//! HTML emission for a [`DocumentView`]. The preview endpoint returns this
//! markup for the client to place inside its virtual page; the print
//! adapter wraps the same markup in a print-isolated document.

use std::fmt::Write;

use crate::render::document::{Block, DocumentView};

/// Escapes text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Emits the document as a self-contained `<div>` subtree. Design
/// parameters land as inline styles; the accent color is exposed as a
/// `--accent-color` custom property consumed by section headings.
pub fn document_html(view: &DocumentView) -> String {
    let style = &view.style;
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"resume-template-body\" style=\"font-family: {}; font-size: {}; \
         line-height: {}; padding: {}; --accent-color: {};\">",
        escape(&style.font_family),
        escape(&style.font_size),
        escape(&style.line_height),
        style.padding.as_css_padding(),
        escape(&style.accent_color),
    );
    for block in &view.blocks {
        write_block(&mut out, block);
    }
    out.push_str("</div>");
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Section { title, children } => {
            out.push_str("<section>");
            let _ = write!(
                out,
                "<h2 style=\"color: var(--accent-color); border-bottom: 1px solid \
                 var(--accent-color);\">{}</h2>",
                escape(title)
            );
            for c in children {
                write_block(out, c);
            }
            out.push_str("</section>");
        }
        Block::Entry { children } => {
            out.push_str("<div class=\"page-break-inside-avoid\">");
            for c in children {
                write_block(out, c);
            }
            out.push_str("</div>");
        }
        Block::Heading {
            level,
            text,
            justify,
        } => {
            let level = (*level).clamp(1, 6);
            match justify {
                Some(j) => {
                    let _ = write!(
                        out,
                        "<h{level} style=\"text-align: {};\">{}</h{level}>",
                        j.as_css(),
                        escape(text)
                    );
                }
                None => {
                    let _ = write!(out, "<h{level}>{}</h{level}>", escape(text));
                }
            }
        }
        Block::Paragraph {
            text,
            justify,
            italic,
        } => {
            out.push_str("<p style=\"");
            if let Some(j) = justify {
                let _ = write!(out, "text-align: {};", j.as_css());
            }
            if *italic {
                out.push_str("font-style: italic;");
            }
            let _ = write!(out, "\">{}</p>", escape(text));
        }
        Block::Split { left, right } => {
            let _ = write!(
                out,
                "<div style=\"display: flex; justify-content: space-between;\">\
                 <span>{}</span><span>{}</span></div>",
                escape(left),
                escape(right)
            );
        }
        Block::Bullets { items } => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", escape(item));
            }
            out.push_str("</ul>");
        }
        Block::Columns { columns } => {
            out.push_str("<div style=\"display: flex;\">");
            for column in columns {
                out.push_str("<div style=\"flex: 1;\">");
                for c in column {
                    write_block(out, c);
                }
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        Block::Contacts { justify, items } => {
            let _ = write!(
                out,
                "<div class=\"contact-row\" style=\"text-align: {};\">",
                justify.as_css()
            );
            for (i, contact) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str("<span class=\"contact-sep\"> · </span>");
                }
                match &contact.href {
                    Some(href) => {
                        let _ = write!(
                            out,
                            "<a href=\"{}\">{}</a>",
                            escape(href),
                            escape(&contact.text)
                        );
                    }
                    None => {
                        let _ = write!(out, "<span>{}</span>", escape(&contact.text));
                    }
                }
            }
            out.push_str("</div>");
        }
        Block::Link { text, href } => {
            let _ = write!(
                out,
                "<a href=\"{}\">{}</a>",
                escape(href),
                escape(text)
            );
        }
    }
}
