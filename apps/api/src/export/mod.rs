//! Print/Export adapter — wraps a rendered document in a print-isolated
//! HTML page whose `@page` rules match the resume's paper size and
//! margins exactly, with the browser's injected headers/footers and the
//! on-screen preview chrome neutralized.

pub mod handlers;

use std::fmt::Write;

use crate::design::paper_css;
use crate::models::resume::{DesignSettings, Resume};
use crate::render::html::document_html;
use crate::render::registry::TemplateRegistry;

/// Print-specific CSS for one resume. Physical units only: the `@page`
/// size keyword matches the paper, margins are in inches, and all six
/// margin boxes are forced empty so the browser cannot inject headers
/// or footers.
pub fn print_css(design: &DesignSettings) -> String {
    let (size_keyword, _, _) = paper_css(design.paper_size);
    let mut css = String::new();
    let _ = write!(
        css,
        "@media print {{\n\
         @page {{\n\
         size: {size};\n\
         margin: {tb}in {lr}in;\n\
         @top-left {{ content: '' }}\n\
         @top-center {{ content: '' }}\n\
         @top-right {{ content: '' }}\n\
         @bottom-left {{ content: '' }}\n\
         @bottom-center {{ content: '' }}\n\
         @bottom-right {{ content: '' }}\n\
         }}\n\
         body {{\n\
         margin: 0;\n\
         -webkit-print-color-adjust: exact !important;\n\
         print-color-adjust: exact !important;\n\
         }}\n\
         #resume-preview {{\n\
         box-shadow: none !important;\n\
         margin: 0 !important;\n\
         border: none !important;\n\
         transform: none !important;\n\
         height: auto !important;\n\
         min-height: unset !important;\n\
         }}\n\
         .resume-template-body {{\n\
         padding: 0 !important;\n\
         }}\n\
         .page-break-inside-avoid {{\n\
         page-break-inside: avoid;\n\
         }}\n\
         }}\n",
        size = size_keyword,
        tb = design.top_bottom_margin,
        lr = design.left_right_margin,
    );
    css
}

/// Builds the complete print-isolated document for a resume: the
/// rendered subtree inside a page container sized in physical units,
/// with the print overrides inlined. Content height flows naturally —
/// true content length may exceed one page and paginates in print.
pub fn print_document(registry: &TemplateRegistry, resume: &Resume) -> String {
    let view = registry.render(resume);
    let (_, width, _) = paper_css(resume.design.paper_size);
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html><html><head><title>&nbsp;</title><style>");
    doc.push_str(&print_css(&resume.design));
    doc.push_str("</style></head><body>");
    let _ = write!(
        doc,
        "<div id=\"resume-preview\" style=\"width: {width}; height: auto;\">"
    );
    doc.push_str(&document_html(&view));
    doc.push_str("</div></body></html>");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PaperSize, Resume};

    #[test]
    fn test_print_css_letter_units() {
        let design = DesignSettings::default();
        let css = print_css(&design);
        assert!(css.contains("size: Letter;"));
        assert!(css.contains("margin: 0.6in 0.6in;"));
        assert!(css.contains("@top-center { content: '' }"));
        assert!(css.contains("@bottom-right { content: '' }"));
        assert!(css.contains("print-color-adjust: exact !important;"));
    }

    #[test]
    fn test_print_css_a4() {
        let design = DesignSettings {
            paper_size: PaperSize::A4,
            ..DesignSettings::default()
        };
        assert!(print_css(&design).contains("size: A4;"));
    }

    #[test]
    fn test_print_document_uses_physical_page_width() {
        let registry = TemplateRegistry::with_defaults();
        let mut resume = Resume::blank("Test");
        resume.design.paper_size = PaperSize::A4;
        resume.personal_info.name = "Jane Doe".to_string();
        let doc = print_document(&registry, &resume);
        assert!(doc.contains("width: 210mm"));
        assert!(doc.contains("Jane Doe"));
        // Preview chrome suppressed, natural content height.
        assert!(doc.contains("transform: none !important;"));
        assert!(doc.contains("height: auto"));
    }

    #[test]
    fn test_print_document_is_total_over_empty_data() {
        // Assembly never fails: even a fully blank resume yields a
        // complete document shell.
        let registry = TemplateRegistry::with_defaults();
        let doc = print_document(&registry, &Resume::blank(""));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("id=\"resume-preview\""));
        assert!(doc.ends_with("</body></html>"));
    }

    #[test]
    fn test_keep_together_hint_survives_into_print_rules() {
        let registry = TemplateRegistry::with_defaults();
        let resume = Resume::blank("Test");
        let doc = print_document(&registry, &resume);
        assert!(doc.contains(".page-break-inside-avoid"));
        assert!(doc.contains("page-break-inside: avoid;"));
    }
}
