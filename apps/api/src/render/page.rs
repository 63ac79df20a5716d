//! Fixed page geometry shared by the renderer and the PDF converter.
//!
//! The same numbers go into the document's `@page` rule and onto the converter's
//! command line, so every PDF has the same layout regardless of content length.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageGeometry {
    /// Paper name understood by both CSS and the converter.
    pub paper: &'static str,
    pub width_mm: u32,
    pub height_mm: u32,
    pub margin_top_mm: u32,
    pub margin_right_mm: u32,
    pub margin_bottom_mm: u32,
    pub margin_left_mm: u32,
}

/// A4 portrait, 15mm top/bottom and 18mm side margins.
pub const RESUME_PAGE: PageGeometry = PageGeometry {
    paper: "A4",
    width_mm: 210,
    height_mm: 297,
    margin_top_mm: 15,
    margin_right_mm: 18,
    margin_bottom_mm: 15,
    margin_left_mm: 18,
};

impl PageGeometry {
    pub fn css_rule(&self) -> String {
        format!(
            "@page {{ size: {}mm {}mm; margin: {}mm {}mm {}mm {}mm; }}",
            self.width_mm,
            self.height_mm,
            self.margin_top_mm,
            self.margin_right_mm,
            self.margin_bottom_mm,
            self.margin_left_mm
        )
    }

    /// wkhtmltopdf-style page flags.
    pub fn converter_args(&self) -> Vec<String> {
        vec![
            "--page-size".to_string(),
            self.paper.to_string(),
            "--margin-top".to_string(),
            format!("{}mm", self.margin_top_mm),
            "--margin-right".to_string(),
            format!("{}mm", self.margin_right_mm),
            "--margin-bottom".to_string(),
            format!("{}mm", self.margin_bottom_mm),
            "--margin-left".to_string(),
            format!("{}mm", self.margin_left_mm),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_rule() {
        assert_eq!(
            RESUME_PAGE.css_rule(),
            "@page { size: 210mm 297mm; margin: 15mm 18mm 15mm 18mm; }"
        );
    }

    #[test]
    fn test_converter_args_pair_up() {
        let args = RESUME_PAGE.converter_args();
        assert_eq!(args.len(), 10);
        assert_eq!(&args[..2], ["--page-size", "A4"]);
        assert_eq!(&args[8..], ["--margin-left", "18mm"]);
    }
}
