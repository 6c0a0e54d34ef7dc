use crate::font::FontFamily;
use crate::page::PageWidth;
use serde::{Deserialize, Serialize};

/// User-facing export options. Both fields are optional in serialized form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub page_width: PageWidth,
    pub font_family: FontFamily,
}

impl ExportOptions {
    pub fn with_page_width(mut self, page_width: PageWidth) -> Self {
        self.page_width = page_width;
        self
    }

    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_omitted() {
        let options: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.page_width, PageWidth::Medium);
        assert_eq!(options.font_family, FontFamily::Sans);
    }

    #[test]
    fn test_camel_case_fields() {
        let options: ExportOptions =
            serde_json::from_str(r#"{ "pageWidth": "wide", "fontFamily": "mono" }"#).unwrap();
        assert_eq!(options, ExportOptions::default()
            .with_page_width(PageWidth::Wide)
            .with_font_family(FontFamily::Mono));
    }

    #[test]
    fn test_unknown_page_width_rejected() {
        assert!(serde_json::from_str::<ExportOptions>(r#"{ "pageWidth": "huge" }"#).is_err());
    }
}
