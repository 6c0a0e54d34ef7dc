use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The font family used for every text-drawing call of one export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    /// The family identifier understood by PDF surfaces.
    pub fn identifier(self) -> &'static str {
        match self {
            FontFamily::Sans => "helvetica",
            FontFamily::Serif => "times",
            FontFamily::Mono => "courier",
        }
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sans" => Ok(FontFamily::Sans),
            "serif" => Ok(FontFamily::Serif),
            "mono" => Ok(FontFamily::Mono),
            _ => Err(format!("Invalid font family '{}': expected sans, serif or mono", s)),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "mono",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn is_bold(self) -> bool {
        self == FontWeight::Bold
    }
}
