use serde::Serialize;
use std::fmt;

/// Units recognized in size values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SizeUnit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "vw")]
    Vw,
    #[serde(rename = "vh")]
    Vh,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "mm")]
    Mm,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 10] = [
        SizeUnit::Px,
        SizeUnit::Em,
        SizeUnit::Rem,
        SizeUnit::Vw,
        SizeUnit::Vh,
        SizeUnit::Percent,
        SizeUnit::Pt,
        SizeUnit::Cm,
        SizeUnit::In,
        SizeUnit::Mm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Em => "em",
            SizeUnit::Rem => "rem",
            SizeUnit::Vw => "vw",
            SizeUnit::Vh => "vh",
            SizeUnit::Percent => "%",
            SizeUnit::Pt => "pt",
            SizeUnit::Cm => "cm",
            SizeUnit::In => "in",
            SizeUnit::Mm => "mm",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == suffix)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
