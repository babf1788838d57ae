use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The logical sheets exposed by the web app. Each project category lives in
/// its own sheet; `All` asks the web app for every row at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetName {
    #[serde(rename = "Alliance_Form")]
    Alliance,
    #[serde(rename = "Fassung_Form")]
    Fassung,
    #[serde(rename = "Pave_Form")]
    Pave,
    All,
}

impl SheetName {
    pub const CATEGORIES: [SheetName; 3] = [SheetName::Alliance, SheetName::Fassung, SheetName::Pave];

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetName::Alliance => "Alliance_Form",
            SheetName::Fassung => "Fassung_Form",
            SheetName::Pave => "Pave_Form",
            SheetName::All => "All",
        }
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetName {
    type Err = String;

    /// Accepts both the sheet names (`Pave_Form`) and the bare category
    /// names older deployments used (`Pave`, `Pavé`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix("_Form").unwrap_or(name);
        match name.to_lowercase().as_str() {
            "alliance" => Ok(SheetName::Alliance),
            "fassung" => Ok(SheetName::Fassung),
            "pave" | "pavé" => Ok(SheetName::Pave),
            "all" => Ok(SheetName::All),
            _ => Err(format!("Unknown sheet: {}", s)),
        }
    }
}
