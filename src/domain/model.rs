use crate::utils::error::KataError;
use std::str::FromStr;

/// A report is pure data. Printing and persisting it are somebody else's
/// jobs (`adapters::console::ReportPrinter`, `adapters::file::ReportFileWriter`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: String,
    content: String,
}

impl Report {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Customer tiers. Each maps to one discount strategy; see
/// `CustomerTier::strategy`.
///
/// Parsing replaces the legacy string-tag branching: a tag that matches no
/// tier is a hard error instead of silently charging the full amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerTier {
    Regular,
    Premium,
    Vip,
}

impl FromStr for CustomerTier {
    type Err = KataError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Regular" => Ok(CustomerTier::Regular),
            "Premium" => Ok(CustomerTier::Premium),
            "VIP" => Ok(CustomerTier::Vip),
            _ => Err(KataError::UnknownTierError {
                tag: tag.to_string(),
            }),
        }
    }
}

/// Rectangle and Square are independent types. Neither derives from the
/// other; they only share the `Shape` capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u64,
    height: u64,
}

impl Rectangle {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    side: u64,
}

impl Square {
    pub fn new(side: u64) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u64 {
        self.side
    }
}
