//! List marker types and the rule deciding which markers share a list.

use crate::{Error, Result};

/// Marker that opened a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListType {
    /// Bullet marker character (`-`, `+` or `*`)
    Bullet(char),
    /// Start number and delimiter (`.` or `)`)
    Ordered(u32, char),
}

impl ListType {
    /// Check if two markers can belong to the same list.
    ///
    /// Bullets must use the same character and ordered markers the same
    /// delimiter. The start number never matters, and a bullet never matches
    /// an ordered marker.
    pub fn is_compatible(&self, other: &ListType) -> bool {
        match (self, other) {
            (ListType::Bullet(a), ListType::Bullet(b)) => a == b,
            (ListType::Ordered(_, a), ListType::Ordered(_, b)) => a == b,
            _ => false,
        }
    }

    /// Parse a list marker such as `-`, `*`, `+`, `1.` or `12)`.
    ///
    /// Ordered markers accept at most 9 digits, as in CommonMark.
    pub fn parse(marker: &str) -> Result<Self> {
        let invalid = || Error::InvalidListMarker(marker.to_string());

        let mut chars = marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ ('-' | '+' | '*')), None) => return Ok(ListType::Bullet(c)),
            (None, _) => return Err(invalid()),
            _ => {}
        }

        let delimiter = marker.chars().last().ok_or_else(invalid)?;
        if !matches!(delimiter, '.' | ')') {
            return Err(invalid());
        }
        let digits = &marker[..marker.len() - 1];
        if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let start = digits.parse().map_err(|_| invalid())?;
        Ok(ListType::Ordered(start, delimiter))
    }

    /// Check if this is an ordered marker
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListType::Ordered(..))
    }

    /// Start number of an ordered marker
    pub fn start(&self) -> Option<u32> {
        match self {
            ListType::Ordered(start, _) => Some(*start),
            ListType::Bullet(_) => None,
        }
    }
}
