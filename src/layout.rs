//! Pixel dimensions and the side-by-side viewer/panel layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;

/// A non-negative pixel dimension, written `"325px"` (the suffix is
/// optional when parsing). Serializes as the CSS string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Px(pub u32);

impl Px {
    /// Shrink by `by` pixels, stopping at zero.
    #[must_use]
    pub fn inset(self, by: u32) -> Self {
        if by > self.0 {
            log::warn!("inset of {by}px exceeds {self}; clamping to 0px");
        }
        Self(self.0.saturating_sub(by))
    }
}

impl FromStr for Px {
    type Err = OrbviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
        digits.parse::<u32>().map(Px).map_err(|_| {
            OrbviewError::Configuration(format!(
                "'{s}' is not a pixel dimension"
            ))
        })
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl From<Px> for String {
    fn from(px: Px) -> Self {
        px.to_string()
    }
}

impl TryFrom<String> for Px {
    type Error = OrbviewError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Width/height of one laid-out child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

/// Horizontal box: the viewer on the left, the orbital panel on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HBoxLayout {
    /// Viewer surface.
    pub viewer: Size,
    /// Orbital side panel.
    pub panel: Size,
}

impl HBoxLayout {
    /// Total width of both children, saturating at `u32::MAX` pixels.
    #[must_use]
    pub fn width(&self) -> Px {
        Px(self.viewer.width.0.saturating_add(self.panel.width.0))
    }

    /// Height of the taller child.
    #[must_use]
    pub fn height(&self) -> Px {
        self.viewer.height.max(self.panel.height)
    }
}
