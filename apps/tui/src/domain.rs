use serde::Serialize;

/// Display tier of the radar scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RadarSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Small),
            1 => Some(Self::Medium),
            2 => Some(Self::Large),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "small" | "sm" => Some(Self::Small),
            "medium" | "md" => Some(Self::Medium),
            "large" | "lg" => Some(Self::Large),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Diameter of the scope in pixels.
    pub const fn pixel_diameter(self) -> u16 {
        match self {
            Self::Small => 128,
            Self::Medium => 192,
            Self::Large => 320,
        }
    }

    /// Diameter of a marker glyph in pixels.
    pub const fn glyph_pixels(self) -> u16 {
        match self {
            Self::Small => 4,
            Self::Medium => 6,
            Self::Large => 8,
        }
    }

    /// Terminal cells covered by the scope, at 8px per column and 16px per row.
    pub const fn cell_footprint(self) -> (u16, u16) {
        let diameter = self.pixel_diameter();
        (diameter / 8, diameter / 16)
    }
}

impl std::fmt::Display for RadarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::RadarSize;

    #[test]
    fn parse_accepts_names_and_short_aliases() {
        assert_eq!(RadarSize::parse("lg"), Some(RadarSize::Large));
        assert_eq!(RadarSize::parse(" Medium "), Some(RadarSize::Medium));
        assert_eq!(RadarSize::parse("SM"), Some(RadarSize::Small));
        assert_eq!(RadarSize::parse("huge"), None);
    }

    #[test]
    fn tiers_grow_monotonically() {
        let footprints = RadarSize::ALL.map(RadarSize::cell_footprint);
        assert_eq!(footprints, [(16, 8), (24, 12), (40, 20)]);

        let glyphs = RadarSize::ALL.map(RadarSize::glyph_pixels);
        assert_eq!(glyphs, [4, 6, 8]);
    }

    #[test]
    fn index_round_trips_through_all() {
        for (index, size) in RadarSize::ALL.iter().enumerate() {
            assert_eq!(RadarSize::from_index(index), Some(*size));
        }
        assert_eq!(RadarSize::from_index(3), None);
    }
}
