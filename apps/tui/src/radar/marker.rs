use std::collections::HashSet;

use serde::Serialize;

use super::RadarError;

/// Lower and upper bound of a marker coordinate, in percent of the display area.
pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 100.0;

/// A labeled point on the radar scope.
///
/// `x` and `y` are percentage offsets from the top-left corner of the display
/// area, so `(50, 50)` is the center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub blinking: bool,
}

impl Marker {
    pub fn new(id: impl Into<String>, x: f64, y: f64, blinking: bool) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            blinking,
        }
    }

    fn check_position(&self) -> Result<(), RadarError> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || !(POSITION_MIN..=POSITION_MAX).contains(&value) {
                return Err(RadarError::PositionOutOfRange {
                    id: self.id.clone(),
                    axis,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Ordered markers owned by one radar view.
///
/// The set keeps the literal it was built from so a restarted view can go back
/// to the initial blink flags.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
    initial: Vec<Marker>,
}

impl MarkerSet {
    pub fn new(markers: Vec<Marker>) -> Result<Self, RadarError> {
        let mut seen = HashSet::with_capacity(markers.len());
        for marker in &markers {
            marker.check_position()?;
            if !seen.insert(marker.id.as_str()) {
                return Err(RadarError::DuplicateMarker(marker.id.clone()));
            }
        }

        Ok(Self {
            initial: markers.clone(),
            markers,
        })
    }

    /// The five aircraft tracked by the station scope.
    pub fn fleet() -> Self {
        let markers = vec![
            Marker::new("ZA451", 70.0, 30.0, true),
            Marker::new("ZA203", 40.0, 60.0, false),
            Marker::new("ZA128", 85.0, 75.0, true),
            Marker::new("ZA330", 25.0, 45.0, false),
            Marker::new("ZA155", 60.0, 80.0, true),
        ];
        Self {
            initial: markers.clone(),
            markers,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn blink_flags(&self) -> Vec<bool> {
        self.markers.iter().map(|marker| marker.blinking).collect()
    }

    pub fn blinking_count(&self) -> usize {
        self.markers.iter().filter(|marker| marker.blinking).count()
    }

    /// Rewrites every blink flag in order. Identity and position never change.
    pub(crate) fn rewrite_flags(&mut self, mut next: impl FnMut() -> bool) {
        for marker in &mut self.markers {
            marker.blinking = next();
        }
    }

    pub(crate) fn reset(&mut self) {
        self.markers.clone_from(&self.initial);
    }
}

impl<'a> IntoIterator for &'a MarkerSet {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
