//! Geographic coordinate type and geodesy helpers.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Route segments are only a few
//! metres long, so single precision (≈1 m at the equator) would visibly jitter
//! the interpolated position between ticks.

/// Mean Earth radius in metres used by every distance computation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine great-circle distance in metres.
    ///
    /// ```text
    /// d = 2R · asin( sqrt( sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2) ) )
    /// ```
    ///
    /// Symmetric, and exactly `0.0` for identical points.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` a hair above 1.0 for antipodal points.
        2.0 * EARTH_RADIUS_M * a.clamp(0.0, 1.0).sqrt().asin()
    }

    /// Initial bearing (forward azimuth) from `self` towards `other`, in
    /// degrees clockwise from true north, normalised into `[0, 360)`.
    ///
    /// Coincident points have no defined direction; they yield `0.0`.
    pub fn initial_bearing_deg(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let deg = (y.atan2(x).to_degrees() + 360.0) % 360.0;
        if deg.is_finite() { deg } else { 0.0 }
    }

    /// Planar linear interpolation between `self` (`frac = 0`) and `other`
    /// (`frac = 1`).
    ///
    /// Latitude and longitude are blended independently, which is accurate
    /// enough for segments of tens of metres.
    #[inline]
    pub fn lerp(self, other: Coordinate, frac: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * frac,
            lon: self.lon + (other.lon - self.lon) * frac,
        }
    }
}

/// Free-function form of [`Coordinate::distance_m`].
#[inline]
pub fn distance_m(a: Coordinate, b: Coordinate) -> f64 {
    a.distance_m(b)
}

/// Free-function form of [`Coordinate::initial_bearing_deg`].
#[inline]
pub fn initial_bearing_deg(a: Coordinate, b: Coordinate) -> f64 {
    a.initial_bearing_deg(b)
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
