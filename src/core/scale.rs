use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Pixel interval a scale domain is mapped onto.
///
/// `start` receives `domain_start` and `end` receives `domain_end`; `end` may
/// be smaller than `start` (value axes grow upwards on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start != self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> TimelineResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TimelineError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, range: PixelRange) -> TimelineResult<f64> {
        validate_range(range)?;
        if !value.is_finite() {
            return Err(TimelineError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range.start + normalized * range.span())
    }

    pub fn pixel_to_domain(self, pixel: f64, range: PixelRange) -> TimelineResult<f64> {
        validate_range(range)?;
        if !pixel.is_finite() {
            return Err(TimelineError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range.start) / range.span();
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_range(range: PixelRange) -> TimelineResult<()> {
    if !range.is_valid() {
        return Err(TimelineError::InvalidData(
            "pixel range must be finite and non-empty".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{LinearScale, PixelRange};

    #[test]
    fn inverted_range_maps_domain_start_to_bottom() {
        let scale = LinearScale::new(0.0, 10.0).expect("valid scale");
        let range = PixelRange::new(400.0, 100.0);

        assert_relative_eq!(scale.domain_to_pixel(0.0, range).unwrap(), 400.0);
        assert_relative_eq!(scale.domain_to_pixel(10.0, range).unwrap(), 100.0);
        assert_relative_eq!(scale.domain_to_pixel(5.0, range).unwrap(), 250.0);
        assert_relative_eq!(scale.pixel_to_domain(250.0, range).unwrap(), 5.0);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());

        let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
        assert!(scale.domain_to_pixel(0.5, PixelRange::new(3.0, 3.0)).is_err());
        assert!(scale.domain_to_pixel(f64::INFINITY, PixelRange::new(0.0, 3.0)).is_err());
    }
}
