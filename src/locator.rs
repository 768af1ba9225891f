//! Nearest-point query over rendered chart data.
//!
//! The locator projects every sample through the chart's data→pixel mapping
//! and keeps the one closest to the pointer. It does not test whether the
//! pointer is over the chart: callers gate on containment first.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PixelPoint};
use crate::error::TimelineResult;

/// Data→pixel projection used by the locator.
pub trait CoordinateTransform {
    fn data_to_pixel(&self, point: DataPoint) -> TimelineResult<PixelPoint>;
}

/// Identity mapping: data units are render pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl CoordinateTransform for IdentityTransform {
    fn data_to_pixel(&self, point: DataPoint) -> TimelineResult<PixelPoint> {
        Ok(PixelPoint::new(point.x, point.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Straight-line pixel distance.
    #[default]
    Euclidean,
    /// Horizontal pixel distance only; suits dense time series.
    Horizontal,
}

impl DistanceMetric {
    #[must_use]
    pub fn distance(self, from: PixelPoint, to: PixelPoint) -> f64 {
        match self {
            Self::Euclidean => (to.x - from.x).hypot(to.y - from.y),
            Self::Horizontal => (to.x - from.x).abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocatorOptions {
    #[serde(default)]
    pub metric: DistanceMetric,
    /// When set, a best match farther than this many pixels is discarded.
    #[serde(default)]
    pub max_distance_px: Option<f64>,
}

impl LocatorOptions {
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_max_distance_px(mut self, max_distance_px: f64) -> Self {
        self.max_distance_px = Some(max_distance_px);
        self
    }
}

/// Result of a nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPoint {
    /// Position of the sample in the input slice.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub render_x: f64,
    pub render_y: f64,
    pub distance_px: f64,
}

impl NearestPoint {
    #[must_use]
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new(self.x, self.y)
    }

    #[must_use]
    pub fn render_position(&self) -> PixelPoint {
        PixelPoint::new(self.render_x, self.render_y)
    }
}

/// Finds the sample whose rendered position is closest to `pointer`.
///
/// Samples that fail to project, or project to non-finite pixels, are
/// skipped. Exact distance ties keep the earliest sample.
#[must_use]
pub fn find_nearest<T>(
    points: &[DataPoint],
    transform: &T,
    pointer: PixelPoint,
    options: LocatorOptions,
) -> Option<NearestPoint>
where
    T: CoordinateTransform + ?Sized,
{
    if !pointer.is_finite() {
        return None;
    }

    let mut best: Option<(OrderedFloat<f64>, NearestPoint)> = None;
    for (index, point) in points.iter().enumerate() {
        let render = match transform.data_to_pixel(*point) {
            Ok(render) if render.is_finite() => render,
            _ => continue,
        };
        let dist = OrderedFloat(options.metric.distance(pointer, render));
        match best {
            Some((current, _)) if current <= dist => {}
            _ => {
                best = Some((
                    dist,
                    NearestPoint {
                        index,
                        x: point.x,
                        y: point.y,
                        render_x: render.x,
                        render_y: render.y,
                        distance_px: dist.into_inner(),
                    },
                ))
            }
        }
    }

    let (dist, nearest) = best?;
    match options.max_distance_px {
        Some(limit) if dist.into_inner() > limit => None,
        _ => Some(nearest),
    }
}
