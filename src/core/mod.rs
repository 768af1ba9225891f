pub mod geometry;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;

pub use geometry::{Padding, Rect, is_point_in_box};
pub use layout::ChartLayout;
pub use primitives::{datetime_to_unix_seconds, decimal_to_f64, unix_seconds_to_datetime};
pub use scale::{LinearScale, PixelRange};
pub use types::{DataPoint, PixelPoint, Viewport};
