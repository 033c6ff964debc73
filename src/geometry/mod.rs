pub mod calibrate;
pub mod containment;
pub mod simplify;
pub mod viewport;

pub use calibrate::radius_px_for_km;
pub use containment::ring_contains;
pub use simplify::simplify_boundary;
pub use viewport::Viewport;
