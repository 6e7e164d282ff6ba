pub mod r#trait;
pub use r#trait::Surface;

pub mod raster_surface;
pub use self::raster_surface::RasterSurface;

pub mod null_surface;
pub use self::null_surface::NullSurface;

pub mod config;
pub use self::config::RendererConfig;
