//! Static site emitter for folio portfolios.
//!
//! Turns a finalized [`folio_wizard::PortfolioRecord`] into a self-contained
//! site: markup, a themed stylesheet, a behaviour script, and the
//! documentation files shipped next to them.

pub mod assets;
pub mod clock;
pub mod docs;
pub mod emitter;
pub mod templates;
pub mod themes;

pub use assets::AssetPipeline;
pub use clock::{Clock, FixedClock, SystemClock};
pub use docs::{DocumentOptions, Documents};
pub use emitter::{
    project_image_path, EmitError, ImageLinks, SiteArtifacts, SiteEmitter, PROFILE_IMAGE_PATH,
};
pub use themes::{stylesheet, Theme};
