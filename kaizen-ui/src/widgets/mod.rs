//! Storefront widgets built on the engine
//!
//! Each widget is one independent instance with its own state, created when
//! its view mounts and torn down with it.

pub mod classics_rail;
pub mod club_rail;
pub mod collection_slider;
pub mod header;
pub mod hero_playlist;
pub mod hover_gallery;
pub mod reveal_binding;
pub mod section_sequencer;
pub mod tilt;

pub use classics_rail::{ClassicsRail, SectionVisibility};
pub use club_rail::{ClubCard, ClubRail, Team};
pub use collection_slider::CollectionSlider;
pub use header::{FocusTarget, HeaderState, wordmark};
pub use hero_playlist::{HeroPlaylist, HeroView, SlotRole, VideoSlot};
pub use hover_gallery::{HoverGallery, PointerSample};
pub use reveal_binding::{RevealBinding, RevealVariant};
pub use section_sequencer::{SectionPlayback, SectionSequencer};
pub use tilt::{CardRect, TiltEffect, TiltPose};
