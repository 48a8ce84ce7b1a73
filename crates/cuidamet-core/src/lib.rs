//! Domain layer for the Cuidamet caregiver marketplace.
//!
//! Everything here is pure, in-memory data: provider listings, chat
//! threads, booking quotes, legal texts, and the filtering/ordering
//! operations the directory screens are built on. There is no I/O and
//! no persistence — the seeded data in [`mock_data`] is the whole world.

pub mod booking;
pub mod chat;
pub mod directory;
pub mod geo;
pub mod legal;
pub mod mock_data;
pub mod poi;
pub mod provider;

pub use booking::{BookingDetails, QuoteError};
pub use chat::{ChatId, ChatThread, Message, MessageId, Sender};
pub use directory::ListMode;
pub use geo::Coordinates;
pub use legal::LegalDocument;
pub use poi::{Poi, PoiCategory, PoiKind};
pub use provider::{
    CareCategory, CategoryFilter, Provider, ProviderId, Review, ServiceDescription,
};
