//! Navigation controller for the Cuidamet client.
//!
//! [`AppSession`] is the single owner of all UI state: the current
//! [`View`], the selected provider and chat, the favorite set, booking
//! details, geolocation state, and the seeded data itself. Every state
//! change goes through a named transition method, and the page to render
//! is derived — never stored — by [`AppSession::screen`].
//!
//! The two asynchronous boundaries (simulated fetch latency and the
//! geolocation capability) complete through epoch tickets and sequence
//! numbers respectively, so a completion that arrives after the user
//! has moved on is dropped instead of clobbering newer state.

pub mod assistant;
pub mod geolocation;
pub mod loading;
pub mod screen;
pub mod session;
pub mod view;

pub use assistant::{AssistantError, SupportAssistant, SupportThread};
pub use geolocation::{GeoError, GeoOptions, GeoRequest, GeoSeq, GeolocationProvider};
pub use loading::LoadTicket;
pub use screen::Screen;
pub use session::{AppSession, ConfirmAction, ConfirmationPrompt};
pub use view::{ReturnView, View};
