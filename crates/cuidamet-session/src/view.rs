//! The closed set of screens and the chrome each one shows.

use serde::{Deserialize, Serialize};

/// The enumerated tag identifying which screen is currently active.
/// Exactly one view is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Landing,
    Providers,
    Favorites,
    Profile,
    Offer,
    Inbox,
    Chat,
    MyProfile,
    Map,
    Prices,
    Security,
    Verification,
    Help,
    About,
    Blog,
    Contact,
    Settings,
    EditProfile,
    SecuritySettings,
    Notifications,
    LegalInfo,
    LegalDocument,
    MyCaregiverProfile,
    Booking,
    Payment,
    Confirmation,
    Support,
    SupportChat,
    SupportEmail,
}

impl View {
    /// Full-screen flows cover the whole window and hide the bottom
    /// navigation bar.
    pub fn is_full_screen(self) -> bool {
        matches!(
            self,
            View::Map
                | View::Profile
                | View::Chat
                | View::Offer
                | View::Booking
                | View::Payment
                | View::Confirmation
                | View::SupportChat
                | View::SupportEmail
        )
    }

    pub fn shows_bottom_nav(self) -> bool {
        !self.is_full_screen()
    }

    /// The informational footer shows on secondary pages only, never on
    /// the main tabs or inside full-screen flows.
    pub fn shows_footer(self) -> bool {
        !self.is_full_screen()
            && !matches!(
                self,
                View::Landing
                    | View::Providers
                    | View::Favorites
                    | View::MyProfile
                    | View::Inbox
            )
    }
}

/// Recorded origin view used to compute back-navigation targets.
///
/// History depth is exactly one: only the immediately-previous view is
/// remembered, never a full stack, so going back twice from a nested
/// flow does not retrace the full path. That is a visible behavioral
/// contract, not an oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnView {
    Providers,
    Favorites,
    Map,
    Settings,
    MyProfile,
    LegalInfo,
    MyCaregiverProfile,
    Profile,
    Support,
}

impl ReturnView {
    pub fn as_view(self) -> View {
        match self {
            ReturnView::Providers => View::Providers,
            ReturnView::Favorites => View::Favorites,
            ReturnView::Map => View::Map,
            ReturnView::Settings => View::Settings,
            ReturnView::MyProfile => View::MyProfile,
            ReturnView::LegalInfo => View::LegalInfo,
            ReturnView::MyCaregiverProfile => View::MyCaregiverProfile,
            ReturnView::Profile => View::Profile,
            ReturnView::Support => View::Support,
        }
    }

    /// Views that may be recorded as a back target. Anything else
    /// returns `None` and leaves the recorded target untouched.
    pub fn from_view(view: View) -> Option<Self> {
        match view {
            View::Providers => Some(ReturnView::Providers),
            View::Favorites => Some(ReturnView::Favorites),
            View::Map => Some(ReturnView::Map),
            View::Settings => Some(ReturnView::Settings),
            View::MyProfile => Some(ReturnView::MyProfile),
            View::LegalInfo => Some(ReturnView::LegalInfo),
            View::MyCaregiverProfile => Some(ReturnView::MyCaregiverProfile),
            View::Profile => Some(ReturnView::Profile),
            View::Support => Some(ReturnView::Support),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VIEWS: [View; 29] = [
        View::Landing,
        View::Providers,
        View::Favorites,
        View::Profile,
        View::Offer,
        View::Inbox,
        View::Chat,
        View::MyProfile,
        View::Map,
        View::Prices,
        View::Security,
        View::Verification,
        View::Help,
        View::About,
        View::Blog,
        View::Contact,
        View::Settings,
        View::EditProfile,
        View::SecuritySettings,
        View::Notifications,
        View::LegalInfo,
        View::LegalDocument,
        View::MyCaregiverProfile,
        View::Booking,
        View::Payment,
        View::Confirmation,
        View::Support,
        View::SupportChat,
        View::SupportEmail,
    ];

    #[test]
    fn test_bottom_nav_is_the_complement_of_full_screen() {
        for view in ALL_VIEWS {
            assert_eq!(view.shows_bottom_nav(), !view.is_full_screen());
        }
    }

    #[test]
    fn test_main_tabs_show_no_footer() {
        for view in [
            View::Landing,
            View::Providers,
            View::Favorites,
            View::MyProfile,
            View::Inbox,
        ] {
            assert!(!view.shows_footer());
        }
        assert!(View::Prices.shows_footer());
        assert!(View::Settings.shows_footer());
        assert!(!View::Chat.shows_footer());
    }

    #[test]
    fn test_return_view_round_trips() {
        for view in ALL_VIEWS {
            if let Some(return_view) = ReturnView::from_view(view) {
                assert_eq!(return_view.as_view(), view);
            }
        }
    }
}
