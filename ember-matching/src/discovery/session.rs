use crate::models::ProfileView;

/// What the discovery screen should render right now.
#[derive(Debug, PartialEq)]
pub enum SessionView<'a> {
    Loading,
    Candidate { index: usize, profile: &'a ProfileView },
    Exhausted,
}

/// Client-side driver for the swipe flow.
///
/// The deck is fetched once and stepped through by index; exhaustion is a
/// property of the position, not a stored state, so an empty deck enters
/// browsing and immediately renders as exhausted. Like/pass outcomes feed
/// back in through [`DiscoverySession::pass`] and
/// [`DiscoverySession::like_applied`]. A failed like or pass leaves the
/// session where it was; the caller surfaces the error and keeps browsing.
#[derive(Debug)]
pub struct DiscoverySession {
    deck: Vec<ProfileView>,
    index: usize,
    loading: bool,
    notification: Option<ProfileView>,
}

impl Default for DiscoverySession {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self {
            deck: Vec::new(),
            index: 0,
            loading: true,
            notification: None,
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        if self.loading {
            return SessionView::Loading;
        }
        match self.deck.get(self.index) {
            Some(profile) => SessionView::Candidate {
                index: self.index,
                profile,
            },
            None => SessionView::Exhausted,
        }
    }

    /// The transient mutual-match overlay, if one is showing.
    pub fn notification(&self) -> Option<&ProfileView> {
        self.notification.as_ref()
    }

    pub fn candidates_loaded(&mut self, deck: Vec<ProfileView>) {
        self.deck = deck;
        self.index = 0;
        self.loading = false;
    }

    /// A failed initial load counts as an empty deck, not an error state.
    pub fn load_failed(&mut self) {
        self.candidates_loaded(Vec::new());
    }

    pub fn pass(&mut self) {
        self.advance();
    }

    /// A like went through. On a mutual match the matched profile is shown
    /// as a notification overlay; browsing advances either way.
    pub fn like_applied(&mut self, matched: Option<ProfileView>) {
        if let Some(profile) = matched {
            self.notification = Some(profile);
        }
        self.advance();
    }

    /// Close the match overlay and keep browsing where we were.
    pub fn dismiss_notification(&mut self) -> Option<ProfileView> {
        self.notification.take()
    }

    /// Full reload: back to loading until a fresh deck arrives.
    pub fn refresh(&mut self) {
        self.deck.clear();
        self.index = 0;
        self.loading = true;
        self.notification = None;
    }

    fn advance(&mut self) {
        if !self.loading && self.index < self.deck.len() {
            self.index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_user, ProfileView};
    use serde_json::json;

    fn deck(names: &[&str]) -> Vec<ProfileView> {
        names
            .iter()
            .map(|n| ProfileView::candidate(&sample_user(n, "female", json!({}))))
            .collect()
    }

    #[test]
    fn starts_loading() {
        let session = DiscoverySession::new();
        assert_eq!(session.view(), SessionView::Loading);
    }

    #[test]
    fn load_enters_browsing_at_zero() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(deck(&["a", "b"]));
        match session.view() {
            SessionView::Candidate { index, profile } => {
                assert_eq!(index, 0);
                assert_eq!(profile.username, "a");
            }
            other => panic!("expected candidate, got {other:?}"),
        }
    }

    #[test]
    fn empty_deck_is_immediately_exhausted() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(Vec::new());
        assert_eq!(session.view(), SessionView::Exhausted);
    }

    #[test]
    fn failed_load_behaves_like_empty_deck() {
        let mut session = DiscoverySession::new();
        session.load_failed();
        assert_eq!(session.view(), SessionView::Exhausted);
    }

    #[test]
    fn pass_steps_through_to_exhaustion() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(deck(&["a", "b"]));
        session.pass();
        match session.view() {
            SessionView::Candidate { index, profile } => {
                assert_eq!(index, 1);
                assert_eq!(profile.username, "b");
            }
            other => panic!("expected candidate, got {other:?}"),
        }
        session.pass();
        assert_eq!(session.view(), SessionView::Exhausted);
    }

    #[test]
    fn like_without_match_just_advances() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(deck(&["a", "b"]));
        session.like_applied(None);
        assert!(session.notification().is_none());
        assert!(matches!(session.view(), SessionView::Candidate { index: 1, .. }));
    }

    #[test]
    fn mutual_like_shows_notification_and_advances() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(deck(&["a", "b"]));
        let matched = ProfileView::matched(&sample_user("a", "female", json!({})));
        session.like_applied(Some(matched));
        assert_eq!(session.notification().unwrap().username, "a");
        assert!(matches!(session.view(), SessionView::Candidate { index: 1, .. }));
    }

    #[test]
    fn dismiss_restores_browsing_untouched() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(deck(&["a", "b"]));
        let matched = ProfileView::matched(&sample_user("a", "female", json!({})));
        session.like_applied(Some(matched));

        let dismissed = session.dismiss_notification();
        assert_eq!(dismissed.unwrap().username, "a");
        assert!(session.notification().is_none());
        assert!(matches!(session.view(), SessionView::Candidate { index: 1, .. }));
    }

    #[test]
    fn refresh_returns_to_loading() {
        let mut session = DiscoverySession::new();
        session.candidates_loaded(deck(&["a"]));
        session.pass();
        assert_eq!(session.view(), SessionView::Exhausted);

        session.refresh();
        assert_eq!(session.view(), SessionView::Loading);

        session.candidates_loaded(deck(&["b"]));
        assert!(matches!(session.view(), SessionView::Candidate { index: 0, .. }));
    }
}
