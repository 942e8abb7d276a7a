//! Horizontal rail of club logo cards

use std::time::Instant;

use crate::engine::{DragScrollAdapter, Edges, EventOutcome};
use crate::infra::constants::club;
use crate::messages::{Direction, RailMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub slug: String,
    pub logo: Option<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    fn has_logo(&self) -> bool {
        self.logo.as_deref().is_some_and(|logo| !logo.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCard {
    pub team: Team,
    /// Gradient pair, fixed at construction so removals do not recolour
    /// the remaining cards.
    pub accent: (&'static str, &'static str),
}

#[derive(Debug, Clone)]
pub struct ClubRail {
    cards: Vec<ClubCard>,
    gap: f32,
    client_width: f32,
    scroll: DragScrollAdapter,
}

impl ClubRail {
    /// Teams without a usable logo are dropped up front.
    pub fn new(teams: Vec<Team>, client_width: f32) -> Self {
        let cards: Vec<ClubCard> = teams
            .into_iter()
            .filter(Team::has_logo)
            .enumerate()
            .map(|(i, team)| ClubCard {
                team,
                accent: club::ACCENTS[i % club::ACCENTS.len()],
            })
            .collect();
        let mut rail = Self {
            cards,
            gap: club::CARD_GAP,
            client_width,
            scroll: DragScrollAdapter::new(client_width, 0.0),
        };
        rail.relayout();
        rail
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self.relayout();
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.scroll = self.scroll.with_reduced_motion(reduced_motion);
        self
    }

    pub fn cards(&self) -> &[ClubCard] {
        &self.cards
    }

    pub fn scroll(&self) -> &DragScrollAdapter {
        &self.scroll
    }

    pub fn edges(&self) -> Edges {
        self.scroll.edges()
    }

    /// Track width including side padding.
    pub fn content_width(&self) -> f32 {
        let n = self.cards.len() as f32;
        if n == 0.0 {
            return 0.0;
        }
        club::TRACK_PADDING * 2.0 + n * club::CARD_SIZE + (n - 1.0) * self.gap
    }

    pub fn update(&mut self, message: RailMessage) -> EventOutcome {
        if let RailMessage::Resized { client_width, .. } = message {
            self.resize(client_width);
            return EventOutcome::PassThrough;
        }
        self.scroll.update(message)
    }

    pub fn resize(&mut self, client_width: f32) -> Edges {
        self.client_width = client_width;
        self.relayout()
    }

    /// Edge arrow buttons.
    pub fn scroll_page(&mut self, direction: Direction, now: Instant) {
        self.scroll.scroll_page(direction, now);
    }

    /// The card's logo failed to load; the card leaves the rail. Returns
    /// true when a card was removed.
    pub fn logo_failed(&mut self, slug: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.team.slug != slug);
        let removed = self.cards.len() != before;
        if removed {
            log::debug!("club logo for {slug} failed to load; card removed");
            self.relayout();
        }
        removed
    }

    /// Returns the slug to report for a selected card.
    pub fn select(&self, slug: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.team.slug == slug)
            .map(|card| card.team.slug.as_str())
    }

    fn relayout(&mut self) -> Edges {
        self.scroll.resize(self.client_width, self.content_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("Real Madrid", "real-madrid").with_logo("rm.svg"),
            Team::new("No Crest", "no-crest"),
            Team::new("Blank", "blank").with_logo("   "),
            Team::new("Liverpool", "liverpool").with_logo("lfc.svg"),
            Team::new("Inter", "inter").with_logo("inter.svg"),
        ]
    }

    #[test]
    fn teams_without_logo_are_filtered() {
        let rail = ClubRail::new(teams(), 800.0);
        let slugs: Vec<&str> =
            rail.cards().iter().map(|c| c.team.slug.as_str()).collect();
        assert_eq!(slugs, vec!["real-madrid", "liverpool", "inter"]);
        assert_eq!(rail.cards()[1].accent, club::ACCENTS[1]);
    }

    #[test]
    fn accents_cycle() {
        let many: Vec<Team> = (0..7)
            .map(|i| {
                Team::new(format!("T{i}"), format!("t{i}")).with_logo("x.svg")
            })
            .collect();
        let rail = ClubRail::new(many, 800.0);
        assert_eq!(rail.cards()[5].accent, club::ACCENTS[0]);
        assert_eq!(rail.cards()[6].accent, club::ACCENTS[1]);
    }

    #[test]
    fn failed_logo_removes_card_and_shrinks_track() {
        let mut rail = ClubRail::new(teams(), 800.0);
        // 64 padding + 3 * 360 + 2 * 24
        assert_eq!(rail.content_width(), 1_192.0);
        assert!(rail.edges().can_scroll_right);

        assert!(rail.logo_failed("liverpool"));
        assert!(!rail.logo_failed("liverpool"));
        assert_eq!(rail.content_width(), 808.0);
        assert_eq!(rail.cards()[1].accent, club::ACCENTS[2]);
        assert!(rail.edges().can_scroll_right);

        rail.logo_failed("inter");
        assert!(!rail.edges().can_scroll_right);
        assert_eq!(rail.select("inter"), None);
    }

    #[test]
    fn select_reports_slug() {
        let rail = ClubRail::new(teams(), 800.0);
        assert_eq!(rail.select("real-madrid"), Some("real-madrid"));
        assert_eq!(rail.select("no-crest"), None);
    }

    #[test]
    fn custom_gap_and_arrow_scroll() {
        let t0 = Instant::now();
        let mut rail = ClubRail::new(teams(), 800.0)
            .with_gap(0.0)
            .with_reduced_motion(true);
        assert_eq!(rail.content_width(), 1_144.0);
        rail.scroll_page(Direction::Right, t0);
        assert_eq!(rail.scroll().scroll_left(), 344.0);
        assert!(!rail.edges().can_scroll_right);
    }
}
