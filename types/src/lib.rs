//! Shared article style types for Folio.
//!
//! This crate contains the option catalogs, the article style record, and the
//! settings panel state machine. It has no UI dependencies so the panel logic
//! can be exercised with plain unit tests.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Option Catalogs
// ─────────────────────────────────────────────────────────────────────────────

/// A finite catalog of selectable presentation options for one dimension.
///
/// Implementors are fieldless enums, so a widget parameterized over a catalog
/// can only ever emit catalog members.
pub trait StyleCatalog: Copy + PartialEq + std::fmt::Debug + 'static {
    /// All catalog entries in display order.
    fn all() -> &'static [Self];

    /// Human-readable label shown in the settings form.
    fn label(&self) -> &'static str;

    /// CSS value injected into the page as a style variable.
    fn css_value(&self) -> &'static str;

    /// Look up a catalog entry by its CSS value.
    fn from_css_value(value: &str) -> Option<Self> {
        Self::all().iter().find(|o| o.css_value() == value).copied()
    }
}

/// Typeface applied to the article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    OpenSans,
    Ubuntu,
    CormorantGaramond,
    DaysOne,
    Merriweather,
}

impl StyleCatalog for FontFamily {
    fn all() -> &'static [Self] {
        &[
            FontFamily::OpenSans,
            FontFamily::Ubuntu,
            FontFamily::CormorantGaramond,
            FontFamily::DaysOne,
            FontFamily::Merriweather,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Ubuntu => "Ubuntu",
            FontFamily::CormorantGaramond => "Cormorant Garamond",
            FontFamily::DaysOne => "Days One",
            FontFamily::Merriweather => "Merriweather",
        }
    }

    fn css_value(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "'Open Sans', sans-serif",
            FontFamily::Ubuntu => "'Ubuntu', sans-serif",
            FontFamily::CormorantGaramond => "'Cormorant Garamond', serif",
            FontFamily::DaysOne => "'Days One', sans-serif",
            FontFamily::Merriweather => "'Merriweather', serif",
        }
    }
}

/// Article body font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl StyleCatalog for FontSize {
    fn all() -> &'static [Self] {
        &[FontSize::Small, FontSize::Medium, FontSize::Large]
    }

    fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "18px",
            FontSize::Medium => "25px",
            FontSize::Large => "38px",
        }
    }

    fn css_value(&self) -> &'static str {
        match self {
            FontSize::Small => "18px",
            FontSize::Medium => "25px",
            FontSize::Large => "38px",
        }
    }
}

/// Article body text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontColor {
    #[default]
    Black,
    White,
    Gray,
    Pink,
    Turquoise,
}

impl StyleCatalog for FontColor {
    fn all() -> &'static [Self] {
        &[
            FontColor::Black,
            FontColor::White,
            FontColor::Gray,
            FontColor::Pink,
            FontColor::Turquoise,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            FontColor::Black => "Black",
            FontColor::White => "White",
            FontColor::Gray => "Gray",
            FontColor::Pink => "Pink",
            FontColor::Turquoise => "Turquoise",
        }
    }

    fn css_value(&self) -> &'static str {
        match self {
            FontColor::Black => "#000000",
            FontColor::White => "#FFFFFF",
            FontColor::Gray => "#C4C4C4",
            FontColor::Pink => "#FD24AF",
            FontColor::Turquoise => "#38D9A9",
        }
    }
}

/// Page background color behind the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundColor {
    #[default]
    White,
    Dark,
    Gray,
    Blue,
    Pink,
}

impl StyleCatalog for BackgroundColor {
    fn all() -> &'static [Self] {
        &[
            BackgroundColor::White,
            BackgroundColor::Dark,
            BackgroundColor::Gray,
            BackgroundColor::Blue,
            BackgroundColor::Pink,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            BackgroundColor::White => "White",
            BackgroundColor::Dark => "Dark",
            BackgroundColor::Gray => "Gray",
            BackgroundColor::Blue => "Blue",
            BackgroundColor::Pink => "Pink",
        }
    }

    fn css_value(&self) -> &'static str {
        match self {
            BackgroundColor::White => "#FFFFFF",
            BackgroundColor::Dark => "#232426",
            BackgroundColor::Gray => "#C4C4C4",
            BackgroundColor::Blue => "#91BFF8",
            BackgroundColor::Pink => "#FEAFE8",
        }
    }
}

/// Width of the article content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentWidth {
    #[default]
    Wide,
    Narrow,
}

impl StyleCatalog for ContentWidth {
    fn all() -> &'static [Self] {
        &[ContentWidth::Wide, ContentWidth::Narrow]
    }

    fn label(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "Wide",
            ContentWidth::Narrow => "Narrow",
        }
    }

    fn css_value(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "1394px",
            ContentWidth::Narrow => "948px",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Article Style
// ─────────────────────────────────────────────────────────────────────────────

/// Complete visual presentation of the article: one selected option per
/// dimension. Every field always holds a catalog member.
///
/// `ArticleStyle::default()` is both the initial committed state of the page
/// and the target of the Reset action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleStyle {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
    pub content_width: ContentWidth,
}

/// A single-field edit to an [`ArticleStyle`], naming the dimension it
/// replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
    ContentWidth(ContentWidth),
}

impl ArticleStyle {
    /// Returns a copy with exactly the changed field replaced.
    pub fn with_change(mut self, change: StyleChange) -> Self {
        match change {
            StyleChange::FontFamily(option) => self.font_family = option,
            StyleChange::FontSize(option) => self.font_size = option,
            StyleChange::FontColor(option) => self.font_color = option,
            StyleChange::BackgroundColor(option) => self.background_color = option,
            StyleChange::ContentWidth(option) => self.content_width = option,
        }
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel State Machine
// ─────────────────────────────────────────────────────────────────────────────

/// Interaction state of the settings sidebar: open/closed visibility plus the
/// draft style being edited.
///
/// The draft is independent of the page's committed style except at two
/// points: [`PanelState::new`] seeds it from the committed style, and
/// [`PanelState::apply`] hands it back for the page to commit. Closing the
/// panel never discards draft edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    pub is_open: bool,
    pub draft: ArticleStyle,
}

impl PanelState {
    /// Panel starts closed with the draft seeded from the committed style.
    pub fn new(committed: ArticleStyle) -> Self {
        Self {
            is_open: false,
            draft: committed,
        }
    }

    /// Flips visibility. The draft is untouched.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Replaces exactly one dimension of the draft.
    pub fn set_option(&mut self, change: StyleChange) {
        self.draft = self.draft.with_change(change);
    }

    /// Closes the panel and returns the draft for the host to commit.
    ///
    /// The draft itself is unchanged, so repeated calls with no intervening
    /// edits return the same style.
    pub fn apply(&mut self) -> ArticleStyle {
        self.is_open = false;
        self.draft
    }

    /// Reverts the draft to the defaults, closes the panel, and returns the
    /// default style for the host to commit.
    pub fn reset(&mut self) -> ArticleStyle {
        self.draft = ArticleStyle::default();
        self.is_open = false;
        self.draft
    }

    /// Outside-interaction dismissal: closes the panel when open and the
    /// pointer went down outside its bounds. A no-op while closed, and never
    /// touches the draft.
    pub fn dismiss_outside(&mut self, target_within_panel: bool) {
        if self.is_open && !target_within_panel {
            self.is_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_change_replaces_only_the_targeted_field() {
        let base = ArticleStyle::default();
        let changed = base.with_change(StyleChange::FontColor(FontColor::Pink));

        assert_eq!(changed.font_color, FontColor::Pink);
        assert_eq!(changed.font_family, base.font_family);
        assert_eq!(changed.font_size, base.font_size);
        assert_eq!(changed.background_color, base.background_color);
        assert_eq!(changed.content_width, base.content_width);
    }

    #[test]
    fn set_option_accumulates_independent_edits() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.set_option(StyleChange::FontFamily(FontFamily::Merriweather));
        panel.set_option(StyleChange::ContentWidth(ContentWidth::Narrow));

        assert_eq!(panel.draft.font_family, FontFamily::Merriweather);
        assert_eq!(panel.draft.content_width, ContentWidth::Narrow);
        // Untouched dimensions keep their seeded values.
        assert_eq!(panel.draft.font_size, FontSize::default());
        assert_eq!(panel.draft.font_color, FontColor::default());
        assert_eq!(panel.draft.background_color, BackgroundColor::default());
    }

    #[test]
    fn apply_is_idempotent_for_a_stable_draft() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.toggle_open();
        panel.set_option(StyleChange::FontSize(FontSize::Large));

        let first = panel.apply();
        let second = panel.apply();

        assert_eq!(first, second);
        assert!(!panel.is_open);
        assert_eq!(panel.draft, first);
    }

    #[test]
    fn reset_yields_defaults_regardless_of_prior_draft() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.toggle_open();
        panel.set_option(StyleChange::FontFamily(FontFamily::DaysOne));
        panel.set_option(StyleChange::FontColor(FontColor::Turquoise));
        panel.set_option(StyleChange::BackgroundColor(BackgroundColor::Dark));

        let emitted = panel.reset();

        assert_eq!(emitted, ArticleStyle::default());
        assert_eq!(panel.draft, ArticleStyle::default());
        assert!(!panel.is_open);
    }

    #[test]
    fn dismiss_closes_only_on_outside_targets_while_open() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.toggle_open();

        panel.dismiss_outside(true);
        assert!(panel.is_open, "inside target must not close the panel");

        panel.dismiss_outside(false);
        assert!(!panel.is_open, "outside target must close the panel");
    }

    #[test]
    fn dismiss_is_inert_while_closed() {
        let mut panel = PanelState::new(ArticleStyle::default());

        panel.dismiss_outside(false);
        assert!(!panel.is_open);
        panel.dismiss_outside(true);
        assert!(!panel.is_open);
    }

    #[test]
    fn toggle_pairing_restores_visibility_and_keeps_draft() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.set_option(StyleChange::FontSize(FontSize::Medium));
        let draft_before = panel.draft;

        panel.toggle_open();
        panel.toggle_open();

        assert!(!panel.is_open);
        assert_eq!(panel.draft, draft_before);
    }

    #[test]
    fn apply_emits_single_edit_over_defaults() {
        // Mount with defaults, open, change the font size, apply.
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.toggle_open();
        panel.set_option(StyleChange::FontSize(FontSize::Large));

        let committed = panel.apply();

        assert_eq!(
            committed,
            ArticleStyle {
                font_size: FontSize::Large,
                ..ArticleStyle::default()
            }
        );
        assert!(!panel.is_open);
    }

    #[test]
    fn outside_click_closes_without_discarding_edits() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.toggle_open();
        panel.set_option(StyleChange::FontFamily(FontFamily::Ubuntu));
        panel.set_option(StyleChange::BackgroundColor(BackgroundColor::Blue));

        panel.dismiss_outside(false);

        assert!(!panel.is_open);
        let committed = panel.apply();
        assert_eq!(committed.font_family, FontFamily::Ubuntu);
        assert_eq!(committed.background_color, BackgroundColor::Blue);
    }

    #[test]
    fn reset_after_multiple_edits_converges_on_defaults() {
        let mut panel = PanelState::new(ArticleStyle::default());
        panel.toggle_open();
        panel.set_option(StyleChange::FontFamily(FontFamily::CormorantGaramond));
        panel.set_option(StyleChange::FontSize(FontSize::Medium));
        panel.set_option(StyleChange::ContentWidth(ContentWidth::Narrow));

        let emitted = panel.reset();

        assert_eq!(emitted, ArticleStyle::default());
        assert_eq!(panel.draft, ArticleStyle::default());
        assert!(!panel.is_open);
    }

    #[test]
    fn css_value_lookup_finds_catalog_members_only() {
        // The select widgets map DOM values back through this lookup.
        assert_eq!(
            FontFamily::from_css_value("'Cormorant Garamond', serif"),
            Some(FontFamily::CormorantGaramond)
        );
        assert_eq!(FontSize::from_css_value("25px"), Some(FontSize::Medium));
        assert_eq!(FontColor::from_css_value("not-a-color"), None);
    }
}
