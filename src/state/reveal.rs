//! Scroll-triggered fade-in state.
//!
//! Every page section is a fade-in target: the first time at least 10% of
//! its height is inside the scroll viewport it is marked visible, and the
//! mark is terminal. Later probe results, whatever they report, never
//! remove it.

use iced::Rectangle;

/// Fraction of a section's height that must be on screen to trigger it.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Seconds for the dimmed → full-strength fade once triggered.
const FADE_SECONDS: f32 = 0.6;

/// Height of the nav bar above the first section.
pub const NAV_HEIGHT: f32 = 64.0;

/// The fade-in targets, in page order. Also the scroll anchors the nav
/// links point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Demos,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Demos,
        Section::About,
        Section::Contact,
    ];

    /// Widget id of the section container, for visible-bounds probes.
    pub fn id_str(self) -> &'static str {
        match self {
            Section::Hero => "section-hero",
            Section::Demos => "section-demos",
            Section::About => "section-about",
            Section::Contact => "section-contact",
        }
    }

    /// The in-page anchor the documents use to address this section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "#hero",
            Section::Demos => "#demos",
            Section::About => "#about",
            Section::Contact => "#contact",
        }
    }

    pub fn from_anchor(href: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == href)
    }

    /// Design minimum height of the section. The probe only reports the
    /// visible rectangle, so the 10% intersection test runs against this.
    pub fn min_height(self) -> f32 {
        match self {
            Section::Hero => 520.0,
            Section::Demos => 560.0,
            Section::About => 420.0,
            Section::Contact => 360.0,
        }
    }

    /// Vertical scroll offset of the section top, for anchor navigation.
    pub fn scroll_offset(self) -> f32 {
        let preceding: f32 = Self::ALL
            .into_iter()
            .take_while(|s| *s != self)
            .map(Self::min_height)
            .sum();
        NAV_HEIGHT + preceding
    }

    fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Demos => 1,
            Section::About => 2,
            Section::Contact => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Fade {
    triggered: bool,
    /// 0.0 dimmed → 1.0 full strength, advanced once triggered
    progress: f32,
}

/// One-shot visibility per section, plus the fade ramp the view reads.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    fades: [Fade; 4],
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one probe result. `visible` is the on-screen part of the
    /// section, `None` when the section is fully off screen. Only ever
    /// promotes; a section that is scrolled back out stays visible.
    pub fn observe(&mut self, section: Section, visible: Option<Rectangle>) {
        if let Some(bounds) = visible {
            if bounds.height >= REVEAL_THRESHOLD * section.min_height() {
                self.mark_visible(section);
            }
        }
    }

    /// Terminal transition: {not-yet-visible} → {visible}. Idempotent.
    pub fn mark_visible(&mut self, section: Section) {
        self.fades[section.index()].triggered = true;
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.fades[section.index()].triggered
    }

    /// Fade progress for the view: 0.0 while hidden, ramping to 1.0 once
    /// triggered.
    pub fn progress(&self, section: Section) -> f32 {
        self.fades[section.index()].progress
    }

    /// Sections that still need probing on the next scroll event.
    pub fn pending(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|s| !self.fades[s.index()].triggered)
    }

    /// Advance triggered fades by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for fade in &mut self.fades {
            if fade.triggered {
                fade.progress = (fade.progress + dt / FADE_SECONDS).min(1.0);
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.fades.iter().any(|f| f.triggered && f.progress < 1.0)
    }
}
