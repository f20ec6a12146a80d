//! Modal viewer state machine.
//!
//! The modal's lifecycle is an explicit state machine, Hidden →
//! Preparing → Open → Closing → Hidden. The timed transitions that drive
//! it are fire-and-forget one-shots, so every phase flip is an idempotent
//! check: a stale firing (reveal after close, hide after reopen) is a
//! no-op rather than a corrupted overlay.

use std::time::Duration;

use crate::content::model::MediaKind;

/// Delay between mounting the hidden modal and starting the reveal
/// animation, so the first frame renders the hidden state.
pub const OPEN_DELAY: Duration = Duration::from_millis(10);

/// How long the close animation runs before the modal is torn down.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Seconds for the opacity/scale ramp in either direction.
const ANIMATION_SECONDS: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    /// Mounted but still at the hidden end of the animation, waiting for
    /// the short reveal delay.
    Preparing,
    Open,
    Closing,
}

/// The embedded player hosted by the modal. Playback itself happens in the
/// external embed service the URL points at; this tracks the transport
/// state the UI presents.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPlayer {
    source: Option<String>,
    kind: MediaKind,
    playing: bool,
    /// Seconds into the embed, advanced by the animation tick while playing
    position: f32,
}

impl MediaPlayer {
    fn new(source: String, kind: MediaKind) -> Self {
        Self {
            source: Some(source),
            kind,
            // Embeds are mounted with autoplay
            playing: true,
            position: 0.0,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn toggle(&mut self) {
        if self.source.is_some() {
            self.playing = !self.playing;
        }
    }

    /// Stop playback and clear the source. For audio this must happen
    /// before the modal empties its content, so sound cannot keep playing
    /// after the overlay is visually gone.
    fn stop(&mut self) {
        self.playing = false;
        self.source = None;
        self.position = 0.0;
    }
}

/// The modal overlay. At most one exists, owned by the application root.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    phase: Phase,
    /// Sizing variant: audio gets the compact centered card, video the
    /// wide video-aspect panel. A single value, so reopening with another
    /// kind fully replaces the previous variant.
    variant: MediaKind,
    player: Option<MediaPlayer>,
    /// 0.0 at the hidden end of the opacity/scale ramp, 1.0 fully open
    progress: f32,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            phase: Phase::Hidden,
            variant: MediaKind::Video,
            player: None,
            progress: 0.0,
        }
    }
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for one demo item. Also serves as reopen: the
    /// variant, player, and animation all restart from the hidden state.
    /// The caller schedules the [`OPEN_DELAY`] one-shot that flips the
    /// modal to [`Phase::Open`] via [`ModalState::reveal`].
    pub fn open(&mut self, embed_url: String, kind: MediaKind) {
        self.variant = kind;
        self.player = Some(MediaPlayer::new(embed_url, kind));
        self.phase = Phase::Preparing;
        self.progress = 0.0;
    }

    /// The reveal delay elapsed. Stale firings (the modal was closed in
    /// the meantime) change nothing.
    pub fn reveal(&mut self) {
        if self.phase == Phase::Preparing {
            self.phase = Phase::Open;
        }
    }

    /// Begin closing: stop an audio player before anything is torn down,
    /// then run the reverse animation. Redundant close requests (close
    /// button plus Escape, say) are no-ops.
    pub fn close(&mut self) {
        if matches!(self.phase, Phase::Hidden | Phase::Closing) {
            return;
        }

        if let Some(player) = &mut self.player {
            if player.kind == MediaKind::Audio {
                player.stop();
            }
        }

        self.phase = Phase::Closing;
    }

    /// The close delay elapsed: tear down and reset to the default video
    /// sizing so the next open starts from a clean state. A stale firing
    /// after a reopen is a no-op.
    pub fn finish_close(&mut self) {
        if self.phase == Phase::Closing {
            self.phase = Phase::Hidden;
            self.player = None;
            self.variant = MediaKind::Video;
            self.progress = 0.0;
        }
    }

    /// Advance the animation and the transport position by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let step = dt / ANIMATION_SECONDS;
        match self.phase {
            Phase::Open => self.progress = (self.progress + step).min(1.0),
            Phase::Closing => self.progress = (self.progress - step).max(0.0),
            Phase::Hidden | Phase::Preparing => {}
        }

        if self.phase == Phase::Open {
            if let Some(player) = &mut self.player {
                if player.playing {
                    player.position += dt;
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn variant(&self) -> MediaKind {
        self.variant
    }

    pub fn player(&self) -> Option<&MediaPlayer> {
        self.player.as_ref()
    }

    pub fn toggle_playback(&mut self) {
        if let Some(player) = &mut self.player {
            player.toggle();
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the overlay occupies the screen at all.
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Whether the animation tick subscription needs to keep running.
    pub fn is_animating(&self) -> bool {
        match self.phase {
            Phase::Open => {
                self.progress < 1.0 || self.player.as_ref().is_some_and(|p| p.playing)
            }
            Phase::Closing => self.progress > 0.0,
            Phase::Preparing => true,
            Phase::Hidden => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_audio(modal: &mut ModalState) {
        modal.open("https://example.com/embed/mix".to_string(), MediaKind::Audio);
    }

    #[test]
    fn test_open_selects_variant_by_kind() {
        let mut modal = ModalState::new();

        open_audio(&mut modal);
        assert_eq!(modal.variant(), MediaKind::Audio);
        assert_eq!(modal.phase(), Phase::Preparing);

        modal.open("https://example.com/embed/reel".to_string(), MediaKind::Video);
        assert_eq!(modal.variant(), MediaKind::Video);
    }

    #[test]
    fn test_reopen_overrides_previous_variant() {
        // No stale sizing may leak from a previous open.
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.reveal();

        modal.open("https://example.com/embed/reel".to_string(), MediaKind::Video);
        assert_eq!(modal.variant(), MediaKind::Video);
        assert_eq!(modal.phase(), Phase::Preparing);
        assert_eq!(modal.progress(), 0.0);
    }

    #[test]
    fn test_reveal_then_animate_open() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);

        // Before the delay elapses the modal stays at the hidden end
        modal.tick(0.1);
        assert_eq!(modal.progress(), 0.0);

        modal.reveal();
        assert_eq!(modal.phase(), Phase::Open);
        modal.tick(0.15);
        assert!(modal.progress() > 0.0 && modal.progress() < 1.0);
        modal.tick(1.0);
        assert_eq!(modal.progress(), 1.0);
    }

    #[test]
    fn test_close_stops_audio_before_teardown() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.reveal();
        modal.tick(1.0);

        modal.close();

        // The player is still mounted during the close animation, but
        // already stopped with its source cleared.
        let player = modal.player().expect("player still mounted");
        assert!(!player.is_playing());
        assert_eq!(player.source(), None);

        modal.tick(1.0);
        modal.finish_close();
        assert_eq!(modal.phase(), Phase::Hidden);
        assert!(modal.player().is_none());
    }

    #[test]
    fn test_close_resets_variant_to_video() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.reveal();
        modal.close();
        modal.finish_close();
        assert_eq!(modal.variant(), MediaKind::Video);
    }

    #[test]
    fn test_video_close_keeps_player_until_teardown() {
        let mut modal = ModalState::new();
        modal.open("https://example.com/embed/reel".to_string(), MediaKind::Video);
        modal.reveal();

        modal.close();
        // Video embeds are torn down with the content; only audio needs
        // the explicit early stop.
        assert!(modal.player().is_some());
        modal.finish_close();
        assert!(modal.player().is_none());
    }

    #[test]
    fn test_stale_reveal_after_close_is_noop() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.close();

        // The 10ms one-shot from the open fires after the close started
        modal.reveal();
        assert_eq!(modal.phase(), Phase::Closing);
    }

    #[test]
    fn test_stale_finish_close_after_reopen_is_noop() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.reveal();
        modal.close();

        // Reopened before the close delay fired
        modal.open("https://example.com/embed/reel".to_string(), MediaKind::Video);
        modal.finish_close();

        assert_eq!(modal.phase(), Phase::Preparing);
        assert!(modal.player().is_some());
    }

    #[test]
    fn test_redundant_close_is_noop() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.reveal();
        modal.close();
        modal.close();
        assert_eq!(modal.phase(), Phase::Closing);

        let mut hidden = ModalState::new();
        hidden.close();
        assert_eq!(hidden.phase(), Phase::Hidden);
    }

    #[test]
    fn test_playback_position_advances_only_while_playing() {
        let mut modal = ModalState::new();
        open_audio(&mut modal);
        modal.reveal();

        modal.tick(2.0);
        let played = modal.player().unwrap().position();
        assert!(played > 0.0);

        modal.toggle_playback();
        modal.tick(2.0);
        assert_eq!(modal.player().unwrap().position(), played);
    }
}
