use juststream_api::ContentItem;

pub const MIN_PLAYBACK_RATE: f64 = 0.25;
pub const MAX_PLAYBACK_RATE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_content: Option<ContentItem>,
    pub is_playing: bool,
    /// Always within [0, 1]
    pub volume: f64,
    pub playback_rate: f64,
    /// Playback position in seconds
    pub current_time: f64,
    /// Length of the loaded media in seconds, 0 until known
    pub duration: f64,
    pub is_fullscreen: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_content: None,
            is_playing: false,
            volume: 1.0,
            playback_rate: 1.0,
            current_time: 0.0,
            duration: 0.0,
            is_fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    PlayContent(ContentItem),
    Pause,
    Resume,
    Stop,
    SetVolume(f64),
    SetPlaybackRate(f64),
    /// Reported by the platform once entering or leaving fullscreen has completed
    FullscreenChanged(bool),
    SetCurrentTime(f64),
    SetDuration(f64),
}

impl PlayerState {
    pub fn apply(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::PlayContent(content) => {
                if self.current_content.as_ref().map(|c| &c.id) != Some(&content.id) {
                    self.current_time = 0.0;
                    self.duration = 0.0;
                }
                self.current_content = Some(content);
                self.is_playing = true;
            }
            PlayerAction::Pause => self.is_playing = false,
            PlayerAction::Resume => self.is_playing = true,
            PlayerAction::Stop => {
                self.is_playing = false;
                self.current_content = None;
                self.current_time = 0.0;
            }
            PlayerAction::SetVolume(volume) => {
                if !volume.is_nan() {
                    self.volume = volume.clamp(0.0, 1.0);
                }
            }
            PlayerAction::SetPlaybackRate(rate) => {
                if rate.is_finite() {
                    self.playback_rate = rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE);
                }
            }
            PlayerAction::FullscreenChanged(is_fullscreen) => self.is_fullscreen = is_fullscreen,
            PlayerAction::SetCurrentTime(time) => {
                if time.is_finite() {
                    self.current_time = time.max(0.0);
                }
            }
            PlayerAction::SetDuration(duration) => {
                if duration.is_finite() {
                    self.duration = duration.max(0.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::generator::Catalog;
    use googletest::prelude::*;

    #[googletest::test]
    fn test_volume_is_clamped() {
        let mut state = PlayerState::default();

        for (requested, expected) in [(0.5, 0.5), (1.7, 1.0), (-0.2, 0.0), (f64::INFINITY, 1.0)] {
            state.apply(PlayerAction::SetVolume(requested));
            expect_that!(state.volume, eq(expected));
        }

        state.apply(PlayerAction::SetVolume(f64::NAN));
        expect_that!(state.volume, eq(1.0));
    }

    #[googletest::test]
    fn test_playback_rate_is_bounded() {
        let mut state = PlayerState::default();

        state.apply(PlayerAction::SetPlaybackRate(1.5));
        expect_that!(state.playback_rate, eq(1.5));
        state.apply(PlayerAction::SetPlaybackRate(16.0));
        expect_that!(state.playback_rate, eq(MAX_PLAYBACK_RATE));
        state.apply(PlayerAction::SetPlaybackRate(0.0));
        expect_that!(state.playback_rate, eq(MIN_PLAYBACK_RATE));
        state.apply(PlayerAction::SetPlaybackRate(f64::NAN));
        expect_that!(state.playback_rate, eq(MIN_PLAYBACK_RATE));
    }

    #[googletest::test]
    fn test_play_pause_stop() {
        let catalog = Catalog::new(11, 10);
        let mut state = PlayerState::default();

        state.apply(PlayerAction::PlayContent(catalog.item(0).unwrap()));
        expect_true!(state.is_playing);
        state.apply(PlayerAction::SetCurrentTime(42.0));

        state.apply(PlayerAction::Pause);
        expect_false!(state.is_playing);
        state.apply(PlayerAction::Resume);
        expect_true!(state.is_playing);

        state.apply(PlayerAction::Stop);
        expect_false!(state.is_playing);
        expect_that!(state.current_content, none());
        expect_that!(state.current_time, eq(0.0));
    }

    #[googletest::test]
    fn test_replaying_same_content_keeps_position() {
        let catalog = Catalog::new(11, 10);
        let mut state = PlayerState::default();

        state.apply(PlayerAction::PlayContent(catalog.item(0).unwrap()));
        state.apply(PlayerAction::SetCurrentTime(42.0));
        state.apply(PlayerAction::PlayContent(catalog.item(0).unwrap()));
        expect_that!(state.current_time, eq(42.0));

        state.apply(PlayerAction::PlayContent(catalog.item(1).unwrap()));
        expect_that!(state.current_time, eq(0.0));
    }

    #[googletest::test]
    fn test_time_and_fullscreen() {
        let mut state = PlayerState::default();

        state.apply(PlayerAction::SetCurrentTime(-3.0));
        expect_that!(state.current_time, eq(0.0));
        state.apply(PlayerAction::SetDuration(596.5));
        expect_that!(state.duration, eq(596.5));

        state.apply(PlayerAction::FullscreenChanged(true));
        expect_true!(state.is_fullscreen);
        state.apply(PlayerAction::FullscreenChanged(false));
        expect_false!(state.is_fullscreen);
    }
}
