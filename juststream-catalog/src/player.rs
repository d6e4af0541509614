//! Playback transport: keeps an embedded playback widget and the player slice in step.

use crate::store::{PlayerAction, PlayerState};

/// Operations offered by the embedded playback widget. Media decoding stays inside the widget.
pub trait PlaybackSurface {
    fn play(&self);
    fn pause(&self);
    /// Moves the playback position, in seconds
    fn seek(&self, seconds: f64);
    fn set_volume(&self, volume: f64);
    fn set_playback_rate(&self, rate: f64);
}

/// Callbacks raised by the playback widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    Played,
    Paused,
    Progress(f64),
    DurationKnown(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pushed {
    playing: bool,
    volume: f64,
    rate: f64,
}

/// Pushes player state changes to a [`PlaybackSurface`] and turns widget callbacks into actions.
#[derive(Debug, Default)]
pub struct Transport {
    restored: bool,
    pushed: Option<Pushed>,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once the widget is ready. Restores a previously stored position the first time,
    /// then pushes the current state.
    pub fn on_ready(&mut self, state: &PlayerState, surface: &impl PlaybackSurface) {
        if !self.restored {
            self.restored = true;
            if state.current_time > 0.0 {
                log::debug!("Restoring playback position to {}s", state.current_time);
                surface.seek(state.current_time);
            }
        }
        self.sync(state, surface);
    }

    /// Pushes whatever changed since the last push.
    pub fn sync(&mut self, state: &PlayerState, surface: &impl PlaybackSurface) {
        let next = Pushed {
            playing: state.is_playing,
            volume: state.volume,
            rate: state.playback_rate,
        };
        let previous = self.pushed.replace(next);

        if previous.is_none_or(|p| p.playing != next.playing) {
            if next.playing {
                surface.play();
            } else {
                surface.pause();
            }
        }
        if previous.is_none_or(|p| p.volume != next.volume) {
            surface.set_volume(next.volume);
        }
        if previous.is_none_or(|p| p.rate != next.rate) {
            surface.set_playback_rate(next.rate);
        }
    }

    /// Seeks the widget and returns the action recording the new position.
    pub fn seek(&self, seconds: f64, surface: &impl PlaybackSurface) -> PlayerAction {
        surface.seek(seconds);
        PlayerAction::SetCurrentTime(seconds)
    }

    pub fn action_for(event: SurfaceEvent) -> PlayerAction {
        match event {
            SurfaceEvent::Played => PlayerAction::Resume,
            SurfaceEvent::Paused => PlayerAction::Pause,
            SurfaceEvent::Progress(seconds) => PlayerAction::SetCurrentTime(seconds),
            SurfaceEvent::DurationKnown(seconds) => PlayerAction::SetDuration(seconds),
        }
    }
}
