use crate::scroll::ToggleAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Backward,
}

/// Position within a single tween that can be driven forwards and backwards
/// by toggle actions.
#[derive(Clone, Debug, PartialEq)]
pub struct Playhead {
    duration_ms: f64,
    position_ms: f64,
    direction: PlayDirection,
    playing: bool,
}

impl Playhead {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            position_ms: 0.0,
            direction: PlayDirection::Forward,
            playing: false,
        }
    }

    pub fn position_ms(&self) -> f64 {
        self.position_ms
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.run(PlayDirection::Forward),
            ToggleAction::Reverse => self.run(PlayDirection::Backward),
            ToggleAction::None => {}
        }
    }

    fn run(&mut self, direction: PlayDirection) {
        self.direction = direction;
        self.playing = !self.at_end_of(direction);
    }

    fn at_end_of(&self, direction: PlayDirection) -> bool {
        match direction {
            PlayDirection::Forward => self.position_ms >= self.duration_ms,
            PlayDirection::Backward => self.position_ms <= 0.0,
        }
    }

    /// Moves the playhead by `delta_ms` of wall time. Returns whether it is
    /// still playing afterwards.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if !self.playing {
            return false;
        }
        let delta = delta_ms.max(0.0);
        self.position_ms = match self.direction {
            PlayDirection::Forward => (self.position_ms + delta).min(self.duration_ms),
            PlayDirection::Backward => (self.position_ms - delta).max(0.0),
        };
        if self.at_end_of(self.direction) {
            self.playing = false;
        }
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_forward_to_the_end_and_stops() {
        let mut head = Playhead::new(800.0);
        head.apply(ToggleAction::Play);
        assert!(head.advance(500.0));
        assert!(!head.advance(500.0));
        assert_eq!(head.position_ms(), 800.0);
    }

    #[test]
    fn play_at_end_is_a_no_op() {
        let mut head = Playhead::new(800.0);
        head.apply(ToggleAction::Play);
        head.advance(800.0);
        head.apply(ToggleAction::Play);
        assert!(!head.is_playing());
    }

    #[test]
    fn reverse_then_play_replays_forward() {
        let mut head = Playhead::new(800.0);
        head.apply(ToggleAction::Play);
        head.advance(800.0);
        head.apply(ToggleAction::Reverse);
        assert!(head.is_playing());
        head.advance(300.0);
        assert_eq!(head.position_ms(), 500.0);
        head.apply(ToggleAction::Play);
        assert_eq!(head.direction(), PlayDirection::Forward);
        head.advance(1_000.0);
        assert_eq!(head.position_ms(), 800.0);
    }

    #[test]
    fn none_leaves_state_alone() {
        let mut head = Playhead::new(800.0);
        head.apply(ToggleAction::Play);
        head.advance(100.0);
        let before = head.clone();
        head.apply(ToggleAction::None);
        assert_eq!(head, before);
    }

    #[test]
    fn reverse_at_start_is_a_no_op() {
        let mut head = Playhead::new(800.0);
        head.apply(ToggleAction::Reverse);
        assert!(!head.is_playing());
        assert_eq!(head.position_ms(), 0.0);
    }
}
