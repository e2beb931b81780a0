use std::fmt;
use std::str::FromStr;

/// A point on the element matched against a point on the viewport, both as
/// fractions of their height. `top 80%` is `{ element: 0.0, viewport: 0.8 }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    pub element: f64,
    pub viewport: f64,
}

impl TriggerPosition {
    /// Element bottom meets viewport top.
    pub const BOTTOM_TOP: TriggerPosition = TriggerPosition {
        element: 1.0,
        viewport: 0.0,
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTriggerError(String);

impl fmt::Display for ParseTriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid trigger value `{}`", self.0)
    }
}

impl std::error::Error for ParseTriggerError {}

fn parse_fraction(word: &str) -> Option<f64> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => word
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .map(|percent| percent / 100.0),
    }
}

impl FromStr for TriggerPosition {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let err = || ParseTriggerError(s.to_string());
        let element = words.next().and_then(parse_fraction).ok_or_else(err)?;
        let viewport = words.next().and_then(parse_fraction).ok_or_else(err)?;
        if words.next().is_some() {
            return Err(err());
        }
        Ok(Self { element, viewport })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Before,
    Active,
    After,
}

/// Element geometry in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// Tracks which side of a start/end scroll range the page is on and reports
/// the crossings. Positions are cached until the next `refresh`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerPosition,
    end: TriggerPosition,
    bounds: Option<(f64, f64)>,
    region: Region,
}

impl ScrollTrigger {
    pub fn new(start: TriggerPosition) -> Self {
        Self {
            start,
            end: TriggerPosition::BOTTOM_TOP,
            bounds: None,
            region: Region::Before,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Scroll offsets at which the trigger starts and ends.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    pub fn refresh(&mut self, layout: Layout) {
        let at = |position: TriggerPosition| {
            layout.element_top + position.element * layout.element_height
                - position.viewport * layout.viewport_height
        };
        let start = at(self.start);
        let end = at(self.end).max(start);
        self.bounds = Some((start, end));
    }

    pub fn update(&mut self, scroll_y: f64) -> Vec<TriggerEvent> {
        let Some((start, end)) = self.bounds else {
            return Vec::new();
        };
        let next = if scroll_y < start {
            Region::Before
        } else if scroll_y > end {
            Region::After
        } else {
            Region::Active
        };
        let events = transition(self.region, next);
        self.region = next;
        events
    }
}

fn transition(from: Region, to: Region) -> Vec<TriggerEvent> {
    use Region::*;
    use TriggerEvent::*;
    match (from, to) {
        (Before, Active) => vec![Enter],
        (Active, After) => vec![Leave],
        (After, Active) => vec![EnterBack],
        (Active, Before) => vec![LeaveBack],
        (Before, After) => vec![Enter, Leave],
        (After, Before) => vec![EnterBack, LeaveBack],
        _ => Vec::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Reverse,
    None,
}

impl FromStr for ToggleAction {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "reverse" => ToggleAction::Reverse,
            "none" => ToggleAction::None,
            other => return Err(ParseTriggerError(other.to_string())),
        })
    }
}

/// Actions for enter, leave, enter-back and leave-back, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions([ToggleAction; 4]);

impl ToggleActions {
    pub const fn new(actions: [ToggleAction; 4]) -> Self {
        Self(actions)
    }

    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        let index = match event {
            TriggerEvent::Enter => 0,
            TriggerEvent::Leave => 1,
            TriggerEvent::EnterBack => 2,
            TriggerEvent::LeaveBack => 3,
        };
        self.0[index]
    }
}

impl FromStr for ToggleActions {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        let actions: [ToggleAction; 4] = actions
            .try_into()
            .map_err(|_| ParseTriggerError(s.to_string()))?;
        Ok(Self(actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger_at(start: &str) -> ScrollTrigger {
        let mut trigger = ScrollTrigger::new(start.parse().unwrap());
        trigger.refresh(Layout {
            element_top: 1000.0,
            element_height: 400.0,
            viewport_height: 800.0,
        });
        trigger
    }

    #[test]
    fn parses_positions() {
        assert_eq!(
            "top 80%".parse::<TriggerPosition>(),
            Ok(TriggerPosition { element: 0.0, viewport: 0.8 })
        );
        assert_eq!(
            "center bottom".parse::<TriggerPosition>(),
            Ok(TriggerPosition { element: 0.5, viewport: 1.0 })
        );
        assert!("top".parse::<TriggerPosition>().is_err());
        assert!("top 80% extra".parse::<TriggerPosition>().is_err());
        assert!("middle 10%".parse::<TriggerPosition>().is_err());
    }

    #[test]
    fn refresh_computes_scroll_bounds() {
        let trigger = trigger_at("top 80%");
        // element top 1000 minus 80% of 800; end is element bottom at viewport top
        assert_eq!(trigger.bounds(), Some((360.0, 1400.0)));
    }

    #[test]
    fn no_events_before_refresh() {
        let mut trigger = ScrollTrigger::new("top 80%".parse().unwrap());
        assert!(trigger.update(5_000.0).is_empty());
    }

    #[test]
    fn reports_crossings_in_both_directions() {
        let mut trigger = trigger_at("top 80%");
        assert!(trigger.update(0.0).is_empty());
        assert_eq!(trigger.update(500.0), vec![TriggerEvent::Enter]);
        assert!(trigger.update(600.0).is_empty());
        assert_eq!(trigger.update(1500.0), vec![TriggerEvent::Leave]);
        assert_eq!(trigger.update(1200.0), vec![TriggerEvent::EnterBack]);
        assert_eq!(trigger.update(100.0), vec![TriggerEvent::LeaveBack]);
        assert_eq!(trigger.region(), Region::Before);
    }

    #[test]
    fn jumping_over_the_range_reports_both_edges() {
        let mut trigger = trigger_at("top 85%");
        assert_eq!(
            trigger.update(10_000.0),
            vec![TriggerEvent::Enter, TriggerEvent::Leave]
        );
        assert_eq!(
            trigger.update(0.0),
            vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
        );
    }

    #[test]
    fn refresh_keeps_region() {
        let mut trigger = trigger_at("top 80%");
        trigger.update(500.0);
        trigger.refresh(Layout {
            element_top: 2000.0,
            element_height: 400.0,
            viewport_height: 800.0,
        });
        assert_eq!(trigger.region(), Region::Active);
        assert_eq!(trigger.update(500.0), vec![TriggerEvent::LeaveBack]);
    }

    #[test]
    fn parses_toggle_actions() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(actions.action_for(TriggerEvent::Enter), ToggleAction::Play);
        assert_eq!(actions.action_for(TriggerEvent::Leave), ToggleAction::None);
        assert_eq!(actions.action_for(TriggerEvent::EnterBack), ToggleAction::None);
        assert_eq!(actions.action_for(TriggerEvent::LeaveBack), ToggleAction::Reverse);
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none rewind".parse::<ToggleActions>().is_err());
        assert!("play pause none reverse".parse::<ToggleActions>().is_err());
    }
}
