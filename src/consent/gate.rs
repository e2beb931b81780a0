use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Rejected,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Rejected => "rejected",
        }
    }

    /// Anything other than the two stored literals reads as no choice.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(ConsentChoice::Accepted),
            "rejected" => Some(ConsentChoice::Rejected),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsentState {
    #[default]
    Unset,
    Accepted,
    Rejected,
}

impl From<Option<ConsentChoice>> for ConsentState {
    fn from(choice: Option<ConsentChoice>) -> Self {
        match choice {
            None => ConsentState::Unset,
            Some(ConsentChoice::Accepted) => ConsentState::Accepted,
            Some(ConsentChoice::Rejected) => ConsentState::Rejected,
        }
    }
}

pub trait ConsentStore {
    fn load(&self) -> Option<ConsentChoice>;
    fn save(&self, choice: ConsentChoice) -> Result<()>;
}

/// What the page should do in response to a gate transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    ScheduleBanner,
    HideBanner,
    LoadTracking,
}

/// Consent state machine. Tracking is loaded at most once per gate, which
/// lives for one page load.
pub struct ConsentGate<S> {
    store: S,
    state: ConsentState,
    tracking_loaded: bool,
}

impl<S: ConsentStore> ConsentGate<S> {
    /// Reads the stored choice; this is the only read per page load.
    pub fn open(store: S) -> Self {
        let state = store.load().into();
        Self {
            store,
            state,
            tracking_loaded: false,
        }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn tracking_loaded(&self) -> bool {
        self.tracking_loaded
    }

    pub fn on_load(&mut self) -> Vec<GateAction> {
        match self.state {
            ConsentState::Unset => vec![GateAction::ScheduleBanner],
            ConsentState::Accepted => self.load_tracking().into_iter().collect(),
            ConsentState::Rejected => Vec::new(),
        }
    }

    pub fn accept(&mut self) -> Vec<GateAction> {
        self.decide(ConsentChoice::Accepted)
    }

    pub fn reject(&mut self) -> Vec<GateAction> {
        self.decide(ConsentChoice::Rejected)
    }

    /// A failed save still applies the choice for this page load; only the
    /// next visit asks again.
    fn decide(&mut self, choice: ConsentChoice) -> Vec<GateAction> {
        let mut actions = vec![GateAction::HideBanner];
        if self.state != ConsentState::Unset {
            return actions;
        }
        if let Err(e) = self.store.save(choice) {
            e.log("cookie consent");
        }
        self.state = Some(choice).into();
        if choice == ConsentChoice::Accepted {
            actions.extend(self.load_tracking());
        }
        actions
    }

    fn load_tracking(&mut self) -> Option<GateAction> {
        if self.tracking_loaded {
            return None;
        }
        self.tracking_loaded = true;
        Some(GateAction::LoadTracking)
    }
}
