use crate::event::Event;
use crate::plant::Motor;
use serde::Serialize;

/// Controller state. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ControllerState {
    #[default]
    Idle,
    Running,
    Error,
}

impl ControllerState {
    pub fn label(self) -> &'static str {
        match self {
            ControllerState::Idle => "Idle",
            ControllerState::Running => "Running",
            ControllerState::Error => "Error",
        }
    }

    /// Whether the plant is driven while this state handles a tick.
    pub fn drives_plant(self) -> bool {
        matches!(self, ControllerState::Running)
    }
}

/// The transition table as a pure function.
///
/// Returns the target state when `event` transitions out of `state`,
/// `None` when the event is discarded. `Tick` never transitions; it is
/// a consumed same-state reaction handled in [`MotorMachine::process`].
pub fn transition(state: ControllerState, event: Event) -> Option<ControllerState> {
    use ControllerState::*;
    match (state, event) {
        (Idle, Event::Start) => Some(Running),
        (Running, Event::Stop) => Some(Idle),
        (Running, Event::Fail) => Some(Error),
        (Error, Event::Reset) => Some(Idle),
        _ => None,
    }
}

/// Read-only view of the machine between two `process` calls.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub state: &'static str,
    pub speed: f64,
}

/// Callback fired on every state entry, including the initial Idle.
pub type EntryObserver = Box<dyn FnMut(ControllerState) + Send>;

/// One motor plus its finite-state controller.
///
/// The machine is fully synchronous: `process` runs one reaction pass
/// to completion before returning, so the snapshot is never observed
/// mid-transition. It can be pumped at any pace by any driver.
pub struct MotorMachine {
    state: ControllerState,
    motor: Motor,
    state_label: &'static str,
    observer: Option<EntryObserver>,
}

impl MotorMachine {
    /// New machine in Idle with a zeroed plant. The Idle entry action
    /// fires during construction.
    pub fn new() -> Self {
        let mut machine = Self {
            state: ControllerState::Idle,
            motor: Motor::new(),
            state_label: "",
            observer: None,
        };
        machine.enter(ControllerState::Idle);
        machine
    }

    /// Entry action: mirror the label, emit the diagnostic notice,
    /// invoke the observer. Fires exactly once per state entry.
    fn enter(&mut self, next: ControllerState) {
        self.state = next;
        self.state_label = next.label();
        log::debug!("entered state {}", self.state_label);
        if let Some(observer) = self.observer.as_mut() {
            observer(next);
        }
    }

    /// Apply one reaction pass for `event`.
    ///
    /// A tick advances the plant and is consumed without changing
    /// state. A command either transitions (the new state is returned)
    /// or is silently discarded (`None`). No event can fail.
    pub fn process(&mut self, event: Event) -> Option<ControllerState> {
        if event == Event::Tick {
            self.motor.advance(self.state.drives_plant());
            return None;
        }
        let next = transition(self.state, event)?;
        self.enter(next);
        Some(next)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn motor(&self) -> &Motor {
        &self.motor
    }

    /// Safe to call between any two `process` calls.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state_label,
            speed: self.motor.speed(),
        }
    }

    /// Install the optional state-entry observer. Fires on subsequent
    /// entries only; the initial Idle entry has already happened.
    pub fn set_observer(&mut self, observer: EntryObserver) {
        self.observer = Some(observer);
    }
}

impl Default for MotorMachine {
    fn default() -> Self {
        Self::new()
    }
}
