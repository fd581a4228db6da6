use crate::event::Event;
use crate::machine::MotorMachine;
use serde::Serialize;

/// Command injections for a fixed-length run.
///
/// The scenario owns no pacing: `run` executes at full speed, and a
/// real-time driver can call `events_for`/`step` once per wall-clock
/// period instead. Either way the numeric output is identical.
#[derive(Debug, Clone)]
pub struct Scenario {
    steps: usize,
    commands: Vec<(usize, Event)>,
}

/// Observable record of one executed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepTrace {
    pub step: usize,
    pub speed: f64,
    pub state: &'static str,
    pub events: Vec<&'static str>,
}

impl StepTrace {
    /// The `events` log column: `|`-joined, always ending in "EvTick".
    pub fn events_joined(&self) -> String {
        self.events.join("|")
    }
}

impl Scenario {
    /// The fixed 1000-step validation run: Start at step 100, Fail at
    /// 500, Reset at 600, Start again at 650.
    pub fn validation() -> Self {
        Self {
            steps: 1000,
            commands: vec![
                (100, Event::Start),
                (500, Event::Fail),
                (600, Event::Reset),
                (650, Event::Start),
            ],
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Ordered events of one step: scheduled commands first, then the
    /// tick that closes the step.
    pub fn events_for(&self, step: usize) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .commands
            .iter()
            .filter(|(at, _)| *at == step)
            .map(|(_, event)| *event)
            .collect();
        events.push(Event::Tick);
        events
    }

    /// Pump one step through the machine and record what it observed.
    /// Speed and state are sampled after the step's tick.
    pub fn step(&self, machine: &mut MotorMachine, step: usize) -> StepTrace {
        let events = self.events_for(step);
        let mut names = Vec::with_capacity(events.len());
        for event in events {
            machine.process(event);
            names.push(event.name());
        }
        let snapshot = machine.snapshot();
        StepTrace {
            step,
            speed: snapshot.speed,
            state: snapshot.state,
            events: names,
        }
    }

    /// Drive the whole run at full speed. The deterministic offline
    /// harness used by tests; the binary adds wall-clock pacing.
    pub fn run(&self, machine: &mut MotorMachine) -> Vec<StepTrace> {
        (0..self.steps)
            .map(|step| self.step(machine, step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_state(step: usize) -> &'static str {
        match step {
            0..=99 => "Idle",
            100..=499 => "Running",
            500..=599 => "Error",
            600..=649 => "Idle",
            _ => "Running",
        }
    }

    #[test]
    fn validation_run_state_bands() {
        let scenario = Scenario::validation();
        let mut machine = MotorMachine::new();
        let traces = scenario.run(&mut machine);
        assert_eq!(traces.len(), 1000);
        for trace in &traces {
            assert_eq!(trace.state, expected_state(trace.step), "step {}", trace.step);
        }
    }

    #[test]
    fn validation_run_event_columns() {
        let scenario = Scenario::validation();
        let mut machine = MotorMachine::new();
        for trace in scenario.run(&mut machine) {
            let expected = match trace.step {
                100 | 650 => "EvStart|EvTick",
                500 => "EvFail|EvTick",
                600 => "EvReset|EvTick",
                _ => "EvTick",
            };
            assert_eq!(trace.events_joined(), expected, "step {}", trace.step);
        }
    }

    #[test]
    fn validation_run_spot_speeds() {
        let scenario = Scenario::validation();
        let mut machine = MotorMachine::new();
        let traces = scenario.run(&mut machine);

        // Idle warmup never moves the plant.
        assert_eq!(traces[99].speed, 0.0);
        // First running tick: one exact first-order step toward 10.
        let alpha = crate::plant::DT_S / (crate::plant::TAU_S + crate::plant::DT_S);
        assert_eq!(traces[100].speed, 10.0 * alpha);
        // 400 running ticks gets within tolerance of steady state.
        assert!((traces[499].speed - 10.0).abs() < 1e-6);
        // Speed decays through Error, rises again after the restart.
        assert!(traces[599].speed < traces[500].speed);
        assert!(traces[999].speed > traces[650].speed);
    }

    #[test]
    fn two_runs_are_bit_identical() {
        let scenario = Scenario::validation();
        let first = scenario.run(&mut MotorMachine::new());
        let second = scenario.run(&mut MotorMachine::new());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.speed.to_bits(), b.speed.to_bits(), "step {}", a.step);
        }
    }
}
