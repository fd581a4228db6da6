use crate::infra::audit::{TransitionEntry, TransitionLogger};
use crate::infra::record::CsvLogger;
use crate::runtime::config::RuntimeConfig;
use crate::runtime::logging::init_tracing;
use sim_core::{MotorMachine, Scenario, StepTrace, TimeBase};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub fn run_from_args() {
    let config = RuntimeConfig::from_env();
    if config.show_help {
        RuntimeConfig::print_help();
        return;
    }
    run(config);
}

pub fn run(config: RuntimeConfig) {
    // Initialize tracing
    init_tracing(config.json_logs);

    let timebase = TimeBase::new();
    let scenario = Scenario::validation();
    let mut machine = MotorMachine::new();

    // Step log failure is reported once; the run continues with
    // console observation only.
    let mut csv = match CsvLogger::create(&config.csv_path) {
        Ok(logger) => Some(logger),
        Err(e) => {
            warn!(
                error = %e,
                path = %config.csv_path.display(),
                "Step log unavailable, continuing with console output only"
            );
            None
        }
    };

    let mut audit = config.audit_path.as_deref().and_then(|path| {
        match TransitionLogger::new(path) {
            Ok(logger) => {
                info!(path = %path.display(), "Transition audit enabled");
                Some(logger)
            }
            Err(e) => {
                warn!(error = %e, "Failed to open transition audit log");
                None
            }
        }
    });

    info!(
        steps = scenario.steps(),
        step_ms = config.step_ms,
        pacing = config.pacing,
        "Starting motor simulation"
    );

    let step_time = Duration::from_millis(config.step_ms);
    let mut next_step = Instant::now() + step_time;
    let mut overruns = 0u64;

    for step in 0..scenario.steps() {
        let events = scenario.events_for(step);
        let mut names = Vec::with_capacity(events.len());
        for event in events {
            let from = machine.state();
            if let Some(entered) = machine.process(event) {
                info!(
                    step,
                    from = from.label(),
                    to = entered.label(),
                    event = event.name(),
                    "State transition"
                );
                if let Some(ref mut logger) = audit {
                    let _ = logger.log(&TransitionEntry {
                        timestamp_us: timebase.now_us(),
                        unix_us: timebase.unix_us(),
                        step,
                        from,
                        to: entered,
                        event,
                    });
                }
            }
            names.push(event.name());
        }

        let snapshot = machine.snapshot();
        let trace = StepTrace {
            step,
            speed: snapshot.speed,
            state: snapshot.state,
            events: names,
        };
        debug!(
            step,
            state = trace.state,
            speed = trace.speed,
            events = %trace.events_joined(),
            "step"
        );

        if let Some(mut logger) = csv.take() {
            match logger.append(&trace) {
                Ok(()) => csv = Some(logger),
                Err(e) => warn!(
                    error = %e,
                    "Step log write failed, continuing with console output only"
                ),
            }
        }

        // Real-time pacing against absolute deadlines, so one slow
        // step does not shift every later step.
        if config.pacing {
            let now = Instant::now();
            if now < next_step {
                std::thread::sleep(next_step - now);
            } else {
                overruns += 1;
            }
            next_step += step_time;
        }
    }

    if let Some(ref mut logger) = csv {
        if let Err(e) = logger.flush() {
            warn!(error = %e, "Failed to flush step log");
        }
    }

    let snapshot = machine.snapshot();
    info!(
        steps_executed = scenario.steps(),
        overruns,
        final_state = snapshot.state,
        final_speed = snapshot.speed,
        elapsed_ms = timebase.now_us() / 1000,
        "Run complete"
    );
}
