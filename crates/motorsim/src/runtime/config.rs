use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub show_help: bool,
    pub csv_path: PathBuf,
    pub pacing: bool,
    pub step_ms: u64,
    pub json_logs: bool,
    pub audit_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            csv_path: PathBuf::from("log.csv"),
            pacing: true,
            step_ms: 10,
            json_logs: false,
            audit_path: None,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    pub fn from_args(args: &[String]) -> Self {
        let mut cfg = RuntimeConfig::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--csv" => {
                    if i + 1 < args.len() {
                        cfg.csv_path = PathBuf::from(&args[i + 1]);
                        i += 1;
                    }
                }
                "--no-pacing" => {
                    cfg.pacing = false;
                }
                "--step-ms" => {
                    if i + 1 < args.len() {
                        cfg.step_ms = args[i + 1].parse().unwrap_or(10);
                        i += 1;
                    }
                }
                "--json-logs" => {
                    cfg.json_logs = true;
                }
                "--audit-log" => {
                    if i + 1 < args.len() {
                        cfg.audit_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    }
                }
                "--help" | "-h" => {
                    cfg.show_help = true;
                    break;
                }
                _ => {}
            }
            i += 1;
        }
        cfg
    }

    pub fn print_help() {
        println!(
            r#"motorsim - Deterministic motor / controller simulation

USAGE:
    motorsim [OPTIONS]

OPTIONS:
    --csv <PATH>            Step log destination [default: log.csv]
    --no-pacing             Run all steps as fast as possible
    --step-ms <MS>          Wall-clock milliseconds per step [default: 10]
    --json-logs             Output logs in JSON format (for log aggregation)
    --audit-log <PATH>      Enable transition audit logging to a JSONL file
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log filter (e.g., RUST_LOG=info,sim_core=trace)

EXAMPLES:
    # Real-time run with the default 10 ms cadence
    motorsim

    # Deterministic offline run with an audit trail
    motorsim --no-pacing --csv /tmp/log.csv --audit-log /tmp/transitions.jsonl
"#
        );
    }
}
