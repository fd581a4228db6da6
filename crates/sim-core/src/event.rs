use serde::Serialize;

/// Commands and the periodic tick accepted by the controller.
///
/// The set is closed: malformed events cannot be constructed, so event
/// submission has no failure mode. Serde names match the log column
/// names so audit entries carry the same spelling as the step log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Event {
    #[serde(rename = "EvStart")]
    Start,
    #[serde(rename = "EvStop")]
    Stop,
    #[serde(rename = "EvFail")]
    Fail,
    #[serde(rename = "EvReset")]
    Reset,
    #[serde(rename = "EvTick")]
    Tick,
}

impl Event {
    /// Name used in the step log's `events` column.
    pub fn name(self) -> &'static str {
        match self {
            Event::Start => "EvStart",
            Event::Stop => "EvStop",
            Event::Fail => "EvFail",
            Event::Reset => "EvReset",
            Event::Tick => "EvTick",
        }
    }
}
