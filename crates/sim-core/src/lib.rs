pub mod event;
pub mod machine;
pub mod plant;
pub mod scenario;
pub mod timebase;

pub use event::Event;
pub use machine::{transition, ControllerState, EntryObserver, MotorMachine, Snapshot};
pub use plant::Motor;
pub use scenario::{Scenario, StepTrace};
pub use timebase::TimeBase;
