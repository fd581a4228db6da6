/// Simulated seconds advanced per `Motor::advance` call. Independent of
/// whatever wall-clock cadence the driver runs at.
pub const DT_S: f64 = 0.01;
/// Time constant of the speed response.
pub const TAU_S: f64 = 0.2;
/// Steady-state speed per unit torque.
pub const SPEED_PER_TORQUE: f64 = 1.0;
/// Torque applied while the controller commands the motor to run.
pub const DRIVE_TORQUE: f64 = 10.0;

/// First-order motor plant.
///
/// Each `advance` integrates one fixed step of
///
/// ```text
///   ds/dt = (s_target - s) / tau
/// ```
///
/// using the exact discretization `alpha = dt / (tau + dt)`. The update
/// is total over finite inputs and must stay bit-for-bit reproducible,
/// so nothing here may read the wall clock or any other ambient source.
#[derive(Debug, Clone, Copy)]
pub struct Motor {
    speed: f64,
    torque: f64,
}

impl Motor {
    pub fn new() -> Self {
        Self {
            speed: 0.0,
            torque: 0.0,
        }
    }

    /// Advance the plant by one time step.
    ///
    /// `running` selects the torque level: `DRIVE_TORQUE` while the
    /// controller is in Running, zero otherwise.
    pub fn advance(&mut self, running: bool) {
        self.torque = if running { DRIVE_TORQUE } else { 0.0 };
        let target_speed = self.torque * SPEED_PER_TORQUE;
        let alpha = DT_S / (TAU_S + DT_S);
        self.speed += (target_speed - self.speed) * alpha;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn torque(&self) -> f64 {
        self.torque
    }
}

impl Default for Motor {
    fn default() -> Self {
        Self::new()
    }
}
