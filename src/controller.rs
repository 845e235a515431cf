use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{Lights, PedestrianButton, Phase};

/// How long every phase stays lit before the next one is picked.
pub const DWELL_MS: u32 = 2_000;

/// A failure reported by the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error<O, I> {
    /// Driving one of the signal outputs failed.
    Signal(O),
    /// Reading the pedestrian button failed.
    Button(I),
}

/// Drives the signal head through its phases.
pub struct Controller<O, I, D> {
    lights: Lights<O>,
    button: PedestrianButton<I>,
    delay: D,
    phase: Phase,
}

impl<O, I, D> Controller<O, I, D>
where
    O: OutputPin,
    I: InputPin,
    D: DelayNs,
{
    pub fn new(red: O, yellow: O, green: O, button: I, delay: D) -> Self {
        let phase = Phase::INITIAL;
        info!("Controller ready, starting at {:?}", phase);

        Self {
            lights: Lights::new(red, yellow, green),
            button: PedestrianButton::new(button),
            delay,
            phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lights(&self) -> &Lights<O> {
        &self.lights
    }

    /// Lights the signal of the current phase and nothing else.
    pub fn activate(&mut self) -> Result<(), Error<O::Error, I::Error>> {
        self.phase.activate(&mut self.lights).map_err(Error::Signal)
    }

    /// One turn of the control loop: activate, dwell, then advance.
    ///
    /// The button is only sampled once the dwell is over. Returns the phase
    /// that will be activated next. On error the current phase is kept.
    pub fn step(&mut self) -> Result<Phase, Error<O::Error, I::Error>> {
        self.activate()?;
        self.delay.delay_ms(DWELL_MS);

        let next = self
            .phase
            .compute_next(&mut self.button)
            .map_err(Error::Button)?;
        if next != self.phase.successor() {
            info!("Crossing requested, {:?} -> {:?}", self.phase, next);
        } else {
            info!("Phase {:?} -> {:?}", self.phase, next);
        }
        self.phase = next;

        Ok(next)
    }

    /// Runs the control loop until the hardware fails.
    pub fn run(&mut self) -> Result<Infallible, Error<O::Error, I::Error>> {
        loop {
            self.step()?;
        }
    }
}
