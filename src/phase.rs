use embedded_hal::digital::{InputPin, OutputPin};

use crate::{Lights, PedestrianButton};

/// A phase of the signal cycle. Each phase lights exactly one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum Phase {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl Phase {
    pub const INITIAL: Self = Self::Red;
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// The phase that follows when nobody is waiting to cross.
    pub fn successor(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }

    /// A pending crossing request always leads to red, whatever the phase.
    pub fn next(self, pedestrian_waiting: bool) -> Self {
        if pedestrian_waiting {
            Self::Red
        } else {
            self.successor()
        }
    }

    pub fn activate<O: OutputPin>(self, lights: &mut Lights<O>) -> Result<(), O::Error> {
        lights.show(self)
    }

    /// Samples `button` once and picks the next phase.
    pub fn compute_next<I: InputPin>(
        self,
        button: &mut PedestrianButton<I>,
    ) -> Result<Self, I::Error> {
        Ok(self.next(button.is_pressed()?))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::INITIAL
    }
}
