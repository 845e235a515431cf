use embedded_hal::digital::OutputPin;

use crate::Phase;

/// One lamp of the signal head.
pub struct Signal<O> {
    output: O,
    on: bool,
}

impl<O: OutputPin> Signal<O> {
    pub fn new(output: O) -> Self {
        Self { output, on: false }
    }

    pub fn turn_on(&mut self) -> Result<(), O::Error> {
        self.output.set_high()?;
        self.on = true;
        trace!("Signal on");

        Ok(())
    }

    pub fn turn_off(&mut self) -> Result<(), O::Error> {
        self.output.set_low()?;
        self.on = false;
        trace!("Signal off");

        Ok(())
    }

    /// The level last commanded successfully.
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// The red, yellow and green signals, indexed by the phase that lights them.
pub struct Lights<O> {
    signals: [Signal<O>; 3],
}

impl<O: OutputPin> Lights<O> {
    pub fn new(red: O, yellow: O, green: O) -> Self {
        // Same order as the `Phase` discriminants.
        Self {
            signals: [Signal::new(red), Signal::new(yellow), Signal::new(green)],
        }
    }

    pub fn signal(&self, phase: Phase) -> &Signal<O> {
        &self.signals[phase.index()]
    }

    /// Switches every signal off, then lights the one belonging to `phase`.
    pub fn show(&mut self, phase: Phase) -> Result<(), O::Error> {
        debug!("Showing {:?}", phase);
        for signal in self.signals.iter_mut() {
            signal.turn_off()?;
        }
        self.signals[phase.index()].turn_on()
    }

    /// The phase whose signal is lit, if exactly one is.
    pub fn lit(&self) -> Option<Phase> {
        let mut lit = Phase::ALL.iter().filter(|phase| self.signal(**phase).is_on());
        match (lit.next(), lit.next()) {
            (Some(phase), None) => Some(*phase),
            _ => None,
        }
    }
}
