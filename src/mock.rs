//! Recording stand-ins for the board peripherals.

use core::{
    cell::{Cell, RefCell},
    convert::Infallible,
};
use std::{collections::VecDeque, rc::Rc};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorKind, ErrorType, InputPin, OutputPin},
};

/// Output that remembers every level written to it.
#[derive(Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
    history: Rc<RefCell<Vec<bool>>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_high(&self) -> bool {
        self.level.get()
    }

    /// Sets the level without recording a write.
    pub fn force(&self, level: bool) {
        self.level.set(level);
    }

    pub fn history(&self) -> Vec<bool> {
        self.history.borrow().clone()
    }

    fn write(&self, level: bool) {
        self.level.set(level);
        self.history.borrow_mut().push(level);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

/// Input that plays back a list of samples, then reads low forever.
#[derive(Clone, Default)]
pub struct MockButton {
    script: Rc<RefCell<VecDeque<bool>>>,
    samples: Rc<Cell<usize>>,
}

impl MockButton {
    pub fn scripted(presses: &[bool]) -> Self {
        Self {
            script: Rc::new(RefCell::new(presses.iter().copied().collect())),
            samples: Rc::default(),
        }
    }

    /// Number of times the input was read.
    pub fn samples(&self) -> usize {
        self.samples.get()
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.samples.set(self.samples.get() + 1);
        Ok(self.script.borrow_mut().pop_front().unwrap_or(false))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A pin whose every access fails.
pub struct FailingPin;

impl ErrorType for FailingPin {
    type Error = MockError;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(MockError)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(MockError)
    }
}

impl InputPin for FailingPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(MockError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(MockError)
    }
}

/// Delay that returns at once and records the requested milliseconds.
#[derive(Clone, Default)]
pub struct MockDelay {
    calls: Rc<RefCell<Vec<u32>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.borrow_mut().push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.borrow_mut().push(ms);
    }
}
