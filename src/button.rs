use embedded_hal::digital::InputPin;

/// Pedestrian request button, pressed while the input reads high.
pub struct PedestrianButton<I> {
    input: I,
}

impl<I: InputPin> PedestrianButton<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Samples the input. Every call reads the pin again; there is no
    /// latching or debouncing.
    pub fn is_pressed(&mut self) -> Result<bool, I::Error> {
        let pressed = self.input.is_high()?;
        debug!("Pedestrian button pressed = {}", pressed);

        Ok(pressed)
    }
}
