//! STM32WL board setup.

use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};

/// Signal outputs and the button input, configured and ready to use.
pub struct Board {
    pub red: Output<'static>,
    pub yellow: Output<'static>,
    pub green: Output<'static>,
    pub button: Input<'static>,
}

impl Board {
    pub fn init() -> Self {
        let p = embassy_stm32::init(create_stm32_config());

        // All lamps start dark; the controller lights red on its first step.
        let board = Self {
            red: Output::new(p.PA11.degrade(), Level::Low, Speed::Low), // Pin 11
            yellow: Output::new(p.PA8.degrade(), Level::Low, Speed::Low), // Pin 8
            green: Output::new(p.PA5.degrade(), Level::Low, Speed::Low), // Pin 5
            // The button pulls the line up when pressed.
            button: Input::new(p.PA2.degrade(), Pull::Down), // Pin 2
        };
        defmt::info!("Board initialized");

        board
    }
}

pub fn create_stm32_config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::{rcc::*, time::Hertz};
        // 32 MHz TCXO fed straight to SYSCLK, no PLL needed for GPIO work.
        config.rcc.hse = Some(Hse {
            freq: Hertz(32_000_000),
            mode: HseMode::Bypass,
            prescaler: HsePrescaler::DIV1,
        });
        config.rcc.sys = Sysclk::HSE;
    }

    config
}
