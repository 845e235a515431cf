//! Pedestrian crossing signal for the STM32WL board.
//!
//! Cycles red, green and yellow with a fixed dwell; the pedestrian button
//! sends the signal back to red at the end of the current phase.
#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod firmware {
    use defmt::info;
    use embassy_executor::Spawner;
    use embassy_time::Delay;
    use {defmt_rtt as _, panic_probe as _};

    use crosswalk::{board::Board, Controller, Error};

    #[embassy_executor::main]
    async fn main(_spawner: Spawner) {
        let board = Board::init();

        let mut controller =
            Controller::new(board.red, board.yellow, board.green, board.button, Delay);

        info!("Starting signal cycle");
        // GPIO access cannot fail on this chip, so the loop never ends.
        match controller.run() {
            Ok(never) => match never {},
            Err(Error::Signal(never)) | Err(Error::Button(never)) => match never {},
        }
    }
}

#[cfg(not(target_arch = "arm"))]
fn main() {
    eprintln!("crosswalk only runs on the STM32WL target");
}
