// What you SEE:
// • A black 800x600 window with a white cross-hair that follows the mouse.
// • The whole frame is repainted into a locked texture every refresh.
// • Releasing any key, or closing the window, quits.
//
// Set RUST_LOG=debug for an FPS readout on the terminal.

use crosshair::config::Config;
use crosshair::error::Error;
use crosshair::frame_loop::FrameLoop;
use crosshair::window::MinifbBackend;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run().inspect_err(|e| log::error!("{e}"))
}

fn run() -> Result<(), Error> {
    /* --- Window + texture setup ---
       Visual: the window opens, still black. */
    let backend = MinifbBackend::new(&Config::DEFAULT)?;

    /* --- Main loop ---
       Stays on this (the main) thread; the window APIs require it. */
    let mut frames = FrameLoop::new(backend);
    frames.run()?;
    Ok(())
}
