use fps_overlay::{DisplaySession, FramePacer, FrameTiming, InputPoller, FRAME_DELAY_MS};
use log::{info, warn, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

// Returning Err exits the process with status 1; window creation is the only
// fatal failure, everything else degrades and keeps the loop alive.
fn main() -> io::Result<()> {
    init_logging();

    let mut session = DisplaySession::open("FPS Overlay")?;
    run(&mut session)
}

fn init_logging() {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("fps_overlay.log");
    if let Ok(log_file) = log_file {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), log_file);
    }
}

fn run(session: &mut DisplaySession) -> io::Result<()> {
    let poller = InputPoller::new();
    let pacer = FramePacer::new(Duration::from_millis(FRAME_DELAY_MS));
    let mut timing = FrameTiming::new();
    let mut running = true;

    info!("entering frame loop");
    while running {
        timing.begin_frame();

        poller.poll(&session.window, &mut running);

        if let Some(surface) = session.surface.as_mut() {
            surface.clear();
        }

        timing.frame_time = pacer.pace(timing.frame_start);
        timing.frame_count += 1;

        match session.surface.as_mut() {
            Some(surface) => {
                session.overlay.draw(&mut timing, surface);
                if let Err(e) = surface.present(&mut session.window) {
                    warn!("present failed: {}", e);
                }
            }
            None => {
                // No surface to present; still pump the window so input and
                // the close button keep working.
                session.window.update();
                timing.frame_count = 0;
            }
        }
    }
    info!("terminate signal received, shutting down");

    Ok(())
}
