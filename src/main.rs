use std::process::ExitCode;

use invaders8080::{ArcadeState, Rom, StderrSink};

/// Demo run loop: load a ROM and advance the cabinet for a fixed number of
/// frames, printing what each frame's audio edges were. There is no real
/// display/audio consumer in-core (see SPEC_FULL.md §1), so this binary
/// just exercises the harness and reports what it would have handed off.
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!("usage: invaders8080 <rom-path> [frame-count]");
        return ExitCode::FAILURE;
    };
    let frame_count: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60);

    let rom = match Rom::load_from_file(&rom_path) {
        Ok(rom) => rom,
        Err(e) => {
            eprintln!("invaders8080: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut arcade = match ArcadeState::new(Box::new(StderrSink), rom.bytes()) {
        Ok(arcade) => arcade,
        Err(e) => {
            eprintln!("invaders8080: {e}");
            return ExitCode::FAILURE;
        }
    };

    for frame in 0..frame_count {
        let audio = arcade.run_frame();
        if audio.one_shots != 0 || audio.ufo_looping.is_some() {
            println!("frame {frame}: one_shots={:#010b} ufo_looping={:?}", audio.one_shots, audio.ufo_looping);
        }
    }

    println!(
        "ran {frame_count} frames, {} cycles completed",
        arcade.cpu().cycles_completed()
    );
    ExitCode::SUCCESS
}
