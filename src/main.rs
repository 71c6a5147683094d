use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use gossamer::core::command::Command;
use gossamer::core::frame::{InitFrame, TurnFrame};
use gossamer::{Engine, EngineOptions};

fn main() -> Result<()> {
    let mut options = EngineOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "-s" | "--strategy" => {
                let value = args.next().context("--strategy needs a value")?;
                options.set_option("strategy", &value)?;
            }
            "--strict" => options.set_option("strictmode", "true")?,
            "-v" | "--verbose" => options.set_option("verbose", "true")?,
            other => bail!("Invalid argument: {}", other),
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map_while(|line| line.ok());

    let init = InitFrame::read(&mut lines)?;
    let mut engine = Engine::new(init, options.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    while let Some(frame) = TurnFrame::read(&mut lines, !options.strict_mode)? {
        match engine.take_turn(&frame) {
            Ok(commands) => {
                for command in &commands {
                    writeln!(out, "{}", command)?;
                }
            }
            Err(err) => {
                if options.strict_mode {
                    return Err(err);
                }

                // Still owe the referee one line per hero.
                eprintln!("{:#}", err);
                for _ in 0..engine.init.heroes_per_player {
                    writeln!(out, "{}", Command::wait().with_note("recovering"))?;
                }
            }
        }

        out.flush()?;
    }

    Ok(())
}
