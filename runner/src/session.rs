use std::time::Duration;

use snake_engine::{GameController, GameState, StepOutcome, StepReport, log};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

use crate::command::{HELP, RunnerCommand};

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Show,
    Help,
    Quit,
}

/// Applies one user command to the controller.
pub fn apply_command(controller: &mut GameController, command: RunnerCommand) -> Flow {
    match command {
        RunnerCommand::Turn(direction) => controller.turn(direction),
        RunnerCommand::Start => controller.start(),
        RunnerCommand::Pause => controller.pause(),
        RunnerCommand::Reset => controller.reset(),
        RunnerCommand::ToggleWraparound => {
            controller.toggle_wraparound();
        }
        RunnerCommand::Speed(speed) => controller.set_step_speed(speed),
        RunnerCommand::Show => return Flow::Show,
        RunnerCommand::Help => return Flow::Help,
        RunnerCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

fn step_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

fn print_report(report: &StepReport, show_grid: bool) {
    if show_grid {
        print!("{}", report.snapshot);
    }
    println!(
        "Points: {} | Time: {:.2}s | Points per second: {:.2}",
        report.score,
        report.elapsed.as_secs_f64(),
        report.points_per_second
    );
}

fn print_board(controller: &GameController) {
    print!("{}", controller.engine().snapshot());
    println!(
        "State: {:?} | Mode: {:?} | Points: {}",
        controller.state(),
        controller.engine().mode(),
        controller.engine().score()
    );
}

/// Drives the controller from stdin until `quit` or end of input.
pub async fn run_session(mut controller: GameController, show_grid: bool) -> std::io::Result<()> {
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    let mut interval = step_interval(controller.step_time());

    println!("{}", HELP);
    print_board(&controller);

    loop {
        tokio::select! {
            _ = interval.tick(), if controller.state() == GameState::Playing => {
                match controller.step() {
                    Some(StepOutcome::Advanced(report)) => print_report(&report, show_grid),
                    Some(StepOutcome::GameOver(game_over)) => {
                        println!("{}. Type 'reset' to play again.", game_over);
                    }
                    None => {}
                }
            }
            line = lines.next() => {
                let line = match line {
                    Some(line) => line?,
                    None => {
                        log!("Input closed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = match line.parse::<RunnerCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                let was_playing = controller.state() == GameState::Playing;
                let step_time = controller.step_time();

                match apply_command(&mut controller, command) {
                    Flow::Continue => {}
                    Flow::Show => print_board(&controller),
                    Flow::Help => println!("{}", HELP),
                    Flow::Quit => break,
                }

                if controller.step_time() != step_time {
                    interval = step_interval(controller.step_time());
                } else if !was_playing && controller.state() == GameState::Playing {
                    interval.reset();
                }
            }
        }
    }

    Ok(())
}
