//! Line-based terminal frontend.
//!
//! A thin projection of [`RoundController`] phases onto stdin/stdout.
//! Typing `q` at any prompt (or Ctrl-C during discussion) abandons the
//! round through the controller's cleanup path.

use std::io::Write;

use anyhow::Result;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{instrument, warn};

use imposter_game::{
    GameError, RoundController, RoundPhase, Secret, SessionConfiguration, TimerPhase,
    ValidationError, format_clock,
};

type Input = Lines<BufReader<Stdin>>;

enum DiscussionEvent {
    Tick,
    Line(Option<String>),
    Interrupt,
}

/// Plays rounds until the group declines to play again or quits.
#[instrument(skip_all)]
pub async fn play<R: Rng>(
    controller: &mut RoundController<R>,
    config: &SessionConfiguration,
) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    controller.start_round(config)?;

    loop {
        let finished = reveal(controller, &mut input).await?
            && discuss(controller, &mut input).await?
            && vote(controller, &mut input).await?;
        if !finished {
            controller.abandon();
            println!("Game ended.");
            return Ok(());
        }
        match prompt(&mut input, "Play again with the same players? [y/N] ").await? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                controller.play_again()?;
            }
            _ => {
                controller.abandon();
                return Ok(());
            }
        }
    }
}

async fn reveal<R: Rng>(controller: &mut RoundController<R>, input: &mut Input) -> Result<bool> {
    while matches!(controller.phase(), RoundPhase::Reveal(_)) {
        let (player, ordinal, total) = {
            let card = controller.current_card()?;
            (card.player.to_string(), card.ordinal, card.total)
        };
        clear_screen();
        println!("Player {ordinal} of {total}: pass the device to {player}.");
        if prompt(input, "Press Enter to reveal your card... ").await?.is_none() {
            return Ok(false);
        }
        let card = controller.current_card()?;
        match (card.is_imposter, card.secret) {
            (true, Secret::Clue(Some(clue))) => {
                println!("You are the IMPOSTER. Clue: {clue}");
            }
            (true, _) => println!("You are the IMPOSTER. No clue this round."),
            (false, Secret::Word(word)) => println!("The secret word is: {word}"),
            (false, Secret::Clue(_)) => println!("The secret word is hidden."),
        }
        if prompt(input, "Press Enter to hide it and pass on... ").await?.is_none() {
            return Ok(false);
        }
        controller.advance_reveal()?;
    }
    clear_screen();
    Ok(true)
}

async fn discuss<R: Rng>(controller: &mut RoundController<R>, input: &mut Input) -> Result<bool> {
    let Some(state) = controller.timer_state() else {
        return Ok(false);
    };
    println!("Discussion time: {}", format_clock(state.remaining_ms));
    if prompt(input, "Press Enter to start the timer... ").await?.is_none() {
        return Ok(false);
    }
    controller.start_timer()?;
    println!("Commands: [p]ause/resume, [s]kip, [q]uit");

    loop {
        let Some(state) = controller.timer_state() else {
            return Ok(false);
        };
        if state.phase == TimerPhase::Expired {
            break;
        }
        let ticking = state.phase == TimerPhase::Running;
        let event = tokio::select! {
            tick = controller.next_tick(), if ticking => match tick {
                Some(_) => DiscussionEvent::Tick,
                None => DiscussionEvent::Interrupt,
            },
            line = input.next_line() => DiscussionEvent::Line(line?),
            _ = tokio::signal::ctrl_c() => DiscussionEvent::Interrupt,
        };
        match event {
            DiscussionEvent::Tick => {
                if let Some(state) = controller.timer_state() {
                    print!("\r{}   ", format_clock(state.remaining_ms));
                    std::io::stdout().flush()?;
                }
            }
            DiscussionEvent::Line(None) | DiscussionEvent::Interrupt => return Ok(false),
            DiscussionEvent::Line(Some(line)) => match line.trim() {
                "p" => {
                    let state = controller.toggle_timer()?;
                    if state.phase == TimerPhase::Paused {
                        println!("Paused at {}", format_clock(state.remaining_ms));
                    }
                }
                "s" => {
                    if confirm(input, "Skip the rest of the discussion? [y/N] ").await? {
                        controller.skip_timer()?;
                    }
                }
                "q" => return Ok(false),
                _ => {}
            },
        }
    }

    println!("\nTime's up!");
    controller.proceed_to_vote()?;
    Ok(true)
}

async fn vote<R: Rng>(controller: &mut RoundController<R>, input: &mut Input) -> Result<bool> {
    let players = match controller.session() {
        Some(session) => session.players().clone(),
        None => return Ok(false),
    };
    println!("Who is the imposter?");
    for (index, player) in players.iter().enumerate() {
        println!("  {}. {}", index + 1, player);
    }

    loop {
        let Some(answer) = prompt(input, "Vote (number or name): ").await? else {
            return Ok(false);
        };
        let accused = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| players.get(i).cloned())
            .unwrap_or(answer);
        if !confirm(input, &format!("Vote for {accused}? [y/N] ")).await? {
            continue;
        }
        match controller.accuse(&accused) {
            Ok(outcome) => {
                println!("{outcome}");
                if let Some(session) = controller.session() {
                    println!("The word was: {}", session.word());
                    if let Some(clue) = session.clue() {
                        println!("The clue was: {clue}");
                    }
                }
                return Ok(true);
            }
            Err(GameError::Validation(ValidationError::UnknownAccused(name))) => {
                warn!(%name, "Vote for unknown player");
                println!("{name} is not playing. Try again.");
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Reads one line. `None` on end of input or `q`.
async fn prompt(input: &mut Input, message: &str) -> Result<Option<String>> {
    print!("{message}");
    std::io::stdout().flush()?;
    Ok(input
        .next_line()
        .await?
        .map(|line| line.trim().to_string())
        .filter(|line| line != "q"))
}

async fn confirm(input: &mut Input, message: &str) -> Result<bool> {
    Ok(prompt(input, message)
        .await?
        .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}
