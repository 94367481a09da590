use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use parlance_core::{Conversation, DisplayEvent, Outcome, PlaybackConfig, SessionManager};

fn main() {
    env_logger::init();

    let mut conv = Conversation::from_file("game/intro.talk").expect("Should not fail");
    let config = PlaybackConfig::load("game/playback.toml");
    let mut mgr = SessionManager::new(config);

    loop {
        mgr.begin(&mut conv).expect("no other session is running");
        let outcome = run_session(&mut mgr);

        conv.set_var("met", true);
        if outcome == Some(Outcome::ExitedAndInvoked) {
            on_invoke(&mut conv);
        }

        print!("\nTalk to Greta again? [y/N] ");
        io::stdout().flush().unwrap();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).unwrap();
        if !buf.trim().eq_ignore_ascii_case("y") {
            break;
        }
        println!();
    }
}

fn run_session(mgr: &mut SessionManager) -> Option<Outcome> {
    loop {
        match mgr.advance(false).expect("session is active") {
            DisplayEvent::CharacterRevealed { ch, delay } => {
                print!("{ch}");
                io::stdout().flush().unwrap();
                thread::sleep(Duration::from_secs_f32(delay));
            }
            DisplayEvent::LineComplete { delay } => {
                println!();
                thread::sleep(Duration::from_secs_f32(delay));
            }
            DisplayEvent::ChoicesReady { options } => {
                if options.is_empty() {
                    mgr.cancel();
                    return None;
                }
                for (i, option) in options.iter().enumerate() {
                    println!("  {}) {}", i + 1, option);
                }
                match mgr.choose(read_index(options.len())) {
                    Ok(Outcome::Continuing) => println!(),
                    Ok(outcome) => return Some(outcome),
                    Err(e) => log::error!("choice failed: {}", e),
                }
            }
        }
    }
}

fn read_index(len: usize) -> usize {
    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).unwrap();
        match buf.trim().parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return n - 1,
            _ => println!("pick a number between 1 and {len}"),
        }
    }
}

/// Stand-in for the host's invoke hook: bump a counter the script
/// guards on, so "Tell me about the clocks" disappears eventually.
fn on_invoke(conv: &mut Conversation) {
    let count = conv.var_as_int("count").unwrap_or(0);
    conv.set_var("count", count + 1);
    println!("(the shop window slides open -- visit {})", count + 1);
}
