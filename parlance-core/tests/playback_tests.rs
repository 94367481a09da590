use parlance_core::{
    Conversation, DisplayEvent, Outcome, PlayError, PlaybackConfig, SessionManager,
};

const FAREWELL: &str = r#"
[initial]
Hello there.
How are you?
Goodbye [EXIT]
"#;

fn manager() -> SessionManager {
    SessionManager::new(PlaybackConfig::default())
}

/// Drains character/line events until choices come up, collecting the
/// text revealed along the way.
fn stream_until_choices(mgr: &mut SessionManager) -> (String, Vec<String>) {
    let mut text = String::new();
    loop {
        match mgr.advance(false).expect("session is active") {
            DisplayEvent::CharacterRevealed { ch, .. } => text.push(ch),
            DisplayEvent::LineComplete { .. } => text.push('\n'),
            DisplayEvent::ChoicesReady { options } => return (text, options),
        }
    }
}

#[test]
fn streams_lines_then_offers_choices() {
    let mut conv = Conversation::new(FAREWELL);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let (text, options) = stream_until_choices(&mut mgr);
    assert_eq!(text, "Hello there.\nHow are you?\n");
    assert_eq!(options, vec!["Goodbye"]);

    assert_eq!(mgr.choose(0), Ok(Outcome::Exited));
    assert!(!mgr.is_active());
}

#[test]
fn one_character_per_advance() {
    let mut conv = Conversation::new("[initial]\nHi.\nBye [EXIT]");
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    match mgr.advance(false).unwrap() {
        DisplayEvent::CharacterRevealed { ch, .. } => assert_eq!(ch, 'H'),
        other => panic!("expected a character, got {:?}", other),
    }
    match mgr.advance(false).unwrap() {
        DisplayEvent::CharacterRevealed { ch, .. } => assert_eq!(ch, 'i'),
        other => panic!("expected a character, got {:?}", other),
    }
}

#[test]
fn fast_flag_shortens_but_never_skips_delay() {
    let mut conv = Conversation::new(FAREWELL);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let slow = match mgr.advance(false).unwrap() {
        DisplayEvent::CharacterRevealed { delay, .. } => delay,
        other => panic!("expected a character, got {:?}", other),
    };
    // The flag is sampled per call, so it can flip mid-line.
    let fast = match mgr.advance(true).unwrap() {
        DisplayEvent::CharacterRevealed { delay, .. } => delay,
        other => panic!("expected a character, got {:?}", other),
    };
    assert!(fast > 0.0);
    assert!(fast < slow);
}

#[test]
fn second_begin_is_rejected_until_release() {
    let mut conv = Conversation::new(FAREWELL);
    let mut other = Conversation::new("[initial]\nYo.\nBye [EXIT]");
    let mut mgr = manager();

    mgr.begin(&mut conv).unwrap();
    assert_eq!(mgr.begin(&mut other), Err(PlayError::SessionActive));

    mgr.cancel();
    assert!(!mgr.is_active());
    mgr.begin(&mut other).unwrap();
}

#[test]
fn cancel_is_idempotent() {
    let mut conv = Conversation::new(FAREWELL);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    mgr.cancel();
    mgr.cancel();
    assert!(!mgr.is_active());
    assert_eq!(mgr.advance(false), Err(PlayError::NoSession));
}

#[test]
fn invoke_exits_and_flags_the_hook() {
    let mut conv = Conversation::new("[initial]\nWelcome.\nOpen the shop [INVOKE]");
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let (_, options) = stream_until_choices(&mut mgr);
    assert_eq!(options, vec!["Open the shop"]);
    assert_eq!(mgr.choose(0), Ok(Outcome::ExitedAndInvoked));
    assert!(!mgr.is_active());
}

#[test]
fn section_choice_restarts_streaming() {
    let src = r#"
[initial]
First.
More [second]
[second]
Second.
Done [EXIT]
"#;
    let mut conv = Conversation::new(src);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let (_, options) = stream_until_choices(&mut mgr);
    assert_eq!(options, vec!["More"]);
    assert_eq!(mgr.choose(0), Ok(Outcome::Continuing));

    let (text, options) = stream_until_choices(&mut mgr);
    assert_eq!(text, "Second.\n");
    assert_eq!(options, vec!["Done"]);
}

#[test]
fn out_of_range_choice_leaves_state_unchanged() {
    let mut conv = Conversation::new(FAREWELL);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let (_, options) = stream_until_choices(&mut mgr);
    assert_eq!(
        mgr.choose(options.len()),
        Err(PlayError::InvalidChoice { index: 1, len: 1 })
    );
    // Still awaiting the same choice list.
    match mgr.advance(false).unwrap() {
        DisplayEvent::ChoicesReady { options } => assert_eq!(options, vec!["Goodbye"]),
        other => panic!("expected choices, got {:?}", other),
    }
    assert_eq!(mgr.choose(0), Ok(Outcome::Exited));
}

#[test]
fn choose_while_streaming_is_rejected() {
    let mut conv = Conversation::new(FAREWELL);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    mgr.advance(false).unwrap();
    assert_eq!(mgr.choose(0), Err(PlayError::NoChoicePending));
}

#[test]
fn unknown_choice_target_keeps_the_session_alive() {
    let mut conv = Conversation::new("[initial]\nHm.\nGo [nowhere]\nStay [EXIT]");
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let (_, options) = stream_until_choices(&mut mgr);
    assert_eq!(options.len(), 2);
    assert_eq!(
        mgr.choose(0),
        Err(PlayError::UnknownSection("nowhere".into()))
    );
    assert!(mgr.is_active());
    assert_eq!(mgr.choose(1), Ok(Outcome::Exited));
}

#[test]
fn entry_redirect_is_followed_before_display() {
    let src = r#"
visited=true
[initial]
if [visited==false] [initial] else [hub]
Never shown? No: same key, redirected.
[hub]
Back so soon.
Bye [EXIT]
"#;
    // The conditional header reuses "initial" as its target and, since
    // the condition is false, attaches a redirect to "hub".
    let mut conv = Conversation::new(src);
    let mut mgr = manager();
    mgr.begin(&mut conv).unwrap();

    let (text, _) = stream_until_choices(&mut mgr);
    assert_eq!(text, "Back so soon.\n");
}

#[test]
fn dirty_store_recompiles_at_begin() {
    let src = r#"
count=0
[hub]
Anything else?
if [count<3] Talk more [hub]
Leave [EXIT]
"#;
    let mut conv = Conversation::new(src);
    let mut mgr = manager();

    mgr.begin(&mut conv).unwrap();
    let (_, options) = stream_until_choices(&mut mgr);
    assert_eq!(options, vec!["Talk more", "Leave"]);
    mgr.cancel();

    conv.set_var("count", 5i64);
    mgr.begin(&mut conv).unwrap();
    let (_, options) = stream_until_choices(&mut mgr);
    assert_eq!(options, vec!["Leave"]);
}

#[test]
fn redirect_cycle_is_reported_not_recursed() {
    let src = r#"
a=1
[start]
if [a==2] [start] else [loop]
[loop]
if [a==2] [loop] else [start]
"#;
    let mut conv = Conversation::new(src);
    let mut mgr = manager();
    match mgr.begin(&mut conv) {
        Err(PlayError::RedirectCycle(chain)) => assert!(!chain.is_empty()),
        other => panic!("expected a redirect cycle, got {:?}", other),
    }
    assert!(!mgr.is_active());
}

#[test]
fn variable_coercion_through_the_conversation() {
    let mut conv = Conversation::new("word=abc\nnum=42\n[initial]\nHi.");
    assert_eq!(conv.var_as_int("num"), Ok(42));
    assert!(conv.var_as_int("word").is_err());

    conv.set_var("num", 43i64);
    assert_eq!(conv.var_as_int("num"), Ok(43));
}

#[test]
fn empty_script_cannot_begin() {
    let mut conv = Conversation::new("just a stray line\n");
    let mut mgr = manager();
    assert_eq!(mgr.begin(&mut conv), Err(PlayError::EmptyGraph));
}
