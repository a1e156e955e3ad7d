//! Headless mode runner - applies a replay script without a UI
//!
//! Reads commands line by line, feeds them through the TEA update function
//! and emits a JSON event for every action the view layer would run.

use std::io::{BufRead, Write};

use folio_app::config::Settings;
use folio_app::{update, NavigationState, Resolved, ScreenRegistry, UpdateAction};
use folio_core::prelude::*;
use folio_core::ScreenId;

use super::HeadlessEvent;
use crate::script::Command;

/// Header titles stand in for screen components in headless mode
pub fn screen_titles() -> ScreenRegistry<&'static str> {
    ScreenId::ALL
        .into_iter()
        .fold(ScreenRegistry::new(), |registry, screen| {
            registry.with(screen, screen.label())
        })
}

/// Replay `input` against a fresh navigation state, writing NDJSON to `out`.
///
/// Malformed lines and unknown tickets are reported as `ignored` events and
/// skipped. Returns the final state.
pub fn run_replay<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    settings: &Settings,
) -> Result<NavigationState> {
    run_replay_with(input, out, settings, &screen_titles())
}

/// [`run_replay`] with a caller-supplied registry
pub fn run_replay_with<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    settings: &Settings,
    registry: &ScreenRegistry<&'static str>,
) -> Result<NavigationState> {
    let policy = settings.missing_screen_policy();
    let transition_ms = settings.transition.total_ms();
    let mut state = NavigationState::new();

    info!("Replaying navigation script (missing screens: {:?})", policy);
    HeadlessEvent::started(state.active_screen()).emit_to(out)?;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let text = line?;

        let command = match Command::parse(line_no, &text) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                skip_or_fail(e, line_no, text.trim(), out)?;
                continue;
            }
        };

        let label = command.to_string();
        let message = match command.into_message() {
            Ok(message) => message,
            Err(e) => {
                skip_or_fail(e, line_no, &label, out)?;
                continue;
            }
        };

        let result = update(&mut state, message);
        if result.is_noop() {
            debug!("Line {}: '{}' changed nothing", line_no, label);
            HeadlessEvent::ignored(
                line_no,
                label,
                format!("no effect on {}", state.active_screen()),
            )
            .emit_to(out)?;
            continue;
        }

        for action in result.actions {
            match action {
                UpdateAction::AnimateMenu { open } => {
                    HeadlessEvent::menu_changed(open).emit_to(out)?;
                }
                UpdateAction::AnimateScreen { from, to } => {
                    let title = match registry.resolve(to, policy)? {
                        Resolved::Screen(title) => title.to_string(),
                        Resolved::Placeholder(screen) => format!("Unknown view ({screen})"),
                    };
                    let item = state.selected_item().map(|item| item.title.clone());
                    HeadlessEvent::screen_changed(from, to, title, item, transition_ms)
                        .emit_to(out)?;
                }
            }
        }
    }

    HeadlessEvent::finished(
        state.active_screen(),
        state.selected_item().map(|item| item.title.clone()),
        state.is_menu_open(),
    )
    .emit_to(out)?;

    info!("Replay finished on {}", state.active_screen());
    Ok(state)
}

fn skip_or_fail<W: Write>(err: Error, line: usize, command: &str, out: &mut W) -> Result<()> {
    if !err.is_recoverable() {
        return Err(err);
    }
    warn!("Skipping line {}: {}", line, err);
    HeadlessEvent::ignored(line, command, err.to_string()).emit_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::MissingScreenPolicy;
    use serde_json::Value;

    fn replay(script: &str) -> (NavigationState, Vec<Value>) {
        replay_with(script, &Settings::default(), &screen_titles())
    }

    fn replay_with(
        script: &str,
        settings: &Settings,
        registry: &ScreenRegistry<&'static str>,
    ) -> (NavigationState, Vec<Value>) {
        let mut out = Vec::new();
        let state = run_replay_with(script.as_bytes(), &mut out, settings, registry).unwrap();
        let events = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (state, events)
    }

    fn kinds(events: &[Value]) -> Vec<&str> {
        events
            .iter()
            .map(|event| event["event"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_empty_script() {
        let (state, events) = replay("");
        assert_eq!(state, NavigationState::new());
        assert_eq!(kinds(&events), vec!["started", "finished"]);
    }

    #[test]
    fn test_select_emits_screen_change_with_item() {
        let (_, events) = replay("select 1\n");

        assert_eq!(events[1]["event"], "screen_changed");
        assert_eq!(events[1]["to"], "detail");
        assert_eq!(events[1]["title"], "Ticket");
        assert_eq!(events[1]["item"], "The Nutcracker");
        assert_eq!(events[1]["transition_ms"], 400);
    }

    #[test]
    fn test_noop_lines_are_reported() {
        let (_, events) = replay("back\n");

        assert_eq!(kinds(&events), vec!["started", "ignored", "finished"]);
        assert_eq!(events[1]["line"], 1);
        assert_eq!(events[1]["command"], "back");
        assert_eq!(events[1]["reason"], "no effect on list");
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let (state, events) = replay("select 99\nfly away\ngoto settings\n");

        assert_eq!(
            kinds(&events),
            vec!["started", "ignored", "ignored", "screen_changed", "finished"]
        );
        assert_eq!(events[1]["reason"], "Unknown ticket id: 99");
        assert_eq!(events[2]["line"], 2);
        assert_eq!(state.active_screen(), ScreenId::Settings);
    }

    #[test]
    fn test_missing_screen_placeholder() {
        let registry = ScreenRegistry::new().with(ScreenId::List, "My Tickets");
        let mut settings = Settings::default();
        settings.registry.missing_screen = Some(MissingScreenPolicy::Placeholder);

        let (_, events) = replay_with("goto planning\n", &settings, &registry);

        assert_eq!(events[1]["title"], "Unknown view (planning)");
    }

    #[test]
    fn test_missing_screen_fail_fast() {
        let registry = ScreenRegistry::new().with(ScreenId::List, "My Tickets");
        let mut settings = Settings::default();
        settings.registry.missing_screen = Some(MissingScreenPolicy::FailFast);

        let mut out = Vec::new();
        let err = run_replay_with("goto planning\n".as_bytes(), &mut out, &settings, &registry)
            .unwrap_err();

        assert!(matches!(err, Error::MissingScreen { .. }));
    }
}
