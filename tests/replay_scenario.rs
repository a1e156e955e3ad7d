//! End-to-end replay of navigation scripts through the public library API

use folio::{render_placement, run_replay, PlacementFormat};
use folio_app::config::{load_settings, Settings};
use folio_core::{Error, ScreenId, IPHONE_FRAME};
use serde_json::Value;
use tempfile::tempdir;

fn replay(script: &str, settings: &Settings) -> (folio_app::NavigationState, Vec<Value>) {
    let mut out = Vec::new();
    let state = run_replay(script.as_bytes(), &mut out, settings).unwrap();
    let events = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (state, events)
}

#[test]
fn test_nutcracker_fixture() {
    let script = include_str!("fixtures/nutcracker.script");
    let (state, events) = replay(script, &Settings::default());

    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "started",
            "screen_changed",
            "screen_changed",
            "menu_changed",
            "menu_changed",
            "screen_changed",
            "finished",
        ]
    );

    // select 1
    assert_eq!(events[1]["to"], "detail");
    assert_eq!(events[1]["item"], "The Nutcracker");

    // back
    assert_eq!(events[2]["to"], "list");
    assert_eq!(events[2]["item"], Value::Null);

    // menu open, then goto settings closes it before the screen changes
    assert_eq!(events[3]["open"], true);
    assert_eq!(events[4]["open"], false);
    assert_eq!(events[5]["to"], "settings");

    assert_eq!(state.active_screen(), ScreenId::Settings);
    assert!(state.selected_item().is_none());
    assert!(!state.is_menu_open());

    assert_eq!(events[6]["screen"], "settings");
    assert_eq!(events[6]["menu_open"], false);
}

#[test]
fn test_stale_clicks_do_not_change_state() {
    let (state, events) = replay("goto planning\nselect 2\nback\n", &Settings::default());

    assert_eq!(state.active_screen(), ScreenId::Planning);
    let ignored = events.iter().filter(|e| e["event"] == "ignored").count();
    assert_eq!(ignored, 2);
}

#[test]
fn test_transition_settings_flow_into_events() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join(".folio")).unwrap();
    std::fs::write(
        temp.path().join(".folio/config.toml"),
        "[transition]\nmode = \"sync\"\nduration_ms = 150\n",
    )
    .unwrap();
    let settings = load_settings(temp.path());

    let (_, events) = replay("select 4\n", &settings);

    assert_eq!(events[1]["transition_ms"], 150);
    assert_eq!(events[1]["item"], "La Bayad\u{e8}re");
}

#[test]
fn test_iphone_placement_css() {
    insta::assert_snapshot!(
        render_placement(&IPHONE_FRAME, PlacementFormat::Css).unwrap(),
        @"position:absolute;left:4.9076%;top:2.1825%;width:89.9538%;height:95.6349%;border-radius:14.3132% / 6.6094%;"
    );
}

#[test]
fn test_configured_frame_changes_placement() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join(".folio")).unwrap();
    std::fs::write(
        temp.path().join(".folio/config.toml"),
        r#"
[frame]
width = 200.0
height = 400.0
x = 10.0
y = 20.0
screen_width = 180.0
screen_height = 360.0
radius = { rx = 18.0, ry = 18.0 }
"#,
    )
    .unwrap();
    let settings = load_settings(temp.path());

    let css = render_placement(&settings.frame(), PlacementFormat::Css).unwrap();

    assert_eq!(
        css,
        "position:absolute;left:5.0000%;top:5.0000%;width:90.0000%;height:90.0000%;border-radius:10.0000% / 5.0000%;"
    );
}

#[test]
fn test_replay_event_stream_snapshot() {
    let mut out = Vec::new();
    run_replay("select 2\nback\n".as_bytes(), &mut out, &Settings::default()).unwrap();
    let stream = String::from_utf8(out).unwrap();

    insta::with_settings!({filters => vec![(r#""timestamp":\d+"#, r#""timestamp":"[ts]""#)]}, {
        insta::assert_snapshot!(stream, @r#"
        {"event":"started","screen":"list","timestamp":"[ts]"}
        {"event":"screen_changed","from":"list","to":"detail","title":"Ticket","item":"Swan Lake","transition_ms":400,"timestamp":"[ts]"}
        {"event":"screen_changed","from":"detail","to":"list","title":"My Tickets","item":null,"transition_ms":400,"timestamp":"[ts]"}
        {"event":"finished","screen":"list","item":null,"menu_open":false,"timestamp":"[ts]"}
        "#);
    });
}

#[test]
fn test_invalid_configured_frame_fails_placement() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join(".folio")).unwrap();
    std::fs::write(
        temp.path().join(".folio/config.toml"),
        r#"
[frame]
width = 100.0
height = 100.0
x = 10.0
y = 10.0
screen_width = 200.0
screen_height = 50.0
radius = { rx = 5.0, ry = 5.0 }
"#,
    )
    .unwrap();
    let settings = load_settings(temp.path());

    let err = render_placement(&settings.frame(), PlacementFormat::Css).unwrap_err();

    assert!(matches!(err, Error::InvalidFrameGeometry { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_long_transition_does_not_overflow() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join(".folio")).unwrap();
    std::fs::write(
        temp.path().join(".folio/config.toml"),
        "[transition]\nduration_ms = 3000000000\n",
    )
    .unwrap();
    let settings = load_settings(temp.path());

    let (_, events) = replay("select 1\n", &settings);

    assert_eq!(events[1]["transition_ms"], u32::MAX);
}
