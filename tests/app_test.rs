mod common;

use common::{Call, FakeEngine, abc_catalog};
use serenata::{
    PlaybackController, Settings,
    app_core::Serenata,
    key_handler::{Action, Director},
};

fn app() -> (Serenata<FakeEngine>, FakeEngine) {
    let settings = Settings::default();
    let engine = FakeEngine::default();
    let player = PlaybackController::new(abc_catalog(), engine.clone(), &settings);
    (Serenata::new(player, &settings), engine)
}

fn settle(app: &mut Serenata<FakeEngine>, action: Action) {
    app.dispatch(action);
    // Events are normally drained by the select loop
    app.player_mut().pump_events();
}

#[test]
fn toggle_pause_flips_between_play_and_pause() {
    let (mut app, _) = app();

    settle(&mut app, Action::TogglePause);
    assert!(app.player().state().is_playing);
    assert_eq!(
        app.player().state().current_song.as_ref().unwrap().get_id(),
        "a"
    );

    settle(&mut app, Action::TogglePause);
    assert!(!app.player().state().is_playing);

    settle(&mut app, Action::TogglePause);
    assert!(app.player().state().is_playing);
}

#[test]
fn volume_keys_step_and_clamp() {
    let (mut app, _) = app();

    settle(&mut app, Action::SetVolume(0.98));
    settle(&mut app, Action::VolumeUp);
    assert_eq!(app.player().state().volume, 1.0);

    settle(&mut app, Action::SetVolume(-4.0));
    assert_eq!(app.player().state().volume, 0.0);

    settle(&mut app, Action::VolumeDown);
    assert_eq!(app.player().state().volume, 0.0);
}

#[test]
fn seek_keys_step_and_clamp() {
    let (mut app, engine) = app();

    // Nothing to seek in yet
    settle(&mut app, Action::SeekForward);
    assert!(engine.calls().is_empty());

    settle(&mut app, Action::PlayNext);
    settle(&mut app, Action::SeekForward);
    assert!((app.player().state().progress - 0.05).abs() < 1e-9);

    settle(&mut app, Action::SeekBack);
    settle(&mut app, Action::SeekBack);
    assert_eq!(app.player().state().progress, 0.0);

    settle(&mut app, Action::SeekTo(3.0));
    assert_eq!(app.player().state().progress, 1.0);
}

#[test]
fn playlist_selection_plays_the_highlighted_song() {
    let (mut app, engine) = app();

    settle(&mut app, Action::TogglePlaylist);
    assert!(app.ui().playlist_expanded());

    settle(&mut app, Action::Scroll(Director::Down(2)));
    settle(&mut app, Action::PlaySelected);

    assert_eq!(
        app.player().state().current_song.as_ref().unwrap().get_id(),
        "c"
    );
    assert!(app.player().state().is_playing);
    assert_eq!(engine.live(), 1);
}

#[test]
fn clicking_a_row_moves_the_cursor_too() {
    let (mut app, _) = app();

    settle(&mut app, Action::PlayIndex(1));
    assert_eq!(app.ui().selected_index(), Some(1));

    // Out of range rows are ignored
    settle(&mut app, Action::PlayIndex(9));
    assert_eq!(
        app.player().state().current_song.as_ref().unwrap().get_id(),
        "b"
    );
}

#[test]
fn next_and_prev_actions_reach_the_controller() {
    let (mut app, engine) = app();

    settle(&mut app, Action::PlayNext);
    settle(&mut app, Action::PlayPrev);

    assert_eq!(
        app.player().state().current_song.as_ref().unwrap().get_id(),
        "c"
    );
    assert_eq!(engine.loads().len(), 2);
    assert!(matches!(engine.calls().last(), Some(Call::Play(_))));
}
