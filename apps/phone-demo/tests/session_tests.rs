use nubos_app_shell::{ShellConfig, ShellEvent};
use nubos_testing::{assert_events_in_order, count_events, RecordingFeedback};
use nubos_ui::{AppCatalog, AppSlot, ElementId};
use phone_demo::{PhoneScene, Script, SessionPlayer, DEMO_SCRIPT};
use std::rc::Rc;

const MAPS: AppSlot = AppSlot(1);
const PHOTOS: AppSlot = AppSlot(2);

fn player() -> Player {
    let scene = PhoneScene::new(&AppCatalog::phone());
    SessionPlayer::new(scene, Rc::new(RecordingFeedback::new()), ShellConfig::default())
}

type Player = SessionPlayer<PhoneScene, Rc<RecordingFeedback>>;

fn run(player: &mut Player, source: &str) -> Vec<ShellEvent> {
    let script = Script::parse(source).expect("script parses");
    player.run(&script)
}

#[test]
fn maps_session_focuses_search_then_first_place() {
    let mut player = player();
    let events = run(&mut player, "right tap wait:300 down down tap");

    assert_eq!(player.shell().open_slot(), Some(MAPS));
    assert_eq!(player.shell().focused_element(), Some(&ElementId::from("place-0")));
    assert_eq!(player.shell().scene().activated(), vec![ElementId::from("place-0")]);
    assert_events_in_order(
        &events,
        &[
            ShellEvent::SelectionChanged(MAPS),
            ShellEvent::AppOpened(MAPS),
            ShellEvent::FocusChanged("search".into()),
            ShellEvent::FocusChanged("place-0".into()),
            ShellEvent::ElementActivated("place-0".into()),
        ],
        "maps session",
    );
}

#[test]
fn walking_back_to_close_and_tapping_returns_home() {
    let mut player = player();
    let events = run(&mut player, "right tap wait:300 down down up up up tap wait:300");

    assert_eq!(player.shell().open_slot(), None);
    assert_eq!(player.shell().selected_slot(), MAPS);
    assert!(events.contains(&ShellEvent::AppClosed(MAPS)));
}

#[test]
fn cursor_drag_opens_photos() {
    let mut player = player();
    let events = run(&mut player, "drag:40,-150 tap");

    assert_eq!(player.shell().open_slot(), Some(PHOTOS));
    assert!(events.contains(&ShellEvent::HoverChanged(Some(PHOTOS))));
    assert!(events.contains(&ShellEvent::HoverChanged(None)), "hover clears on open");
}

#[test]
fn deep_photo_row_scrolls_the_grid() {
    let mut player = player();
    let events = run(
        &mut player,
        "open:2 wait:300 down down down down down down",
    );

    assert_eq!(player.shell().focused_element(), Some(&ElementId::from("photo-17")));
    assert_eq!(
        count_events(&events, |event| matches!(event, ShellEvent::ScrollIntoView(_))),
        1
    );
    assert!(player.shell().scene().scroll_offset(PHOTOS) > 0.0);
}

#[test]
fn demo_script_ends_flipped_on_the_springboard() {
    let mut player = player();
    let events = run(&mut player, DEMO_SCRIPT);

    assert!(player.shell().is_flipped());
    assert_eq!(player.shell().open_slot(), None);
    assert_eq!(player.shell().selected_slot(), AppSlot(6));
    assert_eq!(
        count_events(&events, |event| matches!(event, ShellEvent::AppOpened(_))),
        2
    );
}
