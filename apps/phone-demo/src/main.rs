use anyhow::Context;
use nubos_app_shell::ShellConfig;
use nubos_foundation::GestureConfig;
use nubos_ui::AppCatalog;
use phone_demo::{LogFeedback, PhoneScene, Script, SessionPlayer, DEMO_SCRIPT};
use web_time::Duration;

/// Environment variable enabling double-tap with the given window in ms.
const DOUBLE_TAP_ENV: &str = "NUBOS_DOUBLE_TAP_MS";

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = if args.is_empty() {
        DEMO_SCRIPT.to_string()
    } else {
        args.join(" ")
    };
    let script = Script::parse(&source).context("invalid session script")?;

    let mut gesture = GestureConfig::default();
    if let Ok(value) = std::env::var(DOUBLE_TAP_ENV) {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("{DOUBLE_TAP_ENV}={value} is not a number of milliseconds"))?;
        gesture = gesture.with_double_tap_window(Some(Duration::from_millis(millis)));
    }
    gesture.validate().context("invalid gesture configuration")?;

    let catalog = AppCatalog::phone();
    let scene = PhoneScene::new(&catalog);
    let config = ShellConfig::default().with_gesture(gesture);
    let mut player = SessionPlayer::new(scene, LogFeedback::new(), config);

    println!("=== nubos phone demo ===");
    println!("{} steps, {} apps", script.steps().len(), catalog.len());
    for event in player.run(&script) {
        println!("  {event:?}");
    }

    let shell = player.shell();
    let open = shell
        .open_slot()
        .and_then(|slot| shell.catalog().get(slot))
        .map(|entry| entry.name.to_string())
        .unwrap_or_else(|| "springboard".to_string());
    println!(
        "selected {}, showing {open}, flipped: {}, haptic pulses: {}",
        shell.selected_slot(),
        shell.is_flipped(),
        shell.feedback().pulses()
    );
    Ok(())
}
