use nubos_foundation::gesture_constants::NAVIGATION_COOLDOWN_MS;
use nubos_foundation::GestureConfig;
use nubos_ui::{CursorConfig, NavigationConfig};
use web_time::Duration;

/// Length of the app open/close animation in milliseconds.
pub const APP_TRANSITION_MS: u64 = 300;

/// Everything tunable about the shell, with chainable setters.
///
/// ```
/// use nubos_app_shell::ShellConfig;
/// use web_time::Duration;
///
/// let config = ShellConfig::default()
///     .with_transition(Duration::ZERO)
///     .with_nav_cooldown(Duration::from_millis(120));
/// assert_eq!(config.transition, Duration::ZERO);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    pub gesture: GestureConfig,
    pub navigation: NavigationConfig,
    pub cursor: CursorConfig,
    /// Open/close animation length. `Duration::ZERO` switches immediately.
    pub transition: Duration,
    /// Minimum spacing between two accepted directional steps.
    pub nav_cooldown: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            navigation: NavigationConfig::default(),
            cursor: CursorConfig::default(),
            transition: Duration::from_millis(APP_TRANSITION_MS),
            nav_cooldown: Duration::from_millis(NAVIGATION_COOLDOWN_MS),
        }
    }
}

impl ShellConfig {
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn with_cursor(mut self, cursor: CursorConfig) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_nav_cooldown(mut self, cooldown: Duration) -> Self {
        self.nav_cooldown = cooldown;
        self
    }
}
