//! Headless nubos phone.
//!
//! Wires the shell to a synthetic home screen ([`PhoneScene`]) and a logging
//! feedback sink, and replays [`Script`]s on a virtual clock.

mod feedback;
pub mod screens;
pub mod session;

pub use feedback::LogFeedback;
pub use screens::{PhoneScene, SCREEN};
pub use session::{Script, ScriptError, SessionPlayer, Step};

/// Session played when no script is given on the command line.
pub const DEMO_SCRIPT: &str = "\
# browse the springboard and open Maps
right tap wait:300
# walk the Maps screen and back out
down down tap
up up up tap wait:300
# Photos via the cursor, then a scroll to the last row
drag:40,-150 tap wait:300
down down down down down down
close wait:300
# flip the device from the Rotate icon
open:10 down
";
