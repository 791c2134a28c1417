//! Testing utilities and harness for the nubos phone shell

pub mod feedback;
pub mod robot;
pub mod robot_assertions;
pub mod scene;

pub use feedback::RecordingFeedback;
pub use robot::*;
pub use robot_assertions::*;
pub use scene::TestScene;

pub mod prelude {
    pub use crate::feedback::RecordingFeedback;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::scene::TestScene;
}
