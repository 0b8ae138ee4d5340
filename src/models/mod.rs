pub mod coords;
pub mod workout;
pub mod workout_id;
pub mod workout_kind;

pub use coords::Coords;
pub use workout::{Workout, WorkoutDetails};
pub use workout_id::WorkoutId;
pub use workout_kind::WorkoutKind;
