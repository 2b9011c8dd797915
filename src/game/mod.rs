//! Game session state machine

mod session;

pub use session::{
    Attempt, GameOver, GameSession, InputAction, MAX_ATTEMPTS, RevealStep, Status, SubmitError,
};
