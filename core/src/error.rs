use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No playable board could be generated in {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
