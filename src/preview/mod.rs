mod handler;
mod types;

pub use handler::PreviewHandler;
pub use types::{
    FailureCode, FailureKind, GenerationInput, PreviewFailure, PreviewOutcome, PreviewSuccess,
    SpaceType,
};
