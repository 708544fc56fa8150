//! Compiler application layer

mod convert_usecase;

pub use convert_usecase::{ConvertUseCase, ConvertUseCaseImpl};
