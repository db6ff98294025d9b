use thiserror::Error;

use crate::numeric::Weight;

pub type WeightResult<T> = Result<T, WeightError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum WeightError {
    #[error("Non-finite weight: {value}")]
    NonFinite { value: Weight },

    #[error("Negative weight: {value}")]
    Negative { value: Weight },
}
