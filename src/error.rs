use crate::parse::ParseError;
use crate::roll::RollError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("NO CABBAGE ROLL SPECIFIED. TRY HARDER!")]
    EmptyInput,
    #[error(
        "PATHETIC HUMAN, YOU SEEM TO BE ATTEMPTING TO ROLL DICE INSTEAD OF CABBAGES. \
         TRY ROLLING CABBAGES!\n(instead of rolling 1d20, try 1c20)"
    )]
    DicePattern,
    #[error("CABBAGE FORMULA TOO LONG. DOES NOT COMPUTE!")]
    FormulaTooLong { len: usize, max: usize },
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Roll(#[from] RollError),
}
