use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("gates must be greater than 0")]
    NoGates,
    #[error("priority gates must not exceed total gates ({0} > {1})")]
    TooManyPriorityGates(usize, usize),
    #[error("total fans must be greater than 0")]
    FansZero,
    #[error("season ticket percent must be between 0 and 100 (got {0})")]
    InvalidSeasonPercent(f64),
    #[error("standard deviation must be > 0 (got {0})")]
    InvalidStdDev(f64),
    #[error("uniform window start must not exceed end (got {0}..{1})")]
    InvalidUniformWindow(f64, f64),
    #[error("beta shape parameters must be > 0 (got alpha={0}, beta={1})")]
    InvalidBetaShape(f64, f64),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
