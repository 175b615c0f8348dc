use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum VttError {
    NoCues(String),
    NoActiveCue(f64),
}

impl Error for VttError {}

impl fmt::Display for VttError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VttError::NoCues(source) => write!(fmt, "No cues found in '{}'", source),
            VttError::NoActiveCue(time) => write!(fmt, "No cue is active at {}s", time),
        }
    }
}
