use crate::common::*;
use std::fmt::{self, Write};

/// One rendered step of a trace: a constant (`-2`) or a single cabbage (`+[17]`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Fragment {
    Constant(Sign, UInt),
    Roll(Sign, UInt),
}

impl Fragment {
    pub fn value(&self) -> Int {
        match self {
            Self::Constant(sign, x) | Self::Roll(sign, x) => sign.apply(*x),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(sign, x) => write!(f, "{}{}", sign, x),
            Self::Roll(sign, x) => write!(f, "{}[{}]", sign, x),
        }
    }
}

/// The result of rolling a formula.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Outcome {
    pub total: Int,
    pub trace: Vec<Fragment>,
}

impl Outcome {
    pub fn new(total: Int, trace: Vec<Fragment>) -> Self {
        Self { total, trace }
    }

    /// The trace as shown to users, without a leading `+`.
    pub fn trace_string(&self) -> String {
        let mut ret = String::new();
        for fragment in &self.trace {
            // Writing to a `String` cannot fail.
            let _ = write!(ret, "{}", fragment);
        }
        match ret.strip_prefix('+') {
            Some(rest) => rest.to_owned(),
            None => ret,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.total, self.trace_string())
    }
}
