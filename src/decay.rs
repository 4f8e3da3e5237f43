use crate::error::MazeError;

/// A value that changes as training progresses, such as an exploration rate
pub trait Decay {
    /// Calculate value at time `t` (usually the episode number)
    fn evaluate(&self, t: f64) -> f64;
}

fn validate(rate: f64, vi: f64, vf: f64) -> Result<(), MazeError> {
    ((rate >= 0.0 && vi >= vf) || (rate < 0.0 && vi < vf))
        .then_some(())
        .ok_or(MazeError::InvalidDecay(
            "`vi - vf` must have same sign as `rate`",
        ))
}

/// A constant value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f64) -> f64 {
        self.value
    }
}

/// v(t) = v<sub>f</sub> + (v<sub>i</sub> - v<sub>f</sub>) * e<sup>-rt</sup>
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Exponential {
    rate: f64,
    vi: f64,
    vf: f64,
}

impl Exponential {
    pub fn new(rate: f64, vi: f64, vf: f64) -> Result<Self, MazeError> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Exponential {
    fn evaluate(&self, t: f64) -> f64 {
        let &Self { rate, vi, vf } = self;
        vf + (vi - vf) * (-rate * t).exp()
    }
}

/// v(t) = max(v<sub>i</sub> - rt, v<sub>f</sub>)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear {
    rate: f64,
    vi: f64,
    vf: f64,
}

impl Linear {
    pub fn new(rate: f64, vi: f64, vf: f64) -> Result<Self, MazeError> {
        if rate < 0.0 {
            return Err(MazeError::InvalidDecay("linear decay rate must be non-negative"));
        }
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Linear {
    fn evaluate(&self, t: f64) -> f64 {
        let &Self { rate, vi, vf } = self;
        (vi - rate * t).max(vf)
    }
}
