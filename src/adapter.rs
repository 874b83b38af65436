// Adapter: square pegs go through round holes by exposing a radius.

/// Anything a round hole can measure.
pub trait RoundPegLike {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fits(&self, peg: &dyn RoundPegLike) -> bool {
        peg.radius() <= self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundPeg {
    radius: f64,
}

impl RoundPeg {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RoundPegLike for RoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Wraps a square peg; its radius is that of the smallest circle around the square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePegAdapter {
    peg: SquarePeg,
}

impl SquarePegAdapter {
    pub fn new(peg: SquarePeg) -> Self {
        Self { peg }
    }

    pub fn inner(&self) -> &SquarePeg {
        &self.peg
    }
}

impl RoundPegLike for SquarePegAdapter {
    fn radius(&self) -> f64 {
        self.peg.width() * std::f64::consts::SQRT_2 / 2.0
    }
}

impl From<SquarePeg> for SquarePegAdapter {
    fn from(peg: SquarePeg) -> Self {
        Self::new(peg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_peg_fits() {
        let hole = RoundHole::new(5.0);
        assert!(hole.fits(&RoundPeg::new(5.0)));
        assert!(!hole.fits(&RoundPeg::new(5.1)));
    }

    #[test]
    fn test_square_pegs_through_adapter() {
        let hole = RoundHole::new(5.0);
        let small = SquarePegAdapter::new(SquarePeg::new(5.0));
        let large: SquarePegAdapter = SquarePeg::new(10.0).into();
        assert!(hole.fits(&small));
        assert!(!hole.fits(&large));
        assert!((large.radius() - 7.0710678).abs() < 1e-6);
    }

    #[test]
    fn test_adapter_tracks_inner_peg() {
        let adapter = SquarePegAdapter::from(SquarePeg::new(2.0));
        assert_eq!(adapter.inner().width(), 2.0);
        assert!((adapter.radius() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
