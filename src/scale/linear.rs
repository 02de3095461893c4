/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline] pub fn domain(&self) -> (f64, f64) { self.domain }

    #[inline] pub fn range(&self) -> (f64, f64) { self.range }

    /// Map `value` into the range; a zero-width domain maps everything to the range midpoint.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 { return (r0 + r1) / 2.0 }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}
