/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

#[cfg(test)]
pub struct Sequence {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl Sequence {
    pub fn new(values: &[f64]) -> Self {
        Self { values: values.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
