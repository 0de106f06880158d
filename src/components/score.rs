/// Points carried by an entity.
///
/// On the player this is the running total; on enemies and rocks it is the
/// reward paid out when they are destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    pub multiplier: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Score {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            multiplier: 1,
        }
    }

    /// Add `points` times the multiplier. Returns the amount added.
    pub fn add(&mut self, points: u32) -> u32 {
        let gained = points.saturating_mul(self.multiplier);
        self.value = self.value.saturating_add(gained);
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_applies_multiplier() {
        let mut s = Score::new(5);
        s.multiplier = 3;
        assert_eq!(s.add(10), 30);
        assert_eq!(s.value, 35);
    }
}
