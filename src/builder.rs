use crate::engines::Strategy;
use crate::interval::Weight;
use crate::switching::Switching;

#[derive(Clone, Copy, Debug, Default)]
pub struct SwitchingBuilder {
    primary: Option<Strategy>,
    bound: Option<Weight>,
}

impl SwitchingBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_primary(mut self, primary: Strategy) -> Self {
        self.primary = Some(primary);
        self
    }
    pub fn with_bound(mut self, bound: Weight) -> Self {
        self.bound = Some(bound);
        self
    }
    pub fn build(self) -> Switching {
        Switching::with_config(self.primary.unwrap_or_default(), self.bound)
    }
}
