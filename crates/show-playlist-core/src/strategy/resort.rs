use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use crate::bucket::Buckets;
use super::StrategyCatalog;

/// Rearranges the remaining shows once a show change fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resort {
    /// Send the current show to the back of the queue
    #[default]
    Rotate,
    Shuffle,
    #[serde(rename = "swap_1_and_2")]
    Swap1And2,
}

impl StrategyCatalog for Resort {
    const AXIS: &'static str = "resort";
    const ALL: &'static [Self] = &[Self::Rotate, Self::Shuffle, Self::Swap1And2];

    fn as_str(self) -> &'static str {
        match self {
            Self::Rotate => "rotate",
            Self::Shuffle => "shuffle",
            Self::Swap1And2 => "swap_1_and_2",
        }
    }
}

super::catalog_str_impls!(Resort);

impl Resort {
    /// Reorder in place. `rotate` and `swap_1_and_2` are O(1); all variants
    /// leave a single bucket where it is.
    pub fn apply(self, buckets: &mut Buckets<'_>, rng: &mut dyn RngCore) {
        match self {
            Self::Rotate => buckets.rotate_left(usize::from(!buckets.is_empty())),
            Self::Shuffle => buckets.make_contiguous().shuffle(rng),
            Self::Swap1And2 => {
                if buckets.len() >= 2 {
                    buckets.swap(0, 1);
                }
            }
        }
    }

    pub fn requires_two_shows(self) -> bool {
        matches!(self, Self::Swap1And2)
    }
}
