use std::{fmt, str::FromStr};

use rand::{seq::index, Rng};

use crate::Error;

/// Closed range of values a query may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe {
    low: u32,
    high: u32,
}

impl Universe {
    pub const DEFAULT: Universe = Universe {
        low: 1,
        high: 49_999,
    };

    pub fn new(low: u32, high: u32) -> Result<Self, Error> {
        if low > high {
            return Err(Error::InvalidConfig("universe low bound exceeds high bound"));
        }
        if usize::try_from(u64::from(high - low) + 1).is_err() {
            return Err(Error::InvalidConfig("universe is too large for this platform"));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Number of distinct values available. Fits in `usize`, checked by
    /// [`Universe::new`].
    pub fn size(&self) -> usize {
        (self.high - self.low) as usize + 1
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Closed range of query lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenRange {
    min: usize,
    max: usize,
}

impl LenRange {
    pub const DEFAULT: LenRange = LenRange { min: 1, max: 128 };

    pub fn new(min: usize, max: usize) -> Result<Self, Error> {
        if min == 0 {
            return Err(Error::InvalidConfig("minimum query length must be at least 1"));
        }
        if min > max {
            return Err(Error::InvalidConfig(
                "minimum query length exceeds maximum query length",
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }

    pub fn sample(&self, mut rng: impl Rng) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for LenRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Strictly increasing sequence of distinct values. Renders as the values
/// joined with `,`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySequence(Vec<u32>);

impl QuerySequence {
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl fmt::Display for QuerySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for v in values {
                write!(f, ",{v}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for QuerySequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = utils::parse_values(s)?;
        if let Some(pos) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::Unordered(pos + 1));
        }
        Ok(Self(values))
    }
}

/// Samples `len` distinct values from `universe` without replacement and
/// sorts them.
///
/// `len` is not range-checked against a [`LenRange`]; the only failure is a
/// request for more values than the universe holds.
pub fn generate_sequence(
    len: usize,
    universe: Universe,
    mut rng: impl Rng,
) -> Result<QuerySequence, Error> {
    let available = universe.size();
    if len > available {
        return Err(Error::Population {
            requested: len,
            available,
        });
    }
    let mut values = index::sample(&mut rng, available, len)
        .into_iter()
        .map(|i| universe.low + i as u32)
        .collect::<Vec<_>>();
    values.sort_unstable();
    Ok(QuerySequence(values))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    proptest! {
        #[test]
        fn sequences_hold_invariants(seed in any::<u64>(), len in 1usize..=128) {
            let mut rng = StdRng::seed_from_u64(seed);
            let seq = generate_sequence(len, Universe::DEFAULT, &mut rng).unwrap();
            prop_assert_eq!(seq.len(), len);
            prop_assert!(seq.values().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(seq.values().iter().all(|&v| (1..=49_999).contains(&v)));
        }

        #[test]
        fn rendering_round_trips(seed in any::<u64>(), len in 1usize..=128) {
            let mut rng = StdRng::seed_from_u64(seed);
            let seq = generate_sequence(len, Universe::DEFAULT, &mut rng).unwrap();
            let parsed = seq.to_string().parse::<QuerySequence>().unwrap();
            prop_assert_eq!(parsed, seq);
        }

        #[test]
        fn sampled_lengths_stay_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let len = LenRange::DEFAULT.sample(&mut rng);
            prop_assert!((1..=128).contains(&len));
        }
    }

    #[test]
    fn single_value_has_no_comma() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(0);
        let s = generate_sequence(1, Universe::DEFAULT, &mut rng)?.to_string();
        assert!(!s.contains(','));
        assert!(s.parse::<u32>().is_ok());
        Ok(())
    }

    #[test]
    fn max_length_has_127_commas() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(0);
        let s = generate_sequence(128, Universe::DEFAULT, &mut rng)?.to_string();
        assert_eq!(s.matches(',').count(), 127);
        assert!(!s.ends_with(','));
        assert!(!s.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn whole_universe_can_be_drawn() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let universe = Universe::new(1, 10)?;
        let seq = generate_sequence(10, universe, &mut rng)?;
        assert_eq!(seq.into_inner(), (1..=10u32).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn oversized_request_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_sequence(50_000, Universe::DEFAULT, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::Population {
                requested: 50_000,
                available: 49_999
            }
        ));
    }

    #[test]
    fn same_seed_same_sequence() -> anyhow::Result<()> {
        let a = generate_sequence(64, Universe::DEFAULT, StdRng::seed_from_u64(3))?;
        let b = generate_sequence(64, Universe::DEFAULT, StdRng::seed_from_u64(3))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn display_joins_with_commas() -> anyhow::Result<()> {
        let seq: QuerySequence = "1,17,300,49999".parse()?;
        insta::assert_snapshot!(seq.to_string(), @"1,17,300,49999");
        Ok(())
    }

    #[test]
    fn parse_rejects_unordered_values() {
        assert!(matches!(
            "1,5,5".parse::<QuerySequence>(),
            Err(Error::Unordered(2))
        ));
        assert!(matches!(
            "9,2".parse::<QuerySequence>(),
            Err(Error::Unordered(1))
        ));
        assert!(matches!(
            "".parse::<QuerySequence>(),
            Err(Error::Parse(utils::ParseError::Empty))
        ));
    }

    #[test]
    fn parse_requires_exact_rendering() {
        for s in ["+1,2", "01,2", "1,2\n", " 1", "5,6\r\n"] {
            assert!(
                matches!(s.parse::<QuerySequence>(), Err(Error::Parse(_))),
                "{s:?}"
            );
        }
    }

    #[test]
    fn full_u32_universe_size() {
        let universe = Universe::new(0, u32::MAX);
        if cfg!(target_pointer_width = "64") {
            assert_eq!(universe.map(|u| u.size() as u64).ok(), Some(1u64 << 32));
        } else {
            assert!(matches!(universe, Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn ranges_validate_bounds() {
        assert!(Universe::new(5, 4).is_err());
        assert_eq!(Universe::new(4, 4).map(|u| u.size()).ok(), Some(1));
        assert_eq!(Universe::DEFAULT.size(), 49_999);
        assert!(LenRange::new(0, 3).is_err());
        assert!(LenRange::new(4, 3).is_err());
        assert!(LenRange::new(3, 3).is_ok());
    }
}
