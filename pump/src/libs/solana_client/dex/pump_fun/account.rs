use crate::{
    error::DecodeError,
    libs::solana_client::{
        dex::pump_fun::constants::BONDING_CURVE_DISCRIMINATOR,
        registry::{DexEntity, FieldReader},
    },
};

/// Snapshot of a pump.fun bonding curve taken from a single account read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BondingCurve {
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub token_total_supply: u64,
    pub complete: bool,
}

impl BondingCurve {
    /// A completed curve has migrated and rejects further swaps on-chain.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl DexEntity for BondingCurve {
    const DISCRIMINATOR: &'static [u8] = &BONDING_CURVE_DISCRIMINATOR;
    const DATA_SIZE: usize = 8 + 5 * 8 + 1;

    /// The discriminator is skipped without being checked; newer layouts append
    /// a creator key after `complete`, which is ignored.
    fn deserialize(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = FieldReader::new(data);
        reader.skip("discriminator", Self::DISCRIMINATOR.len())?;

        Ok(Self {
            virtual_token_reserves: reader.read_u64("virtual_token_reserves")?,
            virtual_sol_reserves: reader.read_u64("virtual_sol_reserves")?,
            real_token_reserves: reader.read_u64("real_token_reserves")?,
            real_sol_reserves: reader.read_u64("real_sol_reserves")?,
            token_total_supply: reader.read_u64("token_total_supply")?,
            complete: reader.read_u8("complete")? != 0,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Lays out a curve the way the program stores it.
    pub(crate) fn encode(curve: &BondingCurve) -> Vec<u8> {
        let mut data = BONDING_CURVE_DISCRIMINATOR.to_vec();
        for value in [
            curve.virtual_token_reserves,
            curve.virtual_sol_reserves,
            curve.real_token_reserves,
            curve.real_sol_reserves,
            curve.token_total_supply,
        ] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data.push(u8::from(curve.complete));
        data
    }

    pub(crate) fn initial_curve() -> BondingCurve {
        BondingCurve {
            virtual_token_reserves: 1_073_000_000_000_000,
            virtual_sol_reserves: 30_000_000_000,
            real_token_reserves: 793_100_000_000_000,
            real_sol_reserves: 0,
            token_total_supply: 1_000_000_000_000_000,
            complete: false,
        }
    }

    #[test]
    fn test_deserialize_minimum_length() {
        let curve = initial_curve();
        let data = encode(&curve);
        assert_eq!(data.len(), BondingCurve::DATA_SIZE);

        assert_eq!(BondingCurve::deserialize(&data).unwrap(), curve);
    }

    #[test]
    fn test_deserialize_ignores_trailing_creator() {
        let curve = initial_curve();
        let mut data = encode(&curve);
        data.push(0);
        data.extend_from_slice(&[9u8; 32]);

        assert_eq!(BondingCurve::deserialize(&data).unwrap(), curve);
    }

    #[test]
    fn test_deserialize_does_not_check_discriminator() {
        let curve = initial_curve();
        let mut data = encode(&curve);
        data[..8].copy_from_slice(&[0u8; 8]);

        assert!(!BondingCurve::has_discriminator(&data));
        assert_eq!(BondingCurve::deserialize(&data).unwrap(), curve);
    }

    #[test]
    fn test_deserialize_every_short_buffer_fails() {
        let data = encode(&initial_curve());
        for len in 0..BondingCurve::DATA_SIZE {
            assert!(
                BondingCurve::deserialize(&data[..len]).is_err(),
                "buffer of {len} bytes must not decode"
            );
        }
    }

    #[test]
    fn test_deserialize_names_truncated_field() {
        let data = encode(&initial_curve());

        let cases = [
            (4, "discriminator"),
            (8, "virtual_token_reserves"),
            (20, "virtual_sol_reserves"),
            (24, "real_token_reserves"),
            (39, "real_sol_reserves"),
            (47, "token_total_supply"),
            (48, "complete"),
        ];

        for (len, expected) in cases {
            let DecodeError::Truncated { field, .. } =
                BondingCurve::deserialize(&data[..len]).unwrap_err();
            assert_eq!(field, expected, "buffer of {len} bytes");
        }
    }

    #[test]
    fn test_complete_flag() {
        let mut data = encode(&initial_curve());
        let last = data.len() - 1;

        for (byte, expected) in [(0u8, false), (1, true), (2, true), (255, true)] {
            data[last] = byte;
            let curve = BondingCurve::deserialize(&data).unwrap();
            assert_eq!(curve.is_complete(), expected, "flag byte {byte}");
        }
    }
}
