use std::{hint::black_box, str::FromStr};

use criterion::{Criterion, criterion_group};
use pump::{
    BondingCurve, SwapAccounts,
    libs::solana_client::registry::DexEntity,
    pump_fun::{BONDING_CURVE_DISCRIMINATOR, ComputeBudget, build_buy_instructions},
};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

fn curve_account() -> Vec<u8> {
    let mut data = BONDING_CURVE_DISCRIMINATOR.to_vec();
    for value in [
        1_073_000_000_000_000u64,
        30_000_000_000,
        793_100_000_000_000,
        0,
        1_000_000_000_000_000,
    ] {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data.push(0);
    data
}

pub fn decode_benchmark(c: &mut Criterion) {
    let data = curve_account();

    c.bench_function("decode_bonding_curve", |b| {
        b.iter(|| BondingCurve::deserialize(black_box(&data)).unwrap())
    });
}

pub fn buy_benchmark(c: &mut Criterion) {
    let curve = BondingCurve::deserialize(&curve_account()).unwrap();
    let spend = Decimal::from_str("0.01").unwrap();
    let slippage = Decimal::from_str("0.05").unwrap();
    let owner = Pubkey::new_unique();
    let accounts = SwapAccounts {
        mint: Pubkey::new_unique(),
        bonding_curve: Pubkey::new_unique(),
        associated_bonding_curve: Pubkey::new_unique(),
        associated_user: Pubkey::new_unique(),
    };

    c.bench_function("quote_buy", |b| {
        b.iter(|| {
            black_box(&curve)
                .quote_buy(black_box(spend), black_box(slippage))
                .unwrap()
        })
    });

    c.bench_function("build_buy_instructions", |b| {
        let quote = curve.quote_buy(spend, slippage).unwrap();
        b.iter(|| build_buy_instructions(&owner, &accounts, black_box(&quote), ComputeBudget::default()))
    });
}

criterion_group!(benches, decode_benchmark, buy_benchmark);
