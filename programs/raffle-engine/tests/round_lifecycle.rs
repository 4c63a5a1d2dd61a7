use std::cell::RefCell;
use std::collections::HashMap;

use anchor_lang::prelude::*;
use raffle_engine::{
    engine::Settlement,
    error::RaffleError,
    state::{Raffle, RaffleConfig, RaffleState, RandomnessParams},
};

const FEE: u64 = 10_000_000;
const INTERVAL: i64 = 30;
const CREATED_AT: i64 = 1_700_000_000;

/// Lamport balances standing in for the vault and player wallets.
struct Bank {
    vault: u64,
    wallets: HashMap<Pubkey, u64>,
}

impl Bank {
    fn new() -> Self {
        Self {
            vault: 0,
            wallets: HashMap::new(),
        }
    }

    fn balance(&self, wallet: &Pubkey) -> u64 {
        self.wallets.get(wallet).copied().unwrap_or(0)
    }

    fn pay_out(&mut self, winner: Pubkey, amount: u64) -> Result<()> {
        require!(self.vault >= amount, RaffleError::VaultUnderfunded);
        self.vault -= amount;
        *self.wallets.entry(winner).or_insert(0) += amount;
        Ok(())
    }
}

fn config() -> RaffleConfig {
    RaffleConfig {
        owner: Pubkey::new_unique(),
        entrance_fee: FEE,
        interval: INTERVAL,
        coordinator: Pubkey::new_unique(),
        upkeep_authority: None,
        randomness: RandomnessParams {
            key_hash: [9u8; 32],
            subscription_id: 7,
            request_confirmations: 3,
            callback_compute_limit: 500_000,
            num_words: 1,
        },
        bump: 255,
    }
}

fn word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn enter(raffle: &mut Raffle, bank: &mut Bank, player: Pubkey, amount: u64) -> Result<u64> {
    let index = raffle.record_entry(player, amount, FEE)?;
    bank.vault += amount;
    Ok(index)
}

fn fulfill(
    raffle: &mut Raffle,
    bank: &RefCell<Bank>,
    request_id: u64,
    value: u64,
    now: i64,
) -> Result<Settlement> {
    raffle.settle(request_id, &[word(value)], now, |winner, amount| {
        bank.borrow_mut().pay_out(winner, amount)
    })
}

fn assert_consistent(raffle: &Raffle) {
    assert_eq!(
        raffle.state == RaffleState::Drawing,
        raffle.pending_request_id.is_some()
    );
}

#[test]
fn single_entrant_round() {
    let config = config();
    let mut raffle = Raffle::new(Pubkey::new_unique(), 254, CREATED_AT);
    let mut bank = Bank::new();
    let alice = Pubkey::new_unique();

    enter(&mut raffle, &mut bank, alice, FEE).unwrap();
    assert!(!raffle.upkeep_needed(&config, CREATED_AT + INTERVAL - 1));

    let now = CREATED_AT + INTERVAL + 1;
    assert!(raffle.upkeep_needed(&config, now));
    let request = raffle.begin_draw(&config, now).unwrap();
    assert!(request.request_id > 0);
    assert_consistent(&raffle);

    let bank = RefCell::new(bank);
    let settled_at = now + 5;
    let settlement = fulfill(&mut raffle, &bank, request.request_id, 7, settled_at).unwrap();
    let bank = bank.into_inner();

    assert_eq!(settlement.winner, alice);
    assert_eq!(bank.balance(&alice), FEE);
    assert_eq!(bank.vault, 0);
    assert_eq!(raffle.state, RaffleState::Open);
    assert_eq!(raffle.number_of_players(), 0);
    assert_eq!(raffle.pool_value, 0);
    assert_eq!(raffle.recent_winner, Some(alice));
    assert_eq!(raffle.last_timestamp, settled_at);
    assert_consistent(&raffle);
}

#[test]
fn four_entrants_pay_the_third() {
    let config = config();
    let mut raffle = Raffle::new(Pubkey::new_unique(), 254, CREATED_AT);
    let mut bank = Bank::new();
    let players: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

    for player in &players {
        enter(&mut raffle, &mut bank, *player, FEE).unwrap();
    }

    let now = CREATED_AT + INTERVAL;
    let request = raffle.begin_draw(&config, now).unwrap();

    // A second trigger before the callback lands changes nothing.
    let pinned = raffle.clone();
    assert!(raffle.begin_draw(&config, now).is_err());
    assert_eq!(raffle, pinned);

    // Entries are refused while drawing.
    let late = Pubkey::new_unique();
    assert_eq!(
        enter(&mut raffle, &mut bank, late, FEE).unwrap_err(),
        anchor_lang::error::Error::from(RaffleError::RoundNotOpen)
    );

    let bank = RefCell::new(bank);
    fulfill(&mut raffle, &bank, request.request_id, 10, now + 1).unwrap();
    let bank = bank.into_inner();

    assert_eq!(raffle.recent_winner, Some(players[2]));
    assert_eq!(bank.balance(&players[2]), FEE * 4);
    for loser in [players[0], players[1], players[3]] {
        assert_eq!(bank.balance(&loser), 0);
    }
}

#[test]
fn forged_callback_leaves_round_pinned() {
    let config = config();
    let mut raffle = Raffle::new(Pubkey::new_unique(), 254, CREATED_AT);
    let mut bank = Bank::new();
    enter(&mut raffle, &mut bank, Pubkey::new_unique(), FEE).unwrap();
    let request = raffle
        .begin_draw(&config, CREATED_AT + INTERVAL)
        .unwrap();
    let pinned = raffle.clone();

    let bank = RefCell::new(bank);
    let err = fulfill(&mut raffle, &bank, request.request_id + 1, 3, CREATED_AT + 60).unwrap_err();

    assert_eq!(err, anchor_lang::error::Error::from(RaffleError::UnknownRequest));
    assert_eq!(raffle, pinned);
    assert_eq!(bank.borrow().vault, FEE);
}

#[test]
fn underfunded_payout_is_retryable() {
    let config = config();
    let mut raffle = Raffle::new(Pubkey::new_unique(), 254, CREATED_AT);
    let mut bank = Bank::new();
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();
    enter(&mut raffle, &mut bank, alice, FEE).unwrap();
    enter(&mut raffle, &mut bank, bob, FEE).unwrap();
    let request = raffle
        .begin_draw(&config, CREATED_AT + INTERVAL)
        .unwrap();

    // Drain the vault so the transfer cannot complete.
    bank.vault = FEE;
    let pinned = raffle.clone();
    let bank = RefCell::new(bank);

    let err = fulfill(&mut raffle, &bank, request.request_id, 1, CREATED_AT + 40).unwrap_err();
    assert_eq!(err, anchor_lang::error::Error::from(RaffleError::PayoutFailed));
    assert_eq!(raffle, pinned);
    assert_consistent(&raffle);

    bank.borrow_mut().vault = FEE * 2;
    let settlement = fulfill(&mut raffle, &bank, request.request_id, 1, CREATED_AT + 50).unwrap();
    assert_eq!(settlement.winner, bob);
    assert_eq!(bank.borrow().balance(&bob), FEE * 2);
    assert_eq!(raffle.state, RaffleState::Open);
}

#[test]
fn rounds_cycle_with_fresh_request_ids() {
    let config = config();
    let mut raffle = Raffle::new(Pubkey::new_unique(), 254, CREATED_AT);
    let bank = RefCell::new(Bank::new());
    let mut now = CREATED_AT;
    let mut ids = Vec::new();

    for round in 0..4u64 {
        let player = Pubkey::new_unique();
        enter(&mut raffle, &mut bank.borrow_mut(), player, FEE + round).unwrap();

        // The interval restarts from the previous settlement.
        assert!(!raffle.upkeep_needed(&config, now + INTERVAL - 1));
        now += INTERVAL;

        let request = raffle.begin_draw(&config, now).unwrap();
        ids.push(request.request_id);
        let settlement = fulfill(&mut raffle, &bank, request.request_id, round, now).unwrap();
        assert_eq!(settlement.amount, FEE + round);
        assert_consistent(&raffle);
    }

    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(bank.borrow().vault, 0);
}
