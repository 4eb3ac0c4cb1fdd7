use field::*;
use protocol::interface::State;
use protocol::state::{CoreState, CoreStateRead};

pub fn seed_balance(sta: &mut dyn State, adr: &Address, hac: Amount, sat: u64) {
    let bls = Balance {
        hacash: hac,
        satoshi: Satoshi::from(sat),
    };
    CoreState::wrap(sta).balance_set(adr, &bls);
}

pub fn balance_of(sta: &dyn State, adr: &Address) -> Balance {
    CoreStateRead::wrap(sta).balance(adr).unwrap_or_default()
}

pub fn hacash_of(sta: &dyn State, adr: &Address) -> Amount {
    balance_of(sta, adr).hacash
}

pub fn satoshi_of(sta: &dyn State, adr: &Address) -> u64 {
    balance_of(sta, adr).satoshi.uint()
}

pub fn total_count_of(sta: &dyn State) -> TotalCount {
    CoreStateRead::wrap(sta).get_total_count()
}
