
/*
* an empty balance is stored as absent
*/
fn balance_save(state: &mut CoreState, addr: &Address, bls: &Balance) {
    if bls.hacash.is_zero() && bls.satoshi.uint() == 0 {
        state.balance_del(addr);
        return
    }
    state.balance_set(addr, bls);
}

