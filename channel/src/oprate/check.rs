
// lock period is about 17 days
pub const CHANNEL_ARBITRATION_LOCK_BLOCK: u16 = 5000;

pub const CHANNEL_AMOUNT_MAX_SIZE: usize = 6;


// first and last byte cannot be zero
pub fn check_channel_id(cid: &ChannelId) -> Rerr {
    if cid[0] == 0 || cid[ChannelId::SIZE - 1] == 0 {
        return errf!("channel id {} format error", cid)
    }
    Ok(())
}


// challenge and arbitration are only enabled on test network
pub fn check_test_network(ctx: &dyn Context) -> Rerr {
    mayerr!(ctx.env().chain.test_network, errf!("mainnet not yet"))
}


pub fn total_count_update<F>(ctx: &mut dyn Context, f: F) -> Rerr 
    where F: FnOnce(&mut TotalCount) -> Rerr
{
    let mut state = CoreState::wrap(ctx.state());
    let mut ttcount = state.get_total_count();
    f(&mut ttcount)?;
    if ttcount == TotalCount::default() {
        state.total_count_del(&Empty::default()); // all back to zero
    } else {
        state.set_total_count(&ttcount);
    }
    Ok(())
}


// distribution legs must sum to the locked funds
fn check_distribution(paychan: &ChannelSto, 
    left_amt: &Amount, right_amt: &Amount, left_sat: u64, right_sat: u64,
) -> Rerr {
    if left_amt.is_negative() || right_amt.is_negative() {
        return errf!("channel distribution amount cannot be negative")
    }
    let ttamt = paychan.total_hacash()?;
    if ! left_amt.add_mode_u128(right_amt)?.equal(&ttamt) {
        return errf!("HAC distribution amount {} + {} must equal with lock in {}", 
            left_amt, right_amt, ttamt)
    }
    let ttsat = paychan.total_satoshi()?;
    match left_sat.checked_add(right_sat) {
        Some(t) if t == ttsat => Ok(()),
        _ => errf!("BTC distribution amount {} + {} must equal with lock in {}", 
            left_sat, right_sat, ttsat),
    }
}


#[cfg(test)]
mod check_tests {
    use super::*;

    #[test]
    fn channel_id_edges_cannot_be_zero() {
        let mut id = [5u8; 16];
        check_channel_id(&ChannelId::from(id)).unwrap();
        id[0] = 0;
        assert!(check_channel_id(&ChannelId::from(id)).is_err());
        id[0] = 5;
        id[15] = 0;
        assert!(check_channel_id(&ChannelId::from(id)).is_err());
    }
}
