
/*
* payout of each leg and interest in zhu
*/
fn channel_payout(pdhei: u64, paychan: &ChannelSto, 
    left_amt: &Amount, right_amt: &Amount, with_interest: bool,
) -> Ret<(Amount, Amount, u64)> {
    if ! with_interest {
        return Ok((left_amt.clone(), right_amt.clone(), 0))
    }
    let (newamt1, newamt2, is_applied) = calculate_interest_of_height(
        pdhei, *paychan.open_height, left_amt, right_amt
    )?;
    if ! is_applied {
        return Ok((newamt1, newamt2, 0))
    }
    let ttamt = left_amt.add_mode_u128(right_amt)?;
    let ttnewhac = newamt1.add_mode_u128(&newamt2)?;
    if ttnewhac.less_than(&ttamt) {
        return errf!("interest calculate error!")
    }
    let interest = ttnewhac.sub_mode_u128(&ttamt)?.to_zhu_u64()?;
    Ok((newamt1, newamt2, interest))
}


/**
 * close and pay out
 * pdhei = pending height
 */
#[allow(clippy::too_many_arguments)]
pub fn close_channel_with_distribution(pdhei: u64, ctx: &mut dyn Context, channel_id: &ChannelId, 
    paychan: &ChannelSto, 
    left_amt: &Amount,  right_amt: &Amount,
    left_sat: u64, right_sat: u64,
    is_final_closed: bool, with_interest: bool,
) -> Rerr {
    if paychan.is_closed() {
        return errf!("channel {} is already closed", channel_id)
    }
    check_distribution(paychan, left_amt, right_amt, left_sat, right_sat)?;
    let ttamt = paychan.total_hacash()?;
    let ttsat = paychan.total_satoshi()?;
    let (payamt1, payamt2, interest) = channel_payout(pdhei, paychan, left_amt, right_amt, with_interest)?;
    // total supply
    total_count_update(ctx, |ttcount| {
        ttcount.sub(TotalBucket::OpeningChannel, 1)?;
        ttcount.sub(TotalBucket::ChannelDeposit, ttamt.to_zhu_u64()?)?;
        ttcount.add(TotalBucket::ChannelInterest, interest)?;
        ttcount.sub(TotalBucket::ChannelDepositSat, ttsat)
    })?;
    // pay
    let left_addr = &paychan.left_bill.address;
    let right_addr = &paychan.right_bill.address;
    if payamt1.is_positive() {
        hac_add(ctx, left_addr, &payamt1)?;
    }
    if payamt2.is_positive() {
        hac_add(ctx, right_addr, &payamt2)?;
    }
    if left_sat > 0 {
        sat_add(ctx, left_addr, left_sat)?;
    }
    if right_sat > 0 {
        sat_add(ctx, right_addr, right_sat)?;
    }
    // save channel
    let mut savechan = paychan.clone();
    savechan.status = maybe!(is_final_closed, 
        CHANNEL_STATUS_FINAL_ARBITRATION_CLOSED, 
        CHANNEL_STATUS_AGREEMENT_CLOSED
    );
    savechan.if_distribution = ClosedDistributionDataOptional::must(ClosedDistributionData{
        left_bill: HacSat{
            amount: left_amt.clone(),
            satoshi: SatoshiOptional::from_uint(left_sat),
        }
    });
    ChannelState::wrap(ctx.state()).channel_set(channel_id, &savechan);
    log::debug!("channel {} closed at height {} final {} pay {} and {} interest zhu {}", 
        channel_id, pdhei, is_final_closed, payamt1, payamt2, interest);
    Ok(())
}


/**
 * undo close_channel_with_distribution from the recorded distribution
 */
pub fn close_channel_recover(pdhei: u64, ctx: &mut dyn Context, channel_id: &ChannelId,
    is_final_closed: bool, with_interest: bool, restore_status: Uint1,
) -> Rerr {
    let Some(mut paychan) = ChannelState::wrap(ctx.state()).channel(channel_id) else {
        never!("recover close: channel {} not find", channel_id)
    };
    let closed_status = maybe!(is_final_closed, 
        CHANNEL_STATUS_FINAL_ARBITRATION_CLOSED, 
        CHANNEL_STATUS_AGREEMENT_CLOSED
    );
    if paychan.status != closed_status {
        never!("recover close: channel {} status {} need {}", channel_id, paychan.status, closed_status)
    }
    let Some(distribution) = paychan.if_distribution.if_value() else {
        never!("recover close: channel {} distribution not find", channel_id)
    };
    let left_amt = distribution.left_bill.amount.clone();
    let left_sat = distribution.left_bill.satoshi.uint();
    let ttamt = paychan.total_hacash()?;
    let ttsat = paychan.total_satoshi()?;
    let right_amt = ttamt.sub_mode_u128(&left_amt)?;
    let Some(right_sat) = ttsat.checked_sub(left_sat) else {
        never!("recover close: channel {} satoshi distribution broken", channel_id)
    };
    let (payamt1, payamt2, interest) = channel_payout(pdhei, &paychan, &left_amt, &right_amt, with_interest)?;
    // take back
    let left_addr = paychan.left_bill.address;
    let right_addr = paychan.right_bill.address;
    if payamt1.is_positive() {
        hac_sub(ctx, &left_addr, &payamt1)?;
    }
    if payamt2.is_positive() {
        hac_sub(ctx, &right_addr, &payamt2)?;
    }
    if left_sat > 0 {
        sat_sub(ctx, &left_addr, left_sat)?;
    }
    if right_sat > 0 {
        sat_sub(ctx, &right_addr, right_sat)?;
    }
    total_count_update(ctx, |ttcount| {
        ttcount.add(TotalBucket::OpeningChannel, 1)?;
        ttcount.add(TotalBucket::ChannelDeposit, ttamt.to_zhu_u64()?)?;
        ttcount.sub(TotalBucket::ChannelInterest, interest)?;
        ttcount.add(TotalBucket::ChannelDepositSat, ttsat)
    })?;
    // restore channel
    paychan.status = restore_status;
    paychan.if_distribution = ClosedDistributionDataOptional::default();
    ChannelState::wrap(ctx.state()).channel_set(channel_id, &paychan);
    log::debug!("recover channel {} close, back to status {}", channel_id, restore_status);
    Ok(())
}
