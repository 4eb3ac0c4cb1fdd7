
fn challenge_data_of<'a>(channel_id: &ChannelId, paychan: &'a ChannelSto) -> &'a ChallengePeriodData {
    match paychan.if_challenging.if_value() {
        Some(c) => c,
        None => never!("channel {} is challenging but challenge data not find", channel_id),
    }
}


fn channel_goto_challenging(pdhei: u64, ctx: &mut dyn Context, channel_id: &ChannelId,
    paychan: &ChannelSto, is_left: bool, basis: &dyn ArbitrationBasis,
) -> Rerr {
    let mut savechan = paychan.clone();
    savechan.status = CHANNEL_STATUS_CHALLENGING;
    savechan.if_challenging = ChallengePeriodDataOptional::must(ChallengePeriodData{
        is_have_challenge_log: Bool::new(true),
        challenge_launch_height: BlockHeight::from_u64(pdhei)?,
        arbitration_lock_block: paychan.lock_block,
        assert_address_is_left_or_right: Bool::new(is_left),
        assert_bill_auto_number: Uint8::from(basis.bill_auto_number()),
        assert_bill: basis.side_bill(is_left),
    });
    ChannelState::wrap(ctx.state()).channel_set(channel_id, &savechan);
    log::debug!("channel {} challenging from height {} by {} side bill number {}",
        channel_id, pdhei, maybe!(is_left, "left", "right"), basis.bill_auto_number());
    Ok(())
}


/*
* unilateral close with the channel's own deposit split
*/
pub fn channel_challenge_by_nothing(ctx: &mut dyn Context, channel_id: &ChannelId, assert_addr: &Address) -> Rerr {
    check_channel_id(channel_id)?;
    let pdhei = ctx.env().block.height;
    let paychan = must_have!(format!("channel {}", channel_id), 
        ChannelState::wrap(ctx.state()).channel(channel_id));
    if ! paychan.is_opening() {
        return errf!("channel {} status is not opening", channel_id)
    }
    let Some(is_left) = paychan.side_of(assert_addr) else {
        return errf!("address {} is not a party of channel {}", assert_addr.readable(), channel_id)
    };
    let basis = NothingAssertion::new(channel_id, &paychan);
    channel_goto_challenging(pdhei, ctx, channel_id, &paychan, is_left, &basis)
}


// back to opening from the challenge this block launched
pub fn channel_challenge_recover(ctx: &mut dyn Context, channel_id: &ChannelId) -> Rerr {
    let pdhei = ctx.env().block.height;
    let mut state = ChannelState::wrap(ctx.state());
    let Some(mut paychan) = state.channel(channel_id) else {
        never!("recover challenge: channel {} not find", channel_id)
    };
    if ! paychan.is_challenging() {
        never!("recover challenge: channel {} status {} is not challenging", channel_id, paychan.status)
    }
    let launch = *challenge_data_of(channel_id, &paychan).challenge_launch_height;
    if launch != pdhei {
        never!("recover challenge: channel {} launched at {} not {}", channel_id, launch, pdhei)
    }
    paychan.status = CHANNEL_STATUS_OPENING;
    paychan.if_challenging = ChallengePeriodDataOptional::default();
    state.channel_set(channel_id, &paychan);
    log::debug!("recover channel {} challenge, back to opening", channel_id);
    Ok(())
}


/*
* unilateral close or respond to a challenge with signed evidence
* opening: start challenging with the asserted bill
* challenging: the other side with a newer bill takes all
*/
pub fn channel_arbitrate(ctx: &mut dyn Context, assert_addr: &Address, basis: &dyn ArbitrationBasis) -> Rerr {
    let channel_id = basis.channel_id();
    check_channel_id(channel_id)?;
    let pdhei = ctx.env().block.height;
    let paychan = must_have!(format!("channel {}", channel_id), 
        ChannelState::wrap(ctx.state()).channel(channel_id));
    if paychan.is_closed() {
        return errf!("channel {} is already closed", channel_id)
    }
    let Some(is_left) = paychan.side_of(assert_addr) else {
        return errf!("address {} is not a party of channel {}", assert_addr.readable(), channel_id)
    };
    basis.check_address_and_sign(&paychan.left_bill.address, &paychan.right_bill.address)?;
    if basis.reuse_version() != *paychan.reuse_version {
        return errf!("channel {} reuse version need {} but got {}", 
            channel_id, paychan.reuse_version, basis.reuse_version())
    }
    check_distribution(&paychan, basis.left_amount(), basis.right_amount(), 
        basis.left_satoshi(), basis.right_satoshi())?;
    if paychan.is_opening() {
        return channel_goto_challenging(pdhei, ctx, channel_id, &paychan, is_left, basis)
    }
    if ! paychan.is_challenging() {
        return errf!("channel {} status {} error", channel_id, paychan.status)
    }
    let challenge = challenge_data_of(channel_id, &paychan);
    if challenge.assert_address_is_left_or_right.check() == is_left {
        return errf!("address {} cannot respond to its own challenge", assert_addr.readable())
    }
    let recorded = *challenge.assert_bill_auto_number;
    if basis.bill_auto_number() <= recorded {
        return errf!("bill auto number {} must be greater than {}", basis.bill_auto_number(), recorded)
    }
    // responder takes all
    let ttamt = paychan.total_hacash()?;
    let ttsat = paychan.total_satoshi()?;
    let zero = Amount::zero();
    let (left_amt, right_amt, left_sat, right_sat) = maybe!(is_left,
        (&ttamt, &zero, ttsat, 0),
        (&zero, &ttamt, 0, ttsat)
    );
    close_channel_with_distribution(pdhei, ctx, channel_id, &paychan, 
        left_amt, right_amt, left_sat, right_sat, true, false)?;
    log::debug!("channel {} seized by {} side with bill number {}", 
        channel_id, maybe!(is_left, "left", "right"), basis.bill_auto_number());
    Ok(())
}


// the forward branch is known from the status it left
pub fn channel_arbitrate_recover(ctx: &mut dyn Context, channel_id: &ChannelId, assert_addr: &Address) -> Rerr {
    let pdhei = ctx.env().block.height;
    let Some(paychan) = ChannelState::wrap(ctx.state()).channel(channel_id) else {
        never!("recover arbitrate: channel {} not find", channel_id)
    };
    if paychan.side_of(assert_addr).is_none() {
        never!("recover arbitrate: address {} not in channel {}", assert_addr.readable(), channel_id)
    }
    if paychan.is_challenging() {
        return channel_challenge_recover(ctx, channel_id)
    }
    if paychan.status == CHANNEL_STATUS_FINAL_ARBITRATION_CLOSED {
        return close_channel_recover(pdhei, ctx, channel_id, true, false, CHANNEL_STATUS_CHALLENGING)
    }
    never!("recover arbitrate: channel {} status {} error", channel_id, paychan.status)
}


/*
* after the lock period: asserter gets the asserted bill, the other side the rest
*/
pub fn channel_claim_distribution(ctx: &mut dyn Context, channel_id: &ChannelId) -> Rerr {
    check_channel_id(channel_id)?;
    let pdhei = ctx.env().block.height;
    let paychan = must_have!(format!("channel {}", channel_id), 
        ChannelState::wrap(ctx.state()).channel(channel_id));
    if ! paychan.is_challenging() {
        return errf!("channel {} is not on challenging", channel_id)
    }
    let challenge = challenge_data_of(channel_id, &paychan);
    let unlock = *challenge.challenge_launch_height + *challenge.arbitration_lock_block as u64;
    if pdhei <= unlock {
        return errf!("channel {} challenge period not end, wait until height {}", channel_id, unlock + 1)
    }
    let ttamt = paychan.total_hacash()?;
    let ttsat = paychan.total_satoshi()?;
    let asserted = &challenge.assert_bill;
    let assert_sat = asserted.satoshi.uint();
    let other_amt = ttamt.sub_mode_u128(&asserted.amount)?;
    let Some(other_sat) = ttsat.checked_sub(assert_sat) else {
        return errf!("channel {} asserted satoshi {} over lock in {}", channel_id, assert_sat, ttsat)
    };
    let is_left = challenge.assert_address_is_left_or_right.check();
    let (left_amt, right_amt, left_sat, right_sat) = maybe!(is_left,
        (&asserted.amount, &other_amt, assert_sat, other_sat),
        (&other_amt, &asserted.amount, other_sat, assert_sat)
    );
    close_channel_with_distribution(pdhei, ctx, channel_id, &paychan, 
        left_amt, right_amt, left_sat, right_sat, true, true)?;
    log::debug!("channel {} distribution claimed at height {}", channel_id, pdhei);
    Ok(())
}


pub fn channel_claim_distribution_recover(ctx: &mut dyn Context, channel_id: &ChannelId) -> Rerr {
    let pdhei = ctx.env().block.height;
    close_channel_recover(pdhei, ctx, channel_id, true, true, CHANNEL_STATUS_CHALLENGING)
}
