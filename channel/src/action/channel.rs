
/*
* lock both deposits into a new channel
*/
action_define!{ ChannelOpen, 2, 
    [
        self.left_bill.address,
        self.right_bill.address
    ], // need sign
    {
        channel_id     : ChannelId
        left_bill      : AddrHac
        right_bill     : AddrHac
    },
    (self, ctx {
        channel_open(self, ctx)
    }),
    (self, ctx {
        channel_open_recover(self, ctx)
    })
}


fn channel_open(this: &ChannelOpen, ctx: &mut dyn Context) -> Ret<Vec<u8>> {

    let (cid, left_addr, left_amt, right_addr, right_amt ) = (
        &this.channel_id,
        &this.left_bill.address,
        &this.left_bill.amount,
        &this.right_bill.address,
        &this.right_bill.amount
    );

    // check format
    check_channel_id(cid)?;
    left_addr.must_privakey()?;
    right_addr.must_privakey()?;
    if left_addr == right_addr {
        return errf!("left address cannot equal with right address")
    }
    if ! left_amt.is_positive() || ! right_amt.is_positive() {
        return errf!("left or right amount must be positive")
    }
    if left_amt.size() > CHANNEL_AMOUNT_MAX_SIZE || right_amt.size() > CHANNEL_AMOUNT_MAX_SIZE {
        return errf!("left or right amount bytes too long")
    }
    ctx.check_sign(left_addr)?;
    ctx.check_sign(right_addr)?;

    // check exist, an id is never reused
    let pd_hei = ctx.env().block.height;
    if ChannelState::wrap(ctx.state()).channel_exist(cid) {
        return errf!("channel {} already exist", cid)
    }

    // sub balance
    hac_sub(ctx, left_addr,  left_amt)?;
    hac_sub(ctx, right_addr, right_amt)?;

    // save channel
    let channel = ChannelSto{
        status: CHANNEL_STATUS_OPENING,
        reuse_version: Uint4::from(1),
        open_height: BlockHeight::from_u64(pd_hei)?,
        lock_block: Uint2::from(CHANNEL_ARBITRATION_LOCK_BLOCK),
        left_bill: AddrHacSat{
            address: *left_addr,
            hacsat: HacSat{amount: left_amt.clone(), satoshi: SatoshiOptional::default()}},
        right_bill: AddrHacSat{
            address: *right_addr,
            hacsat: HacSat{amount: right_amt.clone(), satoshi: SatoshiOptional::default()}},
        if_challenging: ChallengePeriodDataOptional::default(), // none
        if_distribution: ClosedDistributionDataOptional::default(), // none
    };
    ChannelState::wrap(ctx.state()).channel_set(cid, &channel);

    // update total count
    let deposit = left_amt.add_mode_u64(right_amt)?.to_zhu_u64()?;
    total_count_update(ctx, |ttcount| {
        ttcount.add(TotalBucket::OpeningChannel, 1)?;
        ttcount.add(TotalBucket::ChannelDeposit, deposit)
    })?;

    log::debug!("channel {} opened at height {} with {} and {}", cid, pd_hei, left_amt, right_amt);
    Ok(vec![])
}


fn channel_open_recover(this: &ChannelOpen, ctx: &mut dyn Context) -> Rerr {
    let cid = &this.channel_id;
    let mut state = ChannelState::wrap(ctx.state());
    let Some(chan) = state.channel(cid) else {
        never!("recover open: channel {} not find", cid)
    };
    if ! chan.is_opening() {
        never!("recover open: channel {} status {} is not opening", cid, chan.status)
    }
    state.channel_del(cid);
    let (left_amt, right_amt) = (&this.left_bill.amount, &this.right_bill.amount);
    let deposit = left_amt.add_mode_u64(right_amt)?.to_zhu_u64()?;
    total_count_update(ctx, |ttcount| {
        ttcount.sub(TotalBucket::OpeningChannel, 1)?;
        ttcount.sub(TotalBucket::ChannelDeposit, deposit)
    })?;
    hac_add(ctx, &this.left_bill.address, left_amt)?;
    hac_add(ctx, &this.right_bill.address, right_amt)?;
    log::debug!("recover channel {} open", cid);
    Ok(())
}



/*******************************************/



action_define!{ ChannelClose, 3, 
    [], // sign checked by channel addresses
    {
        channel_id     : ChannelId 
    },
    (self, ctx {
        channel_close(self, ctx)
    }),
    (self, ctx {
        let pdhei = ctx.env().block.height;
        close_channel_recover(pdhei, ctx, &self.channel_id, false, true, CHANNEL_STATUS_OPENING)
    })
}


fn channel_close(this: &ChannelClose, ctx: &mut dyn Context) -> Ret<Vec<u8>> {
    
    let cid = &this.channel_id;
    check_channel_id(cid)?;

    let pending_height = ctx.env().block.height;
    let state = ChannelState::wrap(ctx.state());

    // query
    let chan = must_have!(format!("channel {}", cid), state.channel(cid));
    if ! chan.is_opening() {
        return errf!("channel {} status is not opening", cid)
    }

	// verify two address sign
    ctx.check_sign( &chan.left_bill.address )?;
    ctx.check_sign( &chan.right_bill.address )?;
    
    // do close with interest
    close_channel_with_distribution(
        pending_height, ctx, cid, &chan, 
        &chan.left_bill.hacsat.amount,
        &chan.right_bill.hacsat.amount,
        chan.left_bill.hacsat.satoshi.uint(),
        chan.right_bill.hacsat.satoshi.uint(),
        false, true,
    )?;
    Ok(vec![])
}
