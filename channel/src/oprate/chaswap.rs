
/*
* single use on chain swap receipt
*/
pub fn chaswap_receipt_unused(ctx: &mut dyn Context, id: &HashHalf) -> Ret<ChaswapSto> {
    let receipt = must_have!(format!("chaswap receipt {}", id), 
        ChannelState::wrap(ctx.state()).chaswap(id));
    if receipt.is_be_used.check() {
        return errf!("chaswap receipt {} already used", id)
    }
    Ok(receipt)
}


pub fn chaswap_consume(ctx: &mut dyn Context, id: &HashHalf) -> Rerr {
    let mut receipt = chaswap_receipt_unused(ctx, id)?;
    receipt.is_be_used = Bool::new(true);
    ChannelState::wrap(ctx.state()).chaswap_set(id, &receipt);
    log::debug!("chaswap receipt {} consumed", id);
    Ok(())
}


// unconditional
pub fn chaswap_consume_recover(ctx: &mut dyn Context, id: &HashHalf) {
    let mut state = ChannelState::wrap(ctx.state());
    let Some(mut receipt) = state.chaswap(id) else {
        never!("recover chaswap: receipt {} not find", id)
    };
    receipt.is_be_used = Bool::new(false);
    state.chaswap_set(id, &receipt);
    log::debug!("recover chaswap receipt {} to unused", id);
}
