
/*
* unilateral close with the deposit split, start challenging
*/
action_define!{ ChannelUnilateralCloseByNothing, 22, 
    [self.assert_address], // asserter sign
    {
        channel_id     : ChannelId
        assert_address : Address
    },
    (self, ctx {
        check_test_network(ctx)?;
        ctx.check_sign(&self.assert_address)?;
        channel_challenge_by_nothing(ctx, &self.channel_id, &self.assert_address)?;
        Ok(vec![])
    }),
    (self, ctx {
        channel_challenge_recover(ctx, &self.channel_id)
    })
}


/*
* unilateral close or respond by a realtime reconciliation
*/
action_define!{ ChannelArbitrateByReconciliation, 23, 
    [self.assert_address],
    {
        assert_address : Address
        reconciliation : RealtimeReconciliation
    },
    (self, ctx {
        check_test_network(ctx)?;
        ctx.check_sign(&self.assert_address)?;
        channel_arbitrate(ctx, &self.assert_address, &self.reconciliation)?;
        Ok(vec![])
    }),
    (self, ctx {
        channel_arbitrate_recover(ctx, &self.reconciliation.bill.channel_id, &self.assert_address)
    })
}


/*
* unilateral close or respond by a channel chain transfer prove
*/
action_define!{ ChannelArbitrateByChainTransfer, 24, 
    [self.assert_address],
    {
        assert_address : Address
        transfer_form  : ChannelChainTransferForm
        prove_body     : ChannelChainTransferProveBody
    },
    (self, ctx {
        check_test_network(ctx)?;
        ctx.check_sign(&self.assert_address)?;
        let basis = ChannelChainTransferBasis {
            form: &self.transfer_form,
            body: &self.prove_body,
        };
        channel_arbitrate(ctx, &self.assert_address, &basis)?;
        Ok(vec![])
    }),
    (self, ctx {
        channel_arbitrate_recover(ctx, &self.prove_body.channel_id, &self.assert_address)
    })
}


/*
* unilateral close or respond by a prove backed with an atomic swap receipt
*/
action_define!{ ChannelArbitrateByAtomicSwap, 26, 
    [self.assert_address],
    {
        assert_address  : Address
        swap_receipt_id : HashHalf
        prove_body      : ChannelChainTransferProveBody
    },
    (self, ctx {
        channel_arbitrate_by_atomic_swap(self, ctx)
    }),
    (self, ctx {
        chaswap_consume_recover(ctx, &self.swap_receipt_id);
        channel_arbitrate_recover(ctx, &self.prove_body.channel_id, &self.assert_address)
    })
}


fn channel_arbitrate_by_atomic_swap(this: &ChannelArbitrateByAtomicSwap, ctx: &mut dyn Context) -> Ret<Vec<u8>> {
    check_test_network(ctx)?;
    ctx.check_sign(&this.assert_address)?;
    // receipt is marked only after the channel side passes
    let receipt = chaswap_receipt_unused(ctx, &this.swap_receipt_id)?;
    let basis = AtomicSwapBasis {
        receipt: &receipt,
        body: &this.prove_body,
    };
    channel_arbitrate(ctx, &this.assert_address, &basis)?;
    chaswap_consume(ctx, &this.swap_receipt_id)?;
    Ok(vec![])
}


/*
* take the distribution after the challenge period ends
*/
action_define!{ ChannelClaimDistribution, 27, 
    [], // anyone can submit
    {
        channel_id     : ChannelId
    },
    (self, ctx {
        check_test_network(ctx)?;
        channel_claim_distribution(ctx, &self.channel_id)?;
        Ok(vec![])
    }),
    (self, ctx {
        channel_claim_distribution_recover(ctx, &self.channel_id)
    })
}
