
inst_state_define!{ ChannelState,

    12, channel,  ChannelId : ChannelSto
    18, chaswap,  HashHalf  : ChaswapSto

}
