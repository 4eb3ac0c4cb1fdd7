use sys::*;
use field::*;
use protocol::*;
use protocol::interface::*;
use protocol::operate::*;
use protocol::state::*;

use crate::bill::*;
use crate::oprate::*;


include!{"channel.rs"}
include!{"challenge.rs"}


/*
* actions register
*/
action_register!{

    // open and close
    ChannelOpen
    ChannelClose

    // challenge and arbitration
    ChannelUnilateralCloseByNothing
    ChannelArbitrateByReconciliation
    ChannelArbitrateByChainTransfer
    ChannelArbitrateByAtomicSwap
    ChannelClaimDistribution

}
