use concat_idents::concat_idents;

use sys::*;
use field::*;
use protocol::*;
use protocol::interface::*;
use protocol::operate::*;
use protocol::state::*;

use crate::interest::*;
use crate::bill::*;


include!{"state.rs"}
include!{"check.rs"}
include!{"close.rs"}
include!{"arbitrate.rs"}
include!{"chaswap.rs"}
