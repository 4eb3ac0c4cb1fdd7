use sys::*;
use field::*;

use crate::interface::*;
use crate::state::*;


include!{"balance.rs"}
include!{"hacash.rs"}
include!{"satoshi.rs"}
