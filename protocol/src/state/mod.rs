use concat_idents::concat_idents;

use sys::*;
use field::*;

use crate::interface::*;


include!{"macro.rs"}
include!{"state.rs"}
