use sys::*;
use field::*;

use crate::interface::*;
use crate::action::*;


include!{"util.rs"}
include!{"type2.rs"}
include!{"exec.rs"}
