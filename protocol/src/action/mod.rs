use std::sync::RwLock;

use sys::*;
use field::*;

use crate::interface::*;


include!{"macro.rs"}
include!{"create.rs"}
include!{"exec.rs"}
