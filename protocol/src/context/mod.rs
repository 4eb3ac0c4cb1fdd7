use std::collections::HashMap;

use sys::*;
use field::*;

use crate::interface::*;
use crate::config::ChainConf;
use crate::transaction;


include!{"env.rs"}
include!{"context.rs"}
