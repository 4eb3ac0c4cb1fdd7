use std::any::Any;
use std::collections::HashMap;

use dyn_clone::*;

use sys::*;
use field::*;

use crate::context::Env;


include!{"state.rs"}
include!{"action.rs"}
include!{"transaction.rs"}
include!{"context.rs"}
