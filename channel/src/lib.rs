use std::sync::Once;


pub mod interest;
pub mod bill;
pub mod oprate;
pub mod action;
pub mod api;


static SETUP: Once = Once::new();

/*
* register channel action kinds to the action creator
*/
pub fn init_setup() {
    SETUP.call_once(|| {
        protocol::action::action_register(action::try_create);
    });
}
