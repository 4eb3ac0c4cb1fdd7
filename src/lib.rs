pub use sys;
pub use field;
pub use protocol;
pub use channel;

use protocol::config::ChainConf;


/*
* load chain config and register channel actions
*/
pub fn setup(cnfpath: &str) -> ChainConf {
    let ini = sys::load_config(cnfpath);
    let cnf = ChainConf::new(&ini);
    channel::init_setup();
    log::info!("[Setup] payment channel actions registered, test network {}", cnf.test_network);
    cnf
}
