
/*
* [chain] section
*/
#[derive(Clone, Debug, Default)]
pub struct ChainConf {
    pub chain_id: u32,
    // unlock challenge and arbitration actions
    pub test_network: bool,
}


impl ChainConf {

    pub fn new(ini: &IniObj) -> ChainConf {
        let sec = ini_section(ini, "chain");
        let chain_id = ini_must_u64(&sec, "id", 0).min(u32::MAX as u64) as u32;
        let test_network = ini_must_bool(&sec, "test_network", false);
        let cnf = ChainConf {
            chain_id,
            test_network,
        };
        log::info!("[Config] chain id {} test network {}", cnf.chain_id, cnf.test_network);
        cnf
    }

}
