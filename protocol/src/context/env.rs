
#[derive(Default, Clone, Debug)]
pub struct ChainInfo {
    pub id: u32,
    pub test_network: bool,
}


#[derive(Default, Clone, Debug)]
pub struct BlkInfo {
    // pending block height
    pub height: u64,
}


#[derive(Default, Clone, Debug)]
pub struct Env {
    pub chain: ChainInfo,
    pub block: BlkInfo,
}


impl Env {

    pub fn new(cnf: &ChainConf, pending_height: u64) -> Env {
        Env {
            chain: ChainInfo {
                id: cnf.chain_id,
                test_network: cnf.test_network,
            },
            block: BlkInfo {
                height: pending_height,
            },
        }
    }

}
