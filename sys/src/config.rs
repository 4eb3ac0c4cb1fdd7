
/*
* load ini config file, empty when not exists
*/
pub fn load_config(cnfilestr: &str) -> IniObj {
    let cnf_file = PathBuf::from(cnfilestr);
    if ! cnf_file.exists() {
        log::warn!("[Config] Cannot find config file {}, use default.", cnfilestr);
        return IniObj::new()
    }
    log::info!("[Config] Load: {}.", cnfilestr);
    ini::ini!(cnfilestr)
}


pub fn load_config_str(content: &str) -> IniObj {
    ini::inistr!(content)
}
