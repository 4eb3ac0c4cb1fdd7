
pub type IniObj = HashMap<String, HashMap<String, Option<String>>>;
pub type IniSec = HashMap<String, Option<String>>;


pub fn ini_section(ini: &IniObj, key: &str) -> IniSec {
    ini.get(key).cloned().unwrap_or_default()
}

pub fn ini_must(sec: &IniSec, key: &str, dv: &str) -> String {
    match sec.get(key) {
        Some(Some(v)) => v.trim().to_owned(),
        _ => dv.to_owned(),
    }
}

pub fn ini_must_u64(sec: &IniSec, key: &str, dv: u64) -> u64 {
    let v = ini_must(sec, key, "");
    v.parse::<u64>().unwrap_or(dv)
}

pub fn ini_must_bool(sec: &IniSec, key: &str, dv: bool) -> bool {
    let v = ini_must(sec, key, "").to_lowercase();
    match v.as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => dv,
    }
}


#[cfg(test)]
mod ini_tests {
    use super::*;

    #[test]
    fn read_values_with_defaults() {
        let ini = load_config_str("[chain]\nid = 7\ntest_network = yes\n");
        let sec = ini_section(&ini, "chain");
        assert_eq!(ini_must_u64(&sec, "id", 0), 7);
        assert!(ini_must_bool(&sec, "test_network", false));
        assert!(!ini_must_bool(&sec, "missing", false));
        let none = ini_section(&ini, "other");
        assert_eq!(ini_must(&none, "x", "dv"), "dv");
    }
}
