use serde_json::{json, Value};

use sys::*;
use field::*;
use protocol::interface::*;
use protocol::state::*;

use crate::oprate::*;


fn status_name(status: Uint1) -> &'static str {
    match status {
        CHANNEL_STATUS_OPENING => "opening",
        CHANNEL_STATUS_AGREEMENT_CLOSED => "agreement_closed",
        CHANNEL_STATUS_FINAL_ARBITRATION_CLOSED => "final_closed",
        CHANNEL_STATUS_CHALLENGING => "challenging",
        _ => "unknown",
    }
}


/*
* channel record as json, amounts in the given unit
*/
pub fn channel_view(sta: &dyn State, id: &str, unit: &str) -> Ret<Value> {
    let Ok(id) = hex::decode(id) else {
        return errf!("channel id format error")
    };
    if id.len() != ChannelId::SIZE {
        return errf!("channel id format error")
    }
    let chid = ChannelId::from_slice(&id)?;
    let state = ChannelStateRead::wrap(sta);
    let channel = must_have!("channel", state.channel(&chid));

    let status = *channel.status;
    let mut data = serde_json::Map::new();
    data.insert("id".to_owned(), json!(chid.to_hex()));
    data.insert("status".to_owned(), json!(status));
    data.insert("status_name".to_owned(), json!(status_name(channel.status)));
    data.insert("open_height".to_owned(), json!(*channel.open_height));
    data.insert("reuse_version".to_owned(), json!(*channel.reuse_version));
    data.insert("arbitration_lock".to_owned(), json!(*channel.lock_block));
    for (name, bill) in [("left", &channel.left_bill), ("right", &channel.right_bill)] {
        data.insert(name.to_owned(), json!({
            "address": bill.address.readable(),
            "hacash": bill.hacsat.amount.to_unit_string(unit),
            "satoshi": bill.hacsat.satoshi.uint(),
        }));
    }

    if let Some(challenging) = channel.if_challenging.if_value() {
        let l_or_r = challenging.assert_address_is_left_or_right.check();
        let assaddr = channel.side_address(l_or_r).readable();
        data.insert("challenging".to_owned(), json!({
            "launch_height": *challenging.challenge_launch_height,
            "arbitration_lock": *challenging.arbitration_lock_block,
            "assert_bill_auto_number": *challenging.assert_bill_auto_number,
            "assert_address_is_left_or_right": l_or_r,
            "assert_bill": {
                "address": assaddr,
                "hacash": challenging.assert_bill.amount.to_unit_string(unit),
                "satoshi": challenging.assert_bill.satoshi.uint(),
            },
        }));
    }

    if let Some(distribution) = channel.if_distribution.if_value() {
        data.insert("distribution".to_owned(), json!({
            "left_hacash": distribution.left_bill.amount.to_unit_string(unit),
            "left_satoshi": distribution.left_bill.satoshi.uint(),
        }));
    }

    Ok(Value::Object(data))
}


pub fn supply_view(sta: &dyn State) -> Value {
    let ttcount = CoreStateRead::wrap(sta).get_total_count();
    json!({
        "opening_channel": *ttcount.opening_channel,
        "channel_deposit_zhu": *ttcount.channel_deposit_zhu,
        "channel_interest_zhu": *ttcount.channel_interest_zhu,
        "channel_deposit_sat": *ttcount.channel_deposit_sat,
    })
}
