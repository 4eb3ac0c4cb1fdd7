use sys::*;
use field::*;


// interest regime switch
pub const CHANNEL_INTEREST_UPGRADE_HEIGHT: u64 = 200001;

const INTEREST_RATE_BASE: u128 = 10000;


// (step blocks, rate per 10000)
fn interest_regime(pdhei: u64) -> (u64, u128) {
    maybe!(pdhei >= CHANNEL_INTEREST_UPGRADE_HEIGHT, (10000, 10), (2500, 1))
}


pub fn interest_steps(pdhei: u64, openhei: u64) -> u64 {
    let (step, _) = interest_regime(pdhei);
    pdhei.saturating_sub(openhei) / step
}


/*
* compound interest on both legs
* return (left, right, is_applied)
*/
pub fn calculate_interest_of_height(pdhei: u64, openhei: u64, 
    left: &Amount, right: &Amount
) -> Ret<(Amount, Amount, bool)> {
    if pdhei < openhei {
        return errf!("pending height {} cannot less than open height {}", pdhei, openhei)
    }
    let (_, rate) = interest_regime(pdhei);
    let steps = interest_steps(pdhei, openhei);
    if steps == 0 {
        return Ok((left.clone(), right.clone(), false))
    }
    let newl = compound_amount(left, steps, rate)?;
    let newr = compound_amount(right, steps, rate)?;
    Ok((newl, newr, true))
}


fn compound_amount(amt: &Amount, steps: u64, rate: u128) -> Ret<Amount> {
    if amt.is_negative() {
        return errf!("interest amount {} cannot be negative", amt)
    }
    if amt.is_zero() {
        return Ok(Amount::zero())
    }
    let mut num = amt.tail_u128()?;
    let mut unit = amt.unit() as i64;
    // same value, same result
    while num % 10 == 0 {
        num /= 10;
        unit += 1;
    }
    shrink_numeral(&mut num, &mut unit);
    for _ in 0..steps {
        num *= INTEREST_RATE_BASE + rate; // fits: num <= u64::MAX before multiply
        unit -= 4;
        shrink_numeral(&mut num, &mut unit);
    }
    if unit > u8::MAX as i64 {
        return errf!("interest amount {} unit overflow", amt)
    }
    Ok(Amount::coin_u128(num, unit as u8))
}


// truncate low digits until the numeral fits u64 and the unit is at least 1
// unit 0 reads as zero amount
fn shrink_numeral(num: &mut u128, unit: &mut i64) {
    while *num > u64::MAX as u128 || *unit < 1 {
        *num /= 10;
        *unit += 1;
    }
}
