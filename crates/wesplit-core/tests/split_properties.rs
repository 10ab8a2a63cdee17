//! Behavioural checks of the calculator across the whole selectable range.

use wesplit_core::{
    compute_grand_total, compute_per_person_amount, CheckAmount, Money, PartySize, SplitInputs,
    TipPercentage,
};

const AMOUNTS: [f64; 7] = [0.0, 0.01, 1.0, 12.34, 57.5, 1234.56, 99_999.99];

fn tips_ascending() -> Vec<u32> {
    let mut tips: Vec<u32> = TipPercentage::ALL.iter().map(|t| t.percent()).collect();
    tips.sort_unstable();
    tips
}

#[test]
fn zero_tip_leaves_amount_unchanged() {
    for amount in AMOUNTS {
        assert_eq!(compute_grand_total(amount, 0.0), amount);
    }
}

#[test]
fn known_values() {
    assert_eq!(compute_grand_total(100.0, 20.0), 120.0);
    assert_eq!(compute_per_person_amount(120.0, 0.0, 4), 30.0);
}

#[test]
fn per_person_is_grand_total_over_party() {
    for amount in AMOUNTS {
        for tip in tips_ascending() {
            let tip = f64::from(tip);
            for party in 1..=99u32 {
                assert_eq!(
                    compute_per_person_amount(amount, tip, party),
                    compute_grand_total(amount, tip) / f64::from(party)
                );
            }
        }
    }
}

#[test]
fn higher_tip_costs_more() {
    for amount in AMOUNTS.into_iter().filter(|a| *a > 0.0) {
        for party in [2u32, 3, 7, 99] {
            let tips = tips_ascending();
            for pair in tips.windows(2) {
                let (low, high) = (f64::from(pair[0]), f64::from(pair[1]));
                assert!(compute_grand_total(amount, high) > compute_grand_total(amount, low));
                assert!(
                    compute_per_person_amount(amount, high, party)
                        > compute_per_person_amount(amount, low, party)
                );
            }
        }
    }
}

#[test]
fn bigger_party_pays_less_each() {
    for amount in AMOUNTS.into_iter().filter(|a| *a > 0.0) {
        for tip in tips_ascending() {
            let tip = f64::from(tip);
            for party in PartySize::MIN..PartySize::MAX {
                assert!(
                    compute_per_person_amount(amount, tip, party + 1)
                        < compute_per_person_amount(amount, tip, party)
                );
            }
        }
    }
}

#[test]
fn fifty_dollars_fifteen_percent_first_picker_entry() {
    let inputs = SplitInputs {
        check_amount: CheckAmount::new(50.0).unwrap(),
        party_size: PartySize::from_picker_index(0).unwrap(),
        tip_percentage: TipPercentage::new(15).unwrap(),
    };

    let totals = inputs.totals();
    assert_eq!(inputs.party_size.count(), 2);
    assert_eq!(totals.grand_total, 57.5);
    assert_eq!(totals.amount_per_person, 28.75);

    assert_eq!(Money::from_major_rounded(totals.grand_total, 2).unwrap().cents(), 5750);
    assert_eq!(Money::from_major_rounded(totals.amount_per_person, 2).unwrap().cents(), 2875);
}

#[test]
fn totals_follow_every_input_change() {
    let mut inputs = SplitInputs::default();
    assert_eq!(inputs.totals().grand_total, 0.0);

    inputs.check_amount = CheckAmount::new(80.0).unwrap();
    assert_eq!(inputs.totals().grand_total, 96.0);

    inputs.tip_percentage = TipPercentage::new(25).unwrap();
    assert_eq!(inputs.totals().grand_total, 100.0);

    inputs.party_size = PartySize::new(4).unwrap();
    assert_eq!(inputs.totals().amount_per_person, 25.0);
}
