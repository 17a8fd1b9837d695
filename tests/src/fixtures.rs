//! # Reference Fixtures
//!
//! Small rule set and six updates whose outcomes were worked out by hand:
//!
//! | Update | Outcome | Middle |
//! |--------|---------|--------|
//! | 75,47,61,53,29 | valid | 61 |
//! | 97,61,53,29,13 | valid | 53 |
//! | 75,29,13 | valid | 29 |
//! | 75,97,47,61,53 | repaired → 97,75,47,61,53 | 47 |
//! | 61,13,29 | repaired → 61,29,13 | 29 |
//! | 97,13,75,29,47 | repaired → 97,75,47,29,13 | 47 |

use pe_01_order_resolution::{ItemId, Rule};

/// Expected sum of middle items over valid updates
pub const FIXTURE_VALID_SUM: i64 = 143;

/// Expected sum of middle items over repaired updates
pub const FIXTURE_REPAIRED_SUM: i64 = 123;

/// Fixture in the textual input format (note the duplicate `47|53`)
pub const FIXTURE_INPUT: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|29
75|61
47|53
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

pub fn fixture_rules() -> Vec<Rule> {
    [
        (47, 53),
        (97, 13),
        (97, 61),
        (97, 47),
        (75, 29),
        (61, 13),
        (75, 53),
        (29, 13),
        (97, 29),
        (53, 29),
        (61, 53),
        (97, 53),
        (61, 29),
        (47, 13),
        (75, 47),
        (97, 75),
        (47, 29),
        (75, 61),
        (47, 53),
        (75, 13),
        (53, 13),
    ]
    .into_iter()
    .map(|(before, after)| Rule::new(before, after))
    .collect()
}

pub fn fixture_updates() -> Vec<Vec<ItemId>> {
    vec![
        vec![75, 47, 61, 53, 29],
        vec![97, 61, 53, 29, 13],
        vec![75, 29, 13],
        vec![75, 97, 47, 61, 53],
        vec![61, 13, 29],
        vec![97, 13, 75, 29, 47],
    ]
}
