//! Rendering enormous numbers of seconds as something a person can read, e.g. "2 million years".

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::One;

/// Seconds in a 365-day year. Leap years are not accounted for.
const SECONDS_PER_YEAR: u32 = 31_536_000;

/// Anything at or past this many googol years is "an eternity".
const ETERNITY_GOOGOLS: u32 = 999;

/// Names of the year multiples, each a thousand times the last, starting from a thousand years.
static YEAR_MAGNITUDES: &[&str] = &[
    "thousand years",
    "million years",
    "billion years",
    "trillion years",
    "quadrillion years",
    "quintillion years",
    "sextillion years",
    "septillion years",
    "octillion years",
    "nonillion years",
    "decillion years",
    "undecillion years",
    "duodecillion years",
    "tredecillion years",
    "quattuordecillion years",
    "quindecillion years",
    "sexdecillion years",
    "septendecillion years",
    "octodecillion years",
    "novemdecillion years",
    "vigintillion years",
    "unvigintillion years",
    "duovigintillion years",
    "trevigintillion years",
    "quattuorvigintillion years",
    "quinvigintillion years",
    "sexvigintillion years",
    "septenvigintillion years",
    "octovigintillion years",
    "novemvigintillion years",
    "trigintillion years",
    "untrigintillion years",
    "duotrigintillion years",
];

/// One rung of the unit ladder.
struct Unit {
    name: &'static str,
    /// Length of the unit, in seconds.
    seconds: BigUint,
}

impl Unit {
    /// Single-word units ("second", "year") take an "s" in the plural; the "… years" ones are
    /// already plural.
    fn pluralizes(&self) -> bool {
        !self.name.contains(' ')
    }
}

fn years_times_ten_to(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp) * SECONDS_PER_YEAR
}

static UNITS: LazyLock<Vec<Unit>> = LazyLock::new(|| {
    let mut units = vec![
        Unit {
            name: "second",
            seconds: BigUint::one(),
        },
        Unit {
            name: "minute",
            seconds: BigUint::from(60u32),
        },
        Unit {
            name: "hour",
            seconds: BigUint::from(3_600u32),
        },
        Unit {
            name: "day",
            seconds: BigUint::from(86_400u32),
        },
        Unit {
            name: "year",
            seconds: BigUint::from(SECONDS_PER_YEAR),
        },
    ];
    for (idx, name) in YEAR_MAGNITUDES.iter().copied().enumerate() {
        let exp = 3 * (idx as u32 + 1);
        units.push(Unit {
            name,
            seconds: years_times_ten_to(exp),
        });
    }
    units.push(Unit {
        name: "googol years",
        seconds: years_times_ten_to(100),
    });
    units
});

static ETERNITY: LazyLock<BigUint> =
    LazyLock::new(|| years_times_ten_to(100) * ETERNITY_GOOGOLS);

/// Format a number of seconds using the largest unit that fits at least once, e.g. "3 hours" or
/// "12 quintillion years". The count is truncated, not rounded.
///
/// Zero is "less than a second", and anything from 999 googol years up is "an eternity".
pub fn format_duration(seconds: &BigUint) -> String {
    if *seconds >= *ETERNITY {
        return "an eternity".to_owned();
    }

    let unit = match UNITS.iter().rev().find(|unit| unit.seconds <= *seconds) {
        Some(unit) => unit,
        None => return "less than a second".to_owned(),
    };
    let count = seconds / &unit.seconds;
    if unit.pluralizes() && !count.is_one() {
        format!("{} {}s", count, unit.name)
    } else {
        format!("{} {}", count, unit.name)
    }
}
