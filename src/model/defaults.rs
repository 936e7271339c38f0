//! Static tables for the 2025 Tour Championship draft.

/// (team, golfer 1, golfer 2)
pub const DEFAULT_ROSTER: &[(&str, &str, &str)] = &[
    ("MJC", "Tommy Fleetwood", "Russell Henley"),
    ("Kamp", "Viktor Hovland", "Brian Harman"),
    ("Burton", "Patrick Cantlay", "Corey Conners"),
    ("Blanch", "Rory McIlroy", "J.J. Spaun"),
    ("Blake", "Shane Lowry", "Ludvig Åberg"),
    ("Wales", "Sungjae Im", "Harris English"),
    ("Ryan", "Robert MacIntyre", "Keegan Bradley"),
    ("Frazey", "Ben Griffin", "Maverick McNealy"),
    ("Carl", "Hideki Matsuyama", "Akshay Bhatia"),
    ("Pannell", "Justin Thomas", "Cameron Young"),
    ("Tim", "Collin Morikawa", "Sam Burns"),
    ("Goldy", "Justin Rose", "Sepp Straka"),
];

/// Used when no live odds can be fetched at startup.
pub const FALLBACK_ODDS: &[(&str, u32)] = &[
    ("Tommy Fleetwood", 1500),
    ("Russell Henley", 2300),
    ("Viktor Hovland", 3000),
    ("Brian Harman", 7000),
    ("Patrick Cantlay", 2300),
    ("Corey Conners", 2500),
    ("Rory McIlroy", 850),
    ("J.J. Spaun", 2800),
    ("Shane Lowry", 4500),
    ("Ludvig Åberg", 1300),
    ("Sungjae Im", 2200),
    ("Harris English", 25000),
    ("Robert MacIntyre", 10000),
    ("Keegan Bradley", 7000),
    ("Ben Griffin", 4000),
    ("Maverick McNealy", 4000),
    ("Hideki Matsuyama", 5500),
    ("Akshay Bhatia", 20000),
    ("Justin Thomas", 3300),
    ("Cameron Young", 10000),
    ("Collin Morikawa", 2900),
    ("Sam Burns", 4700),
    ("Justin Rose", 15000),
    ("Sepp Straka", 50000),
];

/// Odds movement used by the "simulate" action to exercise the merge path.
pub const SIMULATED_ODDS: &[(&str, u32)] = &[
    ("Viktor Hovland", 1800),
    ("Rory McIlroy", 1200),
    ("Patrick Cantlay", 3500),
    ("Collin Morikawa", 2000),
    ("Tommy Fleetwood", 2500),
    ("Russell Henley", 1800),
    ("Ludvig Åberg", 2200),
    ("Sungjae Im", 3200),
    ("Brian Harman", 9000),
    ("J.J. Spaun", 1800),
    ("Ben Griffin", 2500),
    ("Maverick McNealy", 2500),
];

/// (golfer, score to par, thru) loaded when the tournament starts.
pub const SAMPLE_SCORES: &[(&str, i32, &str)] = &[
    ("Patrick Cantlay", -16, "F"),
    ("Corey Conners", -12, "F"),
    ("Viktor Hovland", -17, "F"),
    ("Brian Harman", -8, "F"),
    ("Shane Lowry", -10, "F"),
    ("Ludvig Åberg", -15, "F"),
    ("Collin Morikawa", -14, "F"),
    ("Sam Burns", -9, "F"),
    ("Tommy Fleetwood", -11, "F"),
    ("Russell Henley", -6, "F"),
    ("Sungjae Im", -13, "F"),
    ("Harris English", -4, "F"),
    ("Justin Thomas", -10, "F"),
    ("Cameron Young", -7, "F"),
    ("Rory McIlroy", -16, "F"),
    ("J.J. Spaun", 0, "F"),
    ("Hideki Matsuyama", -9, "F"),
    ("Akshay Bhatia", -5, "F"),
    ("Justin Rose", -6, "F"),
    ("Sepp Straka", -1, "F"),
    ("Robert MacIntyre", 2, "F"),
    ("Keegan Bradley", -8, "F"),
    ("Ben Griffin", -2, "F"),
    ("Maverick McNealy", -3, "F"),
];

pub const DEFAULT_ODDS_URL: &str =
    "https://www.pgatour.com/tournaments/2025/tour-championship/R2025060/odds";

pub const DEFAULT_RELAYS: &[&str] = &[
    "json:https://api.allorigins.win/get",
    "raw:https://cors-anywhere.herokuapp.com/",
];
