use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
    str::FromStr,
};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// A day of the week on which a teacher can be available
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl TryFrom<String> for Weekday {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Compact set of weekdays, one bit per day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[repr(transparent)]
pub struct DaySet(u8);

impl DaySet {
    pub const MONDAY: Self = DaySet(1 << 0);
    pub const TUESDAY: Self = DaySet(1 << 1);
    pub const WEDNESDAY: Self = DaySet(1 << 2);
    pub const THURSDAY: Self = DaySet(1 << 3);
    pub const FRIDAY: Self = DaySet(1 << 4);
    pub const SATURDAY: Self = DaySet(1 << 5);
    pub const SUNDAY: Self = DaySet(1 << 6);

    pub const WEEKDAYS: Self = DaySet(0b0011111);
    pub const WEEKEND: Self = DaySet(0b1100000);
    pub const ALL: Self = DaySet(0b1111111);
    pub const NONE: Self = DaySet(0);

    /// Letter used for each day when rendering a set
    const DAY_CHARS: [(Weekday, char); 7] = [
        (Weekday::Monday, 'M'),
        (Weekday::Tuesday, 'T'),
        (Weekday::Wednesday, 'W'),
        (Weekday::Thursday, 'R'),
        (Weekday::Friday, 'F'),
        (Weekday::Saturday, 'S'),
        (Weekday::Sunday, 'U'),
    ];

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn contains(self, days: Self) -> bool {
        (self & days) == days
    }

    pub fn contains_day(self, day: Weekday) -> bool {
        self.contains(day.into())
    }

    pub fn add(&mut self, day: Weekday) {
        *self |= day.into();
    }

    pub fn remove(&mut self, day: Weekday) {
        *self &= !Self::from(day);
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in the set, Monday first
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        Weekday::all().filter(move |&day| self.contains_day(day))
    }
}

impl From<Weekday> for DaySet {
    fn from(day: Weekday) -> Self {
        DaySet(1 << day as u8)
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::NONE;
        for day in iter {
            set.add(day);
        }
        set
    }
}

impl FromStr for DaySet {
    type Err = char;

    /// Parses a letter pattern such as `"MWF"`; unknown letters are rejected
    fn from_str(days: &str) -> Result<Self, Self::Err> {
        let mut result = Self::NONE;

        for c in days.chars() {
            let (day, _) = Self::DAY_CHARS
                .iter()
                .find(|(_, day_char)| *day_char == c)
                .ok_or(c)?;
            result.add(*day);
        }

        Ok(result)
    }
}

impl Display for DaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let result: String = Self::DAY_CHARS
            .iter()
            .filter(|(day, _)| self.contains_day(*day))
            .map(|(_, day_char)| day_char)
            .collect();

        write!(f, "{result}")
    }
}

impl BitOr for DaySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        DaySet(self.0 | rhs.0)
    }
}

impl BitAnd for DaySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        DaySet(self.0 & rhs.0)
    }
}

impl Not for DaySet {
    type Output = Self;

    fn not(self) -> Self::Output {
        // Only seven days exist
        DaySet((!self.0) & 0x7F)
    }
}

impl BitOrAssign for DaySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for DaySet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

#[cfg(test)]
mod test {
    use super::{DaySet, Weekday};
    use std::str::FromStr;

    #[test]
    fn test_weekday_parse_and_display() {
        assert_eq!(Weekday::from_str("Monday").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::from_str("sunday").unwrap(), Weekday::Sunday);
        assert!(Weekday::from_str("Funday").is_err());
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }

    #[test]
    fn test_weekday_json_ignores_case() {
        let day: Weekday = serde_json::from_str("\"monday\"").unwrap();
        assert_eq!(day, Weekday::Monday);
        let day: Weekday = serde_json::from_str("\"FRIDAY\"").unwrap();
        assert_eq!(day, Weekday::Friday);
        assert!(serde_json::from_str::<Weekday>("\"Funday\"").is_err());
        assert!(serde_json::from_str::<Weekday>("3").is_err());
        assert_eq!(serde_json::to_string(&Weekday::Sunday).unwrap(), "\"Sunday\"");
    }

    #[test]
    fn test_weekday_order_starts_on_monday() {
        let days: Vec<_> = Weekday::all().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], Weekday::Monday);
        assert_eq!(days[6], Weekday::Sunday);
        assert!(Weekday::Tuesday < Weekday::Wednesday);
    }

    #[test]
    fn test_day_set_from_str() {
        let days = DaySet::from_str("MWF").unwrap();
        assert!(days.contains_day(Weekday::Monday));
        assert!(!days.contains_day(Weekday::Tuesday));
        assert!(days.contains_day(Weekday::Wednesday));
        assert!(!days.contains_day(Weekday::Thursday));
        assert!(days.contains_day(Weekday::Friday));
        assert!(!days.contains_day(Weekday::Saturday));
        assert!(!days.contains_day(Weekday::Sunday));

        assert_eq!(DaySet::from_str("MX"), Err('X'));
    }

    #[test]
    fn test_day_set_display() {
        let mut days = DaySet::new();
        days.add(Weekday::Sunday);
        days.add(Weekday::Monday);
        days.add(Weekday::Thursday);

        assert_eq!(days.to_string(), "MRU");
        assert_eq!(days.len(), 3);

        days.remove(Weekday::Monday);
        assert_eq!(days.to_string(), "RU");
    }

    #[test]
    fn test_day_set_collect_and_bitwise() {
        let set: DaySet = [Weekday::Saturday, Weekday::Sunday, Weekday::Saturday]
            .into_iter()
            .collect();
        assert_eq!(set, DaySet::WEEKEND);
        assert_eq!(!set, DaySet::WEEKDAYS);
        assert_eq!(DaySet::WEEKDAYS.to_string(), "MTWRF");
        assert_eq!(
            DaySet::ALL.days().collect::<Vec<_>>(),
            Weekday::all().collect::<Vec<_>>()
        );
        assert!(DaySet::NONE.is_empty());
    }
}
