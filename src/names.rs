//! Localizable name tables for date display.
//!
//! Calendars render their records through [`NameTables`], a host-owned
//! value holding the month, weekday, and cycle names of every calendar.
//! The built-in tables are English; a host localizes them by supplying
//! a [`Translator`], which is consulted once per entry at construction
//! so lookups afterward are plain indexing.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use tinystr::{tinystr, TinyAsciiStr};
use writeable::{LengthHint, Writeable};

use crate::math::imod;

/// Host-supplied translation of the built-in English names.
pub trait Translator {
    /// The localized form of `english`, or `None` to keep it as is.
    fn translate(&self, english: &str) -> Option<String>;
}

const WEEKDAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const GREGORIAN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const EGYPTIAN_MONTHS: [&str; 13] = [
    "Thoth", "Phaophi", "Athyr", "Choiak", "Tybi", "Mechir", "Phamenoth", "Pharmuthi",
    "Pachon", "Payni", "Epiphi", "Mesori", "Epagomenae",
];

const ARMENIAN_MONTHS: [&str; 13] = [
    "Nawasardi", "Hori", "Sahmi", "Tre", "Kaloch", "Arach", "Mehekani", "Areg", "Ahekani",
    "Mareri", "Margach", "Hrotich", "Aweleach",
];

const ZOROASTRIAN_MONTHS: [&str; 13] = [
    "Frawardin", "Ardwahisht", "Khordad", "Tir", "Amurdad", "Shahrewar", "Mihr", "Aban",
    "Adur", "Day", "Wahman", "Spandarmad", "Epagomenae",
];

const ZOROASTRIAN_DAYS: [&str; 30] = [
    "Hormazd", "Wahman", "Ardwahisht", "Shahrewar", "Spandarmad", "Khordad", "Amurdad",
    "Day-pa-Adur", "Adur", "Aban", "Khwarshed", "Mah", "Tir", "Gosh", "Day-pa-Mihr", "Mihr",
    "Srosh", "Rashn", "Frawardin", "Warharan", "Ram", "Wad", "Day-pa-Den", "Den", "Ard",
    "Ashtad", "Asman", "Zamyad", "Mahraspand", "Anagran",
];

const ZOROASTRIAN_EPAGOMENAL_DAYS: [&str; 5] = [
    "Ahunawad", "Ushtawad", "Spentomad", "Wohukhshathra", "Wahishtoisht",
];

const COPTIC_MONTHS: [&str; 13] = [
    "Thoout", "Paope", "Athor", "Koiak", "Tobe", "Meshir", "Paremotep", "Parmoute",
    "Pashons", "Paone", "Epep", "Mesore", "Epagomene",
];

const ETHIOPIC_MONTHS: [&str; 13] = [
    "Maskaram", "Teqemt", "Hedar", "Takhsas", "Ter", "Yakatit", "Magabit", "Miyazya",
    "Genbot", "Sane", "Hamle", "Nahase", "Paguemen",
];

const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram", "Safar", "Rabi I", "Rabi II", "Jumada I", "Jumada II", "Rajab", "Shaban",
    "Ramadan", "Shawwal", "Dhu al-Qada", "Dhu al-Hijja",
];

/// Months in civil order, Nisan first; entry 13 is the leap Adar II.
const HEBREW_MONTHS: [&str; 13] = [
    "Nisan", "Iyyar", "Sivan", "Tammuz", "Av", "Elul", "Tishri", "Marheshvan", "Kislev",
    "Tevet", "Shevat", "Adar", "Adar II",
];

const PERSIAN_MONTHS: [&str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar", "Mehr", "Aban",
    "Azar", "Dey", "Bahman", "Esfand",
];

const FRENCH_MONTHS: [&str; 13] = [
    "Vend\u{e9}miaire",
    "Brumaire",
    "Frimaire",
    "Niv\u{f4}se",
    "Pluvi\u{f4}se",
    "Vent\u{f4}se",
    "Germinal",
    "Flor\u{e9}al",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Sansculottides",
];

const FRENCH_DECADE_DAYS: [&str; 10] = [
    "Primidi", "Duodi", "Tridi", "Quartidi", "Quintidi", "Sextidi", "Septidi", "Octidi",
    "Nonidi", "D\u{e9}cadi",
];

const FRENCH_SANSCULOTTIDES: [&str; 6] = [
    "F\u{ea}te de la Vertu",
    "F\u{ea}te du G\u{e9}nie",
    "F\u{ea}te du Travail",
    "F\u{ea}te de l'Opinion",
    "F\u{ea}te des R\u{e9}compenses",
    "F\u{ea}te de la R\u{e9}volution",
];

const ROMAN_EVENTS: [&str; 3] = ["Kalends", "Nones", "Ides"];

/// Latin month names in the accusative plural, as they follow "ante
/// diem ... Kalendas".
const ROMAN_MONTHS: [&str; 12] = [
    "Januarias", "Februarias", "Martias", "Apriles", "Maias", "Junias", "Julias",
    "Augustas", "Septembres", "Octobres", "Novembres", "Decembres",
];

const ICELANDIC_SEASONS: [&str; 2] = ["Summer", "Winter"];

const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Uo", "Zip", "Zotz", "Tzec", "Xul", "Yaxkin", "Mol", "Chen", "Yax", "Zac", "Ceh",
    "Mac", "Kankin", "Muan", "Pax", "Kayab", "Cumku", "Uayeb",
];

const TZOLKIN_NAMES: [&str; 20] = [
    "Imix", "Ik", "Akbal", "Kan", "Chicchan", "Cimi", "Manik", "Lamat", "Muluc", "Oc",
    "Chuen", "Eb", "Ben", "Ix", "Men", "Cib", "Caban", "Etznab", "Cauac", "Ahau",
];

const XIHUITL_MONTHS: [&str; 19] = [
    "Izcalli",
    "Atlcahualo",
    "Tlacaxipehualiztli",
    "Tozoztontli",
    "Huei Tozoztli",
    "Toxcatl",
    "Etzalcualiztli",
    "Tecuilhuitontli",
    "Huei Tecuilhuitl",
    "Tlaxochimaco",
    "Xocotlhuetzi",
    "Ochpaniztli",
    "Teotleco",
    "Tepeilhuitl",
    "Quecholli",
    "Panquetzaliztli",
    "Atemoztli",
    "Tititl",
    "Nemontemi",
];

const TONALPOHUALLI_NAMES: [&str; 20] = [
    "Cipactli",
    "Ehecatl",
    "Calli",
    "Cuetzpallin",
    "Coatl",
    "Miquiztli",
    "Mazatl",
    "Tochtli",
    "Atl",
    "Itzcuintli",
    "Ozomatli",
    "Malinalli",
    "Acatl",
    "Ocelotl",
    "Cuauhtli",
    "Cozcacuauhtli",
    "Ollin",
    "Tecpatl",
    "Quiahuitl",
    "Xochitl",
];

const BALI_SAPTAWARA: [&str; 7] = [
    "Redite", "Coma", "Anggara", "Buda", "Wraspati", "Sukra", "Saniscara",
];

const BALI_PANCAWARA: [&str; 5] = ["Umanis", "Paing", "Pon", "Wage", "Keliwon"];

const BALI_WUKU: [&str; 30] = [
    "Sinta",
    "Landep",
    "Ukir",
    "Kulantir",
    "Tolu",
    "Gumbreg",
    "Wariga",
    "Warigadian",
    "Julungwangi",
    "Sungsang",
    "Dunggulan",
    "Kuningan",
    "Langkir",
    "Medangsia",
    "Pujut",
    "Pahang",
    "Krulut",
    "Merakih",
    "Tambir",
    "Medangkungan",
    "Matal",
    "Uye",
    "Menail",
    "Parangbakat",
    "Bala",
    "Ugu",
    "Wayang",
    "Kelawu",
    "Dukut",
    "Watugunung",
];

/// The ten celestial stems of the Chinese sexagesimal cycle.
const CHINESE_STEMS: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

/// The twelve terrestrial branches of the Chinese sexagesimal cycle.
const CHINESE_BRANCHES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const VIETNAMESE_MONTHS: [&str; 12] = [
    "Th\u{e1}ng Gi\u{ea}ng",
    "Th\u{e1}ng Hai",
    "Th\u{e1}ng Ba",
    "Th\u{e1}ng T\u{1b0}",
    "Th\u{e1}ng N\u{103}m",
    "Th\u{e1}ng S\u{e1}u",
    "Th\u{e1}ng B\u{1ea3}y",
    "Th\u{e1}ng T\u{e1}m",
    "Th\u{e1}ng Ch\u{ed}n",
    "Th\u{e1}ng M\u{1b0}\u{1edd}i",
    "Th\u{e1}ng M\u{1ed9}t",
    "Th\u{e1}ng Ch\u{1ea1}p",
];

const HINDU_SOLAR_MONTHS: [&str; 12] = [
    "Mesha", "Vrishabha", "Mithuna", "Karka", "Simha", "Kanya", "Tula", "Vrischika",
    "Dhanus", "Makara", "Kumbha", "Mina",
];

const HINDU_LUNAR_MONTHS: [&str; 12] = [
    "Chaitra",
    "Vaisakha",
    "Jyaishtha",
    "Ashadha",
    "Sravana",
    "Bhadrapada",
    "Asvina",
    "Kartika",
    "Margasirsha",
    "Pausha",
    "Magha",
    "Phalguna",
];

/// The name tables of every supported calendar, pre-localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTables {
    locale: TinyAsciiStr<8>,
    weekdays: Vec<String>,
    gregorian_months: Vec<String>,
    egyptian_months: Vec<String>,
    armenian_months: Vec<String>,
    zoroastrian_months: Vec<String>,
    zoroastrian_days: Vec<String>,
    zoroastrian_epagomenal_days: Vec<String>,
    coptic_months: Vec<String>,
    ethiopic_months: Vec<String>,
    islamic_months: Vec<String>,
    hebrew_months: Vec<String>,
    hebrew_adar_i: String,
    persian_months: Vec<String>,
    french_months: Vec<String>,
    french_decade_days: Vec<String>,
    french_sansculottides: Vec<String>,
    roman_events: Vec<String>,
    roman_months: Vec<String>,
    roman_bis: String,
    icelandic_seasons: Vec<String>,
    haab_months: Vec<String>,
    tzolkin_names: Vec<String>,
    xihuitl_months: Vec<String>,
    tonalpohualli_names: Vec<String>,
    bali_saptawara: Vec<String>,
    bali_pancawara: Vec<String>,
    bali_wuku: Vec<String>,
    hindu_solar_months: Vec<String>,
    hindu_lunar_months: Vec<String>,
    hindu_adhika: String,
    chinese_stems: Vec<String>,
    chinese_branches: Vec<String>,
    chinese_leap: String,
    vietnamese_months: Vec<String>,
}

fn table(names: &[&str]) -> Vec<String> {
    names.iter().map(|&s| s.to_owned()).collect()
}

/// 1-based cyclic table lookup; out-of-range indices wrap rather than
/// panic, matching the total conversion functions feeding them.
fn pick(names: &[String], index: i64) -> String {
    names[imod(index - 1, names.len() as i64) as usize].clone()
}

impl Default for NameTables {
    fn default() -> Self {
        Self::new()
    }
}

impl NameTables {
    /// The built-in English tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locale: tinystr!(8, "en"),
            weekdays: table(&WEEKDAYS),
            gregorian_months: table(&GREGORIAN_MONTHS),
            egyptian_months: table(&EGYPTIAN_MONTHS),
            armenian_months: table(&ARMENIAN_MONTHS),
            zoroastrian_months: table(&ZOROASTRIAN_MONTHS),
            zoroastrian_days: table(&ZOROASTRIAN_DAYS),
            zoroastrian_epagomenal_days: table(&ZOROASTRIAN_EPAGOMENAL_DAYS),
            coptic_months: table(&COPTIC_MONTHS),
            ethiopic_months: table(&ETHIOPIC_MONTHS),
            islamic_months: table(&ISLAMIC_MONTHS),
            hebrew_months: table(&HEBREW_MONTHS),
            hebrew_adar_i: "Adar I".to_owned(),
            persian_months: table(&PERSIAN_MONTHS),
            french_months: table(&FRENCH_MONTHS),
            french_decade_days: table(&FRENCH_DECADE_DAYS),
            french_sansculottides: table(&FRENCH_SANSCULOTTIDES),
            roman_events: table(&ROMAN_EVENTS),
            roman_months: table(&ROMAN_MONTHS),
            roman_bis: "bis".to_owned(),
            icelandic_seasons: table(&ICELANDIC_SEASONS),
            haab_months: table(&HAAB_MONTHS),
            tzolkin_names: table(&TZOLKIN_NAMES),
            xihuitl_months: table(&XIHUITL_MONTHS),
            tonalpohualli_names: table(&TONALPOHUALLI_NAMES),
            bali_saptawara: table(&BALI_SAPTAWARA),
            bali_pancawara: table(&BALI_PANCAWARA),
            bali_wuku: table(&BALI_WUKU),
            hindu_solar_months: table(&HINDU_SOLAR_MONTHS),
            hindu_lunar_months: table(&HINDU_LUNAR_MONTHS),
            hindu_adhika: "adhika".to_owned(),
            chinese_stems: table(&CHINESE_STEMS),
            chinese_branches: table(&CHINESE_BRANCHES),
            chinese_leap: "leap".to_owned(),
            vietnamese_months: table(&VIETNAMESE_MONTHS),
        }
    }

    /// English tables passed entry by entry through `translator`.
    #[must_use]
    pub fn localized(
        locale: TinyAsciiStr<8>,
        translator: &(impl Translator + ?Sized),
    ) -> Self {
        let mut tables = Self::new();
        tables.locale = locale;
        for entry in tables.entries_mut() {
            if let Some(translated) = translator.translate(entry) {
                *entry = translated;
            }
        }
        tables
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.weekdays
            .iter_mut()
            .chain(self.gregorian_months.iter_mut())
            .chain(self.egyptian_months.iter_mut())
            .chain(self.armenian_months.iter_mut())
            .chain(self.zoroastrian_months.iter_mut())
            .chain(self.zoroastrian_days.iter_mut())
            .chain(self.zoroastrian_epagomenal_days.iter_mut())
            .chain(self.coptic_months.iter_mut())
            .chain(self.ethiopic_months.iter_mut())
            .chain(self.islamic_months.iter_mut())
            .chain(self.hebrew_months.iter_mut())
            .chain(core::iter::once(&mut self.hebrew_adar_i))
            .chain(self.persian_months.iter_mut())
            .chain(self.french_months.iter_mut())
            .chain(self.french_decade_days.iter_mut())
            .chain(self.french_sansculottides.iter_mut())
            .chain(self.roman_events.iter_mut())
            .chain(self.roman_months.iter_mut())
            .chain(core::iter::once(&mut self.roman_bis))
            .chain(self.icelandic_seasons.iter_mut())
            .chain(self.haab_months.iter_mut())
            .chain(self.tzolkin_names.iter_mut())
            .chain(self.xihuitl_months.iter_mut())
            .chain(self.tonalpohualli_names.iter_mut())
            .chain(self.bali_saptawara.iter_mut())
            .chain(self.bali_pancawara.iter_mut())
            .chain(self.bali_wuku.iter_mut())
            .chain(self.hindu_solar_months.iter_mut())
            .chain(self.hindu_lunar_months.iter_mut())
            .chain(core::iter::once(&mut self.hindu_adhika))
            .chain(self.chinese_stems.iter_mut())
            .chain(self.chinese_branches.iter_mut())
            .chain(core::iter::once(&mut self.chinese_leap))
            .chain(self.vietnamese_months.iter_mut())
    }

    /// The locale tag these tables were localized for.
    #[inline]
    #[must_use]
    pub const fn locale(&self) -> TinyAsciiStr<8> {
        self.locale
    }

    /// Weekday name; 0 is Sunday.
    #[must_use]
    pub fn weekday(&self, day: i64) -> String {
        self.weekdays[imod(day, 7) as usize].clone()
    }

    #[must_use]
    pub fn gregorian_month(&self, month: i64) -> String {
        pick(&self.gregorian_months, month)
    }

    #[must_use]
    pub fn egyptian_month(&self, month: i64) -> String {
        pick(&self.egyptian_months, month)
    }

    #[must_use]
    pub fn armenian_month(&self, month: i64) -> String {
        pick(&self.armenian_months, month)
    }

    #[must_use]
    pub fn zoroastrian_month(&self, month: i64) -> String {
        pick(&self.zoroastrian_months, month)
    }

    #[must_use]
    pub fn zoroastrian_day(&self, day: i64) -> String {
        pick(&self.zoroastrian_days, day)
    }

    #[must_use]
    pub fn zoroastrian_epagomenal_day(&self, day: i64) -> String {
        pick(&self.zoroastrian_epagomenal_days, day)
    }

    #[must_use]
    pub fn coptic_month(&self, month: i64) -> String {
        pick(&self.coptic_months, month)
    }

    #[must_use]
    pub fn ethiopic_month(&self, month: i64) -> String {
        pick(&self.ethiopic_months, month)
    }

    #[must_use]
    pub fn islamic_month(&self, month: i64) -> String {
        pick(&self.islamic_months, month)
    }

    /// Hebrew month name; in leap years month 12 renders as Adar I.
    #[must_use]
    pub fn hebrew_month(&self, month: i64, leap: bool) -> String {
        if leap && month == 12 {
            self.hebrew_adar_i.clone()
        } else {
            pick(&self.hebrew_months, month)
        }
    }

    #[must_use]
    pub fn persian_month(&self, month: i64) -> String {
        pick(&self.persian_months, month)
    }

    #[must_use]
    pub fn french_month(&self, month: i64) -> String {
        pick(&self.french_months, month)
    }

    #[must_use]
    pub fn french_decade_day(&self, day: i64) -> String {
        pick(&self.french_decade_days, day)
    }

    #[must_use]
    pub fn french_sansculottide(&self, day: i64) -> String {
        pick(&self.french_sansculottides, day)
    }

    #[must_use]
    pub fn roman_event(&self, event: i64) -> String {
        pick(&self.roman_events, event)
    }

    #[must_use]
    pub fn roman_month(&self, month: i64) -> String {
        pick(&self.roman_months, month)
    }

    /// The "bis" marker of the doubled sixth day before the Kalends of
    /// March.
    #[must_use]
    pub fn roman_bis(&self) -> String {
        self.roman_bis.clone()
    }

    #[must_use]
    pub fn icelandic_season(&self, season: i64) -> String {
        pick(&self.icelandic_seasons, season)
    }

    #[must_use]
    pub fn haab_month(&self, month: i64) -> String {
        pick(&self.haab_months, month)
    }

    #[must_use]
    pub fn tzolkin_name(&self, name: i64) -> String {
        pick(&self.tzolkin_names, name)
    }

    #[must_use]
    pub fn xihuitl_month(&self, month: i64) -> String {
        pick(&self.xihuitl_months, month)
    }

    #[must_use]
    pub fn tonalpohualli_name(&self, name: i64) -> String {
        pick(&self.tonalpohualli_names, name)
    }

    #[must_use]
    pub fn bali_saptawara(&self, day: i64) -> String {
        pick(&self.bali_saptawara, day)
    }

    #[must_use]
    pub fn bali_pancawara(&self, day: i64) -> String {
        pick(&self.bali_pancawara, day)
    }

    #[must_use]
    pub fn bali_wuku(&self, week: i64) -> String {
        pick(&self.bali_wuku, week)
    }

    #[must_use]
    pub fn hindu_solar_month(&self, month: i64) -> String {
        pick(&self.hindu_solar_months, month)
    }

    #[must_use]
    pub fn hindu_lunar_month(&self, month: i64) -> String {
        pick(&self.hindu_lunar_months, month)
    }

    /// The marker prefixed to a leap (adhika) lunar month.
    #[must_use]
    pub fn hindu_adhika(&self) -> String {
        self.hindu_adhika.clone()
    }

    /// Celestial stem name of the Chinese sexagesimal cycle.
    #[must_use]
    pub fn chinese_stem(&self, stem: i64) -> String {
        pick(&self.chinese_stems, stem)
    }

    /// Terrestrial branch name of the Chinese sexagesimal cycle.
    #[must_use]
    pub fn chinese_branch(&self, branch: i64) -> String {
        pick(&self.chinese_branches, branch)
    }

    /// The marker attached to a repeated (leap) lunisolar month.
    #[must_use]
    pub fn chinese_leap(&self) -> String {
        self.chinese_leap.clone()
    }

    #[must_use]
    pub fn vietnamese_month(&self, month: i64) -> String {
        pick(&self.vietnamese_months, month)
    }
}

/// Date parts joined for display: space-separated, empty parts skipped.
struct JoinedDate<'a>(&'a [String]);

impl Writeable for JoinedDate<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let mut first = true;
        for part in self.0.iter().filter(|part| !part.is_empty()) {
            if !first {
                sink.write_char(' ')?;
            }
            sink.write_str(part)?;
            first = false;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::at_least(self.0.iter().map(String::len).sum())
    }
}

/// Joins a calendar's date strings into one display line.
#[must_use]
pub fn join_date_strings(parts: &[String]) -> String {
    JoinedDate(parts).write_to_string().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    use crate::calendar::ConvertibleDate;
    use crate::calendars::gregorian::Gregorian;
    use crate::calendars::roman::Roman;

    #[test]
    fn weekday_wraps_at_seven() {
        let names = NameTables::new();
        assert_eq!(names.weekday(0), "Sunday");
        assert_eq!(names.weekday(6), "Saturday");
        assert_eq!(names.weekday(7), "Sunday");
        assert_eq!(names.weekday(-1), "Saturday");
    }

    #[test]
    fn gregorian_date_line() {
        let names = NameTables::new();
        let date = Gregorian::from_fixed(734_858);
        assert_eq!(
            join_date_strings(&date.date_strings(&names)),
            "Friday 21 December 2012"
        );
    }

    #[test]
    fn joined_dates_skip_empty_parts() {
        // A non-leap Roman date carries an empty "bis" slot.
        let names = NameTables::new();
        let date = Roman::from_fixed(0);
        let line = join_date_strings(&date.date_strings(&names));
        assert!(!line.contains("  "), "got {line:?}");
        assert!(!line.ends_with(' '), "got {line:?}");
    }

    #[test]
    fn hebrew_adar_naming() {
        let names = NameTables::new();
        assert_eq!(names.hebrew_month(12, false), "Adar");
        assert_eq!(names.hebrew_month(12, true), "Adar I");
        assert_eq!(names.hebrew_month(13, true), "Adar II");
    }

    #[test]
    fn translator_rewrites_entries() {
        struct Shouty;
        impl Translator for Shouty {
            fn translate(&self, english: &str) -> Option<String> {
                (english == "January").then(|| "JANUARY".to_string())
            }
        }
        let names = NameTables::localized(tinystr!(8, "en-x-up"), &Shouty);
        assert_eq!(names.locale().to_string(), "en-x-up");
        assert_eq!(names.gregorian_month(1), "JANUARY");
        assert_eq!(names.gregorian_month(2), "February");
    }

    #[test]
    fn sexagesimal_cycle_names() {
        let names = NameTables::new();
        assert_eq!(names.chinese_stem(1), "Jia");
        assert_eq!(names.chinese_stem(10), "Gui");
        assert_eq!(names.chinese_branch(12), "Hai");
        assert_eq!(names.vietnamese_month(1), "Th\u{e1}ng Gi\u{ea}ng");
    }

    #[test]
    fn epagomenal_day_names() {
        let names = NameTables::new();
        assert_eq!(names.zoroastrian_epagomenal_day(1), "Ahunawad");
        assert_eq!(names.french_sansculottide(6), "F\u{ea}te de la R\u{e9}volution");
        assert_eq!(format!("{} {}", 5, names.haab_month(19)), "5 Uayeb");
    }
}
